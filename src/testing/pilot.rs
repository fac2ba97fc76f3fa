//! Pilot: programmatic sync exchanges against a page.
//!
//! The `Pilot` wraps a [`Page`] and plays the browser's role: it requests
//! full renders, polls with a last-seen revision, and submits element
//! changes — all through a [`TestDriver`], no transport involved.

use crate::dom::Tree;
use crate::page::Page;

use super::driver::TestDriver;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless client for driving a [`Page`] in tests.
///
/// # Examples
///
/// ```ignore
/// let mut pilot = Pilot::new(page);
/// let html = pilot.render().to_owned();
/// let diff = pilot.submit(1, "s1", "70");
/// assert!(diff.contains("\"value\", \"70\""));
/// ```
pub struct Pilot {
    page: Page,
    last: String,
}

impl Pilot {
    /// Wrap a page.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            last: String::new(),
        }
    }

    /// The wrapped page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the wrapped page, for server-side state changes
    /// between exchanges.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Request a full page render and return the document.
    pub fn render(&mut self) -> &str {
        let mut driver = TestDriver::new();
        self.page.render(&mut driver);
        self.last = driver.output().to_owned();
        &self.last
    }

    /// Poll with a last-seen revision and no submitted change. Returns the
    /// response body.
    pub fn poll(&mut self, since: u16) -> &str {
        let mut driver = TestDriver::new().with_arg("revision", since.to_string());
        self.page.handle_request(&mut driver, None);
        self.last = driver.output().to_owned();
        &self.last
    }

    /// Poll while submitting a changed element value, as the embedded client
    /// script would. Returns the response body.
    pub fn submit(&mut self, since: u16, id: &str, value: &str) -> &str {
        let mut driver = TestDriver::new()
            .with_arg("revision", since.to_string())
            .with_arg("id", id)
            .with_arg("value", value);
        self.page.handle_request(&mut driver, None);
        self.last = driver.output().to_owned();
        &self.last
    }

    /// Like [`submit`](Pilot::submit), with a change callback in place.
    pub fn submit_with(
        &mut self,
        since: u16,
        id: &str,
        value: &str,
        callback: &mut dyn FnMut(&mut Tree),
    ) -> &str {
        let mut driver = TestDriver::new()
            .with_arg("revision", since.to_string())
            .with_arg("id", id)
            .with_arg("value", value);
        self.page.handle_request(&mut driver, Some(callback));
        self.last = driver.output().to_owned();
        &self.last
    }

    /// The body of the most recent exchange.
    pub fn last_response(&self) -> &str {
        &self.last
    }
}

// ===========================================================================
// Tests
// ===========================================================================
