//! ConnectionIndicator widget: client-side connection status display.
//!
//! The server treats this as a static element; the logic lives entirely in
//! the embedded poll script, which counts unanswered requests and flips
//! every `.connstate` element to its "fail" fragment after five missed polls
//! in a row.

use std::any::Any;

use crate::driver::Driver;
use crate::widget::Widget;

/// Default fragment shown while the connection is healthy.
const DEFAULT_OK: &str = "OK";
/// Default fragment shown once the connection is assumed broken.
const DEFAULT_FAIL: &str = "<b>connection lost</b>";

// ---------------------------------------------------------------------------
// ConnectionIndicator
// ---------------------------------------------------------------------------

/// A passive indicator of poll health.
///
/// Both fragments may contain HTML; they come from the page author, not the
/// client.
///
/// # Examples
///
/// ```ignore
/// let status = ConnectionIndicator::new();
/// let custom = ConnectionIndicator::new().with_fragments("✓", "<b>✗</b>");
/// ```
pub struct ConnectionIndicator {
    ok: String,
    fail: String,
}

impl ConnectionIndicator {
    /// Create an indicator with the default fragments.
    pub fn new() -> Self {
        Self {
            ok: DEFAULT_OK.to_owned(),
            fail: DEFAULT_FAIL.to_owned(),
        }
    }

    /// Use custom ok/fail fragments (builder). HTML is allowed.
    pub fn with_fragments(
        mut self,
        ok: impl Into<String>,
        fail: impl Into<String>,
    ) -> Self {
        self.ok = ok.into();
        self.fail = fail.into();
        self
    }
}

impl Default for ConnectionIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ConnectionIndicator {
    fn kind(&self) -> &'static str {
        "ConnectionIndicator"
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<span class=\"connstate\"><span>");
        out.print_content(&self.ok);
        out.print_content("</span><span style=\"display: none\">");
        out.print_content(&self.fail);
        out.print_content("</span></span>");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDriver;

    #[test]
    fn renders_both_fragments() {
        let indicator = ConnectionIndicator::new();
        let mut driver = TestDriver::new();
        indicator.render_open(&mut driver);
        let html = driver.output();
        assert!(html.contains("class=\"connstate\""));
        assert!(html.contains("<span>OK</span>"));
        assert!(html.contains("display: none"));
        assert!(html.contains("<b>connection lost</b>"));
    }

    #[test]
    fn custom_fragments() {
        let indicator = ConnectionIndicator::new().with_fragments("up", "down");
        let mut driver = TestDriver::new();
        indicator.render_open(&mut driver);
        let html = driver.output();
        assert!(html.contains("<span>up</span>"));
        assert!(html.contains("down</span>"));
    }

    #[test]
    fn is_passive() {
        let indicator = ConnectionIndicator::new();
        assert!(indicator.id().is_none());
    }
}
