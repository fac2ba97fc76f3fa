//! In-memory driver for tests and headless use.
//!
//! `TestDriver` implements [`Driver`] without any transport: emitted headers
//! and content are captured for inspection, and client arguments are served
//! from a canned map.

use std::collections::HashMap;

use crate::driver::Driver;

// ---------------------------------------------------------------------------
// ResponseKind
// ---------------------------------------------------------------------------

/// The kind of response header a driver was asked to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Full page response (`print_header(true)`).
    Html,
    /// Sync batch response (`print_header(false)`).
    Json,
}

// ---------------------------------------------------------------------------
// TestDriver
// ---------------------------------------------------------------------------

/// A driver that captures everything and serves canned arguments.
///
/// # Examples
///
/// ```ignore
/// let mut driver = TestDriver::new()
///     .with_arg("revision", "1")
///     .with_arg("id", "s1")
///     .with_arg("value", "70");
/// page.handle_request(&mut driver, None);
/// assert!(driver.output().contains("\"s1\""));
/// ```
pub struct TestDriver {
    args: HashMap<String, String>,
    output: String,
    headers: Vec<ResponseKind>,
}

impl TestDriver {
    /// Create a driver with no arguments and empty capture buffers.
    pub fn new() -> Self {
        Self {
            args: HashMap::new(),
            output: String::new(),
            headers: Vec::new(),
        }
    }

    /// Add a client argument (builder).
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Add or replace a client argument.
    pub fn set_arg(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.args.insert(name.into(), value.into());
    }

    /// Everything emitted through `print_content` so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Headers emitted so far, in order.
    pub fn headers(&self) -> &[ResponseKind] {
        &self.headers
    }

    /// Discard captured output and headers, keeping the arguments.
    pub fn clear_output(&mut self) {
        self.output.clear();
        self.headers.clear();
    }
}

impl Default for TestDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for TestDriver {
    fn print_header(&mut self, html: bool) {
        self.headers.push(if html {
            ResponseKind::Html
        } else {
            ResponseKind::Json
        });
    }

    fn print_content(&mut self, content: &str) {
        self.output.push_str(content);
    }

    fn arg(&mut self, name: &str) -> Option<String> {
        self.args.get(name).cloned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
