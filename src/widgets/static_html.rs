//! StaticHtml widget: a fixed chunk of markup.
//!
//! The simplest widget. It renders its content verbatim on a full page load
//! and never participates in sync exchanges — it has no id, no flags, and no
//! revision worth tracking. The chunk does not have to be a complete HTML
//! element; any fragment works.

use std::any::Any;

use crate::driver::Driver;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// StaticHtml
// ---------------------------------------------------------------------------

/// A widget that emits fixed markup, untouched by the server and the client.
///
/// Content is emitted as-is — it is trusted markup supplied by the page
/// author, not client input.
///
/// # Examples
///
/// ```ignore
/// let heading = StaticHtml::new("<h1>Device status</h1>");
/// ```
pub struct StaticHtml {
    content: String,
}

impl StaticHtml {
    /// Create a new `StaticHtml` widget with the given markup.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Return the markup content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for StaticHtml {
    fn kind(&self) -> &'static str {
        "StaticHtml"
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content(&self.content);
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
