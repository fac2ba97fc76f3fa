//! TextSpan widget: a span whose content the server can update.
//!
//! The client never writes to a span; the server sets its text (escaped by
//! default) or raw HTML (when the caller vouches for the content), and the
//! change travels to the browser as an `innerHTML` assignment on the next
//! poll.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::{print_filtered, print_quoted};
use crate::widget::{Property, Widget};

// ---------------------------------------------------------------------------
// TextSpan
// ---------------------------------------------------------------------------

/// An HTML `<span>` with server-updatable content.
///
/// # Examples
///
/// ```ignore
/// let status = TextSpan::new("status", "idle");
/// // later, from the request callback:
/// tree.mutate::<TextSpan>(status_key, |s| s.set_text("running"));
/// ```
pub struct TextSpan {
    id: String,
    text: String,
    html: bool,
}

impl TextSpan {
    /// Create a span with escaped text content.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            html: false,
        }
    }

    /// Return the current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set plain text content. Any `<` or `&` will be escaped before the
    /// client renders it, so untrusted input is safe here.
    ///
    /// Returns whether the observable content actually changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.text || self.html;
        self.text = text;
        self.html = false;
        changed
    }

    /// Set raw HTML content. Nothing is escaped — do not pass untrusted
    /// input.
    ///
    /// Returns whether the observable content actually changed.
    pub fn set_html(&mut self, html: impl Into<String>) -> bool {
        let html = html.into();
        let changed = html != self.text || !self.html;
        self.text = html;
        self.html = true;
        changed
    }
}

impl Widget for TextSpan {
    fn kind(&self) -> &'static str {
        "TextSpan"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<span id=");
        print_quoted(out, &self.id);
        out.print_content(">");
        print_filtered(out, &self.text, false, !self.html);
        out.print_content("</span>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Borrowed(&self.text)),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("innerHTML"),
            _ => None,
        }
    }

    fn value_needs_escaping(&self, which: Property) -> bool {
        which == Property::Value && !self.html
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
