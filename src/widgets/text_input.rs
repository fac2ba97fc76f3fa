//! TextInput widget: a client-writable text field.
//!
//! Values are capped to a fixed capacity (in characters) on both the server
//! and the client (`maxlength`). To limit request rate while typing, the
//! rendered field posts its value one second after the last keystroke rather
//! than on every input event.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::print_quoted;
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// TextInput
// ---------------------------------------------------------------------------

/// An `<input type="text">` synchronized in both directions.
///
/// # Examples
///
/// ```ignore
/// let name = TextInput::new("name", 16);
/// ```
pub struct TextInput {
    id: String,
    capacity: usize,
    text: String,
}

impl TextInput {
    /// Create an empty input holding at most `capacity` characters.
    pub fn new(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            capacity,
            text: String::new(),
        }
    }

    /// Set the initial text (builder). Truncated to capacity.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Return the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maximum number of characters the input stores.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Set the text, silently truncating oversized input to capacity.
    ///
    /// Returns whether the stored text actually changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = truncate_chars(text.into(), self.capacity);
        let changed = text != self.text;
        self.text = text;
        changed
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(mut value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((offset, _)) => {
            value.truncate(offset);
            value
        }
        None => value,
    }
}

impl Widget for TextInput {
    fn kind(&self) -> &'static str {
        "TextInput"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<input id=");
        print_quoted(out, &self.id);
        out.print_content(&format!(" type=\"text\" maxlength=\"{}\" value=", self.capacity));
        print_quoted(out, &self.text);
        // Debounced: post one second after the last keystroke.
        out.print_content(
            " oninput=\"clearTimeout(this.debounce); this.debounce = \
             setTimeout(function(el) { doRequest(el.id, el.value); }, 1000, this);\"/>",
        );
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Borrowed(&self.text)),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("value"),
            _ => None,
        }
    }

    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let raw = driver.arg(argname).unwrap_or_default();
        self.set_text(raw);
        Updated::Yes
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
