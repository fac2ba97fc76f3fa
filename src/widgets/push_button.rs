//! PushButton widget: a button that invokes a server-side callback.
//!
//! A click in the browser posts one sync request; the callback runs
//! synchronously inside that exchange, before the response diff is computed,
//! so any state it changes travels back in the same response.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::{print_filtered, print_quoted};
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// PushButton
// ---------------------------------------------------------------------------

/// A push button with a server-side click handler.
///
/// The label can be updated from the server; it travels as `innerHTML`, so
/// it is escaped unless the caller vouched for it via
/// [`set_html`](PushButton::set_html).
///
/// # Examples
///
/// ```ignore
/// let reboot = PushButton::new("reboot", "Reboot").on_click(|| schedule_reboot());
/// ```
pub struct PushButton {
    id: String,
    label: String,
    html: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl PushButton {
    /// Create a button with an escaped text label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            html: false,
            on_click: None,
        }
    }

    /// Set the click handler (builder).
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Return the current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set a plain text label; escaped before the client renders it.
    ///
    /// Returns whether the observable label actually changed.
    pub fn set_text(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        let changed = label != self.label || self.html;
        self.label = label;
        self.html = false;
        changed
    }

    /// Set a raw HTML label. Nothing is escaped — do not pass untrusted
    /// input.
    pub fn set_html(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        let changed = label != self.label || !self.html;
        self.label = label;
        self.html = true;
        changed
    }
}

impl Widget for PushButton {
    fn kind(&self) -> &'static str {
        "PushButton"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<button id=");
        print_quoted(out, &self.id);
        out.print_content(" type=\"button\" onclick=\"doRequest(this.id, 't');\">");
        print_filtered(out, &self.label, false, !self.html);
        out.print_content("</button>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Borrowed(&self.label)),
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

    fn update_from_arg(&mut self, _driver: &mut dyn Driver, _argname: &str) -> Updated {
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
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
