//! CheckButton widget: a checkable box or radio option.
//!
//! Standalone, a check button renders as a checkbox. As a member of a
//! [`RadioGroup`](crate::widgets::RadioGroup) it renders as a radio button
//! sharing the group's name, and checking it makes the tree clear its
//! siblings in the same update pass.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::{print_filtered, print_quoted};
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// CheckButton
// ---------------------------------------------------------------------------

/// A checkable button synchronized in both directions.
///
/// Checked state serializes as literal `"true"`/`"false"`; the client script
/// coerces exactly these to booleans before assigning `checked`.
///
/// # Examples
///
/// ```ignore
/// let beep = CheckButton::new("beep", "Beep on alert").checked(true);
/// ```
pub struct CheckButton {
    id: String,
    label: String,
    checked: bool,
    radio_name: Option<String>,
}

impl CheckButton {
    /// Create an unchecked button with an escaped text label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            radio_name: None,
        }
    }

    /// Set the initial checked state (builder).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Make this button a radio option under the given group name (builder).
    ///
    /// [`RadioGroup`](crate::widgets::RadioGroup) applies this to the members
    /// it composes; hand-built members inserted under a radio group node
    /// should apply it themselves so the browser groups them too.
    pub fn with_radio_name(mut self, name: impl Into<String>) -> Self {
        self.radio_name = Some(name.into());
        self
    }

    /// Whether this button is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Return the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the checked state. Returns whether it actually changed.
    ///
    /// For radio members, prefer
    /// [`Tree::set_checked`](crate::dom::Tree::set_checked) or
    /// [`Tree::select_option`](crate::dom::Tree::select_option), which keep
    /// the group's mutual exclusion intact.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        let changed = checked != self.checked;
        self.checked = checked;
        changed
    }
}

impl Widget for CheckButton {
    fn kind(&self) -> &'static str {
        "CheckButton"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<input id=");
        print_quoted(out, &self.id);
        match &self.radio_name {
            Some(name) => {
                out.print_content(" type=\"radio\" name=");
                print_quoted(out, name);
            }
            None => out.print_content(" type=\"checkbox\""),
        }
        if self.checked {
            out.print_content(" checked");
        }
        out.print_content(
            " onchange=\"doRequest(this.id, this.checked ? 't' : 'f');\"/><label for=",
        );
        print_quoted(out, &self.id);
        out.print_content(">");
        print_filtered(out, &self.label, false, true);
        out.print_content("</label>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Borrowed(if self.checked { "true" } else { "false" })),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("checked"),
            _ => None,
        }
    }

    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let raw = driver.arg(argname).unwrap_or_default();
        let checked = matches!(raw.trim(), "t" | "true" | "1" | "on");
        let was_checked = self.checked;
        self.checked = checked;
        if checked && !was_checked {
            Updated::Checked
        } else {
            Updated::Yes
        }
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
