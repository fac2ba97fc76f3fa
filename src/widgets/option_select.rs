//! OptionSelect widget: a drop-down list of options.
//!
//! The synchronized value is the selected index, mapped onto the client's
//! `selectedIndex` field. An out-of-range index means "nothing selected".

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::{print_filtered, print_quoted};
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// OptionSelect
// ---------------------------------------------------------------------------

/// A `<select>` drop-down synchronized in both directions.
///
/// # Examples
///
/// ```ignore
/// let speed = OptionSelect::new("speed", ["low", "mid", "high"], 1);
/// ```
pub struct OptionSelect {
    id: String,
    labels: Vec<String>,
    selected: usize,
}

impl OptionSelect {
    /// Create a drop-down with the given option labels and initial index.
    ///
    /// Pass an out-of-range `selected` for no initial selection.
    pub fn new(
        id: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
        selected: usize,
    ) -> Self {
        Self {
            id: id.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            selected,
        }
    }

    /// The option labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The selected index, or `None` if nothing is selected.
    pub fn selected_option(&self) -> Option<usize> {
        (self.selected < self.labels.len()).then_some(self.selected)
    }

    /// Select the option at `index`. An out-of-range index clears the
    /// selection. Returns whether the selection actually changed.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = index != self.selected;
        self.selected = index;
        changed
    }
}

impl Widget for OptionSelect {
    fn kind(&self) -> &'static str {
        "OptionSelect"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<select id=");
        print_quoted(out, &self.id);
        out.print_content(" onchange=\"doRequest(this.id, this.selectedIndex);\">");
        for (index, label) in self.labels.iter().enumerate() {
            if index == self.selected {
                out.print_content("<option selected>");
            } else {
                out.print_content("<option>");
            }
            print_filtered(out, label, false, true);
            out.print_content("</option>");
        }
        out.print_content("</select>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(match self.selected_option() {
                Some(index) => Cow::Owned(index.to_string()),
                None => Cow::Borrowed("-1"),
            }),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("selectedIndex"),
            _ => None,
        }
    }

    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let raw = driver.arg(argname).unwrap_or_default();
        match raw.trim().parse::<usize>() {
            Ok(index) => {
                self.select(index);
                Updated::Yes
            }
            Err(_) => Updated::No,
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
