//! RadioGroup widget: mutually exclusive check buttons.
//!
//! The group is a passive container plus a coordinator. It composes one
//! [`CheckButton`] per option, with ids derived from the group name
//! (`mode0`, `mode1`, ...), and enforces single-selection: checking any
//! member — from the server or from a client poll — clears the others in
//! the same update pass, so the previously checked option's clearing rides
//! in the same diff.

use std::any::Any;

use crate::dom::{NodeKey, Tree};
use crate::driver::Driver;
use crate::widget::Widget;

use super::check_button::CheckButton;

// ---------------------------------------------------------------------------
// RadioGroup
// ---------------------------------------------------------------------------

/// A set of mutually exclusive options.
///
/// The group itself emits no markup and never serializes; only its member
/// buttons do. Selection is coordinated through the tree:
/// [`Tree::select_option`] and [`Tree::selected_option`].
///
/// # Examples
///
/// ```ignore
/// let mode = tree.insert(root, RadioGroup::new("mode", ["A", "B"], 0));
/// assert_eq!(tree.selected_option(mode), Some(0));
/// ```
pub struct RadioGroup {
    name: String,
    labels: Vec<String>,
    selected: usize,
}

impl RadioGroup {
    /// Create a group named `name` with one option per label; `selected` is
    /// the initially checked index (out of range for none).
    ///
    /// Member ids are the group name with the option index appended.
    pub fn new(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
        selected: usize,
    ) -> Self {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            selected,
        }
    }

    /// The group's base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw selected index; may be out of range, meaning none.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }
}

impl Widget for RadioGroup {
    fn kind(&self) -> &'static str {
        "RadioGroup"
    }

    fn render_open(&self, _out: &mut dyn Driver) {}

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                Box::new(
                    CheckButton::new(format!("{}{}", self.name, index), label.clone())
                        .checked(index == self.selected)
                        .with_radio_name(self.name.clone()),
                ) as Box<dyn Widget>
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Tree coordination
// ---------------------------------------------------------------------------

impl Tree {
    /// Select the option at `index` in a radio group: every member's checked
    /// flag becomes `member_index == index`, and the group records `index`
    /// unconditionally — passing an out-of-range index is the documented way
    /// to clear the selection. No-op if `group` is not a radio group node.
    pub fn select_option(&mut self, group: NodeKey, index: usize) {
        if self.widget::<RadioGroup>(group).is_none() {
            return;
        }
        let members: Vec<NodeKey> = self.children(group).to_vec();
        for (member_index, &member) in members.iter().enumerate() {
            self.mutate::<CheckButton>(member, |button| {
                button.set_checked(member_index == index)
            });
        }
        self.mutate::<RadioGroup>(group, |radio| {
            radio.set_selected(index);
            // The group is not an element; nothing to serialize for it.
            false
        });
        tracing::debug!(index, "radio option selected");
    }

    /// The member button at `index` of a radio group, or `None` when the
    /// index is out of range (or `group` is not a radio group node). Useful
    /// for addressing individual options, e.g. to disable one.
    pub fn radio_button(&self, group: NodeKey, index: usize) -> Option<NodeKey> {
        self.widget::<RadioGroup>(group)?;
        self.children(group).get(index).copied()
    }

    /// The selected option index of a radio group, or `None` when nothing is
    /// selected (or `group` is not a radio group node).
    pub fn selected_option(&self, group: NodeKey) -> Option<usize> {
        let radio = self.widget::<RadioGroup>(group)?;
        let index = radio.selected_index();
        (index < self.children(group).len()).then_some(index)
    }

    /// Set a check button's state, keeping radio mutual exclusion intact:
    /// checking a radio member clears its siblings in the same pass.
    /// Returns whether the button's state actually changed.
    pub fn set_checked(&mut self, key: NodeKey, checked: bool) -> bool {
        let flipped = self.mutate::<CheckButton>(key, |button| button.set_checked(checked));
        if flipped && checked {
            self.notify_checked(key);
        }
        flipped
    }

    /// Internal notification that `member` transitioned to checked. If its
    /// parent is a radio group, move the selection there and force every
    /// other member unchecked — synchronously, before any diff is computed.
    pub(crate) fn notify_checked(&mut self, member: NodeKey) {
        let Some(group) = self.parent(member) else {
            return;
        };
        if self.widget::<RadioGroup>(group).is_none() {
            return;
        }
        let members: Vec<NodeKey> = self.children(group).to_vec();
        let mut selected = None;
        for (index, &key) in members.iter().enumerate() {
            if key == member {
                selected = Some(index);
            } else {
                self.mutate::<CheckButton>(key, |button| button.set_checked(false));
            }
        }
        if let Some(index) = selected {
            self.mutate::<RadioGroup>(group, |radio| {
                radio.set_selected(index);
                false
            });
            tracing::debug!(index, "radio selection moved by member check");
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
