//! Grouping widgets: Group and HideableGroup.
//!
//! A `Group` is pure structure — it emits no markup and never serializes;
//! its children render and update in order, and flag changes fan out to all
//! of them. A `HideableGroup` is the same structure wrapped as a single
//! element: it renders an enclosing `<div>` carrying its id, so the whole
//! subtree can be shown or hidden as one DOM node on the client, independent
//! of each child's own visibility state.

use std::any::Any;

use crate::driver::Driver;
use crate::escape::print_quoted;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A plain, markup-free container.
///
/// Useful for treating several widgets as one unit — hiding or disabling a
/// `Group` via the tree applies the change to every child.
pub struct Group;

impl Group {
    /// Create a new group.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Group {
    fn kind(&self) -> &'static str {
        "Group"
    }

    fn render_open(&self, _out: &mut dyn Driver) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// HideableGroup
// ---------------------------------------------------------------------------

/// A container wrapped as a single element.
///
/// Unlike a plain [`Group`], a `HideableGroup` can hide *everything* inside
/// it, including static chunks, because the client toggles the enclosing
/// `<div>`. Its sync records carry only its own element state; the
/// children's records follow separately, in order.
///
/// # Examples
///
/// ```ignore
/// let details = tree.insert(root, HideableGroup::new("details"));
/// tree.insert(details, StaticHtml::new("<h2>Details</h2>"));
/// tree.set_visible(details, false);
/// ```
pub struct HideableGroup {
    id: String,
}

impl HideableGroup {
    /// Create a hideable group with the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Widget for HideableGroup {
    fn kind(&self) -> &'static str {
        "HideableGroup"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<div id=");
        print_quoted(out, &self.id);
        out.print_content(">");
    }

    fn render_close(&self, out: &mut dyn Driver) {
        out.print_content("</div>");
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
