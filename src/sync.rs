//! Diff serialization: the incremental-update batch.
//!
//! One poll response carries a flat, ordered list of per-element records —
//! `{"id": ..., "changes": [["property", "value"], ...]}` — covering every
//! element that changed strictly after the client's last-seen revision.
//! Containers recurse transparently and never appear as records themselves;
//! a [`HideableGroup`](crate::widgets::HideableGroup) emits its own record
//! before its children's. Record separators are managed by an
//! [`UpdateWriter`] threaded through the recursion.

use std::borrow::Cow;

use crate::dom::{NodeEntry, NodeFlags, NodeKey, Tree};
use crate::driver::Driver;
use crate::escape::{print_filtered, print_quoted};
use crate::widget::Property;

// ---------------------------------------------------------------------------
// UpdateWriter
// ---------------------------------------------------------------------------

/// Separator state for one update batch.
///
/// Carries the "is this the first record" flag through the recursive walk so
/// sibling and nested-container records concatenate into one syntactically
/// valid, comma-separated batch.
pub struct UpdateWriter {
    first: bool,
}

impl UpdateWriter {
    /// Start a fresh batch.
    pub fn new() -> Self {
        Self { first: true }
    }

    /// Whether any record has been written so far.
    pub fn wrote_any(&self) -> bool {
        !self.first
    }

    /// Emit the separator if needed and claim the batch non-empty.
    fn begin_record(&mut self, out: &mut dyn Driver) {
        if !self.first {
            out.print_content(",\n");
        }
        self.first = false;
    }
}

impl Default for UpdateWriter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Serialization walk
// ---------------------------------------------------------------------------

/// Serialize every element under `key` (inclusive) that changed strictly
/// after `since`, in tree order. Returns whether anything has been written
/// to the batch so far.
///
/// Reads only — the walk never advances the revision clock, so repeating it
/// with the same `since` yields identical output.
pub fn send_updates(
    tree: &Tree,
    key: NodeKey,
    since: u16,
    writer: &mut UpdateWriter,
    out: &mut dyn Driver,
) -> bool {
    if let Some(entry) = tree.entry(key) {
        if entry.is_element() && entry.changed(since) {
            write_record(entry, writer, out);
        }
        for &child in tree.children(key) {
            send_updates(tree, child, since, writer, out);
        }
    }
    writer.wrote_any()
}

/// Emit one element record: id plus every active property as a
/// `["name", "value"]` pair, in property index order.
fn write_record(entry: &NodeEntry, writer: &mut UpdateWriter, out: &mut dyn Driver) {
    writer.begin_record(out);
    out.print_content("{\"id\": ");
    print_quoted(out, entry.widget().id().unwrap_or(""));
    out.print_content(", \"changes\": [");
    let mut first_change = true;
    for which in Property::SYNC_ORDER {
        let Some((name, value, escape)) = resolve_property(entry, which) else {
            continue;
        };
        if !first_change {
            out.print_content(", ");
        }
        first_change = false;
        out.print_content("[");
        print_quoted(out, name);
        out.print_content(", ");
        print_filtered(out, &value, true, escape);
        out.print_content("]");
    }
    out.print_content("]}");
}

/// Resolve one property of an element to its client-side name, current
/// value, and escaping policy. `None` for inactive properties.
///
/// Visibility and enabledness are answered generically from node flags;
/// everything else is delegated to the widget.
fn resolve_property(entry: &NodeEntry, which: Property) -> Option<(&str, Cow<'_, str>, bool)> {
    match which {
        Property::Visibility => {
            let visible = entry.flags().contains(NodeFlags::VISIBLE);
            Some((
                "style.display",
                Cow::Borrowed(if visible { "initial" } else { "none" }),
                false,
            ))
        }
        Property::Enabledness => {
            let enabled = entry.flags().contains(NodeFlags::ENABLED);
            Some((
                "disabled",
                Cow::Borrowed(if enabled { "" } else { "disabled" }),
                false,
            ))
        }
        _ => {
            let widget = entry.widget();
            let name = widget.value_property(which)?;
            let value = widget.value(which)?;
            Some((name, value, widget.value_needs_escaping(which)))
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
