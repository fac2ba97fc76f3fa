//! Widget trait: markup emission, property lookup, client updates.
//!
//! The `Widget` trait is the core abstraction for everything placed in a
//! [`Tree`](crate::dom::Tree). It is object-safe: the tree stores widgets as
//! `Box<dyn Widget>` and drives rendering, diff serialization, and
//! client-argument application through it. Generic element state —
//! visibility/enabledness flags and the last-changed revision — lives on the
//! tree node, not in the widget; widgets answer only for their primary value
//! and any widget-specific extra properties.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// Index into an element's observable properties.
///
/// `Visibility` and `Enabledness` are answered generically from node flags;
/// `Value` and `Extra` slots are widget-specific (a slider exposes its min
/// and max as extras 0 and 1). Widgets return `None` for indices they do not
/// handle, which the serializer treats as "inactive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Client-side display toggling (`style.display`).
    Visibility,
    /// Client-side disabled state.
    Enabledness,
    /// The widget's primary value.
    Value,
    /// Widget-specific extra slot, 0-based.
    Extra(u8),
}

impl Property {
    /// Properties in serialization order for one element record.
    pub const SYNC_ORDER: [Property; 7] = [
        Property::Visibility,
        Property::Enabledness,
        Property::Value,
        Property::Extra(0),
        Property::Extra(1),
        Property::Extra(2),
        Property::Extra(3),
    ];
}

// ---------------------------------------------------------------------------
// Updated
// ---------------------------------------------------------------------------

/// Outcome of applying a client-submitted argument to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Updated {
    /// The widget is not client-writable, or the argument was unusable.
    No,
    /// The argument was applied.
    Yes,
    /// The argument was applied and the widget transitioned to checked —
    /// the tree runs radio-group coordination for it.
    Checked,
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Most widgets only implement a handful of these methods; the defaults
/// describe a passive, childless, client-read-only node.
pub trait Widget {
    /// The widget type name (e.g. "Slider", "CheckButton"). Used for
    /// diagnostics only.
    fn kind(&self) -> &'static str;

    /// The DOM id, if this widget is an element.
    ///
    /// Passive nodes (static chunks, plain groups) return `None` and never
    /// appear in a sync batch. Ids must be unique within a page; duplicate
    /// ids are a caller error (lookups return the first match, depth-first).
    fn id(&self) -> Option<&str> {
        None
    }

    /// Emit this widget's opening markup — for leaves, all of its markup.
    fn render_open(&self, out: &mut dyn Driver);

    /// Emit closing markup after the children have rendered.
    fn render_close(&self, out: &mut dyn Driver) {
        let _ = out;
    }

    /// Children declared by the widget itself (e.g. radio group members).
    ///
    /// Called once when the widget is inserted into a tree; the returned
    /// widgets become its first children, in order.
    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        Vec::new()
    }

    /// The current server-side value for a property index.
    ///
    /// Widgets answer `Value` and their extras; everything else is `None`.
    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        let _ = which;
        None
    }

    /// The client-side attribute/field the value maps onto (e.g. "value",
    /// "checked", "innerHTML"). Dotted names are resolved as property paths
    /// by the client script. Same delegation rule as [`value`](Widget::value).
    fn value_property(&self, which: Property) -> Option<&'static str> {
        let _ = which;
        None
    }

    /// Whether the value for `which` must be HTML-escaped before the client
    /// interprets it. Only widgets whose values land in `innerHTML` return
    /// `true` (and skip it when the caller vouched for the content).
    fn value_needs_escaping(&self, which: Property) -> bool {
        let _ = which;
        false
    }

    /// Apply a client-submitted argument, pulling the raw value from the
    /// driver under `argname`. The default means "not client-writable".
    ///
    /// Implementations need not mark anything changed — the tree stamps the
    /// node after any outcome other than [`Updated::No`].
    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let _ = (driver, argname);
        Updated::No
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDriver;

    struct Passive;

    impl Widget for Passive {
        fn kind(&self) -> &'static str {
            "Passive"
        }

        fn render_open(&self, out: &mut dyn Driver) {
            out.print_content("<!-- passive -->");
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn defaults_describe_a_passive_node() {
        let mut widget = Passive;
        assert!(widget.id().is_none());
        assert!(widget.compose().is_empty());
        assert!(widget.value(Property::Value).is_none());
        assert!(widget.value_property(Property::Value).is_none());
        assert!(!widget.value_needs_escaping(Property::Value));
    }

    #[test]
    fn default_update_is_not_client_writable() {
        let mut widget = Passive;
        let mut driver = TestDriver::new().with_arg("value", "ignored");
        assert_eq!(widget.update_from_arg(&mut driver, "value"), Updated::No);
    }

    #[test]
    fn default_render_close_emits_nothing() {
        let widget = Passive;
        let mut driver = TestDriver::new();
        widget.render_close(&mut driver);
        assert_eq!(driver.output(), "");
    }

    #[test]
    fn sync_order_starts_with_base_properties() {
        assert_eq!(Property::SYNC_ORDER[0], Property::Visibility);
        assert_eq!(Property::SYNC_ORDER[1], Property::Enabledness);
        assert_eq!(Property::SYNC_ORDER[2], Property::Value);
        assert_eq!(Property::SYNC_ORDER[3], Property::Extra(0));
    }

    #[test]
    fn widget_is_object_safe() {
        let boxed: Box<dyn Widget> = Box::new(Passive);
        assert_eq!(boxed.kind(), "Passive");
    }
}
