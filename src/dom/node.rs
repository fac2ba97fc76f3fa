//! Node types: NodeKey, NodeFlags, NodeEntry.

use slotmap::new_key_type;

use crate::widget::Widget;

new_key_type! {
    /// Unique identifier for a tree node. Copy, lightweight (u64).
    pub struct NodeKey;
}

// ---------------------------------------------------------------------------
// NodeFlags
// ---------------------------------------------------------------------------

/// Element flag bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeFlags(pub u8);

impl NodeFlags {
    pub const NONE: NodeFlags = NodeFlags(0);
    pub const VISIBLE: NodeFlags = NodeFlags(1);
    pub const ENABLED: NodeFlags = NodeFlags(2);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: NodeFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Set or clear all the bits in `other`.
    pub fn set(&mut self, other: NodeFlags, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl Default for NodeFlags {
    /// Elements start visible and enabled.
    fn default() -> Self {
        NodeFlags(Self::VISIBLE.0 | Self::ENABLED.0)
    }
}

impl std::ops::BitOr for NodeFlags {
    type Output = NodeFlags;
    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// NodeEntry
// ---------------------------------------------------------------------------

/// One node in the arena: the widget plus the element state the tree manages
/// generically (flags and last-changed revision).
pub struct NodeEntry {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) flags: NodeFlags,
    pub(crate) revision: u16,
}

impl NodeEntry {
    pub(crate) fn new(widget: Box<dyn Widget>, revision: u16) -> Self {
        Self {
            widget,
            flags: NodeFlags::default(),
            revision,
        }
    }

    /// The widget stored at this node.
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    /// Current element flags.
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// The revision this node was last changed at.
    pub fn revision(&self) -> u16 {
        self.revision
    }

    /// Whether this node changed strictly after `since`.
    pub fn changed(&self, since: u16) -> bool {
        self.revision > since
    }

    /// Whether this node is an element — identifiable and individually
    /// trackable. Only elements appear in sync batches.
    pub fn is_element(&self) -> bool {
        self.widget.id().is_some()
    }
}

impl std::fmt::Debug for NodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeEntry")
            .field("kind", &self.widget.kind())
            .field("id", &self.widget.id())
            .field("flags", &self.flags)
            .field("revision", &self.revision)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
