//! Tree operations: insert, walk, mutate, flag propagation.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeEntry, NodeFlags, NodeKey};
use crate::driver::Driver;
use crate::revision::RevisionClock;
use crate::widget::{Property, Updated, Widget};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeKey] = &[];

/// Errors from tree construction checks.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
}

/// The invisible root every tree starts with. Renders nothing; its children
/// are the page's top-level nodes.
struct Root;

impl Widget for Root {
    fn kind(&self) -> &'static str {
        "Root"
    }

    fn render_open(&self, _out: &mut dyn Driver) {}

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// The widget tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`; parent/child relationships are kept
/// in secondary maps. Child order is insertion order and defines both render
/// order and update order. The tree owns the [`RevisionClock`] — there is no
/// global state; everything a widget tree needs travels with it.
///
/// The tree is built once at startup and then mutated in place for the life
/// of the process. Nodes are not removed; the shape is static, only element
/// state changes.
pub struct Tree {
    pub(crate) nodes: SlotMap<NodeKey, NodeEntry>,
    children: SecondaryMap<NodeKey, Vec<NodeKey>>,
    parent: SecondaryMap<NodeKey, NodeKey>,
    root: NodeKey,
    clock: RevisionClock,
}

impl Tree {
    /// Create a tree containing only the invisible root node.
    pub fn new() -> Self {
        let clock = RevisionClock::new();
        let mut nodes = SlotMap::with_key();
        let mut children = SecondaryMap::new();
        let root = nodes.insert(NodeEntry::new(Box::new(Root), clock.committed()));
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
            clock,
        }
    }

    /// The root node. Always valid.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Insert a widget as the last child of `parent`.
    ///
    /// Children the widget composes itself (e.g. radio group members) are
    /// inserted beneath it recursively. The new node is stamped with the
    /// committed revision, so a client polling with `since = 0` receives its
    /// full state.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert(&mut self, parent: NodeKey, widget: impl Widget + 'static) -> NodeKey {
        self.insert_boxed(parent, Box::new(widget))
    }

    /// Boxed form of [`insert`](Tree::insert).
    pub fn insert_boxed(&mut self, parent: NodeKey, mut widget: Box<dyn Widget>) -> NodeKey {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let composed = widget.compose();
        let key = self
            .nodes
            .insert(NodeEntry::new(widget, self.clock.committed()));
        self.children.insert(key, Vec::new());
        self.parent.insert(key, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(key);
        }
        for child in composed {
            self.insert_boxed(key, child);
        }
        key
    }

    /// Check the whole tree for duplicate element ids.
    ///
    /// Duplicate ids are a caller error the tree does not defend against at
    /// runtime (lookups return the first match); call this once after
    /// building a page to catch them early.
    pub fn validate_ids(&self) -> Result<(), TreeError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.nodes.len());
        for key in self.walk_depth_first(self.root) {
            let Some(id) = self.nodes.get(key).and_then(|entry| entry.widget.id()) else {
                continue;
            };
            if seen.contains(&id) {
                return Err(TreeError::DuplicateId(id.to_owned()));
            }
            seen.push(id);
        }
        Ok(())
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.parent.get(key).copied()
    }

    /// Get the children of a node, in render/update order. Returns an empty
    /// slice if the node has no children or does not exist.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.children
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Number of nodes in the tree, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing beyond the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Immutable access to a node.
    pub fn entry(&self, key: NodeKey) -> Option<&NodeEntry> {
        self.nodes.get(key)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeKey) -> Vec<NodeKey> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Typed widget access
    // -----------------------------------------------------------------------

    /// Typed immutable access to the widget at `key`. `None` if the node
    /// does not exist or holds a different widget type.
    pub fn widget<W: Widget + 'static>(&self, key: NodeKey) -> Option<&W> {
        self.nodes.get(key)?.widget.as_any().downcast_ref()
    }

    /// Mutate the widget at `key` through a typed closure.
    ///
    /// The closure reports whether it actually changed observable state; the
    /// node is stamped with the pending revision only then, which keeps sync
    /// batches free of false positives. Returns `false` when the node is
    /// missing, the type does not match, or the closure reported no change.
    pub fn mutate<W: Widget + 'static>(
        &mut self,
        key: NodeKey,
        f: impl FnOnce(&mut W) -> bool,
    ) -> bool {
        let changed = match self.nodes.get_mut(key) {
            Some(entry) => match entry.widget.as_any_mut().downcast_mut::<W>() {
                Some(widget) => f(widget),
                None => return false,
            },
            None => return false,
        };
        if changed {
            self.mark_changed(key);
        }
        changed
    }

    // -----------------------------------------------------------------------
    // Change tracking
    // -----------------------------------------------------------------------

    /// Stamp a node with the pending revision.
    pub fn mark_changed(&mut self, key: NodeKey) {
        let revision = self.clock.touch();
        if let Some(entry) = self.nodes.get_mut(key) {
            entry.revision = revision;
        }
    }

    /// The revision clock.
    pub fn clock(&self) -> &RevisionClock {
        &self.clock
    }

    /// Publish the pending revision. Runs once at the end of every sync
    /// exchange, after serialization.
    pub fn commit(&mut self) {
        self.clock.commit();
    }

    // -----------------------------------------------------------------------
    // Basic properties
    // -----------------------------------------------------------------------

    /// Set a flag-backed property.
    ///
    /// On an element node the flag is flipped in place and the node is
    /// marked changed only if the bit actually moved; the change stops there,
    /// so hiding a [`HideableGroup`](crate::widgets::HideableGroup) toggles
    /// one DOM node on the client without touching its children's own flags.
    /// On a passive node (plain group, radio group, static chunk) the call
    /// fans out to every child recursively — hiding or disabling a whole
    /// group at once. Properties without a flag are ignored.
    pub fn set_basic_property(&mut self, key: NodeKey, which: Property, on: bool) {
        let flag = match which {
            Property::Visibility => NodeFlags::VISIBLE,
            Property::Enabledness => NodeFlags::ENABLED,
            _ => return,
        };
        let Some(entry) = self.nodes.get_mut(key) else {
            return;
        };
        if entry.is_element() {
            let before = entry.flags;
            entry.flags.set(flag, on);
            if entry.flags != before {
                self.mark_changed(key);
            }
        } else {
            let kids: Vec<NodeKey> = self.children(key).to_vec();
            for child in kids {
                self.set_basic_property(child, which, on);
            }
        }
    }

    /// Set visibility. Shorthand for the Visibility basic property.
    pub fn set_visible(&mut self, key: NodeKey, visible: bool) {
        self.set_basic_property(key, Property::Visibility, visible);
    }

    /// Set enabledness. Shorthand for the Enabledness basic property.
    pub fn set_enabled(&mut self, key: NodeKey, enabled: bool) {
        self.set_basic_property(key, Property::Enabledness, enabled);
    }

    // -----------------------------------------------------------------------
    // Client updates and rendering
    // -----------------------------------------------------------------------

    /// Apply a client-submitted argument to the widget at `key`, marking the
    /// node changed and running radio coordination as the outcome demands.
    /// Returns whether anything was applied.
    ///
    /// A client-applied value always stamps the node, even if it happens to
    /// equal the old value — other polling clients must still converge on it.
    pub fn apply_client_arg(
        &mut self,
        key: NodeKey,
        driver: &mut dyn Driver,
        argname: &str,
    ) -> bool {
        let outcome = match self.nodes.get_mut(key) {
            Some(entry) => entry.widget.update_from_arg(driver, argname),
            None => return false,
        };
        match outcome {
            Updated::No => false,
            Updated::Yes => {
                self.mark_changed(key);
                true
            }
            Updated::Checked => {
                self.mark_changed(key);
                self.notify_checked(key);
                true
            }
        }
    }

    /// Render the subtree rooted at `key`: the widget's opening markup, its
    /// children in order, then its closing markup.
    pub fn render_node(&self, key: NodeKey, out: &mut dyn Driver) {
        let Some(entry) = self.nodes.get(key) else {
            return;
        };
        entry.widget.render_open(out);
        for &child in self.children(key) {
            self.render_node(child, out);
        }
        entry.widget.render_close(out);
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
