//! Tree queries: element lookup by id.

use super::node::NodeKey;
use super::tree::Tree;

impl Tree {
    /// Find the first element whose id matches, searching depth-first from
    /// the root. Returns `None` if no element carries the id.
    ///
    /// With duplicate ids (a caller error) the first match in tree order
    /// wins.
    pub fn find_by_id(&self, id: &str) -> Option<NodeKey> {
        self.find_in(self.root(), id)
    }

    /// Depth-first search for `id` within the subtree rooted at `key`.
    pub fn find_in(&self, key: NodeKey, id: &str) -> Option<NodeKey> {
        let entry = self.entry(key)?;
        if entry.widget().id() == Some(id) {
            return Some(key);
        }
        for &child in self.children(key) {
            if let Some(found) = self.find_in(child, id) {
                return Some(found);
            }
        }
        None
    }
}
