//! Widget tree arena: slotmap-backed nodes with revision tracking and id
//! queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeEntry, NodeFlags, NodeKey};
pub use tree::{Tree, TreeError};
