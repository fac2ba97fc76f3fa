//! Widget system: the object-safe trait and the property index set.

pub mod traits;

pub use traits::{Property, Updated, Widget};
