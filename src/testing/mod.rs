//! Headless testing framework: capture driver and exchange pilot.
//!
//! Use [`TestDriver`] to run renders and sync exchanges without a transport,
//! and [`Pilot`] to play the browser's role across whole exchanges.

pub mod driver;
pub mod pilot;

pub use driver::{ResponseKind, TestDriver};
pub use pilot::Pilot;
