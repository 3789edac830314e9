//! Terminal input for blockfall.
//!
//! Maps `crossterm` key events onto simulation [`Command`]s. The simulation
//! never sees key codes, so any other device can drive it the same way.

pub mod map;

pub use blockfall_types as types;
pub use types::Command;

pub use map::{map_key, should_quit};
