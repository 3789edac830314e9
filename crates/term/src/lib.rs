//! Terminal rendering for blockfall.
//!
//! The snapshot is first laid out into a [`Frame`] of styled characters by
//! [`BoardView`] (pure, unit-testable), then flushed to the terminal by
//! [`TerminalRenderer`]. Nothing here mutates game state.

pub mod frame;
pub mod renderer;
pub mod view;

pub use blockfall_types as types;

pub use frame::{Frame, Glyph, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::{BoardView, Viewport};
