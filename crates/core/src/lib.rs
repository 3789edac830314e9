//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the falling-block simulation and nothing else. It has no
//! dependencies on terminals or input devices, so the same code runs under the
//! terminal frontend, in headless tests and in benchmarks.
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 matrix of placed cells with bounds-checked access
//! - [`shape`]: fixed-capacity piece matrices
//! - [`catalog`]: the seven piece templates
//! - [`rotation`]: pad-to-square quarter turns with trimming
//! - [`collision`]: the overlap / out-of-bounds predicate
//! - [`placement`]: merging landed pieces and sweeping full rows
//! - [`simulation`]: the tick-driven controller and its level progression
//! - [`rng`]: uniform random and scripted piece sources
//! - [`snapshot`]: copyable state for renderers
//! - [`config`]: tunable rules loaded from JSON and the environment
//!
//! # Rules
//!
//! - One gravity step per drop interval; `1000ms - (level - 1) * 100ms`, never
//!   below 100ms
//! - Left/right moves and rotations are applied only if the result does not collide
//! - Landing merges the piece, clears full rows and spawns the next piece at
//!   row 0, column 4; a blocked spawn ends the game
//! - Level `n` advances after `5 * n` lines cleared on it, and the counter restarts
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ScriptedPieces, SimConfig, Simulation, TickOutcome};
//! use blockfall_core::types::{Command, PieceKind, SimStatus};
//!
//! let mut sim = Simulation::with_source(SimConfig::default(), ScriptedPieces::repeat(PieceKind::O));
//! sim.apply_command(Command::Start).unwrap();
//! assert_eq!(sim.status(), SimStatus::Running);
//!
//! sim.apply_command(Command::MoveLeft).unwrap();
//! assert_eq!(sim.tick().unwrap(), TickOutcome::Moved);
//! assert_eq!(sim.active().unwrap().offset.col, 3);
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod grid;
pub mod placement;
pub mod rng;
pub mod rotation;
pub mod shape;
pub mod simulation;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::template;
pub use collision::{collides, Offset};
pub use config::SimConfig;
pub use error::{CoreError, GridError};
pub use grid::Grid;
pub use placement::{merge, sweep};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use rotation::rotate;
pub use shape::Shape;
pub use simulation::{ActivePiece, Simulation, TickOutcome, SPAWN_OFFSET};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
