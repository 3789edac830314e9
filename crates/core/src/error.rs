//! Error types for the simulation core.
//!
//! Only programmer errors live here. A move or rotation that is blocked is not an
//! error; it is reported as `Ok(false)` and leaves the state untouched.

use thiserror::Error;

/// Grid Store access outside `[0, ROWS) x [0, COLS)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid access out of bounds at row {row}, col {col}")]
    OutOfBounds { row: i16, col: i16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A merge was attempted at an offset that places cells outside the grid.
    #[error("invalid placement: cell lands at row {row}, col {col}")]
    InvalidPlacement { row: i16, col: i16 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
