//! Shared types module - constants and plain enums used by every crate
//!
//! Everything here is pure data with no behavior beyond small conversions, so it can
//! be used from the simulation core, the terminal renderer and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (row 0 is the top, where pieces spawn)
//! - **Columns**: 10
//! - **Spawn offset**: row 0, column 4
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame step of the terminal loop (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Drop interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Lower clamp for the drop interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{MoveDir, PieceKind, COLS, ROWS};
//!
//! let kind = PieceKind::from_cell(5).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.cell(), 5);
//!
//! assert_eq!(kind.as_str(), "o");
//! assert_eq!(MoveDir::Left.dx(), -1);
//!
//! assert_eq!(ROWS, 20);
//! assert_eq!(COLS, 10);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Grid height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Grid width in cells (10 columns)
pub const COLS: u8 = 10;

/// Row of the spawn offset
pub const SPAWN_ROW: i8 = 0;

/// Column of the spawn offset
pub const SPAWN_COL: i8 = 4;

/// Largest side of any piece shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Fixed frame step of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at level 1 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval reduction per level gained
pub const DROP_STEP_MS: u32 = 100;

/// Lower clamp for the drop interval; reached at level 10
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level: level `n` advances after `n * LINES_PER_LEVEL` lines
pub const LINES_PER_LEVEL: u32 = 5;

/// Value stored in a grid cell. `0` is empty, `1..=7` names the piece that left it.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    T,
    Z,
    S,
    O,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Cell value written into the grid for this kind (1-based catalog index)
    pub fn cell(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::O => 5,
            PieceKind::L => 6,
            PieceKind::J => 7,
        }
    }

    /// Inverse of [`PieceKind::cell`]; `None` for empty or unknown values
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1..=7 => Some(Self::ALL[(cell - 1) as usize]),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RotateDir {
    Cw,
    Ccw,
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MoveDir {
    Left,
    Right,
}

impl MoveDir {
    /// Column delta for one step
    pub fn dx(&self) -> i8 {
        match self {
            MoveDir::Left => -1,
            MoveDir::Right => 1,
        }
    }
}

/// Discrete commands accepted by the simulation, independent of input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Command {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    Restart,
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SimStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}
