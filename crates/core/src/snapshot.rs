//! Pull-based view of the simulation for renderers and tests.

use serde::Serialize;

use crate::collision::Offset;
use crate::shape::Shape;
use crate::simulation::ActivePiece;
use crate::types::{Cell, PieceKind, SimStatus, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub offset: Offset,
}

impl ActiveSnapshot {
    /// Occupied cells in grid coordinates as `(row, col, value)`
    pub fn grid_cells(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        self.shape
            .cells()
            .map(|(y, x, v)| (self.offset.row + y as i16, self.offset.col + x as i16, v))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            offset: value.offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; COLS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: SimStatus,
    pub level: u32,
    pub rows_since_level_up: u32,
    pub lines_cleared: u32,
    pub pieces_spawned: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Board cell with the active piece drawn on top. Out-of-range reads are empty.
    pub fn composited(&self, row: i16, col: i16) -> Cell {
        if let Some(active) = &self.active {
            if let Some((_, _, v)) = active.grid_cells().find(|&(r, c, _)| r == row && c == col) {
                return v;
            }
        }
        if row < 0 || col < 0 || row >= ROWS as i16 || col >= COLS as i16 {
            return 0;
        }
        self.board[row as usize][col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS as usize]; ROWS as usize],
            active: None,
            status: SimStatus::NotStarted,
            level: 1,
            rows_since_level_up: 0,
            lines_cleared: 0,
            pieces_spawned: 0,
            drop_interval_ms: 0,
        }
    }
}
