//! Grid module - the placed-block matrix
//!
//! The grid is 20 rows by 10 columns of [`Cell`] values, stored as a flat array in
//! row-major order so that whole-row moves are a single `copy_within`.
//! Coordinates are `(row, col)`: row 0 is the top (spawn side), row 19 the floor.
//!
//! Every accessor is bounds-checked and reports [`GridError::OutOfBounds`] instead of
//! clamping or wrapping.

use crate::error::GridError;
use crate::types::{Cell, COLS, EMPTY, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (ROWS as usize) * (COLS as usize);

const WIDTH: usize = COLS as usize;

/// Fixed-size matrix of placed cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; GRID_SIZE],
        }
    }

    /// Build a grid from text rows, top row first.
    ///
    /// Only the bottom `art.len()` rows are filled; rows above stay empty.
    /// `.` is empty, a digit `1-7` is that cell value and any other character is `1`.
    /// Lines shorter than the grid width are padded with empty cells.
    pub fn from_rows(art: &[&str]) -> Self {
        let mut grid = Self::new();
        let skip = (ROWS as usize).saturating_sub(art.len());
        for (i, line) in art.iter().take(ROWS as usize).enumerate() {
            let row = skip + i;
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                let value = match ch {
                    '.' | ' ' => EMPTY,
                    '1'..='7' => ch as u8 - b'0',
                    _ => 1,
                };
                grid.cells[row * WIDTH + col] = value;
            }
        }
        grid
    }

    #[inline(always)]
    fn index(row: i16, col: i16) -> Result<usize, GridError> {
        if row < 0 || row >= ROWS as i16 || col < 0 || col >= COLS as i16 {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok((row as usize) * WIDTH + (col as usize))
    }

    #[inline(always)]
    fn check_row(row: i16) -> Result<usize, GridError> {
        if row < 0 || row >= ROWS as i16 {
            return Err(GridError::OutOfBounds { row, col: 0 });
        }
        Ok(row as usize)
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    pub fn cols(&self) -> u8 {
        COLS
    }

    /// Get the cell at `(row, col)`
    pub fn get(&self, row: i16, col: i16) -> Result<Cell, GridError> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(row, col)`
    pub fn set(&mut self, row: i16, col: i16, value: Cell) -> Result<(), GridError> {
        let idx = Self::index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// In bounds and non-empty
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Ok(v) if v != EMPTY)
    }

    /// Reset a row to all-empty
    pub fn clear_row(&mut self, row: i16) -> Result<(), GridError> {
        let start = Self::check_row(row)? * WIDTH;
        self.cells[start..start + WIDTH].fill(EMPTY);
        Ok(())
    }

    /// Copy every row `r` in `(0, from_row]` from row `r - 1`, then empty row 0.
    ///
    /// The content of `from_row` itself is overwritten; this is how a full row is
    /// removed.
    pub fn shift_down(&mut self, from_row: i16) -> Result<(), GridError> {
        let from = Self::check_row(from_row)?;
        for row in (1..=from).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(EMPTY);
        Ok(())
    }

    /// Every cell of the row is non-empty. Out-of-range rows are never full.
    pub fn is_row_full(&self, row: i16) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&c| c != EMPTY))
            .unwrap_or(false)
    }

    /// Every cell of the row is empty. Out-of-range rows count as empty.
    pub fn is_row_empty(&self, row: i16) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&c| c == EMPTY))
            .unwrap_or(true)
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: i16) -> Result<&[Cell], GridError> {
        let start = Self::check_row(row)? * WIDTH;
        Ok(&self.cells[start..start + WIDTH])
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Export into a fixed 2D array (allocation-free)
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS as usize]; ROWS as usize]) {
        for (dst, src) in out.iter_mut().zip(self.cells.chunks_exact(WIDTH)) {
            dst.copy_from_slice(src);
        }
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
