//! Shape module - small cell matrices describing a piece
//!
//! A [`Shape`] is a `rows x cols` matrix (at most 4x4) whose non-zero entries are the
//! occupied cells, relative to the shape's top-left local origin. Shapes are `Copy`
//! and never allocate, so rotating a piece always produces a fresh value and leaves
//! the catalog template alone.

use arrayvec::ArrayVec;

use crate::types::{Cell, EMPTY, MAX_SHAPE_SIDE};

const N: usize = MAX_SHAPE_SIDE;

/// Occupied positions of a shape as `(y, x)` pairs
pub type CellList = ArrayVec<(u8, u8), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Backing storage; entries outside `rows x cols` are always empty.
    cells: [[Cell; N]; N],
}

impl Shape {
    /// Build a shape from storage that is already zero outside `rows x cols`.
    pub(crate) const fn from_raw(rows: u8, cols: u8, cells: [[Cell; N]; N]) -> Self {
        Self { rows, cols, cells }
    }

    /// The degenerate 1x1 empty shape
    pub const fn empty() -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: [[EMPTY; N]; N],
        }
    }

    /// Build a shape from row slices. Ragged rows are padded with empty cells.
    ///
    /// Returns `None` when there are no rows, no columns, or either side exceeds 4.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if rows.is_empty() || rows.len() > N || cols == 0 || cols > N {
            return None;
        }
        let mut cells = [[EMPTY; N]; N];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..row.len()].copy_from_slice(row);
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Side of the square this shape pads to before rotating
    pub fn side(&self) -> u8 {
        self.rows.max(self.cols)
    }

    /// Value at `(y, x)`; empty outside the matrix
    pub fn get(&self, y: u8, x: u8) -> Cell {
        if y >= self.rows || x >= self.cols {
            return EMPTY;
        }
        self.cells[y as usize][x as usize]
    }

    pub(crate) fn raw(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Iterate occupied cells as `(y, x, value)`
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols).filter_map(move |x| {
                let v = self.cells[y as usize][x as usize];
                (v != EMPTY).then_some((y, x, v))
            })
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }

    /// Occupied cells shifted so the minimal bounding box starts at `(0, 0)`.
    ///
    /// Two shapes with equal `normalized()` have the same occupied-cell pattern,
    /// regardless of any empty border rows or columns.
    pub fn normalized(&self) -> CellList {
        let min_y = self.cells().map(|(y, _, _)| y).min().unwrap_or(0);
        let min_x = self.cells().map(|(_, x, _)| x).min().unwrap_or(0);
        self.cells()
            .map(|(y, x, _)| (y - min_y, x - min_x))
            .collect()
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::empty()
    }
}
