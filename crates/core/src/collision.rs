//! Collision module - can a shape sit at an offset?

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{COLS, ROWS};

/// Position of a shape's local origin in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct Offset {
    pub row: i16,
    pub col: i16,
}

impl Offset {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Same offset moved by `(drow, dcol)`
    pub const fn shifted(self, drow: i16, dcol: i16) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// True if any occupied cell of `shape` at `offset` is off the grid or overlaps a
/// placed block.
///
/// Columns outside `[0, COLS)` and rows at or below the floor collide. Rows above
/// the top (`row < 0`) never collide.
pub fn collides(grid: &Grid, shape: &Shape, offset: Offset) -> bool {
    shape.cells().any(|(y, x, _)| {
        let row = offset.row + y as i16;
        let col = offset.col + x as i16;
        if col < 0 || col >= COLS as i16 || row >= ROWS as i16 {
            return true;
        }
        row >= 0 && grid.is_occupied(row, col)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template;
    use crate::types::PieceKind;

    #[test]
    fn empty_grid_spawn_is_free() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&grid, &template(kind), Offset::new(0, 4)), "{kind:?}");
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let grid = Grid::new();
        let o = template(PieceKind::O);
        assert!(collides(&grid, &o, Offset::new(0, -1)));
        assert!(collides(&grid, &o, Offset::new(0, 9)));
        assert!(!collides(&grid, &o, Offset::new(0, 8)));
        assert!(!collides(&grid, &o, Offset::new(18, 0)));
        assert!(collides(&grid, &o, Offset::new(19, 0)));
    }

    #[test]
    fn rows_above_top_never_collide() {
        let mut grid = Grid::new();
        grid.set(0, 4, 1).unwrap();
        let o = template(PieceKind::O);
        // Bottom row of the O sits on row -1, entirely above the grid.
        assert!(!collides(&grid, &o, Offset::new(-2, 4)));
        // Bottom row lands on the occupied cell.
        assert!(collides(&grid, &o, Offset::new(-1, 4)));
    }

    #[test]
    fn only_occupied_cells_are_tested() {
        let mut grid = Grid::new();
        // The T's empty lower corners overlap these blocks without colliding.
        grid.set(1, 0, 3).unwrap();
        grid.set(1, 2, 3).unwrap();
        let t = template(PieceKind::T);
        assert!(!collides(&grid, &t, Offset::new(0, 0)));
        grid.set(1, 1, 3).unwrap();
        assert!(collides(&grid, &t, Offset::new(0, 0)));
    }

    #[test]
    fn leading_empty_columns_may_hang_off_the_left_wall() {
        let grid = Grid::new();
        let row: &[u8] = &[0, 0, 0, 1];
        let vertical_i = Shape::from_rows(&[row, row, row, row]).unwrap();
        assert!(!collides(&grid, &vertical_i, Offset::new(0, -3)));
        assert!(collides(&grid, &vertical_i, Offset::new(0, -4)));
    }
}
