//! Placement module - merging landed pieces and sweeping full rows

use crate::collision::Offset;
use crate::error::{CoreError, Result};
use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{COLS, ROWS};

/// Write every occupied cell of `shape` at `offset` into the grid.
///
/// Every target cell must be on the grid and empty. All of them are checked before
/// the first write, so a failed merge leaves the grid untouched. Callers are
/// expected to have run [`crate::collision::collides`] first; a failure here is a
/// logic error.
pub fn merge(grid: &mut Grid, shape: &Shape, offset: Offset) -> Result<()> {
    for (y, x, _) in shape.cells() {
        let row = offset.row + y as i16;
        let col = offset.col + x as i16;
        let on_grid = row >= 0 && row < ROWS as i16 && col >= 0 && col < COLS as i16;
        if !on_grid || grid.is_occupied(row, col) {
            return Err(CoreError::InvalidPlacement { row, col });
        }
    }

    for (y, x, value) in shape.cells() {
        grid.set(offset.row + y as i16, offset.col + x as i16, value)?;
    }

    Ok(())
}

/// Remove every full row, compacting the rows above downward.
///
/// Rows are scanned bottom to top. After a full row is removed the same index is
/// examined again, because the row that was above it has just moved into it.
/// Returns the number of rows removed.
pub fn sweep(grid: &mut Grid) -> Result<u32> {
    let mut cleared = 0;
    let mut row = ROWS as i16 - 1;

    while row >= 0 {
        if grid.is_row_full(row) {
            grid.shift_down(row)?;
            cleared += 1;
        } else {
            row -= 1;
        }
    }

    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template;
    use crate::types::PieceKind;

    #[test]
    fn merge_writes_shape_values() {
        let mut grid = Grid::new();
        let t = template(PieceKind::T);
        merge(&mut grid, &t, Offset::new(5, 2)).unwrap();

        assert_eq!(grid.get(5, 2), Ok(2));
        assert_eq!(grid.get(5, 3), Ok(2));
        assert_eq!(grid.get(5, 4), Ok(2));
        assert_eq!(grid.get(6, 3), Ok(2));
        // Empty template cells leave the grid alone.
        assert_eq!(grid.get(6, 2), Ok(0));
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn merge_out_of_bounds_is_rejected_without_writes() {
        let mut grid = Grid::new();
        let i = template(PieceKind::I);
        let err = merge(&mut grid, &i, Offset::new(0, 8)).unwrap_err();
        assert_eq!(err, CoreError::InvalidPlacement { row: 0, col: 10 });
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn merge_onto_occupied_cell_is_rejected() {
        let mut grid = Grid::from_rows(&["....7....."]);
        let before = grid.clone();
        let o = template(PieceKind::O);
        let err = merge(&mut grid, &o, Offset::new(18, 3)).unwrap_err();
        assert_eq!(err, CoreError::InvalidPlacement { row: 19, col: 4 });
        assert_eq!(grid, before);
    }

    #[test]
    fn sweep_without_full_rows_is_noop() {
        let mut grid = Grid::from_rows(&["#########."]);
        let before = grid.clone();
        assert_eq!(sweep(&mut grid).unwrap(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn sweep_adjacent_full_rows() {
        let mut grid = Grid::from_rows(&["1.........", "##########", "##########"]);
        assert_eq!(sweep(&mut grid).unwrap(), 2);
        assert_eq!(grid.get(19, 0), Ok(1));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn sweep_full_rows_separated_by_gap() {
        let mut grid = Grid::from_rows(&["##########", "3.3.3.....", "##########"]);
        assert_eq!(sweep(&mut grid).unwrap(), 2);
        assert_eq!(
            grid.row(19).unwrap(),
            &[3u8, 0, 3, 0, 3, 0, 0, 0, 0, 0]
        );
        for row in 0..19 {
            assert!(grid.is_row_empty(row));
        }
    }

    #[test]
    fn sweep_four_rows() {
        let mut grid = Grid::from_rows(&[
            "5555......",
            "##########",
            "##########",
            "##########",
            "##########",
        ]);
        assert_eq!(sweep(&mut grid).unwrap(), 4);
        assert_eq!(grid.row(19).unwrap()[..4], [5u8, 5, 5, 5]);
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn second_sweep_clears_nothing() {
        let mut grid = Grid::from_rows(&["##########", "#.#.#.#.#.", "##########"]);
        assert_eq!(sweep(&mut grid).unwrap(), 2);
        let after_first = grid.clone();
        assert_eq!(sweep(&mut grid).unwrap(), 0);
        assert_eq!(grid, after_first);
    }
}
