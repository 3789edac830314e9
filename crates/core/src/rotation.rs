//! Rotation module - quarter turns of arbitrary piece matrices
//!
//! There is no per-kind rotation table. Any shape is padded to an `N x N` square
//! (`N = max(rows, cols)`), turned, and trimmed again:
//!
//! - clockwise maps source `(y, x)` to `(x, N - 1 - y)`
//! - counter-clockwise maps source `(y, x)` to `(N - 1 - x, y)`
//! - trimming drops empty leading and trailing rows and empty trailing columns
//!
//! Leading empty columns survive the trim, so e.g. a horizontal I turned clockwise
//! becomes a 4x4 matrix occupied only in its last column. Offsets are never
//! adjusted; the caller re-validates the new shape at the current offset.

use crate::shape::Shape;
use crate::types::{Cell, RotateDir, EMPTY, MAX_SHAPE_SIDE};

const N: usize = MAX_SHAPE_SIDE;

/// Turn `shape` by 90 degrees in `dir`.
///
/// Pure and total: the input is never modified, and a shape with no occupied cells
/// comes back as the 1x1 empty shape.
pub fn rotate(shape: &Shape, dir: RotateDir) -> Shape {
    let n = shape.side() as usize;
    let src = shape.raw();
    let mut turned = [[EMPTY; N]; N];

    for (y, row) in src.iter().enumerate().take(n) {
        for (x, &value) in row.iter().enumerate().take(n) {
            match dir {
                RotateDir::Cw => turned[x][n - 1 - y] = value,
                RotateDir::Ccw => turned[n - 1 - x][y] = value,
            }
        }
    }

    trim(&turned, n)
}

/// Cut the `n x n` matrix down to its occupied rows and its used column prefix.
fn trim(cells: &[[Cell; N]; N], n: usize) -> Shape {
    let row_used = |y: &usize| cells[*y][..n].iter().any(|&c| c != EMPTY);

    let Some(first) = (0..n).find(row_used) else {
        return Shape::empty();
    };
    let last = (0..n).rev().find(row_used).unwrap_or(first);

    let width = (0..n)
        .rev()
        .find(|&x| (first..=last).any(|y| cells[y][x] != EMPTY))
        .map_or(1, |x| x + 1);

    let mut out = [[EMPTY; N]; N];
    for (dst, src) in out.iter_mut().zip(&cells[first..=last]) {
        dst[..width].copy_from_slice(&src[..width]);
    }

    Shape::from_raw((last - first + 1) as u8, width as u8, out)
}
