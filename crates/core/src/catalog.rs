//! Catalog module - the seven piece templates
//!
//! Templates are stored in spawn orientation with every occupied cell holding the
//! kind's cell value, so merged blocks keep their identity on the grid.
//!
//! ```text
//! I: ####      T: ###     Z: ##.     S: .##
//!                 .#.        .##        ##.
//!
//! O: ##        L: ###     J: ###
//!    ##           #..        ..#
//! ```

use crate::shape::Shape;
use crate::types::PieceKind;

const fn fill(mask: [[u8; 4]; 4], value: u8) -> [[u8; 4]; 4] {
    let mut out = [[0u8; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            out[y][x] = mask[y][x] * value;
            x += 1;
        }
        y += 1;
    }
    out
}

const I_SHAPE: Shape = Shape::from_raw(
    1,
    4,
    fill([[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 1),
);

const T_SHAPE: Shape = Shape::from_raw(
    2,
    3,
    fill([[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 2),
);

const Z_SHAPE: Shape = Shape::from_raw(
    2,
    3,
    fill([[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 3),
);

const S_SHAPE: Shape = Shape::from_raw(
    2,
    3,
    fill([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 4),
);

const O_SHAPE: Shape = Shape::from_raw(
    2,
    2,
    fill([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 5),
);

const L_SHAPE: Shape = Shape::from_raw(
    2,
    3,
    fill([[1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 6),
);

const J_SHAPE: Shape = Shape::from_raw(
    2,
    3,
    fill([[1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 7),
);

/// Spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}
