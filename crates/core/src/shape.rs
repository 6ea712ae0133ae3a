//! Tetromino catalog and shape matrices
//!
//! Shapes are small row-major matrices (at most 4x4) whose filled cells carry
//! the piece kind. `Shape` is a plain `Copy` value: every piece owns its own
//! matrix, and rotating one can never touch the read-only [`CATALOG`].

use crate::types::{Cell, PieceKind, Rgb};

/// Largest matrix side length of any tetromino
pub const MAX_SHAPE: usize = 4;

/// Color used for empty board cells
pub const EMPTY_COLOR: Rgb = Rgb::new(30, 30, 40);

/// A rectangular shape matrix of `rows x cols` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[Cell; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from a 0/1 mask, tagging filled cells with `kind`.
    pub const fn from_mask(
        kind: PieceKind,
        rows: u8,
        cols: u8,
        mask: [[u8; MAX_SHAPE]; MAX_SHAPE],
    ) -> Self {
        let mut cells = [[None; MAX_SHAPE]; MAX_SHAPE];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                if mask[r][c] != 0 {
                    cells[r][c] = Some(kind);
                }
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at `(row, col)`; empty outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows as usize || col >= self.cols as usize {
            return None;
        }
        self.cells[row][col]
    }

    /// Filled cells as `(row, col, kind)` relative to the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter_map(move |c| self.cells[r][c].map(|kind| (r as i8, c as i8, kind)))
        })
    }

    /// Number of filled cells.
    pub fn mino_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotated copy, see [`rotate_matrix`].
    pub fn rotated(&self, clockwise: bool) -> Self {
        rotate_matrix(self, clockwise)
    }
}

/// Rotate a matrix by 90° with direct index remapping.
///
/// A `rows x cols` input yields a `cols x rows` output, so the 1x4 bar becomes
/// 4x1 and back. The input is left untouched.
///
/// - clockwise: `out[c][rows - 1 - r] = in[r][c]`
/// - counter-clockwise: `out[cols - 1 - c][r] = in[r][c]`
pub fn rotate_matrix(shape: &Shape, clockwise: bool) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = [[None; MAX_SHAPE]; MAX_SHAPE];

    for (r, src_row) in shape.cells.iter().enumerate().take(rows) {
        for (c, &cell) in src_row.iter().enumerate().take(cols) {
            if clockwise {
                cells[c][rows - 1 - r] = cell;
            } else {
                cells[cols - 1 - c][r] = cell;
            }
        }
    }

    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// Immutable template for one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

/// The seven templates, in [`PieceKind::ALL`] order.
pub static CATALOG: [Tetromino; 7] = [
    Tetromino {
        kind: PieceKind::I,
        shape: Shape::from_mask(
            PieceKind::I,
            1,
            4,
            [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]],
        ),
        color: Rgb::new(80, 220, 220),
    },
    Tetromino {
        kind: PieceKind::O,
        shape: Shape::from_mask(
            PieceKind::O,
            2,
            2,
            [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(240, 220, 80),
    },
    Tetromino {
        kind: PieceKind::T,
        shape: Shape::from_mask(
            PieceKind::T,
            2,
            3,
            [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(200, 120, 220),
    },
    Tetromino {
        kind: PieceKind::S,
        shape: Shape::from_mask(
            PieceKind::S,
            2,
            3,
            [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(100, 220, 120),
    },
    Tetromino {
        kind: PieceKind::Z,
        shape: Shape::from_mask(
            PieceKind::Z,
            2,
            3,
            [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(220, 80, 80),
    },
    Tetromino {
        kind: PieceKind::J,
        shape: Shape::from_mask(
            PieceKind::J,
            2,
            3,
            [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(80, 120, 220),
    },
    Tetromino {
        kind: PieceKind::L,
        shape: Shape::from_mask(
            PieceKind::L,
            2,
            3,
            [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
        ),
        color: Rgb::new(255, 165, 0),
    },
];

/// Look up the template for a piece kind.
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    &CATALOG[(kind.tag() - 1) as usize]
}

/// Display color for any of the eight cell categories.
pub fn cell_color(cell: Cell) -> Rgb {
    match cell {
        Some(kind) => tetromino(kind).color,
        None => EMPTY_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_in_kind_order_with_four_minos_each() {
        for (template, kind) in CATALOG.iter().zip(PieceKind::ALL) {
            assert_eq!(template.kind, kind);
            assert_eq!(template.shape.mino_count(), 4, "{:?}", kind);
            assert!(template.shape.filled().all(|(_, _, k)| k == kind));
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        // .T.      T.
        // TTT  ->  TT
        //          T.
        let t = tetromino(PieceKind::T).shape;
        let cw = rotate_matrix(&t, true);
        assert_eq!((cw.rows(), cw.cols()), (3, 2));
        let filled: Vec<_> = cw.filled().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(filled, vec![(0, 0), (1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn rotate_t_counter_clockwise() {
        // .T.      .T
        // TTT  ->  TT
        //          .T
        let t = tetromino(PieceKind::T).shape;
        let ccw = rotate_matrix(&t, false);
        let filled: Vec<_> = ccw.filled().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(filled, vec![(0, 1), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn four_rotations_return_to_start() {
        for template in CATALOG.iter() {
            let mut shape = template.shape;
            for _ in 0..4 {
                shape = shape.rotated(true);
            }
            assert_eq!(shape, template.shape);

            assert_eq!(shape.rotated(true).rotated(false), template.shape);
        }
    }

    #[test]
    fn empty_cell_color_differs_from_pieces() {
        assert_eq!(cell_color(None), EMPTY_COLOR);
        for kind in PieceKind::ALL {
            assert_ne!(cell_color(Some(kind)), EMPTY_COLOR);
        }
    }
}
