//! Piece module - the falling piece and its board interactions
//!
//! All operations are free functions over an [`ActivePiece`] value and a
//! [`Board`]: collision testing, rotation with a minimal wall-kick fallback,
//! spawning and locking.

use crate::board::{Board, COLS};
use crate::rng::SimpleRng;
use crate::shape::{rotate_matrix, tetromino, Shape};
use crate::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Offsets `(dx, dy)` tried in order when a rotation collides:
/// in place, one column left, one column right, one row up.
///
/// This is a deliberately small kick set, not an SRS kick table.
pub const KICK_OFFSETS: [(i8, i8); 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

/// The falling piece.
///
/// `x`/`y` locate the top-left corner of `shape` in board coordinates
/// (`x` = column, `y` = row). `y` may be negative while entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl ActivePiece {
    /// Filled cells in board coordinates as `(row, col, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c, kind)| (self.y + r, self.x + c, kind))
    }
}

/// Whether `piece` moved by `(dx, dy)` fits on `board`.
///
/// Uses `override_shape` instead of the piece's own shape when given.
/// Every filled cell must land in a column inside the board and a row above
/// the floor; rows at or below the top are also checked against board
/// contents, rows above the top are not.
pub fn can_move(
    piece: &ActivePiece,
    board: &Board,
    dx: i8,
    dy: i8,
    override_shape: Option<&Shape>,
) -> bool {
    let shape = override_shape.unwrap_or(&piece.shape);
    shape.filled().all(|(r, c, _)| {
        let row = piece.y + r + dy;
        let col = piece.x + c + dx;
        if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return false;
        }
        row < 0 || board.is_empty_at(row, col)
    })
}

/// Rotate `piece` in place, trying each of [`KICK_OFFSETS`] in order.
///
/// Returns false (and leaves the piece untouched) for the O piece or when
/// every offset collides.
pub fn rotate(piece: &mut ActivePiece, board: &Board, clockwise: bool) -> bool {
    if piece.kind == PieceKind::O {
        return false;
    }

    let rotated = rotate_matrix(&piece.shape, clockwise);
    for &(dx, dy) in KICK_OFFSETS.iter() {
        if can_move(piece, board, dx, dy, Some(&rotated)) {
            piece.shape = rotated;
            piece.x += dx;
            piece.y += dy;
            if (dx, dy) != (0, 0) {
                log::debug!(
                    "kicked {} rotation by ({}, {})",
                    piece.kind.as_str(),
                    dx,
                    dy
                );
            }
            return true;
        }
    }

    false
}

/// Spawn a uniformly random piece at the top center.
pub fn spawn(rng: &mut SimpleRng) -> ActivePiece {
    spawn_kind(rng.next_kind())
}

/// Spawn a piece of a given kind at the top center.
///
/// The shape is copied out of the catalog, so the template stays pristine.
pub fn spawn_kind(kind: PieceKind) -> ActivePiece {
    let template = tetromino(kind);
    let x = (COLS / 2) as i8 - (template.shape.cols() / 2) as i8;
    ActivePiece {
        kind,
        shape: template.shape,
        x,
        y: 0,
        color: template.color,
    }
}

/// Write every filled cell of `piece` into `board`.
///
/// Callers lock only pieces already in a legal position.
pub fn lock(piece: &ActivePiece, board: &mut Board) {
    for (row, col, kind) in piece.cells() {
        board.set(row, col, Some(kind));
    }
}
