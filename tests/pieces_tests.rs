//! Piece tests - catalog, matrix rotation, collision and spawning

use blockfall::core::{
    can_move, lock, rotate, rotate_matrix, spawn, spawn_kind, tetromino, Board, Shape, SimpleRng,
    CATALOG,
};
use blockfall::types::PieceKind;

fn mask(shape: &Shape) -> Vec<Vec<u8>> {
    (0..shape.rows() as usize)
        .map(|r| {
            (0..shape.cols() as usize)
                .map(|c| u8::from(shape.get(r, c).is_some()))
                .collect()
        })
        .collect()
}

#[test]
fn test_catalog_dimensions() {
    let dims: Vec<(u8, u8)> = PieceKind::ALL
        .iter()
        .map(|&k| (tetromino(k).shape.rows(), tetromino(k).shape.cols()))
        .collect();
    assert_eq!(
        dims,
        vec![(1, 4), (2, 2), (2, 3), (2, 3), (2, 3), (2, 3), (2, 3)]
    );
}

#[test]
fn test_catalog_masks() {
    assert_eq!(mask(&tetromino(PieceKind::T).shape), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    assert_eq!(mask(&tetromino(PieceKind::S).shape), vec![vec![0, 1, 1], vec![1, 1, 0]]);
    assert_eq!(mask(&tetromino(PieceKind::Z).shape), vec![vec![1, 1, 0], vec![0, 1, 1]]);
    assert_eq!(mask(&tetromino(PieceKind::J).shape), vec![vec![1, 0, 0], vec![1, 1, 1]]);
    assert_eq!(mask(&tetromino(PieceKind::L).shape), vec![vec![0, 0, 1], vec![1, 1, 1]]);
}

#[test]
fn test_rotate_matrix_clockwise_t() {
    let rotated = rotate_matrix(&tetromino(PieceKind::T).shape, true);
    assert_eq!(mask(&rotated), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
}

#[test]
fn test_rotate_matrix_counter_clockwise_t() {
    let rotated = rotate_matrix(&tetromino(PieceKind::T).shape, false);
    assert_eq!(mask(&rotated), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
}

#[test]
fn test_rotate_matrix_bar_transposes() {
    let bar = tetromino(PieceKind::I).shape;
    let vertical = rotate_matrix(&bar, true);
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    assert_eq!(rotate_matrix(&vertical, false), bar);
}

#[test]
fn test_four_rotations_are_identity() {
    for template in CATALOG.iter() {
        let mut shape = template.shape;
        for _ in 0..4 {
            shape = rotate_matrix(&shape, true);
        }
        assert_eq!(shape, template.shape, "{:?}", template.kind);
        assert_eq!(
            rotate_matrix(&rotate_matrix(&template.shape, true), false),
            template.shape
        );
    }
}

#[test]
fn test_spawned_pieces_are_independent() {
    let board = Board::new();
    let catalog_before = CATALOG;

    let mut first = spawn_kind(PieceKind::L);
    let second = spawn_kind(PieceKind::L);
    assert!(rotate(&mut first, &board, true));
    assert!(rotate(&mut first, &board, true));

    assert_ne!(first.shape, second.shape);
    assert_eq!(second.shape, tetromino(PieceKind::L).shape);
    assert_eq!(CATALOG, catalog_before);
}

#[test]
fn test_spawn_is_seeded() {
    let mut a = SimpleRng::new(2024);
    let mut b = SimpleRng::new(2024);
    for _ in 0..50 {
        let pa = spawn(&mut a);
        let pb = spawn(&mut b);
        assert_eq!(pa, pb);
        assert_eq!(pa.y, 0);
        assert_eq!(pa.color, tetromino(pa.kind).color);
    }
}

#[test]
fn test_can_move_respects_settled_cells() {
    let mut board = Board::new();
    board.set(2, 4, Some(PieceKind::Z));
    let piece = spawn_kind(PieceKind::O);

    // O at (0,4)-(1,5): one step down overlaps (2,4).
    assert!(can_move(&piece, &board, 0, 0, None));
    assert!(!can_move(&piece, &board, 0, 1, None));
    assert!(can_move(&piece, &board, 1, 1, None));
}

#[test]
fn test_can_move_with_override_shape() {
    let board = Board::new();
    let mut piece = spawn_kind(PieceKind::I);
    piece.y = 17;

    let vertical = rotate_matrix(&piece.shape, true);
    assert!(can_move(&piece, &board, 0, 0, None));
    assert!(!can_move(&piece, &board, 0, 0, Some(&vertical)));
    assert!(can_move(&piece, &board, 0, -1, Some(&vertical)));
}

#[test]
fn test_rotation_failure_is_non_destructive() {
    let mut board = Board::new();
    let mut piece = spawn_kind(PieceKind::I);
    piece.y = 10;
    // Block every cell the vertical bar could use around it.
    for row in 7..14 {
        for col in 2..8 {
            board.set(row, col, Some(PieceKind::O));
        }
    }
    for (row, col, _) in piece.cells() {
        board.set(row, col, None);
    }

    let before = piece;
    assert!(!rotate(&mut piece, &board, true));
    assert!(!rotate(&mut piece, &board, false));
    assert_eq!(piece, before);
}

#[test]
fn test_o_piece_rotation_is_noop() {
    let board = Board::new();
    let mut piece = spawn_kind(PieceKind::O);
    piece.x = 0;
    piece.y = 5;
    let before = piece;

    assert!(!rotate(&mut piece, &board, true));
    assert!(!rotate(&mut piece, &board, false));
    assert_eq!(piece, before);
}

#[test]
fn test_lock_then_collide() {
    let mut board = Board::new();
    let mut piece = spawn_kind(PieceKind::I);
    piece.y = 19;
    lock(&piece, &mut board);

    let next = spawn_kind(PieceKind::I);
    let mut above = next;
    above.y = 18;
    assert!(can_move(&above, &board, 0, 0, None));
    assert!(!can_move(&above, &board, 0, 1, None));
}
