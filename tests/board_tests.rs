//! Board tests - bounds, cell access and row clearing

use blockfall::core::board::{COLS, ROWS};
use blockfall::core::Board;
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i8, kind: PieceKind) {
    for col in 0..BOARD_WIDTH as i8 {
        board.set(row, col, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None), "cell ({}, {})", row, col);
            assert!(board.is_empty_at(row, col));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);

    // Outside cells are neither empty nor occupied.
    assert!(!board.is_empty_at(0, BOARD_WIDTH as i8));
    assert!(!board.is_occupied(0, BOARD_WIDTH as i8));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));
}

#[test]
fn test_board_set_out_of_bounds_is_ignored() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(!board.set(-1, 0, Some(PieceKind::I)));
    assert!(!board.set(0, 10, Some(PieceKind::I)));
    assert!(!board.set(20, 0, Some(PieceKind::I)));
    assert_eq!(board, before);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for col in 0..9 {
        board.set(19, col, Some(PieceKind::L));
    }
    assert!(!board.is_row_full(19));

    board.set(19, 9, Some(PieceKind::L));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(ROWS));
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut board = Board::new();
    for row in [3, 5, 7] {
        fill_row(&mut board, row, PieceKind::I);
    }
    // One marker cell per surviving row, column = original row.
    for row in [2i8, 4, 6, 8] {
        board.set(row, row, Some(PieceKind::T));
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[3, 5, 7]);

    // Each marker moved down by the number of cleared rows below it.
    assert_eq!(board.get(8, 8), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 6), Some(Some(PieceKind::T)));
    assert_eq!(board.get(6, 4), Some(Some(PieceKind::T)));
    assert_eq!(board.get(5, 2), Some(Some(PieceKind::T)));

    // Top three rows are empty.
    for row in 0..3 {
        assert!(board.row(row).unwrap().iter().all(|c| c.is_none()));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_clear_full_lines_counts() {
    let mut board = Board::new();
    fill_row(&mut board, 17, PieceKind::S);
    fill_row(&mut board, 18, PieceKind::S);
    fill_row(&mut board, 19, PieceKind::S);
    board.set(16, 0, Some(PieceKind::O));

    assert_eq!(board.clear_full_lines(), 3);
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::new();
    board.set(19, 0, Some(PieceKind::Z));
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_entire_board() {
    let mut board = Board::from_rows([[Some(PieceKind::J); COLS]; ROWS]);
    assert_eq!(board.clear_full_lines(), ROWS);
    assert_eq!(board, Board::new());
}

#[test]
fn test_from_rows_and_tag_grid() {
    let mut rows: [[Cell; COLS]; ROWS] = [[None; COLS]; ROWS];
    rows[19][0] = Some(PieceKind::I);
    rows[0][9] = Some(PieceKind::L);
    let board = Board::from_rows(rows);

    let mut grid = [[0u8; COLS]; ROWS];
    board.write_tag_grid(&mut grid);
    assert_eq!(grid[19][0], PieceKind::I.tag());
    assert_eq!(grid[0][9], PieceKind::L.tag());
    assert_eq!(grid.iter().flatten().filter(|&&t| t != 0).count(), 2);
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 12, PieceKind::Z);
    board.reset();
    assert_eq!(board, Board::new());
}
