//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates are `(row, col)`: row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right).

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of rows on the board
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns on the board
pub const COLS: usize = BOARD_WIDTH as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = ROWS * COLS;

/// Row indices removed by a single clear, top to bottom.
pub type ClearedRows = ArrayVec<u8, ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from a full grid of rows (fixtures, replays).
    pub fn from_rows(rows: [[Cell; COLS]; ROWS]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            board.cells[row * COLS..(row + 1) * COLS].copy_from_slice(cells);
        }
        board
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * COLS + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get cell at `(row, col)`.
    ///
    /// Returns `None` if out of bounds. Collision logic treats that as blocked.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`.
    ///
    /// Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Borrow one row of cells.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= ROWS {
            return None;
        }
        Some(&self.cells[row * COLS..(row + 1) * COLS])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(COLS)
    }

    /// Remove every full row in one pass and return their indices (top to bottom).
    ///
    /// Remaining rows keep their relative order and sink by the number of
    /// removed rows below them; the freed rows at the top are emptied.
    /// Uses a two-pointer sweep from the bottom, so non-contiguous full rows
    /// are handled without re-scanning.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row as u8);
                continue;
            }

            write_row -= 1;
            if write_row != read_row {
                let src = read_row * COLS;
                self.cells.copy_within(src..src + COLS, write_row * COLS);
            }
        }

        self.cells[..write_row * COLS].fill(None);

        cleared.reverse();
        cleared
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a tag grid (0 = empty, 1..=7 = piece kind).
    pub fn write_tag_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, |kind| kind.tag());
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(10, 5, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_reset_empties_every_cell() {
        let mut board = Board::new();
        for col in 0..10 {
            board.set(19, col, Some(PieceKind::Z));
        }
        board.reset();
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_bottom_row_shifts_content_down() {
        let mut board = Board::new();
        for col in 0..10 {
            board.set(19, col, Some(PieceKind::I));
        }
        board.set(18, 4, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(19, 4), Some(Some(PieceKind::T)));
        assert_eq!(board.get(18, 4), Some(None));
    }

    #[test]
    fn test_write_tag_grid() {
        let mut board = Board::new();
        board.set(5, 3, Some(PieceKind::O));
        board.set(19, 9, Some(PieceKind::L));

        let mut grid = [[0u8; COLS]; ROWS];
        board.write_tag_grid(&mut grid);

        assert_eq!(grid[5][3], PieceKind::O.tag());
        assert_eq!(grid[19][9], PieceKind::L.tag());
        assert_eq!(grid.iter().flatten().filter(|&&t| t != 0).count(), 2);
    }

    #[test]
    fn test_from_rows_round_trip() {
        let mut rows = [[None; COLS]; ROWS];
        rows[2][7] = Some(PieceKind::S);
        let board = Board::from_rows(rows);

        for (row, expected) in board.rows().zip(rows.iter()) {
            assert_eq!(row, expected);
        }
    }
}
