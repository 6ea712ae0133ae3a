use crate::board::{COLS, ROWS};
use crate::piece::ActivePiece;
use crate::types::{Lifecycle, BASE_GRAVITY_MS};

/// Everything a renderer or stats display needs, by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Board as tags (0 = empty, 1..=7 = piece kind).
    pub board: [[u8; COLS]; ROWS],
    pub active: Option<ActivePiece>,
    pub lifecycle: Lifecycle,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub gravity_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; COLS]; ROWS];
        self.active = None;
        self.lifecycle = Lifecycle::Ready;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.gravity_ms = BASE_GRAVITY_MS;
    }

    pub fn playable(&self) -> bool {
        self.lifecycle == Lifecycle::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; COLS]; ROWS],
            active: None,
            lifecycle: Lifecycle::Ready,
            score: 0,
            lines: 0,
            level: 1,
            gravity_ms: BASE_GRAVITY_MS,
        };
        s.clear();
        s
    }
}
