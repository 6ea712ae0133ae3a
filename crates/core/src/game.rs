//! Game controller - owns one play session
//!
//! This module ties together all core components: board, pieces, RNG, scoring
//! and key latches. It drives the per-tick update (input resolution, gravity,
//! locking, line clears, level curve) and the session lifecycle.
//!
//! Key events only flip latches; the single place input changes game state is
//! [`GameController::tick`]. Pause, restart and start are the exception: they
//! are dispatched straight from the key event.

use crate::board::{Board, ClearedRows};
use crate::keys::InputState;
use crate::piece::{self, can_move, ActivePiece};
use crate::rng::SimpleRng;
use crate::scoring::{calculate_drop_score, gravity_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Outcome of one lock sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked.
    pub kind: PieceKind,
    /// Rows removed by the lock, top to bottom.
    pub cleared_rows: ClearedRows,
    /// Points awarded for the cleared rows (excludes drop points).
    pub line_clear_score: u32,
    pub level_up: bool,
    /// The next piece could not spawn.
    pub topped_out: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    input: InputState,
    lifecycle: Lifecycle,
    score: u32,
    lines: u32,
    level: u32,
    gravity_ms: u32,
    gravity_timer_ms: u32,
    /// Timestamp of the previous [`GameController::frame`] call.
    last_frame_ms: Option<u64>,
    last_event: Option<LockEvent>,
}

impl GameController {
    /// Create a game in the ready state with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a ready game on top of an existing board.
    ///
    /// [`GameController::reset`] (and therefore restart) empties it again.
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            input: InputState::new(),
            lifecycle: Lifecycle::Ready,
            score: 0,
            lines: 0,
            level: 1,
            gravity_ms: BASE_GRAVITY_MS,
            gravity_timer_ms: 0,
            last_frame_ms: None,
            last_event: None,
        }
    }

    /// Clear the board and stats and go back to ready.
    ///
    /// Held keys are kept: they mirror the physical keyboard.
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.gravity_ms = BASE_GRAVITY_MS;
        self.gravity_timer_ms = 0;
        self.last_event = None;
        self.lifecycle = Lifecycle::Ready;
        log::info!("game reset");
    }

    /// Spawn the first piece. Only valid from ready.
    ///
    /// Returns true if the game is now playing; a blocked spawn ends the
    /// game immediately.
    pub fn start(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Ready {
            return false;
        }
        let started = self.spawn_active();
        if started {
            log::info!("game started (seed state {})", self.rng.state());
        }
        started
    }

    /// Reset followed by start.
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    /// Playing ⇄ paused. Returns false in any other state.
    pub fn toggle_pause(&mut self) -> bool {
        self.lifecycle = match self.lifecycle {
            Lifecycle::Playing => Lifecycle::Paused,
            Lifecycle::Paused => Lifecycle::Playing,
            Lifecycle::Ready | Lifecycle::GameOver => return false,
        };
        log::info!("lifecycle -> {}", self.lifecycle.as_str());
        true
    }

    /// Key-down from the input source.
    pub fn key_down(&mut self, action: GameAction) {
        if action.is_edge_triggered() {
            self.input.press(action);
        } else {
            self.apply_action(action);
        }
    }

    /// Key-up from the input source.
    pub fn key_up(&mut self, action: GameAction) {
        self.input.release(action);
    }

    /// Apply an action right away, bypassing the key latches.
    ///
    /// Piece actions are ignored unless playing. Returns whether the action
    /// had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
            GameAction::Start => {
                if self.lifecycle == Lifecycle::GameOver {
                    self.restart()
                } else {
                    self.start()
                }
            }
            _ if self.lifecycle != Lifecycle::Playing => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::HardDrop => self.hard_drop().is_some(),
        }
    }

    /// Scheduler entry point: `now_ms` is a monotonic timestamp.
    ///
    /// The first call only records the timestamp.
    pub fn frame(&mut self, now_ms: u64) {
        let elapsed = match self.last_frame_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);
        self.tick(u32::try_from(elapsed).unwrap_or(u32::MAX));
    }

    /// Main game tick - resolve input, then apply gravity.
    ///
    /// No-op unless playing.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.lifecycle != Lifecycle::Playing {
            return;
        }

        self.resolve_input();
        if self.lifecycle != Lifecycle::Playing {
            return;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms >= self.gravity_ms {
            self.gravity_timer_ms = 0;
            if !self.try_move(0, 1) {
                self.lock_active();
            }
        }
    }

    /// Fire each pending key press once, in a fixed order.
    fn resolve_input(&mut self) {
        for action in GameAction::EDGE_TRIGGERED {
            if self.lifecycle != Lifecycle::Playing {
                break;
            }
            if self.input.take(action) {
                self.apply_action(action);
            }
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !can_move(active, &self.board, dx, dy, None) {
            return false;
        }
        active.x += dx;
        active.y += dy;
        true
    }

    fn soft_drop(&mut self) -> bool {
        if !self.try_move(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(calculate_drop_score(1, false));
        true
    }

    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        piece::rotate(active, &self.board, clockwise)
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows descended, or `None` without an active piece.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.lifecycle != Lifecycle::Playing {
            return None;
        }
        let active = self.active.as_mut()?;

        let mut rows: u32 = 0;
        while can_move(active, &self.board, 0, 1, None) {
            active.y += 1;
            rows += 1;
        }

        self.score = self.score.saturating_add(calculate_drop_score(rows, true));
        log::debug!("hard drop: {} rows", rows);
        self.lock_active();
        Some(rows)
    }

    /// Merge the active piece, clear lines, score, and spawn the next piece.
    pub(crate) fn lock_active(&mut self) {
        let Some(locked) = self.active.take() else {
            return;
        };

        piece::lock(&locked, &mut self.board);
        let cleared_rows = self.board.clear_full_rows();
        let cleared = cleared_rows.len() as u32;

        let mut points = 0;
        let mut level_up = false;
        if cleared > 0 {
            points = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared;

            let level = level_for_lines(self.lines);
            if level > self.level {
                self.level = level;
                self.gravity_ms = gravity_interval_ms(level);
                level_up = true;
                log::info!("level {} reached, gravity {}ms", level, self.gravity_ms);
            }
            log::debug!("cleared {} lines for {} points", cleared, points);
        }

        let spawned = self.spawn_active();
        self.last_event = Some(LockEvent {
            kind: locked.kind,
            cleared_rows,
            line_clear_score: points,
            level_up,
            topped_out: !spawned,
        });
    }

    /// Spawn a new active piece, or end the game if its spawn cell is taken.
    fn spawn_active(&mut self) -> bool {
        let next = piece::spawn(&mut self.rng);
        if !can_move(&next, &self.board, 0, 0, None) {
            self.active = None;
            self.lifecycle = Lifecycle::GameOver;
            log::info!(
                "game over: {} blocked at spawn (score {}, lines {}, level {})",
                next.kind.as_str(),
                self.score,
                self.lines,
                self.level
            );
            return false;
        }

        log::debug!("spawned {} at ({}, {})", next.kind.as_str(), next.x, next.y);
        self.active = Some(next);
        self.lifecycle = Lifecycle::Playing;
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gravity_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_tag_grid(&mut out.board);
        out.active = self.active;
        out.lifecycle = self.lifecycle;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.gravity_ms = self.gravity_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(1)
    }
}
