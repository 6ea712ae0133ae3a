//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and session state. It has no
//! dependencies on the terminal or any other I/O, so a whole game can be
//! driven headless from tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells, bounds checks and row clearing
//! - [`shape`]: Shape matrices, the seven-piece catalog and matrix rotation
//! - [`piece`]: The falling piece: collision, rotation with kicks, spawn, lock
//! - [`rng`]: Seeded uniform piece selection
//! - [`scoring`]: Line clear points, level curve and gravity speed
//! - [`keys`]: Edge-triggered key latches
//! - [`game`]: The [`GameController`] session state machine
//! - [`snapshot`]: Copyable view of the game for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Every spawn picks one of the seven kinds with equal odds
//! - **Simple rotation**: Matrix rotation with a four-step kick fallback (in place, left, right, up); O never rotates
//! - **Immediate lock**: A piece locks as soon as gravity cannot move it down
//! - **Scoring**: `100 * lines * (level + 1)` per clear, 1 per soft-drop step, 2 per hard-drop row
//! - **Levels**: One level per ten lines, gravity 50ms faster per level down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameController;
//! use blockfall_types::{GameAction, Lifecycle};
//!
//! let mut game = GameController::new(12345);
//! game.key_down(GameAction::Start);
//! assert_eq!(game.lifecycle(), Lifecycle::Playing);
//!
//! // Pressed keys fire on the next tick.
//! game.key_down(GameAction::HardDrop);
//! game.tick(16);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameController::frame`](game::GameController::frame) with a
//! monotonic timestamp, or [`GameController::tick`](game::GameController::tick)
//! with elapsed milliseconds, roughly every 16ms.

pub mod board;
pub mod game;
pub mod keys;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game::{GameController, LockEvent};
pub use keys::{InputState, KeyLatch};
pub use piece::{can_move, lock, rotate, spawn, spawn_kind, ActivePiece, KICK_OFFSETS};
pub use rng::SimpleRng;
pub use scoring::{calculate_drop_score, gravity_interval_ms, level_for_lines, line_clear_score};
pub use shape::{cell_color, rotate_matrix, tetromino, Shape, Tetromino, CATALOG};
pub use snapshot::GameSnapshot;
