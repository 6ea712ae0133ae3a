//! Terminal input
//!
//! This crate is independent of the game rules. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides a release tracker
//! for terminals that never report key-up events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{ReleaseTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, is_release, should_quit};
