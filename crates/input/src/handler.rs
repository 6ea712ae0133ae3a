//! Release tracking for terminals without key-up events.
//!
//! Plain terminals only report presses, plus auto-repeat presses while a key
//! is held. Each press refreshes a per-action timestamp; an action not seen
//! for longer than the timeout is treated as released.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Slightly longer than typical terminal auto-repeat intervals, short enough
/// that a single tap does not linger as held.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

const SLOTS: usize = GameAction::EDGE_TRIGGERED.len();

/// Synthesizes key-up events from press timestamps.
#[derive(Debug, Clone)]
pub struct ReleaseTracker {
    last_seen_ms: [Option<u64>; SLOTS],
    timeout_ms: u32,
}

impl ReleaseTracker {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            last_seen_ms: [None; SLOTS],
            timeout_ms,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    fn slot(action: GameAction) -> Option<usize> {
        GameAction::EDGE_TRIGGERED
            .iter()
            .position(|&a| a == action)
    }

    /// Record a press (or auto-repeat) at `now_ms`.
    ///
    /// Returns true for a fresh press. Actions without a latch are not tracked.
    pub fn press(&mut self, action: GameAction, now_ms: u64) -> bool {
        let Some(i) = Self::slot(action) else {
            return false;
        };
        self.last_seen_ms[i].replace(now_ms).is_none()
    }

    /// Forget an action. Returns whether it was being tracked.
    pub fn release(&mut self, action: GameAction) -> bool {
        Self::slot(action)
            .and_then(|i| self.last_seen_ms[i].take())
            .is_some()
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        Self::slot(action).is_some_and(|i| self.last_seen_ms[i].is_some())
    }

    /// Release every action unseen for longer than the timeout.
    pub fn expired(&mut self, now_ms: u64) -> ArrayVec<GameAction, SLOTS> {
        let mut released = ArrayVec::new();
        for (i, seen) in self.last_seen_ms.iter_mut().enumerate() {
            let stale = matches!(*seen, Some(t) if now_ms.saturating_sub(t) > self.timeout_ms as u64);
            if stale {
                *seen = None;
                released.push(GameAction::EDGE_TRIGGERED[i]);
            }
        }
        released
    }

    pub fn reset(&mut self) {
        self.last_seen_ms = [None; SLOTS];
    }
}

impl Default for ReleaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
