//! Edge-triggered key latches
//!
//! Key events arrive level-triggered (a key is either down or up, and
//! terminals may re-send "down" while it is held). The controller needs one
//! action per physical press, so each key carries two flags:
//!
//! | held | consumed | meaning |
//! |------|----------|---------|
//! | false | false | idle |
//! | true | false | pressed, action pending |
//! | true | true | pressed, action already fired |
//!
//! Releasing the key clears both flags and re-arms the latch.

use crate::types::GameAction;

/// Two-flag latch for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLatch {
    held: bool,
    consumed: bool,
}

impl KeyLatch {
    /// Key went down. Repeated presses while held do not re-arm.
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Key went up.
    pub fn release(&mut self) {
        self.held = false;
        self.consumed = false;
    }

    /// Fire at most once per press.
    pub fn take(&mut self) -> bool {
        if self.held && !self.consumed {
            self.consumed = true;
            true
        } else {
            false
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Latches for every edge-triggered action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    latches: [KeyLatch; GameAction::EDGE_TRIGGERED.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(action: GameAction) -> Option<usize> {
        GameAction::EDGE_TRIGGERED
            .iter()
            .position(|&a| a == action)
    }

    /// Record a key-down. Returns false for actions without a latch.
    pub fn press(&mut self, action: GameAction) -> bool {
        match Self::slot(action) {
            Some(i) => {
                self.latches[i].press();
                true
            }
            None => false,
        }
    }

    /// Record a key-up.
    pub fn release(&mut self, action: GameAction) {
        if let Some(i) = Self::slot(action) {
            self.latches[i].release();
        }
    }

    /// Consume a pending press for `action`.
    pub fn take(&mut self, action: GameAction) -> bool {
        Self::slot(action).is_some_and(|i| self.latches[i].take())
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        Self::slot(action).is_some_and(|i| self.latches[i].is_held())
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.latches = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_per_press() {
        let mut latch = KeyLatch::default();
        assert!(!latch.take());

        latch.press();
        assert!(latch.take());
        assert!(!latch.take());

        // Auto-repeat while held does not re-arm.
        latch.press();
        assert!(!latch.take());

        latch.release();
        assert!(!latch.take());
        latch.press();
        assert!(latch.take());
    }

    #[test]
    fn release_resets_both_flags() {
        let mut latch = KeyLatch::default();
        latch.press();
        latch.take();
        assert!(latch.is_held());
        assert!(latch.is_consumed());

        latch.release();
        assert_eq!(latch, KeyLatch::default());
    }

    #[test]
    fn input_state_tracks_actions_independently() {
        let mut input = InputState::new();
        assert!(input.press(GameAction::MoveLeft));
        assert!(input.press(GameAction::HardDrop));

        assert!(input.take(GameAction::MoveLeft));
        assert!(!input.take(GameAction::MoveRight));
        assert!(input.is_held(GameAction::HardDrop));
        assert!(input.take(GameAction::HardDrop));
        assert!(!input.take(GameAction::HardDrop));
    }

    #[test]
    fn raw_actions_have_no_latch() {
        let mut input = InputState::new();
        assert!(!input.press(GameAction::Pause));
        assert!(!input.take(GameAction::Pause));
        assert!(!input.is_held(GameAction::Restart));
    }

    #[test]
    fn clear_releases_everything() {
        let mut input = InputState::new();
        input.press(GameAction::RotateCw);
        input.clear();
        assert!(!input.is_held(GameAction::RotateCw));
        assert!(!input.take(GameAction::RotateCw));
    }
}
