//! Scoring module - points, level curve and gravity speed
//!
//! - Line clears: `100 * lines * (level + 1)`, using the level before the clear.
//! - Level: `lines / 10 + 1`.
//! - Gravity: `max(100, 1000 - (level - 1) * 50)` milliseconds per row.
//! - Soft drop: 1 point per step; hard drop: 2 points per row descended.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_CLEAR_BASE,
    MIN_GRAVITY_MS, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at `level` (1-based).
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    LINE_CLEAR_BASE
        .saturating_mul(lines)
        .saturating_mul(level.saturating_add(1))
}

/// Level reached after `total_lines` cumulative cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(GRAVITY_STEP_MS);
    BASE_GRAVITY_MS.saturating_sub(speedup).max(MIN_GRAVITY_MS)
}

/// Drop points: soft drop per step, hard drop per row.
pub fn calculate_drop_score(rows: u32, hard_drop: bool) -> u32 {
    if hard_drop {
        rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
    } else {
        rows.saturating_mul(SOFT_DROP_POINTS)
    }
}
