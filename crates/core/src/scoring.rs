//! Scoring module - sweep scoring, level progression, gravity speed
//!
//! Each swept row is worth double the previous one within a single sweep,
//! starting at 10 points: 10, 30, 70, 150 for 1-4 rows. The level is derived
//! from the running score, and gravity speeds up 30ms per level down to a
//! 100ms floor.

use brickdrop_types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, SWEEP_BASE_SCORE,
};

/// Points awarded for clearing `rows` rows in one sweep.
///
/// Row values double within a sweep: 10 + 20 + 40 + 80 for four rows.
/// Zero rows award zero points.
pub fn sweep_score(rows: u32) -> u32 {
    let mut total = 0u32;
    let mut row_value = SWEEP_BASE_SCORE;
    for _ in 0..rows {
        total = total.saturating_add(row_value);
        row_value = row_value.saturating_mul(2);
    }
    total
}

/// Level for a running score. Levels are 1-based and step every
/// [`LEVEL_SCORE_STEP`] points.
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// Gravity interval for a level (in milliseconds).
///
/// Starts at [`BASE_DROP_MS`] and shrinks [`DROP_STEP_MS`] per level gained,
/// clamped at [`DROP_FLOOR_MS`].
pub fn drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(reduction).max(DROP_FLOOR_MS)
}
