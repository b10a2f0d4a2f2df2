//! Scoring module - line-clear points, level and gravity speed
//!
//! Classic rules: points depend only on how many rows went at once and the
//! level they went at. The speed tier is a one-way ratchet over
//! [`SPEED_TIERS`], so fall speed never decreases within a game.

use crate::types::{FRAMES_PER_SECOND, LINES_PER_LEVEL, SCORE_PER_LINES, SPEED_TIERS};

/// Points for clearing `cleared` rows at once at `level` (0-based)
///
/// Counts above four are scored as four.
pub fn line_clear_score(cleared: usize, level: u32) -> u32 {
    if cleared == 0 {
        return 0;
    }
    let base = SCORE_PER_LINES[cleared.clamp(1, SCORE_PER_LINES.len()) - 1];
    base.saturating_mul(level.saturating_add(1))
}

/// Level reached after `lines` total cleared rows
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Move the speed tier forward to the highest entry unlocked by `level`
///
/// Only entries after `current` are considered, so a jump across several
/// thresholds lands on the last one it passed and the tier never goes back.
pub fn advance_speed_tier(current: usize, level: u32) -> usize {
    let mut tier = current;
    for (i, &(threshold, _)) in SPEED_TIERS.iter().enumerate().skip(current + 1) {
        if level >= threshold {
            tier = i;
        }
    }
    tier
}

/// Frames per row for a tier (clamped to the last entry)
pub fn frames_per_row(tier: usize) -> u32 {
    SPEED_TIERS[tier.min(SPEED_TIERS.len() - 1)].1
}

/// Convert a frame count at 60 fps into milliseconds
pub fn frames_to_ms(frames: u32) -> u64 {
    frames as u64 * 1000 / FRAMES_PER_SECOND
}
