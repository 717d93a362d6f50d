use crate::metrics::time_range::TimeRange;
use crate::models::recruiter::ActivityCounts;

/// Points per confirmed hire.
pub const PLACEMENT_POINTS: u64 = 50;
/// Points per pipeline stage move.
pub const STAGE_PROGRESSION_POINTS: u64 = 10;
/// Points per submitted application.
pub const APPLICATION_POINTS: u64 = 2;
/// Raw points a top performer is expected to reach over the one-month baseline.
pub const BASELINE_TARGET: f64 = 1500.0;

pub const MAX_SCORE: u8 = 100;

/// Weighted point sum: 50 per placement, 10 per stage progression, 2 per application.
pub fn raw_points(counts: &ActivityCounts) -> u64 {
    u64::from(counts.placements) * PLACEMENT_POINTS
        + u64::from(counts.stage_progressions) * STAGE_PROGRESSION_POINTS
        + u64::from(counts.applications) * APPLICATION_POINTS
}

/// Par score for the window: the baseline target scaled by the range multiplier.
pub fn target_points(range: TimeRange) -> f64 {
    BASELINE_TARGET * range.multiplier()
}

/// Normalized 0–100 performance score of `counts` against the target for `range`.
///
/// `counts` are expected to already be scaled to `range` (see
/// [`ActivityCounts::scaled`]). Scores above target clip at 100. A
/// non-positive target yields 0.
#[allow(dead_code)]
pub fn performance_score(counts: &ActivityCounts, range: TimeRange) -> u8 {
    score_points(raw_points(counts) as f64, range)
}

/// Scores one-month baseline `counts` for `range` without rounding the
/// scaled counts first.
///
/// Equal to `raw × m / (1500 × m)`, so a recruiter with a steady rate gets the
/// same score in every window, including the fractional 1D and 7D ones. Display
/// counts are still rounded separately by [`ActivityCounts::scaled`].
pub fn scaled_performance_score(counts: &ActivityCounts, range: TimeRange) -> u8 {
    score_points(raw_points(counts) as f64 * range.multiplier(), range)
}

/// Scores a point total already expressed in `range` units.
pub fn score_points(points: f64, range: TimeRange) -> u8 {
    let target = target_points(range);
    if !target.is_finite() || target <= 0.0 {
        return 0;
    }
    let pct = (points / target * 100.0).round();
    pct.clamp(0.0, f64::from(MAX_SCORE)) as u8
}
