use serde::Serialize;
use uuid::Uuid;

use crate::metrics::score::scaled_performance_score;
use crate::metrics::time_range::TimeRange;
use crate::models::recruiter::{ActivityCounts, Recruiter};

/// One recruiter's scaled counts and score for a range.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub recruiter_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub job_title: Option<String>,
    pub counts: ActivityCounts,
    pub score: u8,
}

/// Scores one recruiter for `range`. `rank` is left at 0 until the entry is placed.
///
/// `counts` are the rounded display counts; `score` comes from the unrounded
/// scaled points.
pub fn score_recruiter(recruiter: &Recruiter, range: TimeRange) -> LeaderboardEntry {
    let counts = recruiter.counts.scaled(range);
    LeaderboardEntry {
        rank: 0,
        recruiter_id: recruiter.id,
        name: recruiter.name.clone(),
        avatar: recruiter.avatar.clone(),
        job_title: recruiter.job_title.clone(),
        counts,
        score: scaled_performance_score(&recruiter.counts, range),
    }
}

/// Ranks recruiters by score, highest first.
///
/// The sort is stable, so recruiters with equal scores keep their input order.
/// `limit` truncates after ranking.
pub fn build_leaderboard(
    recruiters: &[Recruiter],
    range: TimeRange,
    limit: Option<usize>,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = recruiters
        .iter()
        .map(|r| score_recruiter(r, range))
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
    entries
}
