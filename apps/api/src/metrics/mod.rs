// Recruiter performance metrics: scoring, time-range scaling, dashboard
// aggregation and the leaderboard. Everything here is pure and synchronous.

pub mod aggregate;
pub mod handlers;
pub mod leaderboard;
pub mod score;
pub mod time_range;
