mod types;
mod aggregator;
mod ranking;
mod leaderboard;
mod stats;
mod display;

pub use aggregator::aggregate;
pub use display::{display_leaderboard, display_top_contributors};
pub use leaderboard::{score, top_contributors, Leaderboard, LeaderboardScope, LEADERBOARD_SIZE};
pub use ranking::{filter_by_window, period_view, rank, LeaderboardView, Period, MONTH_WINDOW_DAYS};
pub use stats::{achievements, Achievements, CommunityStats};
pub use types::{badges_for, country_flag, ContributorAggregate};
