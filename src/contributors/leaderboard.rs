use chrono::NaiveDateTime;
use log::info;

use crate::contributors::aggregator::aggregate;
use crate::contributors::ranking::{rank, MONTH_WINDOW_DAYS};
use crate::contributors::types::ContributorAggregate;
use crate::dates::{self, window_cutoff};
use crate::payloads::PayloadRecord;

pub const LEADERBOARD_SIZE: usize = 5;
const POINTS_PER_PAYLOAD: u32 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardScope {
    Recent,
    AllTime,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub scope: LeaderboardScope,
    pub entries: Vec<ContributorAggregate>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn score(contributor: &ContributorAggregate) -> u32 {
    contributor.payloads_contributed.saturating_mul(POINTS_PER_PAYLOAD)
}

/// Top contributors of the last month, or of all time when the month is quiet.
///
/// Unlike the period filter, the recent board counts only the payloads added
/// inside the window.
pub fn top_contributors(records: &[PayloadRecord], reference: NaiveDateTime) -> Leaderboard {
    let cutoff = window_cutoff(reference, MONTH_WINDOW_DAYS);
    let recent: Vec<PayloadRecord> = records
        .iter()
        .filter(|r| dates::parse_opt(r.date_added()).map_or(false, |d| d >= cutoff))
        .cloned()
        .collect();

    let mut entries = rank(aggregate(&recent));
    let mut scope = LeaderboardScope::Recent;
    if entries.is_empty() {
        info!("no payloads since {cutoff}; showing all-time leaderboard");
        entries = rank(aggregate(records));
        scope = LeaderboardScope::AllTime;
    }

    entries.truncate(LEADERBOARD_SIZE);
    Leaderboard { scope, entries }
}
