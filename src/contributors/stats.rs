use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::contributors::ranking::MONTH_WINDOW_DAYS;
use crate::contributors::types::ContributorAggregate;
use crate::dates::window_cutoff;
use crate::payloads::UNKNOWN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommunityStats {
    pub contributors: usize,
    pub payloads: u32,
    pub countries: usize,
}

impl CommunityStats {
    pub fn from_contributors(contributors: &[ContributorAggregate]) -> Self {
        let countries: HashSet<&str> = contributors
            .iter()
            .map(|c| c.location.as_str())
            .filter(|location| !location.is_empty() && *location != UNKNOWN)
            .collect();

        CommunityStats {
            contributors: contributors.len(),
            payloads: contributors.iter().map(|c| c.payloads_contributed).sum(),
            countries: countries.len(),
        }
    }
}

/// Highlights shown in the achievement showcase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Achievements<'a> {
    pub top_researcher: Option<&'a ContributorAggregate>,
    pub most_active: Option<&'a ContributorAggregate>,
    pub rising_star: Option<&'a ContributorAggregate>,
}

/// Pick the showcase entries from an already ranked list.
///
/// The rising star is whoever joined most recently within the last month;
/// without one, the runner-up takes the slot.
pub fn achievements(ranked: &[ContributorAggregate], reference: NaiveDateTime) -> Achievements<'_> {
    let cutoff = window_cutoff(reference, MONTH_WINDOW_DAYS);
    let newest = ranked
        .iter()
        .filter_map(|c| c.join_date_parsed().map(|joined| (joined, c)))
        .filter(|(joined, _)| *joined >= cutoff)
        .max_by_key(|(joined, _)| *joined)
        .map(|(_, c)| c);

    Achievements {
        top_researcher: ranked.first(),
        most_active: ranked.first(),
        rising_star: newest.or_else(|| ranked.get(1)),
    }
}
