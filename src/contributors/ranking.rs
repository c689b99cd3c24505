use chrono::NaiveDateTime;

use crate::contributors::types::ContributorAggregate;
use crate::dates::window_cutoff;

/// Window used by the "this month" toggle.
pub const MONTH_WINDOW_DAYS: u32 = 30;

/// Sort by payload count, highest first. Ties keep their input order.
pub fn rank(mut aggregates: Vec<ContributorAggregate>) -> Vec<ContributorAggregate> {
    aggregates.sort_by(|a, b| b.payloads_contributed.cmp(&a.payloads_contributed));
    aggregates
}

/// Contributors active within the trailing `window_days` days of `reference`.
///
/// A contributor is kept when either its last contribution or its join date
/// falls on or after the cutoff day. Undated contributors are dropped.
pub fn filter_by_window(
    aggregates: &[ContributorAggregate],
    window_days: u32,
    reference: NaiveDateTime,
) -> Vec<ContributorAggregate> {
    let cutoff = window_cutoff(reference, window_days);
    aggregates
        .iter()
        .filter(|c| {
            let recent = |date: Option<chrono::NaiveDate>| date.map_or(false, |d| d >= cutoff);
            recent(c.last_contribution_date()) || recent(c.join_date_parsed())
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    AllTime,
    Window(u32),
}

impl Period {
    pub fn this_month() -> Self {
        Period::Window(MONTH_WINDOW_DAYS)
    }
}

/// What the leaderboard should show for a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardView {
    /// The catalog has no attributed payloads at all.
    NoContributors,
    /// Contributors exist, but none were active in the window.
    NoRecentActivity,
    Ranked(Vec<ContributorAggregate>),
}

impl LeaderboardView {
    pub fn contributors(&self) -> &[ContributorAggregate] {
        match self {
            LeaderboardView::Ranked(contributors) => contributors,
            _ => &[],
        }
    }
}

/// Filter and rank a copy of `aggregates` for display.
pub fn period_view(aggregates: &[ContributorAggregate], period: Period, reference: NaiveDateTime) -> LeaderboardView {
    if aggregates.is_empty() {
        return LeaderboardView::NoContributors;
    }

    let selected = match period {
        Period::AllTime => aggregates.to_vec(),
        Period::Window(days) => filter_by_window(aggregates, days, reference),
    };

    if selected.is_empty() {
        LeaderboardView::NoRecentActivity
    } else {
        LeaderboardView::Ranked(rank(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn contributor(name: &str, count: u32, last: &str, joined: &str) -> ContributorAggregate {
        ContributorAggregate {
            name: name.to_string(),
            username: name.to_lowercase(),
            payloads_contributed: count,
            last_contribution: last.to_string(),
            join_date: joined.to_string(),
            location: "Unknown".to_string(),
            specialties: Vec::new(),
        }
    }

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(18, 45, 0).unwrap()
    }

    fn names(list: &[ContributorAggregate]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let ranked = rank(vec![
            contributor("C", 1, "Unknown", "Unknown"),
            contributor("A", 5, "Unknown", "Unknown"),
            contributor("D", 1, "Unknown", "Unknown"),
            contributor("B", 5, "Unknown", "Unknown"),
        ]);
        assert_eq!(names(&ranked), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn window_boundary_is_inclusive_at_start_of_day() {
        let list = vec![
            contributor("edge", 1, "01-03-2024", "01-03-2024"),
            contributor("stale", 1, "29-02-2024", "29-02-2024"),
        ];
        let kept = filter_by_window(&list, 30, reference());
        assert_eq!(names(&kept), vec!["edge"]);
    }

    #[test]
    fn join_date_alone_qualifies() {
        let list = vec![contributor("new", 1, "garbage", "2024-03-20")];
        assert_eq!(filter_by_window(&list, 30, reference()).len(), 1);
    }

    #[test]
    fn huge_window_keeps_every_dated_contributor() {
        let list = vec![
            contributor("old", 1, "01-01-1970", "01-01-1970"),
            contributor("ghost", 1, "Unknown", "Unknown"),
        ];
        let kept = filter_by_window(&list, u32::MAX, reference());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "old");
    }

    #[test]
    fn undated_contributors_are_excluded() {
        let list = vec![contributor("ghost", 3, "Unknown", "Unknown")];
        assert!(filter_by_window(&list, 30, reference()).is_empty());
    }

    #[test]
    fn views_distinguish_empty_states() {
        assert_eq!(period_view(&[], Period::AllTime, reference()), LeaderboardView::NoContributors);

        let list = vec![contributor("old", 2, "01-01-2020", "01-01-2020")];
        assert_eq!(
            period_view(&list, Period::this_month(), reference()),
            LeaderboardView::NoRecentActivity
        );
        assert_eq!(period_view(&list, Period::AllTime, reference()).contributors().len(), 1);
    }

    #[test]
    fn window_view_leaves_base_list_untouched() {
        let list = vec![
            contributor("old", 9, "01-01-2020", "01-01-2020"),
            contributor("low", 1, "30-03-2024", "30-03-2024"),
            contributor("high", 4, "29-03-2024", "29-03-2024"),
        ];
        let view = period_view(&list, Period::this_month(), reference());
        assert_eq!(names(view.contributors()), vec!["high", "low"]);
        assert_eq!(names(&list), vec!["old", "low", "high"]);
    }
}
