//! Cumulative "load more" pages and the fixed leaderboard tiers.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Ranks shown on the podium.
pub const ELITE_TIER: Range<usize> = 0..3;
/// Ranks shown in the "rising stars" list.
pub const RISING_STARS: Range<usize> = 3..10;

/// The first `page_size * page_number` items of a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total: usize,
    pub has_more: bool,
}

impl<'a, T> Page<'a, T> {
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// True when the underlying list itself is empty.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Reveal the first `page_size * page_number` items.
///
/// Always slices from the start: page 2 contains page 1.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let end = page_size.saturating_mul(page_number);
    Page {
        items: &items[..end.min(items.len())],
        total: items.len(),
        has_more: end < items.len(),
    }
}

/// Slice `range` out of `items`, clamped to its length.
pub fn tier<T>(items: &[T], range: Range<usize>) -> &[T] {
    let start = range.start.min(items.len());
    let end = range.end.min(items.len());
    &items[start..end]
}

/// Ranked entries of a tier paired with their 1-based position.
pub fn ranked_tier<'a, T>(items: &'a [T], range: Range<usize>) -> impl Iterator<Item = (usize, &'a T)> + 'a {
    let offset = range.start;
    tier(items, range)
        .iter()
        .enumerate()
        .map(move |(i, item)| (offset + i + 1, item))
}
