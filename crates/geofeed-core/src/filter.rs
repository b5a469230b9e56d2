//! Filter engine: maps `(items, criteria, now)` to the visible subset.
//!
//! Pure and deterministic: the wall clock is passed in as `now_ms`, never read
//! here. Output keeps the input order.
//!
//! Two evaluation paths produce identical results:
//!
//! - **fast path**: criteria at their defaults (12 h, no keyword, no
//!   category, no types). Only the time window is checked.
//! - **general path**: time window, keyword in post body, category substring
//!   and type intersection, all ANDed.

use crate::types::{FeedItem, FilterCriteria};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Items newer than `now_ms - criteria.time_range_hours` that match every
/// active facet.
pub fn filter<'a>(items: &'a [FeedItem], criteria: &FilterCriteria, now_ms: i64) -> Vec<&'a FeedItem> {
    if criteria.is_default() {
        let begin = begin_time(criteria.time_range_hours, now_ms);
        tracing::trace!(items = items.len(), "filter: fast path");
        return items.iter().filter(|item| item.timestamp > begin).collect();
    }
    filter_general(items, criteria, now_ms)
}

/// The general path on its own, regardless of whether the criteria are at
/// their defaults.
pub fn filter_general<'a>(
    items: &'a [FeedItem],
    criteria: &FilterCriteria,
    now_ms: i64,
) -> Vec<&'a FeedItem> {
    let begin = begin_time(criteria.time_range_hours, now_ms);
    tracing::trace!(items = items.len(), criteria = ?criteria, "filter: general path");
    items
        .iter()
        .filter(|item| {
            item.timestamp > begin
                && item.post_text.contains(criteria.keyword.as_str())
                && item.category.contains(criteria.category.as_str())
                && (criteria.types.is_empty()
                    || item.types.iter().any(|t| criteria.types.contains(t)))
        })
        .collect()
}

fn begin_time(hours: u32, now_ms: i64) -> i64 {
    now_ms.saturating_sub(i64::from(hours) * MS_PER_HOUR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
