//! Domain-specific assertion helpers for geofeed harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! invariant of the pipeline was violated.

use geofeed::{FeedItem, HighlightController};

/// Ids of a result set, in order.
pub fn ids<'a>(items: impl IntoIterator<Item = &'a FeedItem>) -> Vec<String> {
    items.into_iter().map(|i| i.id.clone()).collect()
}

/// Assert that `narrow` is a subset of `wide` (by id).
pub fn assert_subset(narrow: &[&FeedItem], wide: &[&FeedItem]) {
    let wide_ids = ids(wide.iter().copied());
    let missing: Vec<_> = narrow
        .iter()
        .filter(|i| !wide_ids.contains(&i.id))
        .map(|i| i.id.clone())
        .collect();
    assert!(
        missing.is_empty(),
        "widening a criterion dropped items: {missing:?}\n  narrow: {:?}\n  wide:   {:?}",
        ids(narrow.iter().copied()),
        wide_ids
    );
}

/// Assert that at most one override carries the highlighted icon.
pub fn assert_single_highlight(h: &HighlightController) {
    let highlighted: Vec<_> = h
        .overrides()
        .iter()
        .filter(|(_, icon)| icon.as_str() == h.highlighted_icon())
        .map(|(id, _)| id.clone())
        .collect();
    assert!(
        highlighted.len() <= 1,
        "more than one highlighted id: {highlighted:?}\n  overrides: {:?}",
        h.overrides()
    );
}
