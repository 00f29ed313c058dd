//! Wear-recency classifiers. Pure over their explicit inputs; the reference
//! instant is always a parameter, never read from a clock here.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::domain::item::WardrobeItem;

/// True iff the item's most recent wear event falls on the same calendar day
/// as `now` (not a 24-hour rolling window).
pub fn is_worn_today(item: &WardrobeItem, now: DateTime<Utc>) -> bool {
    item.last_worn().is_some_and(|last| last.date_naive() == now.date_naive())
}

/// Items worn at least once within `[start, end]` inclusive, paired with
/// their wear count in that window, sorted descending by count.
pub fn items_worn_in_period(
    items: &[WardrobeItem],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<(WardrobeItem, usize)> {
    let mut counted: Vec<(WardrobeItem, usize)> = items
        .iter()
        .filter_map(|item| {
            let count =
                item.wear_history.iter().filter(|worn_at| **worn_at >= start && **worn_at <= end).count();
            (count > 0).then(|| (item.clone(), count))
        })
        .collect();

    counted.sort_by(|left, right| right.1.cmp(&left.1));
    counted
}

/// Items with no wear history, or whose most recent wear is strictly before
/// `now - threshold_days`. Sorted ascending by last-worn date; never-worn
/// items sort last.
pub fn neglected_items(
    items: &[WardrobeItem],
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Vec<WardrobeItem> {
    let cutoff = now - Duration::days(threshold_days);

    let mut neglected: Vec<WardrobeItem> = items
        .iter()
        .filter(|item| match item.last_worn() {
            None => true,
            Some(last) => last < cutoff,
        })
        .cloned()
        .collect();

    neglected.sort_by(|left, right| match (left.last_worn(), right.last_worn()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    neglected
}
