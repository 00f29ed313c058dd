//! Featured-item selection: weighted random choice of one neglected item.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::item::{ItemId, WardrobeItem};

use super::{MAX_WEIGHT, NEVER_WORN_WEIGHT, WEIGHT_SCALE};

/// Selection weight as a saturating function of neglect duration. Never-worn
/// items get the fixed top weight; worn items grow logarithmically and cap
/// at the same ceiling.
pub fn neglect_weight(days_since_worn: Option<i64>) -> f64 {
    match days_since_worn {
        None => NEVER_WORN_WEIGHT,
        Some(days) => (((days.max(0) as f64) + 1.0).ln() * WEIGHT_SCALE).min(MAX_WEIGHT),
    }
}

/// Picks one item to resurface, favoring those unworn the longest.
///
/// The pool is restricted to featured-candidate categories, excluding
/// dog-casual items and dismissed ids. Within it, items past the neglect
/// threshold are preferred; if none qualify the full pool is used, so a
/// non-empty pool always yields a result. `None` means no suggestion is
/// possible and is a normal outcome, not an error.
pub fn select_featured_item<'a, R: Rng>(
    items: &'a [WardrobeItem],
    dismissed: &HashSet<ItemId>,
    neglect_threshold_days: i64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<&'a WardrobeItem> {
    let candidates: Vec<&WardrobeItem> = items
        .iter()
        .filter(|item| item.category.is_featured_candidate())
        .filter(|item| !item.dog_casual)
        .filter(|item| !dismissed.contains(&item.id))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let neglected: Vec<&WardrobeItem> = candidates
        .iter()
        .copied()
        .filter(|item| match item.days_since_worn(now) {
            None => true,
            Some(days) => days >= neglect_threshold_days,
        })
        .collect();
    let pool = if neglected.is_empty() { &candidates } else { &neglected };

    let weights: Vec<f64> = pool.iter().map(|item| neglect_weight(item.days_since_worn(now))).collect();
    let total: f64 = weights.iter().sum();
    let mut remaining = if total > 0.0 { rng.gen_range(0.0..total) } else { 0.0 };

    for (item, weight) in pool.iter().copied().zip(&weights) {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(item);
        }
    }

    // Floating-point rounding can exhaust the walk; never return None here.
    pool.last().copied()
}
