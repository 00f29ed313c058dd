//! Outfit rediscovery engine.
//!
//! Resurfaces neglected wardrobe items as outfit suggestions: a weighted
//! random featured item plus complementary items ranked by embedding
//! similarity (or wear count when embeddings are missing).

mod complementary;
mod engine;
mod featured;

pub use complementary::{find_complementary, pick_from_different_categories};
pub use engine::RediscoveryEngine;
pub use featured::{neglect_weight, select_featured_item};

/// Days without wear before an item counts as neglected.
pub const NEGLECT_THRESHOLD_DAYS: i64 = 60;

/// Fixed selection weight for never-worn items.
pub const NEVER_WORN_WEIGHT: f64 = 100.0;

/// Multiplier applied to `ln(days + 1)` when weighting worn items.
pub const WEIGHT_SCALE: f64 = 20.0;

/// Ceiling on any single item's selection weight; keeps extremely old items
/// from dominating the draw.
pub const MAX_WEIGHT: f64 = 100.0;

/// Complementary items requested per suggestion.
pub const DEFAULT_COMPLEMENTARY_COUNT: usize = 3;
