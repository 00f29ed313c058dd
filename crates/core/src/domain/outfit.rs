use serde::{Deserialize, Serialize};

use crate::domain::item::WardrobeItem;

/// Sentinel for `days_since_worn` meaning the featured item was never worn.
pub const NEVER_WORN: i64 = -1;

/// A rediscovery suggestion. Ephemeral: built fresh per request and discarded
/// when the user dismisses it, logs a wear, or asks for another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub featured_item: WardrobeItem,
    pub complementary_items: Vec<WardrobeItem>,
    /// Calendar days since the featured item was last worn; `NEVER_WORN`
    /// (-1) when it has no wear history.
    pub days_since_worn: i64,
}
