use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tops,
    Bottoms,
    Outerwear,
    Accessories,
    Shoes,
    Dresses,
    Bags,
    Jewelry,
}

impl Category {
    /// Categories considered complementary when assembling an outfit around
    /// an item of this category. Static configuration data.
    pub fn paired_categories(&self) -> &'static [Category] {
        match self {
            Category::Tops => {
                &[Category::Bottoms, Category::Shoes, Category::Outerwear, Category::Accessories]
            }
            Category::Bottoms => &[Category::Tops, Category::Shoes, Category::Outerwear],
            Category::Outerwear => &[Category::Tops, Category::Bottoms, Category::Shoes],
            Category::Dresses => &[
                Category::Shoes,
                Category::Outerwear,
                Category::Bags,
                Category::Jewelry,
                Category::Accessories,
            ],
            Category::Shoes => &[Category::Tops, Category::Bottoms],
            Category::Accessories => &[Category::Tops, Category::Dresses],
            Category::Bags => &[Category::Dresses, Category::Tops],
            Category::Jewelry => &[Category::Dresses, Category::Tops],
        }
    }

    /// Whether items of this category may anchor a rediscovery suggestion.
    pub fn is_featured_candidate(&self) -> bool {
        matches!(
            self,
            Category::Tops | Category::Bottoms | Category::Dresses | Category::Outerwear
        )
    }
}

/// A catalogued clothing item. Read-only from the suggestion engine's
/// perspective; `log_wear` is the write path and keeps the wear-count
/// invariant (`wear_count == initial_wear_count + wear_history.len()`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub dog_casual: bool,
    /// Wear-event timestamps in chronological order. Empty means never worn.
    #[serde(default)]
    pub wear_history: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub initial_wear_count: u32,
    #[serde(default)]
    pub wear_count: u32,
    /// Fixed-dimension image embedding from the inference service; absent
    /// until generated.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            category,
            sub_category: None,
            dog_casual: false,
            wear_history: Vec::new(),
            initial_wear_count: 0,
            wear_count: 0,
            embedding: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn last_worn(&self) -> Option<DateTime<Utc>> {
        self.wear_history.last().copied()
    }

    /// Calendar-day difference between `now` and the most recent wear event.
    /// `None` means never worn.
    pub fn days_since_worn(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_worn().map(|last| (now.date_naive() - last.date_naive()).num_days().max(0))
    }

    /// Records a wear event, keeping the history chronological and the wear
    /// count consistent with it.
    pub fn log_wear(&mut self, at: DateTime<Utc>) {
        let position = self.wear_history.partition_point(|entry| *entry <= at);
        self.wear_history.insert(position, at);
        self.wear_count = self.initial_wear_count + self.wear_history.len() as u32;
    }
}
