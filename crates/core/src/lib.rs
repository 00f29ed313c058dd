pub mod config;
pub mod domain;
pub mod errors;
pub mod recency;
pub mod similarity;
pub mod suggestions;
pub mod weather;

pub use config::{
    AppConfig, ConfigError, InferenceConfig, LoadOptions, LogFormat, LoggingConfig,
    SuggestionConfig,
};
pub use domain::item::{Category, ItemId, WardrobeItem};
pub use domain::outfit::{OutfitSuggestion, NEVER_WORN};
pub use domain::weather::WeatherSnapshot;
pub use errors::{ApplicationError, DomainError};
pub use recency::{is_worn_today, items_worn_in_period, neglected_items};
pub use similarity::cosine_similarity;
pub use suggestions::{
    find_complementary, neglect_weight, pick_from_different_categories, select_featured_item,
    RediscoveryEngine,
};
pub use weather::{filter_for_weather, WeatherRules};
