//! Suggestion orchestrator: weather filter -> featured selection ->
//! complementary selection -> assembled suggestion.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::SuggestionConfig;
use crate::domain::item::{ItemId, WardrobeItem};
use crate::domain::outfit::{OutfitSuggestion, NEVER_WORN};
use crate::domain::weather::WeatherSnapshot;
use crate::errors::DomainError;
use crate::weather::{filter_for_weather, WeatherRules};

use super::{find_complementary, select_featured_item};

/// Stateless rediscovery engine. Each call is a one-shot pure function of
/// its inputs; the dismissal set is caller-owned and only read here. "Try
/// another" is the caller adding the previous featured id to the set and
/// invoking again.
#[derive(Clone, Debug, Default)]
pub struct RediscoveryEngine {
    config: SuggestionConfig,
    weather_rules: WeatherRules,
}

impl RediscoveryEngine {
    pub fn new(config: SuggestionConfig, weather_rules: WeatherRules) -> Self {
        Self { config, weather_rules }
    }

    /// Builds one outfit suggestion, or `Ok(None)` when nothing is eligible
    /// (empty wardrobe, everything weather-filtered, or everything
    /// dismissed). Callers present `None` as a neutral "nothing to suggest"
    /// state, never as an error.
    pub fn suggest<R: Rng>(
        &self,
        items: &[WardrobeItem],
        weather: Option<&WeatherSnapshot>,
        dismissed: &HashSet<ItemId>,
        rng: &mut R,
    ) -> Result<Option<OutfitSuggestion>, DomainError> {
        self.suggest_at(Utc::now(), items, weather, dismissed, rng)
    }

    /// Inner form with an explicit reference instant, for reproducible tests.
    pub fn suggest_at<R: Rng>(
        &self,
        now: DateTime<Utc>,
        items: &[WardrobeItem],
        weather: Option<&WeatherSnapshot>,
        dismissed: &HashSet<ItemId>,
        rng: &mut R,
    ) -> Result<Option<OutfitSuggestion>, DomainError> {
        if items.is_empty() {
            return Ok(None);
        }

        let wearable = filter_for_weather(items.to_vec(), weather, &self.weather_rules);
        if wearable.is_empty() {
            return Ok(None);
        }

        let Some(featured) = select_featured_item(
            &wearable,
            dismissed,
            self.config.neglect_threshold_days,
            now,
            rng,
        ) else {
            return Ok(None);
        };
        let featured = featured.clone();

        let complementary_items =
            find_complementary(&featured, &wearable, self.config.complementary_count, now)?;
        let days_since_worn = featured.days_since_worn(now).unwrap_or(NEVER_WORN);

        Ok(Some(OutfitSuggestion { featured_item: featured, complementary_items, days_since_worn }))
    }
}
