//! Weather-appropriateness filtering.
//!
//! Three independent exclusion rules, each gated by its own threshold. The
//! rules are cumulative: failing any one excludes the item. Missing or
//! unparseable weather data fails open and returns the wardrobe unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::item::{Category, WardrobeItem};
use crate::domain::weather::WeatherSnapshot;

/// Subcategories excluded below the cold threshold.
pub const COLD_EXCLUDED_SUBCATEGORIES: &[&str] = &["shorts", "sandals", "tank top"];

/// Subcategories additionally excluded above the hot threshold.
pub const HOT_EXCLUDED_SUBCATEGORIES: &[&str] = &["sweater", "boots", "hoodie", "sweatshirt"];

/// Temperature thresholds (degrees Celsius) gating the exclusion rules.
/// Configuration data; strict inequalities apply at the boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRules {
    /// Below this, cold-inappropriate subcategories are excluded.
    pub cold_below: f64,
    /// Above this, the outerwear category is excluded.
    pub warm_above: f64,
    /// Above this, heat-inappropriate subcategories are also excluded.
    pub hot_above: f64,
}

impl Default for WeatherRules {
    fn default() -> Self {
        Self { cold_below: 10.0, warm_above: 20.0, hot_above: 25.0 }
    }
}

/// Narrows a wardrobe to weather-appropriate items. Total over all inputs:
/// absent weather or an unparseable temperature returns the input unchanged,
/// and the result may be empty.
pub fn filter_for_weather(
    items: Vec<WardrobeItem>,
    weather: Option<&WeatherSnapshot>,
    rules: &WeatherRules,
) -> Vec<WardrobeItem> {
    let Some(weather) = weather else {
        return items;
    };
    let Some(temperature) = weather.temperature_degrees() else {
        return items;
    };

    items
        .into_iter()
        .filter(|item| is_weather_appropriate(item, temperature, rules))
        .collect()
}

fn is_weather_appropriate(item: &WardrobeItem, temperature: f64, rules: &WeatherRules) -> bool {
    let sub_category = item.sub_category.as_deref().map(str::to_lowercase);
    let sub_category = sub_category.as_deref();

    if temperature < rules.cold_below
        && sub_category.is_some_and(|sub| COLD_EXCLUDED_SUBCATEGORIES.contains(&sub))
    {
        return false;
    }

    if temperature > rules.warm_above && item.category == Category::Outerwear {
        return false;
    }

    if temperature > rules.hot_above
        && sub_category.is_some_and(|sub| HOT_EXCLUDED_SUBCATEGORIES.contains(&sub))
    {
        return false;
    }

    true
}
