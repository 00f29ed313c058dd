use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::info;

use rewear_core::{AppConfig, ItemId, RediscoveryEngine, WeatherSnapshot};
use rewear_store::load_snapshot;

use super::CommandResult;

/// Produces up to `tries` suggestions from a wardrobe snapshot. Each featured
/// item is dismissed before the next draw, mirroring the interactive "try
/// another" loop.
pub fn run(
    config: &AppConfig,
    wardrobe: &Path,
    temperature: Option<&str>,
    dismiss: &[String],
    tries: u32,
    seed: Option<u64>,
) -> CommandResult {
    let items = match load_snapshot(wardrobe) {
        Ok(items) => items,
        Err(error) => {
            return CommandResult::failure("suggest", "wardrobe_snapshot", error.to_string(), 3)
        }
    };

    let weather = temperature.map(WeatherSnapshot::new);
    let engine = RediscoveryEngine::new(config.suggestion, config.weather);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut dismissed: HashSet<ItemId> =
        dismiss.iter().map(|id| ItemId(id.clone())).collect();

    let mut suggestions = Vec::new();
    for _ in 0..tries.max(1) {
        let suggestion = match engine.suggest(&items, weather.as_ref(), &dismissed, &mut rng) {
            Ok(Some(suggestion)) => suggestion,
            Ok(None) => break,
            Err(error) => {
                return CommandResult::failure("suggest", "wardrobe_data", error.to_string(), 4)
            }
        };

        info!(
            featured = %suggestion.featured_item.name,
            complementary = suggestion.complementary_items.len(),
            days_since_worn = suggestion.days_since_worn,
            "built outfit suggestion"
        );
        dismissed.insert(suggestion.featured_item.id.clone());
        suggestions.push(suggestion);
    }

    if suggestions.is_empty() {
        return CommandResult::success(
            "suggest",
            "No suggestion available: nothing in the wardrobe is eligible right now.",
            Some(json!({ "suggestions": [] })),
        );
    }

    let message = if suggestions.len() == 1 {
        "Built 1 outfit suggestion.".to_string()
    } else {
        format!("Built {} outfit suggestions.", suggestions.len())
    };
    CommandResult::success("suggest", message, Some(json!({ "suggestions": suggestions })))
}
