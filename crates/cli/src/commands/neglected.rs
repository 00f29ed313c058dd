use std::path::Path;

use chrono::Utc;
use serde_json::json;

use rewear_core::{neglected_items, AppConfig};
use rewear_store::load_snapshot;

use super::CommandResult;

pub fn run(config: &AppConfig, wardrobe: &Path, threshold: Option<i64>) -> CommandResult {
    let threshold = threshold.unwrap_or(config.suggestion.neglect_threshold_days);
    if threshold < 1 {
        return CommandResult::failure(
            "neglected",
            "invalid_argument",
            "--threshold must be at least 1",
            2,
        );
    }

    let items = match load_snapshot(wardrobe) {
        Ok(items) => items,
        Err(error) => {
            return CommandResult::failure("neglected", "wardrobe_snapshot", error.to_string(), 3)
        }
    };

    let now = Utc::now();
    let neglected = neglected_items(&items, threshold, now);

    let rows: Vec<_> = neglected
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "name": item.name,
                "category": item.category,
                "days_since_worn": item.days_since_worn(now),
            })
        })
        .collect();

    CommandResult::success(
        "neglected",
        format!("{} items unworn for more than {threshold} days.", neglected.len()),
        Some(json!({ "threshold_days": threshold, "items": rows })),
    )
}
