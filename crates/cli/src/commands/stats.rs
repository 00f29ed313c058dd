use std::path::Path;

use chrono::{Duration, Utc};
use serde_json::json;

use rewear_core::items_worn_in_period;
use rewear_store::load_snapshot;

use super::CommandResult;

pub fn run(wardrobe: &Path, days: i64) -> CommandResult {
    if days < 1 {
        return CommandResult::failure("stats", "invalid_argument", "--days must be at least 1", 2);
    }

    let items = match load_snapshot(wardrobe) {
        Ok(items) => items,
        Err(error) => {
            return CommandResult::failure("stats", "wardrobe_snapshot", error.to_string(), 3)
        }
    };

    let end = Utc::now();
    let start = end - Duration::days(days);
    let worn = items_worn_in_period(&items, start, end);

    let rows: Vec<_> = worn
        .iter()
        .map(|(item, count)| {
            json!({
                "id": item.id,
                "name": item.name,
                "category": item.category,
                "times_worn": count,
            })
        })
        .collect();

    CommandResult::success(
        "stats",
        format!("{} of {} items worn in the last {days} days.", worn.len(), items.len()),
        Some(json!({ "days": days, "items": rows })),
    )
}
