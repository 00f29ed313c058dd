//! End-to-end suggestion flows through the public crate surface.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rewear_core::{
    Category, RediscoveryEngine, SuggestionConfig, WardrobeItem, WeatherRules, WeatherSnapshot,
    NEVER_WORN,
};

fn engine() -> RediscoveryEngine {
    RediscoveryEngine::new(SuggestionConfig::default(), WeatherRules::default())
}

fn worn_days_ago(mut item: WardrobeItem, days: i64) -> WardrobeItem {
    item.wear_history = vec![Utc::now() - Duration::days(days)];
    item.wear_count = 1;
    item
}

#[test]
fn two_item_wardrobe_features_one_and_complements_with_the_other() {
    let top = WardrobeItem::new("linen shirt", Category::Tops);
    let bottoms = worn_days_ago(WardrobeItem::new("wool trousers", Category::Bottoms), 90);
    let items = vec![top.clone(), bottoms.clone()];

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let suggestion = engine()
            .suggest(&items, None, &HashSet::new(), &mut rng)
            .expect("no embeddings involved")
            .expect("two eligible candidates");

        if suggestion.featured_item.id == top.id {
            assert_eq!(suggestion.days_since_worn, NEVER_WORN);
            assert_eq!(suggestion.complementary_items.len(), 1);
            assert_eq!(suggestion.complementary_items[0].id, bottoms.id);
        } else {
            assert_eq!(suggestion.featured_item.id, bottoms.id);
            assert_eq!(suggestion.days_since_worn, 90);
            assert_eq!(suggestion.complementary_items.len(), 1);
            assert_eq!(suggestion.complementary_items[0].id, top.id);
        }
    }
}

#[test]
fn wardrobe_of_only_dog_casual_items_yields_no_suggestion() {
    let mut park_top = WardrobeItem::new("park hoodie", Category::Tops);
    park_top.dog_casual = true;

    let mut rng = StdRng::seed_from_u64(2);
    let suggestion = engine()
        .suggest(&[park_top], None, &HashSet::new(), &mut rng)
        .expect("no error path");
    assert!(suggestion.is_none());
}

#[test]
fn hot_day_drops_outerwear_but_keeps_light_tops() {
    let jacket = worn_days_ago(WardrobeItem::new("rain jacket", Category::Outerwear), 120);
    let mut tee = worn_days_ago(WardrobeItem::new("white tee", Category::Tops), 120);
    tee.sub_category = Some("T-Shirt".to_owned());
    let items = vec![jacket.clone(), tee.clone()];
    let weather = WeatherSnapshot::new("28°C");

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let suggestion = engine()
            .suggest(&items, Some(&weather), &HashSet::new(), &mut rng)
            .expect("no embeddings involved")
            .expect("the tee stays eligible");
        assert_eq!(suggestion.featured_item.id, tee.id);
        assert!(suggestion.complementary_items.is_empty());
    }
}
