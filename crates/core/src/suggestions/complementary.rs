//! Complementary-item selection: paired-category candidates ranked by
//! embedding similarity (wear count as fallback), diversified across
//! categories.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::item::WardrobeItem;
use crate::errors::DomainError;
use crate::recency::is_worn_today;
use crate::similarity::cosine_similarity;

/// Finds up to `count` items that complete an outfit around `featured`.
///
/// Candidates come from the featured category's paired categories, excluding
/// dog-casual items, items already worn today, and the featured item itself.
/// When the featured item carries an embedding, embedding-bearing candidates
/// are ranked by descending similarity (stable, ties keep wardrobe order) and
/// placed ahead of the rest, which rank by descending wear count. Without a
/// featured embedding everything ranks by wear count. A dimension mismatch
/// between embeddings is a loud failure; zero-magnitude embeddings simply
/// score 0.
pub fn find_complementary(
    featured: &WardrobeItem,
    items: &[WardrobeItem],
    count: usize,
    now: DateTime<Utc>,
) -> Result<Vec<WardrobeItem>, DomainError> {
    let paired = featured.category.paired_categories();
    if paired.is_empty() {
        return Ok(Vec::new());
    }

    let candidates: Vec<&WardrobeItem> = items
        .iter()
        .filter(|item| paired.contains(&item.category))
        .filter(|item| !item.dog_casual)
        .filter(|item| !is_worn_today(item, now))
        .filter(|item| item.id != featured.id)
        .collect();
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let ranked: Vec<WardrobeItem> = match &featured.embedding {
        Some(anchor) => {
            let mut with_embedding: Vec<(&WardrobeItem, f64)> = Vec::new();
            let mut without_embedding: Vec<&WardrobeItem> = Vec::new();
            for candidate in candidates {
                match &candidate.embedding {
                    Some(embedding) => {
                        let similarity = cosine_similarity(anchor, embedding)?;
                        with_embedding.push((candidate, similarity));
                    }
                    None => without_embedding.push(candidate),
                }
            }

            with_embedding
                .sort_by(|left, right| right.1.partial_cmp(&left.1).unwrap_or(Ordering::Equal));
            without_embedding.sort_by(|left, right| right.wear_count.cmp(&left.wear_count));

            with_embedding
                .into_iter()
                .map(|(item, _)| item)
                .chain(without_embedding)
                .cloned()
                .collect()
        }
        None => {
            let mut ranked = candidates;
            ranked.sort_by(|left, right| right.wear_count.cmp(&left.wear_count));
            ranked.into_iter().cloned().collect()
        }
    };

    Ok(pick_from_different_categories(&ranked, count))
}

/// Takes up to `count` items from a ranked list, maximizing category variety:
/// the first pass keeps at most one item per category in rank order, the
/// second pass fills remaining slots by rank regardless of category.
pub fn pick_from_different_categories(ranked: &[WardrobeItem], count: usize) -> Vec<WardrobeItem> {
    let mut selected: Vec<&WardrobeItem> = Vec::with_capacity(count);
    let mut seen_categories = HashSet::new();

    for item in ranked {
        if selected.len() == count {
            break;
        }
        if seen_categories.insert(item.category) {
            selected.push(item);
        }
    }

    if selected.len() < count {
        for item in ranked {
            if selected.len() == count {
                break;
            }
            if selected.iter().all(|chosen| chosen.id != item.id) {
                selected.push(item);
            }
        }
    }

    selected.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::domain::item::{Category, WardrobeItem};
    use crate::errors::DomainError;

    use super::{find_complementary, pick_from_different_categories};

    fn item(name: &str, category: Category, wear_count: u32) -> WardrobeItem {
        let mut item = WardrobeItem::new(name, category);
        item.initial_wear_count = wear_count;
        item.wear_count = wear_count;
        item
    }

    fn with_embedding(mut item: WardrobeItem, embedding: Vec<f32>) -> WardrobeItem {
        item.embedding = Some(embedding);
        item
    }

    fn names(items: &[WardrobeItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn diversifies_across_categories_first() {
        let ranked = vec![
            item("best bottoms", Category::Bottoms, 9),
            item("second bottoms", Category::Bottoms, 8),
            item("best shoes", Category::Shoes, 7),
            item("best outerwear", Category::Outerwear, 6),
        ];

        let picked = pick_from_different_categories(&ranked, 3);
        assert_eq!(names(&picked), vec!["best bottoms", "best shoes", "best outerwear"]);
    }

    #[test]
    fn second_pass_fills_quota_when_categories_run_out() {
        let ranked = vec![
            item("first", Category::Bottoms, 9),
            item("second", Category::Bottoms, 8),
            item("third", Category::Bottoms, 7),
        ];

        let picked = pick_from_different_categories(&ranked, 3);
        assert_eq!(names(&picked), vec!["first", "second", "third"]);
    }

    #[test]
    fn ranks_by_wear_count_without_featured_embedding() {
        let featured = item("featured top", Category::Tops, 0);
        let wardrobe = vec![
            featured.clone(),
            item("rarely worn jeans", Category::Bottoms, 1),
            item("favorite jeans", Category::Bottoms, 12),
            item("favorite boots", Category::Shoes, 8),
        ];

        let picked = find_complementary(&featured, &wardrobe, 3, Utc::now()).expect("no embeddings");
        assert_eq!(names(&picked), vec!["favorite jeans", "favorite boots", "rarely worn jeans"]);
    }

    #[test]
    fn embedding_ranked_candidates_come_before_wear_count_ranked() {
        let anchor = vec![1.0f32, 0.0, 0.0];
        let featured = with_embedding(item("featured top", Category::Tops, 0), anchor.clone());
        let wardrobe = vec![
            featured.clone(),
            item("popular plain jeans", Category::Bottoms, 40),
            with_embedding(item("matching shoes", Category::Shoes, 0), vec![0.9, 0.1, 0.0]),
            with_embedding(item("clashing jacket", Category::Outerwear, 0), vec![-1.0, 0.0, 0.0]),
        ];

        let picked = find_complementary(&featured, &wardrobe, 3, Utc::now()).expect("same dims");
        assert_eq!(names(&picked), vec!["matching shoes", "clashing jacket", "popular plain jeans"]);
    }

    #[test]
    fn zero_magnitude_embedding_ranks_with_zero_similarity() {
        let featured = with_embedding(item("featured top", Category::Tops, 0), vec![1.0, 0.0]);
        let wardrobe = vec![
            featured.clone(),
            with_embedding(item("aligned", Category::Bottoms, 0), vec![1.0, 0.0]),
            with_embedding(item("degenerate", Category::Shoes, 0), vec![0.0, 0.0]),
        ];

        let picked = find_complementary(&featured, &wardrobe, 2, Utc::now()).expect("same dims");
        assert_eq!(names(&picked), vec!["aligned", "degenerate"]);
    }

    #[test]
    fn dimension_mismatch_propagates() {
        let featured = with_embedding(item("featured top", Category::Tops, 0), vec![1.0, 0.0]);
        let wardrobe = vec![
            featured.clone(),
            with_embedding(item("bad vector", Category::Bottoms, 0), vec![1.0, 0.0, 0.0]),
        ];

        let error =
            find_complementary(&featured, &wardrobe, 3, Utc::now()).expect_err("dims differ");
        assert_eq!(error, DomainError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn excludes_worn_today_dog_casual_and_the_featured_item() {
        let now = Utc::now();
        let featured = item("featured top", Category::Tops, 0);

        let mut worn_today = item("worn today", Category::Bottoms, 5);
        worn_today.wear_history = vec![now];
        let mut dog = item("dog walk jeans", Category::Bottoms, 5);
        dog.dog_casual = true;
        let mut eligible = item("eligible jeans", Category::Bottoms, 2);
        eligible.wear_history = vec![now - Duration::days(2)];

        let wardrobe = vec![featured.clone(), worn_today, dog, eligible];
        let picked = find_complementary(&featured, &wardrobe, 3, now).expect("no embeddings");
        assert_eq!(names(&picked), vec!["eligible jeans"]);
    }

    #[test]
    fn no_candidates_yields_empty_list() {
        let featured = item("featured top", Category::Tops, 0);
        let picked =
            find_complementary(&featured, &[featured.clone()], 3, Utc::now()).expect("no pool");
        assert!(picked.is_empty());
    }
}
