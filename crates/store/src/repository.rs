use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use rewear_core::{ApplicationError, ItemId, WardrobeItem};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("wardrobe item not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        ApplicationError::Persistence(error.to_string())
    }
}

#[async_trait]
pub trait WardrobeRepository: Send + Sync {
    async fn load_items(&self) -> Result<Vec<WardrobeItem>, RepositoryError>;

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<WardrobeItem>, RepositoryError>;

    async fn save(&self, item: WardrobeItem) -> Result<(), RepositoryError>;

    /// Records a wear at `at` and returns the updated item. The stored wear
    /// count stays derived from the history, never incremented separately.
    async fn log_wear(
        &self,
        id: &ItemId,
        at: DateTime<Utc>,
    ) -> Result<WardrobeItem, RepositoryError>;
}

#[derive(Default)]
pub struct InMemoryWardrobeRepository {
    items: RwLock<HashMap<String, WardrobeItem>>,
}

impl InMemoryWardrobeRepository {
    pub fn seeded(items: impl IntoIterator<Item = WardrobeItem>) -> Self {
        let items = items.into_iter().map(|item| (item.id.0.clone(), item)).collect();
        Self { items: RwLock::new(items) }
    }
}

#[async_trait]
impl WardrobeRepository for InMemoryWardrobeRepository {
    async fn load_items(&self) -> Result<Vec<WardrobeItem>, RepositoryError> {
        let items = self.items.read().await;
        let mut items: Vec<WardrobeItem> = items.values().cloned().collect();
        // HashMap order is arbitrary; keep listings stable for callers.
        items.sort_by(|left, right| left.created_at.cmp(&right.created_at));
        Ok(items)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<WardrobeItem>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.get(&id.0).cloned())
    }

    async fn save(&self, item: WardrobeItem) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        items.insert(item.id.0.clone(), item);
        Ok(())
    }

    async fn log_wear(
        &self,
        id: &ItemId,
        at: DateTime<Utc>,
    ) -> Result<WardrobeItem, RepositoryError> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id.0).ok_or_else(|| RepositoryError::NotFound(id.0.clone()))?;
        item.log_wear(at);
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use rewear_core::{Category, WardrobeItem};

    use super::{InMemoryWardrobeRepository, RepositoryError, WardrobeRepository};

    #[tokio::test]
    async fn in_memory_repo_round_trip() {
        let repo = InMemoryWardrobeRepository::default();
        let item = WardrobeItem::new("linen shirt", Category::Tops);

        repo.save(item.clone()).await.expect("save item");
        let found = repo.find_by_id(&item.id).await.expect("find item");

        assert_eq!(found, Some(item));
    }

    #[tokio::test]
    async fn log_wear_appends_history_and_derives_count() {
        let mut item = WardrobeItem::new("wool trousers", Category::Bottoms);
        item.initial_wear_count = 4;
        item.wear_count = 4;
        let repo = InMemoryWardrobeRepository::seeded([item.clone()]);

        let now = Utc::now();
        repo.log_wear(&item.id, now - Duration::days(1)).await.expect("first wear");
        let updated = repo.log_wear(&item.id, now).await.expect("second wear");

        assert_eq!(updated.wear_history.len(), 2);
        assert_eq!(updated.wear_count, 6);
        assert_eq!(updated.last_worn(), Some(now));
    }

    #[tokio::test]
    async fn log_wear_on_unknown_id_is_not_found() {
        let repo = InMemoryWardrobeRepository::default();
        let missing = WardrobeItem::new("ghost", Category::Tops);

        let error = repo.log_wear(&missing.id, Utc::now()).await.expect_err("nothing stored");
        assert!(matches!(error, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn load_items_is_ordered_by_creation() {
        let first = WardrobeItem::new("first", Category::Tops);
        let mut second = WardrobeItem::new("second", Category::Bottoms);
        second.created_at = first.created_at + Duration::seconds(5);
        let repo = InMemoryWardrobeRepository::seeded([second.clone(), first.clone()]);

        let items = repo.load_items().await.expect("list items");
        assert_eq!(items, vec![first, second]);
    }
}
