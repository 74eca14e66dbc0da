// core/marketplace/src/storage.rs

use crate::types::*;
use async_trait::async_trait;
use rewear_primitives::ItemId;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Source of listed items for the discovery engine and the workflows
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Snapshot of every listed item in listing order
    async fn list(&self) -> Result<Vec<Item>>;

    async fn get(&self, item_id: &ItemId) -> Result<Option<Item>>;

    /// List a new item; ids must be unique
    async fn insert(&self, item: Item) -> Result<()>;

    /// Bump the request counter of an item and return the new value
    async fn increment_request_count(&self, item_id: &ItemId) -> Result<u32>;
}

/// In-memory item storage
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository, rejecting invalid records and duplicate ids
    pub fn with_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.clone()) {
                return Err(MarketplaceError::DuplicateItem(item.id.clone()));
            }
        }

        info!(count = items.len(), "Item repository seeded (in-memory)");
        Ok(Self {
            items: Arc::new(RwLock::new(items)),
        })
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Clear all data (for testing)
    pub async fn clear_all(&self) {
        self.items.write().await.clear();
        info!("Item repository cleared");
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, item_id: &ItemId) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == *item_id).cloned())
    }

    async fn insert(&self, item: Item) -> Result<()> {
        item.validate()?;

        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(MarketplaceError::DuplicateItem(item.id));
        }

        debug!(item_id = %item.id, title = %item.title, "Item stored");
        items.push(item);
        Ok(())
    }

    async fn increment_request_count(&self, item_id: &ItemId) -> Result<u32> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == *item_id)
            .ok_or_else(|| MarketplaceError::ItemNotFound(item_id.clone()))?;

        item.requests_count = item.requests_count.saturating_add(1);
        debug!(item_id = %item_id, requests = item.requests_count, "Request count incremented");
        Ok(item.requests_count)
    }
}
