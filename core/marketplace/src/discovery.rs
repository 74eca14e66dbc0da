// core/marketplace/src/discovery.rs

use crate::{
    filter::FilterCriteria,
    session::BrowseSession,
    sort::SortStrategy,
    storage::ItemRepository,
    types::*,
};
use rewear_primitives::ItemId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Stateless filter / sort / partition pipeline behind the browse view.
///
/// Every operation reads its inputs, never mutates them, and returns the same
/// output for the same input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDiscoveryEngine;

impl ItemDiscoveryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Items passing every predicate of `criteria`, in input order
    pub fn filter(&self, items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
        items
            .iter()
            .filter(|item| criteria.matches(item))
            .cloned()
            .collect()
    }

    /// Copy of `items` ordered by `strategy`; equal keys keep their relative order
    pub fn sort(&self, items: &[Item], strategy: SortStrategy) -> Vec<Item> {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| strategy.compare(a, b));
        sorted
    }

    /// Split into (featured, regular), preserving order within each side
    pub fn partition(&self, items: Vec<Item>) -> (Vec<Item>, Vec<Item>) {
        items.into_iter().partition(|item| item.is_featured)
    }

    /// Filter, then sort, then partition
    pub fn discover(
        &self,
        items: &[Item],
        criteria: &FilterCriteria,
        strategy: SortStrategy,
    ) -> DiscoveryResult {
        let matching = self.filter(items, criteria);
        let sorted = self.sort(&matching, strategy);
        let (featured, regular) = self.partition(sorted);

        debug!(
            candidates = items.len(),
            featured = featured.len(),
            regular = regular.len(),
            strategy = %strategy,
            "Discovery pipeline completed"
        );

        DiscoveryResult { featured, regular }
    }
}

/// Ordered browse output: the featured section followed by the regular one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub featured: Vec<Item>,
    pub regular: Vec<Item>,
}

impl DiscoveryResult {
    /// Number of matching items, shown as the availability badge
    pub fn total(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    /// "No items found" state
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All items in display order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.featured.iter().chain(self.regular.iter())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryStats {
    pub total_browses: u64,
    pub empty_results: u64,
    pub last_result_count: usize,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl Default for DiscoveryStats {
    fn default() -> Self {
        Self {
            total_browses: 0,
            empty_results: 0,
            last_result_count: 0,
            last_updated: chrono::Utc::now(),
        }
    }
}

/// Runs the discovery engine against the current snapshot of a repository
pub struct DiscoveryService<R: ItemRepository> {
    repository: Arc<R>,
    engine: ItemDiscoveryEngine,
    stats: Arc<RwLock<DiscoveryStats>>,
}

impl<R: ItemRepository> DiscoveryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ItemDiscoveryEngine::new(),
            stats: Arc::new(RwLock::new(DiscoveryStats::default())),
        }
    }

    /// Browse the listed items
    pub async fn browse(
        &self,
        criteria: &FilterCriteria,
        strategy: SortStrategy,
    ) -> Result<DiscoveryResult> {
        let snapshot = self.repository.list().await?;
        let result = self.engine.discover(&snapshot, criteria, strategy);

        {
            let mut stats = self.stats.write().await;
            stats.total_browses += 1;
            if result.is_empty() {
                stats.empty_results += 1;
            }
            stats.last_result_count = result.total();
            stats.last_updated = chrono::Utc::now();
        }

        info!(
            total = result.total(),
            active_filters = criteria.active_count(),
            "Browse completed"
        );
        Ok(result)
    }

    /// Browse with the state held by a session
    pub async fn browse_session(&self, session: &BrowseSession) -> Result<DiscoveryResult> {
        self.browse(session.criteria(), session.strategy()).await
    }

    /// Full record for the item detail view
    pub async fn item_details(&self, item_id: &ItemId) -> Result<Item> {
        self.repository
            .get(item_id)
            .await?
            .ok_or_else(|| MarketplaceError::ItemNotFound(item_id.clone()))
    }

    pub async fn get_stats(&self) -> DiscoveryStats {
        self.stats.read().await.clone()
    }
}
