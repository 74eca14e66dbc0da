// core/marketplace/src/lib.rs

//! ReWear Marketplace
//!
//! Item discovery (search, facet filters, sort strategies, featured
//! partitioning) plus the donation and request workflows around it.

use std::sync::Arc;

pub mod catalog;
pub mod discovery;
pub mod display;
pub mod donation;
pub mod filter;
pub mod requests;
pub mod session;
pub mod sort;
pub mod storage;
pub mod types;

pub use discovery::ItemDiscoveryEngine;
pub use types::*;

// Re-export key types for easy access
pub use crate::{
    discovery::{DiscoveryResult, DiscoveryService, DiscoveryStats},
    donation::{DonationDraft, DonationReceipt, DonationService},
    filter::{FilterCriteria, Selector, ALL},
    requests::{ItemRequest, RequestConfirmation, RequestService, SUGGESTED_MESSAGES},
    session::BrowseSession,
    sort::SortStrategy,
    storage::{InMemoryItemRepository, ItemRepository},
};

use rewear_economics::RewardCalculator;

/// The services of one marketplace sharing a single item repository
pub struct Marketplace<R: ItemRepository> {
    pub repository: Arc<R>,
    pub discovery: DiscoveryService<R>,
    pub donations: DonationService<R>,
    pub requests: RequestService<R>,
}

impl<R: ItemRepository> Marketplace<R> {
    pub fn new(repository: Arc<R>, rewards: RewardCalculator) -> Self {
        Self {
            discovery: DiscoveryService::new(Arc::clone(&repository)),
            donations: DonationService::new(Arc::clone(&repository), rewards),
            requests: RequestService::new(Arc::clone(&repository)),
            repository,
        }
    }
}

/// In-memory marketplace seeded with `items`
pub fn init_marketplace(
    items: Vec<Item>,
    rewards: RewardCalculator,
) -> Result<Marketplace<InMemoryItemRepository>> {
    let repository = Arc::new(InMemoryItemRepository::with_items(items)?);
    Ok(Marketplace::new(repository, rewards))
}
