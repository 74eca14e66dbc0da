// core/marketplace/src/session.rs

//! Browse state held by the caller between engine invocations.
//!
//! Two reset actions exist and stay distinct: `clear_all` (the filter panel)
//! also resets the sort strategy, `clear_filters` (the empty-results prompt)
//! leaves the sort strategy alone.

use crate::discovery::{DiscoveryResult, ItemDiscoveryEngine};
use crate::filter::{FilterCriteria, Selector};
use crate::sort::SortStrategy;
use crate::types::Item;
use rewear_primitives::{Category, Condition, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    strategy: SortStrategy,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_category(&mut self, category: Selector<Category>) {
        self.criteria.category = category;
    }

    pub fn set_size(&mut self, size: Selector<String>) {
        self.criteria.size = size;
    }

    pub fn set_gender(&mut self, gender: Selector<Gender>) {
        self.criteria.gender = gender;
    }

    pub fn set_condition(&mut self, condition: Selector<Condition>) {
        self.criteria.condition = condition;
    }

    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.strategy = strategy;
    }

    /// "Clear All": search, every selector and the sort strategy
    pub fn clear_all(&mut self) {
        self.criteria = FilterCriteria::default();
        self.strategy = SortStrategy::Latest;
        debug!("Browse session cleared");
    }

    /// "Clear Filters": search and every selector; sort strategy kept
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        debug!(strategy = %self.strategy, "Browse filters cleared");
    }

    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Run the pipeline with the current state
    pub fn results(&self, engine: &ItemDiscoveryEngine, items: &[Item]) -> DiscoveryResult {
        engine.discover(items, &self.criteria, self.strategy)
    }
}
