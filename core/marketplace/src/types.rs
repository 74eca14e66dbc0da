// core/marketplace/src/types.rs

use chrono::{DateTime, Utc};
use rewear_primitives::{Category, Condition, Gender, ItemId, Role};
use serde::{Deserialize, Serialize};

/// Highest donor rating a listing can carry
pub const MAX_DONOR_RATING: f32 = 5.0;

/// A donated clothing listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub size: String,
    pub gender: Gender,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    // Location, relative to the viewer
    pub location: String,
    pub distance: f64, // km

    // Donor
    pub donor_name: String,
    pub donor_rating: f32, // 0.0-5.0

    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub is_featured: bool,

    /// Reward value fixed from the category when listed
    pub points: u32,
    #[serde(default)]
    pub requests_count: u32,
}

impl Item {
    /// Check the field-level invariants of a listing
    pub fn validate(&self) -> Result<()> {
        if self.distance.is_nan() || self.distance < 0.0 {
            return Err(MarketplaceError::InvalidItem {
                id: self.id.clone(),
                reason: format!("distance must be non-negative, got {}", self.distance),
            });
        }
        if !(0.0..=MAX_DONOR_RATING).contains(&self.donor_rating) {
            return Err(MarketplaceError::InvalidItem {
                id: self.id.clone(),
                reason: format!("donor rating must be within 0-5, got {}", self.donor_rating),
            });
        }
        Ok(())
    }
}

/// The member using the application, passed explicitly to every workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub city: String,
    pub rating: f32,
    pub points: u64,
}

impl UserProfile {
    pub fn can_request(&self) -> bool {
        self.role.can_request()
    }
}

/// Error types for marketplace operations
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Item already listed: {0}")]
    DuplicateItem(ItemId),

    #[error("Invalid item {id}: {reason}")]
    InvalidItem { id: ItemId, reason: String },

    #[error("Invalid donation: {0}")]
    InvalidDonation(String),

    #[error("Members with role '{0}' cannot request items")]
    RequestNotAllowed(Role),

    #[error("Request message cannot be empty")]
    EmptyMessage,

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MarketplaceError {
    fn from(err: serde_json::Error) -> Self {
        MarketplaceError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarketplaceError>;
