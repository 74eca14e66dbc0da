// core/marketplace/src/donation.rs

use crate::{storage::ItemRepository, types::*};
use chrono::Utc;
use rewear_economics::{RewardCalculator, RewardEvent};
use rewear_primitives::{Category, Condition, Gender, ItemId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Listing form as filled in by a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationDraft {
    pub title: String,
    pub category: Category,
    pub size: String,
    pub gender: Gender,
    pub condition: Condition,
    #[serde(default)]
    pub description: String,
    pub location: String,
    /// Donor-paid boost into the featured section
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl DonationDraft {
    fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("size", &self.size),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MarketplaceError::InvalidDonation(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub item: Item,
    pub points_earned: u32,
    /// Credit for the donor's leaderboard standing
    pub reward: RewardEvent,
}

impl DonationReceipt {
    pub fn message(&self) -> String {
        format!(
            "Your {} has been added. You earned {} points!",
            self.item.title, self.points_earned
        )
    }
}

/// Turns donation drafts into listed items
pub struct DonationService<R: ItemRepository> {
    repository: Arc<R>,
    rewards: RewardCalculator,
}

impl<R: ItemRepository> DonationService<R> {
    pub fn new(repository: Arc<R>, rewards: RewardCalculator) -> Self {
        Self {
            repository,
            rewards,
        }
    }

    /// Points a draft of `category` would earn, for previewing before submission
    pub fn preview_points(&self, category: Category) -> u32 {
        self.rewards.points_for(category)
    }

    /// List a new item on behalf of `donor`
    pub async fn donate(&self, donor: &UserProfile, draft: DonationDraft) -> Result<DonationReceipt> {
        draft.validate()?;

        let now = Utc::now();
        let points = self.rewards.points_for(draft.category);
        let description = Some(draft.description.trim().to_string()).filter(|d| !d.is_empty());

        let item = Item {
            id: ItemId::generate(),
            title: draft.title.trim().to_string(),
            description,
            category: draft.category,
            size: draft.size.trim().to_string(),
            gender: draft.gender,
            condition: draft.condition,
            image: draft.image,
            location: draft.location.trim().to_string(),
            distance: 0.0,
            donor_name: donor.name.clone(),
            donor_rating: donor.rating.clamp(0.0, MAX_DONOR_RATING),
            uploaded_at: now,
            is_featured: draft.is_featured,
            points,
            requests_count: 0,
        };

        self.repository.insert(item.clone()).await?;

        info!(
            item_id = %item.id,
            donor = %donor.id,
            category = %item.category,
            points,
            featured = item.is_featured,
            "Item listed"
        );

        let reward = RewardEvent {
            donor_id: donor.id.clone(),
            donor_name: donor.name.clone(),
            city: donor.city.clone(),
            points,
            at: now,
        };

        Ok(DonationReceipt {
            item,
            points_earned: points,
            reward,
        })
    }
}
