// core/marketplace/src/requests.rs

use crate::{storage::ItemRepository, types::*};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rewear_primitives::ItemId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Canned openers offered when writing to a donor
pub const SUGGESTED_MESSAGES: [&str; 4] = [
    "Hi! I'm interested in this item. Is it still available?",
    "This looks perfect for me! When would be a good time to pick it up?",
    "I love this piece! Could you tell me more about its condition?",
    "Hi! I'm very interested and can pick up anytime. Thank you for donating!",
];

/// A request filed by a receiver for one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub request_id: uuid::Uuid,
    pub item_id: ItemId,
    pub requester_id: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfirmation {
    pub request_id: uuid::Uuid,
    pub item_id: ItemId,
    pub item_title: String,
    pub donor_name: String,
    /// Request counter of the item after this request
    pub requests_count: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Files item requests and keeps them per item
pub struct RequestService<R: ItemRepository> {
    repository: Arc<R>,
    requests: Arc<DashMap<ItemId, Vec<ItemRequest>>>,
}

impl<R: ItemRepository> RequestService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            requests: Arc::new(DashMap::new()),
        }
    }

    /// Send a request for `item_id` with a message for the donor
    pub async fn submit(
        &self,
        requester: &UserProfile,
        item_id: &ItemId,
        message: &str,
    ) -> Result<RequestConfirmation> {
        if !requester.can_request() {
            return Err(MarketplaceError::RequestNotAllowed(requester.role));
        }
        if message.trim().is_empty() {
            return Err(MarketplaceError::EmptyMessage);
        }

        let item = self
            .repository
            .get(item_id)
            .await?
            .ok_or_else(|| MarketplaceError::ItemNotFound(item_id.clone()))?;

        let requests_count = self.repository.increment_request_count(item_id).await?;

        let request = ItemRequest {
            request_id: uuid::Uuid::new_v4(),
            item_id: item_id.clone(),
            requester_id: requester.id.clone(),
            message: message.to_string(),
            submitted_at: Utc::now(),
        };
        debug!(request_id = %request.request_id, item_id = %item_id, "Request recorded");

        let confirmation = RequestConfirmation {
            request_id: request.request_id,
            item_id: item_id.clone(),
            item_title: item.title,
            donor_name: item.donor_name,
            requests_count,
            submitted_at: request.submitted_at,
        };

        self.requests
            .entry(item_id.clone())
            .or_default()
            .push(request);

        info!(
            item_id = %item_id,
            requester = %requester.id,
            requests = requests_count,
            "Item requested"
        );
        Ok(confirmation)
    }

    /// Requests filed for an item, oldest first
    pub fn requests_for(&self, item_id: &ItemId) -> Vec<ItemRequest> {
        self.requests
            .get(item_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.iter().map(|entry| entry.value().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_items;
    use crate::storage::InMemoryItemRepository;
    use rewear_primitives::Role;

    fn member(role: Role) -> UserProfile {
        UserProfile {
            id: "demo".to_string(),
            name: "Demo User".to_string(),
            role,
            city: "San Francisco".to_string(),
            rating: 5.0,
            points: 156,
        }
    }

    fn service() -> (Arc<InMemoryItemRepository>, RequestService<InMemoryItemRepository>) {
        let repository = Arc::new(InMemoryItemRepository::with_items(demo_items()).unwrap());
        let service = RequestService::new(Arc::clone(&repository));
        (repository, service)
    }

    #[tokio::test]
    async fn test_submit_increments_count() {
        let (repository, service) = service();
        let id = ItemId::from("2");

        let confirmation = service
            .submit(&member(Role::Receiver), &id, SUGGESTED_MESSAGES[0])
            .await
            .unwrap();

        assert_eq!(confirmation.requests_count, 2);
        assert_eq!(confirmation.item_title, "Nike Running Shoes");
        assert_eq!(confirmation.donor_name, "Mike Johnson");
        assert_eq!(repository.get(&id).await.unwrap().unwrap().requests_count, 2);

        let logged = service.requests_for(&id);
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].message, SUGGESTED_MESSAGES[0]);
        assert_eq!(logged[0].request_id, confirmation.request_id);
    }

    #[tokio::test]
    async fn test_donor_only_members_cannot_request() {
        let (repository, service) = service();
        let id = ItemId::from("1");

        let result = service.submit(&member(Role::Donor), &id, "Hello").await;

        assert!(matches!(result, Err(MarketplaceError::RequestNotAllowed(Role::Donor))));
        assert_eq!(repository.get(&id).await.unwrap().unwrap().requests_count, 3);
        assert_eq!(service.total_requests(), 0);
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let (_, service) = service();

        let result = service
            .submit(&member(Role::Both), &ItemId::from("1"), "  \n ")
            .await;

        assert!(matches!(result, Err(MarketplaceError::EmptyMessage)));
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let (_, service) = service();

        let result = service
            .submit(&member(Role::Both), &ItemId::from("404"), "Still available?")
            .await;

        assert!(matches!(result, Err(MarketplaceError::ItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_requests_accumulate_per_item() {
        let (_, service) = service();
        let requester = member(Role::Both);

        for message in SUGGESTED_MESSAGES.iter().take(3) {
            service
                .submit(&requester, &ItemId::from("3"), message)
                .await
                .unwrap();
        }
        service
            .submit(&requester, &ItemId::from("4"), "Office pants please")
            .await
            .unwrap();

        assert_eq!(service.requests_for(&ItemId::from("3")).len(), 3);
        assert_eq!(service.requests_for(&ItemId::from("1")).len(), 0);
        assert_eq!(service.total_requests(), 4);
    }
}
