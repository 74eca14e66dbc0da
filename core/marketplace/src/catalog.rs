// core/marketplace/src/catalog.rs

//! Catalog files and the built-in demonstration data set.

use crate::types::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rewear_economics::{RewardCalculator, RewardEvent};
use rewear_primitives::{Category, Condition, Gender, ItemId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a JSON catalog, checking every record against the listing invariants
pub fn load_catalog<P: AsRef<Path>>(path: P, rewards: &RewardCalculator) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&contents)?;

    validate_catalog(&items, rewards)?;

    info!(path = %path.display(), count = items.len(), "Catalog loaded");
    Ok(items)
}

/// Write a catalog in the format `load_catalog` reads
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[Item]) -> Result<()> {
    let contents = serde_json::to_string_pretty(items)?;
    fs::write(path.as_ref(), contents)?;
    Ok(())
}

pub fn validate_catalog(items: &[Item], rewards: &RewardCalculator) -> Result<()> {
    let mut seen = HashSet::new();

    for item in items {
        item.validate()?;

        if !seen.insert(&item.id) {
            return Err(MarketplaceError::DuplicateItem(item.id.clone()));
        }

        if !rewards.is_valid_award(item.category, item.points) {
            return Err(MarketplaceError::InvalidItem {
                id: item.id.clone(),
                reason: format!(
                    "{} listings earn {} points, record has {}",
                    item.category,
                    rewards.points_for(item.category),
                    item.points
                ),
            });
        }
    }

    Ok(())
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Four listings used for demonstrations and tests
pub fn demo_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::from("1"),
            title: "Vintage Denim Jacket".to_string(),
            description: Some(
                "Classic blue denim jacket, perfect for casual wear. Barely worn, great condition."
                    .to_string(),
            ),
            category: Category::Jacket,
            size: "M".to_string(),
            gender: Gender::Unisex,
            condition: Condition::Good,
            image: None,
            location: "Downtown".to_string(),
            distance: 1.2,
            donor_name: "Sarah Chen".to_string(),
            donor_rating: 4.8,
            uploaded_at: at(2024, 1, 15, 10, 30),
            is_featured: true,
            points: 10,
            requests_count: 3,
        },
        Item {
            id: ItemId::from("2"),
            title: "Nike Running Shoes".to_string(),
            description: Some(
                "Comfortable running shoes, used for about 6 months. Still have good tread."
                    .to_string(),
            ),
            category: Category::Shoes,
            size: "9".to_string(),
            gender: Gender::Male,
            condition: Condition::Good,
            image: None,
            location: "Midtown".to_string(),
            distance: 2.5,
            donor_name: "Mike Johnson".to_string(),
            donor_rating: 4.6,
            uploaded_at: at(2024, 1, 14, 15, 45),
            is_featured: false,
            points: 6,
            requests_count: 1,
        },
        Item {
            id: ItemId::from("3"),
            title: "Floral Summer Dress".to_string(),
            description: Some("Brand new with tags, never worn. Beautiful floral pattern.".to_string()),
            category: Category::TShirt,
            size: "S".to_string(),
            gender: Gender::Female,
            condition: Condition::New,
            image: None,
            location: "Uptown".to_string(),
            distance: 3.1,
            donor_name: "Emma Wilson".to_string(),
            donor_rating: 4.9,
            uploaded_at: at(2024, 1, 13, 9, 20),
            is_featured: true,
            points: 5,
            requests_count: 5,
        },
        Item {
            id: ItemId::from("4"),
            title: "Black Formal Pants".to_string(),
            description: Some("Professional dress pants, excellent for office wear.".to_string()),
            category: Category::Pant,
            size: "L".to_string(),
            gender: Gender::Male,
            condition: Condition::Good,
            image: None,
            location: "Business District".to_string(),
            distance: 0.8,
            donor_name: "David Kim".to_string(),
            donor_rating: 4.7,
            uploaded_at: at(2024, 1, 12, 16, 30),
            is_featured: false,
            points: 7,
            requests_count: 2,
        },
    ]
}

/// Donation history behind the demonstration leaderboard, relative to `now`
pub fn demo_reward_events(now: DateTime<Utc>, rewards: &RewardCalculator) -> Vec<RewardEvent> {
    use Category::*;

    let donors: [(&str, &str, &str, &[(Category, i64)]); 6] = [
        (
            "sarah",
            "Sarah Chen",
            "San Francisco",
            &[(Jacket, 1), (Jacket, 3), (Pant, 6), (Shoes, 12), (Jacket, 45)],
        ),
        (
            "mike",
            "Mike Johnson",
            "San Francisco",
            &[(Shoes, 2), (Pant, 9), (Jacket, 20), (TShirt, 200)],
        ),
        (
            "emma",
            "Emma Wilson",
            "San Francisco",
            &[(TShirt, 4), (TShirt, 5), (Jacket, 15)],
        ),
        ("david", "David Kim", "New York", &[(Pant, 1), (Pant, 25), (Shoes, 90)]),
        ("lisa", "Lisa Park", "Los Angeles", &[(Jacket, 8), (TShirt, 400)]),
        ("demo", "Demo User", "San Francisco", &[(TShirt, 2), (Shoes, 10)]),
    ];

    donors
        .iter()
        .flat_map(|(id, name, city, donations)| {
            donations.iter().map(move |(category, days_ago)| RewardEvent {
                donor_id: id.to_string(),
                donor_name: name.to_string(),
                city: city.to_string(),
                points: rewards.points_for(*category),
                at: now - Duration::days(*days_ago),
            })
        })
        .collect()
}
