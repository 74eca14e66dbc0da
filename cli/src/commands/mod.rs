pub mod browse;
pub mod item;
pub mod leaderboard;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use rewear_economics::POINTS_UNIT;
use rewear_marketplace::{
    catalog, display, init_marketplace, InMemoryItemRepository, Item, Marketplace, UserProfile,
};
use tracing::debug;

use crate::config::Config;

/// Marketplace over the configured catalog, or the demo catalog when none is set
pub fn open_marketplace(config: &Config) -> Result<Marketplace<InMemoryItemRepository>> {
    let rewards = config.reward_calculator();

    let items = match &config.catalog_path {
        Some(path) => catalog::load_catalog(path, &rewards)
            .with_context(|| format!("Failed to load catalog from {:?}", path))?,
        None => catalog::demo_items(),
    };
    debug!(items = items.len(), viewer = %config.viewer.id, "Opening marketplace");

    init_marketplace(items, rewards).context("Failed to initialize marketplace")
}

pub fn print_item_card(item: &Item, viewer: &UserProfile, now: DateTime<Utc>) {
    let mut title = item.title.bold().to_string();
    if item.is_featured {
        title = format!("{} {}", "⚡".yellow(), title);
    }
    println!("{}  {}", title, format!("[{}]", item.id).dimmed());
    println!(
        "  {} · Size {} · {} · {}",
        item.category.label(),
        item.size,
        item.gender,
        item.condition
    );
    println!(
        "  {} ({}) · {}",
        item.location,
        display::format_distance(item.distance),
        display::format_time_ago(item.uploaded_at, now)
    );
    println!(
        "  by {} ★ {:.1} · {} · {} request(s)",
        item.donor_name,
        item.donor_rating,
        format!("+{} {}", item.points, POINTS_UNIT).green(),
        item.requests_count
    );
    if !viewer.can_request() {
        println!("  {}", "Switch to receiver mode to request items".dimmed());
    }
}
