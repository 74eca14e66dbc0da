use anyhow::Result;
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use rewear_marketplace::{DiscoveryResult, FilterCriteria, Selector, SortStrategy};

use super::{open_marketplace, print_item_card};
use crate::config::Config;

#[derive(Args)]
pub struct BrowseArgs {
    /// Text matched against titles and descriptions
    #[arg(short, long, default_value = "")]
    search: String,

    /// T-Shirt, Pant, Jacket, Shoes or all
    #[arg(long, default_value = "all")]
    category: String,

    /// Size label (XS, S, M, L, XL, XXL, shoe sizes) or all
    #[arg(long, default_value = "all")]
    size: String,

    /// Male, Female, Unisex or all
    #[arg(long, default_value = "all")]
    gender: String,

    /// New, Good, Worn or all
    #[arg(long, default_value = "all")]
    condition: String,

    /// latest, nearby, popular, points-high, points-low
    #[arg(long)]
    sort: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl BrowseArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            category: Selector::parse(&self.category),
            size: Selector::parse(&self.size),
            gender: Selector::parse(&self.gender),
            condition: Selector::parse(&self.condition),
        }
    }

    fn strategy(&self, config: &Config) -> SortStrategy {
        self.sort
            .as_deref()
            .map(SortStrategy::from)
            .unwrap_or(config.default_sort)
    }
}

pub async fn execute(args: BrowseArgs, config: &Config) -> Result<()> {
    let marketplace = open_marketplace(config)?;
    let criteria = args.criteria();
    let strategy = args.strategy(config);

    let result = marketplace.discovery.browse(&criteria, strategy).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result(&result, strategy, config);
    Ok(())
}

fn print_result(result: &DiscoveryResult, strategy: SortStrategy, config: &Config) {
    let now = Utc::now();

    println!(
        "{}  {}",
        format!("Browse Items in {}", config.viewer.city).bold(),
        format!("{} items available", result.total()).cyan()
    );
    println!("{}", format!("Sorted by {}", strategy.label()).dimmed());
    println!();

    if result.is_empty() {
        println!("{}", "No items found".yellow());
        println!("Try adjusting your search criteria or check back later for new donations.");
        return;
    }

    if !result.featured.is_empty() {
        println!(
            "{} {}",
            "⚡ Featured Items".yellow().bold(),
            "(Boosted by donors)".dimmed()
        );
        for item in &result.featured {
            print_item_card(item, &config.viewer, now);
            println!();
        }
    }

    if !result.regular.is_empty() {
        println!(
            "{}",
            format!("Available Items ({})", result.regular.len()).bold()
        );
        for item in &result.regular {
            print_item_card(item, &config.viewer, now);
            println!();
        }
    }
}
