use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::{Input, Select};
use rewear_economics::POINTS_UNIT;
use rewear_marketplace::{display, DonationDraft, SUGGESTED_MESSAGES};
use rewear_primitives::{Category, Condition, Gender, ItemId};

use super::{open_marketplace, print_item_card};
use crate::config::Config;

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Show full item details
    Show {
        /// Item ID
        item_id: String,
    },

    /// Request an item from its donor
    Request {
        /// Item ID
        item_id: String,

        /// Message for the donor; prompts when omitted
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List a clothing item for donation
    Donate {
        /// e.g. "Vintage Denim Jacket"
        #[arg(long)]
        title: String,

        /// T-Shirt, Pant, Jacket or Shoes
        #[arg(long)]
        category: Category,

        #[arg(long)]
        size: String,

        /// Male, Female or Unisex
        #[arg(long)]
        gender: Gender,

        /// New, Good or Worn
        #[arg(long)]
        condition: Condition,

        /// Pickup area, e.g. "Downtown"
        #[arg(long)]
        location: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Boost the listing into the featured section
        #[arg(long)]
        featured: bool,

        /// Image reference
        #[arg(long)]
        image: Option<String>,
    },
}

pub async fn execute(cmd: ItemCommands, config: &Config) -> Result<()> {
    match cmd {
        ItemCommands::Show { item_id } => show_item(config, &item_id).await?,
        ItemCommands::Request { item_id, message } => {
            request_item(config, &item_id, message).await?;
        }
        ItemCommands::Donate {
            title,
            category,
            size,
            gender,
            condition,
            location,
            description,
            featured,
            image,
        } => {
            let draft = DonationDraft {
                title,
                category,
                size,
                gender,
                condition,
                description,
                location,
                is_featured: featured,
                image,
            };
            donate_item(config, draft).await?;
        }
    }
    Ok(())
}

async fn show_item(config: &Config, item_id: &str) -> Result<()> {
    let marketplace = open_marketplace(config)?;
    let item = marketplace
        .discovery
        .item_details(&ItemId::from(item_id))
        .await?;

    println!("{}", "Item Information:".bold());
    print_item_card(&item, &config.viewer, Utc::now());
    if let Some(description) = &item.description {
        println!();
        println!("  {}", description);
    }
    println!();
    println!("  Condition: {}", item.condition.description());
    println!("  Listed: {}", item.uploaded_at.format("%Y-%m-%d %H:%M UTC"));
    if config.viewer.can_request() {
        println!(
            "  {}",
            format!("Request with: rewear item request {}", item.id).cyan()
        );
    }
    Ok(())
}

async fn request_item(config: &Config, item_id: &str, message: Option<String>) -> Result<()> {
    let marketplace = open_marketplace(config)?;
    let item_id = ItemId::from(item_id);

    let message = match message {
        Some(message) => message,
        None => prompt_message()?,
    };

    let confirmation = marketplace
        .requests
        .submit(&config.viewer, &item_id, &message)
        .await?;

    println!("{}", "✓ Request sent".green());
    println!(
        "{} by {} now has {} request(s)",
        confirmation.item_title.bold(),
        confirmation.donor_name,
        confirmation.requests_count
    );
    println!("Request ID: {}", confirmation.request_id.to_string().cyan());
    print_unsaved_note();
    Ok(())
}

fn print_unsaved_note() {
    println!(
        "{}",
        "Note: changes last for this run only, the catalog file is not updated".dimmed()
    );
}

fn prompt_message() -> Result<String> {
    let mut choices: Vec<&str> = SUGGESTED_MESSAGES.to_vec();
    choices.push("Write my own message");

    let selection = Select::new()
        .with_prompt("Message for the donor")
        .items(&choices)
        .default(0)
        .interact()
        .context("Failed to read message choice")?;

    if selection < SUGGESTED_MESSAGES.len() {
        return Ok(SUGGESTED_MESSAGES[selection].to_string());
    }

    Input::<String>::new()
        .with_prompt("Your message")
        .interact_text()
        .context("Failed to read message")
}

async fn donate_item(config: &Config, draft: DonationDraft) -> Result<()> {
    let marketplace = open_marketplace(config)?;

    println!(
        "{} {}",
        "Listing item...".cyan(),
        format!(
            "(earns {} points)",
            marketplace.donations.preview_points(draft.category)
        )
        .dimmed()
    );

    let receipt = marketplace.donations.donate(&config.viewer, draft).await?;

    println!("{}", "✓ Item Listed Successfully!".green());
    println!("{}", receipt.message());
    println!("Item ID: {}", receipt.item.id.to_string().cyan());
    println!(
        "Listed {} at {}",
        display::format_time_ago(receipt.item.uploaded_at, Utc::now()).to_lowercase(),
        receipt.item.location
    );
    println!(
        "Balance: {} {}",
        config.viewer.points + u64::from(receipt.points_earned),
        POINTS_UNIT
    );
    print_unsaved_note();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_is_not_kept_between_runs() {
        let config = Config::default();
        let id = ItemId::from("1");

        execute(
            ItemCommands::Request {
                item_id: "1".to_string(),
                message: Some("Is this still available?".to_string()),
            },
            &config,
        )
        .await
        .unwrap();

        let reopened = open_marketplace(&config).unwrap();
        let item = reopened.discovery.item_details(&id).await.unwrap();
        assert_eq!(item.requests_count, 3);
    }

    #[tokio::test]
    async fn test_donation_is_not_kept_between_runs() {
        let config = Config::default();

        execute(
            ItemCommands::Donate {
                title: "Wool Scarf Jacket".to_string(),
                category: Category::Jacket,
                size: "M".to_string(),
                gender: Gender::Unisex,
                condition: Condition::Good,
                location: "Mission".to_string(),
                description: String::new(),
                featured: false,
                image: None,
            },
            &config,
        )
        .await
        .unwrap();

        let reopened = open_marketplace(&config).unwrap();
        assert_eq!(reopened.repository.len().await, 4);
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let result = execute(
            ItemCommands::Request {
                item_id: "1".to_string(),
                message: Some("   ".to_string()),
            },
            &Config::default(),
        )
        .await;

        assert!(result.is_err());
    }
}
