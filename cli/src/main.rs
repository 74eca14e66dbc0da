// cli/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod config;

use commands::{browse, item, leaderboard};

#[derive(Parser)]
#[command(
    name = "rewear",
    version,
    about = "ReWear CLI - share clothes, earn points",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, env = "REWEAR_CONFIG")]
    config: Option<PathBuf>,

    /// Item catalog (JSON); overrides the configured catalog
    #[arg(long, global = true, env = "REWEAR_CATALOG")]
    catalog: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort listed items
    Browse(browse::BrowseArgs),

    /// Item details, requests and donations
    #[command(subcommand)]
    Item(item::ItemCommands),

    /// Donor standings
    Leaderboard(leaderboard::LeaderboardArgs),

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Also write the demo listings to an editable catalog file
        #[arg(long)]
        demo_catalog: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    let load_config = || config::Config::load(cli.config.as_deref(), cli.catalog.as_deref());

    match cli.command {
        Commands::Browse(args) => browse::execute(args, &load_config()?).await?,
        Commands::Item(cmd) => item::execute(cmd, &load_config()?).await?,
        Commands::Leaderboard(args) => leaderboard::execute(args, &load_config()?)?,
        Commands::Init {
            force,
            demo_catalog,
        } => {
            let path = config::Config::init(cli.config.as_deref(), force, demo_catalog)?;
            println!("{} {}", "✓ Configuration initialized at".green(), path.display());
        }
    }

    Ok(())
}
