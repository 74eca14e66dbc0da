use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use rewear_economics::{
    LeaderEntry, Leaderboard, LeaderboardConfig, Period, RankTier, Standings, POINTS_UNIT,
};
use rewear_marketplace::{catalog, ALL};

use crate::config::Config;

#[derive(Args)]
pub struct LeaderboardArgs {
    /// weekly, monthly, yearly or alltime
    #[arg(short, long, default_value = "monthly")]
    period: String,

    /// City to rank; defaults to your own, "all" ranks every city
    #[arg(long)]
    city: Option<String>,

    /// Print the standings as JSON
    #[arg(long)]
    json: bool,
}

impl LeaderboardArgs {
    fn city<'a>(&'a self, config: &'a Config) -> Option<&'a str> {
        match self.city.as_deref() {
            Some(city) if city.eq_ignore_ascii_case(ALL) => None,
            Some(city) => Some(city),
            None => Some(config.viewer.city.as_str()),
        }
    }
}

pub fn execute(args: LeaderboardArgs, config: &Config) -> Result<()> {
    let period: Period = args.period.parse().map_err(|e: String| anyhow!(e))?;
    let now = Utc::now();

    let mut leaderboard = Leaderboard::new(LeaderboardConfig {
        max_entries: config.leaderboard_size,
    });
    leaderboard.extend(catalog::demo_reward_events(now, &config.reward_calculator()));

    let standings = leaderboard.standings(
        period,
        args.city(config),
        Some(config.viewer.id.as_str()),
        now,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    print_standings(&standings);
    Ok(())
}

fn print_standings(standings: &Standings) {
    let scope = standings.city.as_deref().unwrap_or("All Cities");
    println!(
        "{}  {}",
        format!("Top Donors · {}", scope).bold(),
        standings.period.label().cyan()
    );
    println!();

    if standings.entries.is_empty() {
        println!("{}", "No donations in this period yet".yellow());
        return;
    }

    for entry in &standings.entries {
        print_entry(entry);
    }

    if let Some(me) = &standings.current_user {
        println!();
        println!(
            "{} #{} of {} · {} {} from {} donation(s)",
            "Your position:".bold(),
            me.rank,
            standings.total_donors,
            me.points,
            POINTS_UNIT,
            me.donations
        );
        match standings.points_to_next_rank() {
            Some(gap) => println!(
                "  {}",
                format!("{} more points to reach #{}", gap, me.rank - 1).green()
            ),
            None if me.rank == 1 => println!("  {}", "You are leading!".green()),
            None => {}
        }
    }
}

fn print_entry(entry: &LeaderEntry) {
    let rank = format!("#{:<3}", entry.rank);
    let rank = match entry.tier() {
        RankTier::Gold => rank.yellow().bold(),
        RankTier::Silver => rank.white().bold(),
        RankTier::Bronze => rank.red().bold(),
        RankTier::Standard => rank.normal(),
    };

    let mut name = format!("{} ({})", entry.name, entry.city);
    if entry.is_current_user {
        name = format!("{} {}", name, "← you".cyan());
    }

    println!(
        "{} {}  {} · {} donation(s)",
        rank,
        name,
        format!("{} {}", entry.points, POINTS_UNIT).green(),
        entry.donations
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: LeaderboardArgs,
    }

    #[test]
    fn test_city_defaults_to_viewer() {
        let config = Config::default();

        let harness = Harness::parse_from(["leaderboard"]);
        assert_eq!(harness.args.city(&config), Some("San Francisco"));

        let harness = Harness::parse_from(["leaderboard", "--city", "All"]);
        assert_eq!(harness.args.city(&config), None);

        let harness = Harness::parse_from(["leaderboard", "--city", "Oakland"]);
        assert_eq!(harness.args.city(&config), Some("Oakland"));
    }

    #[test]
    fn test_unknown_period_is_an_error() {
        let harness = Harness::parse_from(["leaderboard", "--period", "daily"]);
        assert!(execute(harness.args, &Config::default()).is_err());
    }
}
