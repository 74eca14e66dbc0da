// core/economics/src/leaderboard.rs

//! Donor standings
//!
//! Aggregates reward events into per-donor totals for a time window and city,
//! then ranks donors by points earned.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Leaderboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Number of ranked entries returned by a standings query
    pub max_entries: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self { max_entries: 10 }
    }
}

/// Time window a standings query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    #[default]
    Monthly,
    Yearly,
    #[serde(rename = "alltime")]
    AllTime,
}

impl Period {
    /// Length of the window, `None` for all time
    pub fn window(&self) -> Option<Duration> {
        match self {
            Period::Weekly => Some(Duration::days(7)),
            Period::Monthly => Some(Duration::days(30)),
            Period::Yearly => Some(Duration::days(365)),
            Period::AllTime => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
            Period::AllTime => "alltime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Weekly => "This Week",
            Period::Monthly => "This Month",
            Period::Yearly => "This Year",
            Period::AllTime => "All Time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            "alltime" | "all-time" => Ok(Period::AllTime),
            other => Err(format!("unknown period: {}", other)),
        }
    }
}

/// Points credited to a donor for one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEvent {
    pub donor_id: String,
    pub donor_name: String,
    pub city: String,
    pub points: u32,
    pub at: DateTime<Utc>,
}

/// Display tier derived from a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankTier::Gold,
            2 => RankTier::Silver,
            3 => RankTier::Bronze,
            _ => RankTier::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    /// 1-based position in the standings
    pub rank: usize,
    pub donor_id: String,
    pub name: String,
    pub city: String,
    pub points: u64,
    pub donations: u32,
    pub is_current_user: bool,
}

impl LeaderEntry {
    pub fn tier(&self) -> RankTier {
        RankTier::for_rank(self.rank)
    }
}

/// Result of a standings query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub period: Period,
    pub city: Option<String>,
    /// Top entries, at most `LeaderboardConfig::max_entries`
    pub entries: Vec<LeaderEntry>,
    /// The viewer's own entry, present even when ranked below the top entries
    pub current_user: Option<LeaderEntry>,
    /// Number of donors ranked before truncation
    pub total_donors: usize,
    /// Points the current user needs to tie the donor ranked directly above
    pub next_rank_gap: Option<u64>,
}

impl Standings {
    /// First three places
    pub fn podium(&self) -> &[LeaderEntry] {
        &self.entries[..self.entries.len().min(3)]
    }

    /// Points the current user needs to tie the donor ranked directly above,
    /// `None` when leading or unranked
    pub fn points_to_next_rank(&self) -> Option<u64> {
        self.next_rank_gap
    }
}

struct DonorTotals {
    donor_id: String,
    name: String,
    city: String,
    points: u64,
    donations: u32,
}

/// Reward event log with ranking queries
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    config: LeaderboardConfig,
    events: Vec<RewardEvent>,
}

impl Leaderboard {
    pub fn new(config: LeaderboardConfig) -> Self {
        Self {
            config,
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: RewardEvent) {
        debug!(donor = %event.donor_id, points = event.points, "Reward event recorded");
        self.events.push(event);
    }

    pub fn extend<I: IntoIterator<Item = RewardEvent>>(&mut self, events: I) {
        for event in events {
            self.record(event);
        }
    }

    /// Rank donors by points earned in `period`, optionally limited to one city.
    ///
    /// Ties on points go to the donor with more donations, then to the donor
    /// whose first qualifying event was recorded earlier.
    pub fn standings(
        &self,
        period: Period,
        city: Option<&str>,
        current_user: Option<&str>,
        now: DateTime<Utc>,
    ) -> Standings {
        let since = period.window().map(|window| now - window);

        let mut totals: Vec<DonorTotals> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for event in &self.events {
            if since.is_some_and(|since| event.at < since) {
                continue;
            }
            if city.is_some_and(|city| event.city != city) {
                continue;
            }

            let index = *positions.entry(event.donor_id.as_str()).or_insert_with(|| {
                totals.push(DonorTotals {
                    donor_id: event.donor_id.clone(),
                    name: event.donor_name.clone(),
                    city: event.city.clone(),
                    points: 0,
                    donations: 0,
                });
                totals.len() - 1
            });

            let donor = &mut totals[index];
            donor.points += u64::from(event.points);
            donor.donations += 1;
        }

        totals.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.donations.cmp(&a.donations))
        });

        let ranked: Vec<LeaderEntry> = totals
            .into_iter()
            .enumerate()
            .map(|(position, donor)| LeaderEntry {
                rank: position + 1,
                is_current_user: current_user == Some(donor.donor_id.as_str()),
                donor_id: donor.donor_id,
                name: donor.name,
                city: donor.city,
                points: donor.points,
                donations: donor.donations,
            })
            .collect();

        let total_donors = ranked.len();
        let position = ranked.iter().position(|entry| entry.is_current_user);
        let current = position.map(|index| ranked[index].clone());
        let next_rank_gap = position
            .filter(|&index| index > 0)
            .map(|index| ranked[index - 1].points.saturating_sub(ranked[index].points));
        let entries: Vec<LeaderEntry> = ranked.into_iter().take(self.config.max_entries).collect();

        debug!(
            period = %period,
            city = city.unwrap_or("all"),
            donors = total_donors,
            "Standings computed"
        );

        Standings {
            period,
            city: city.map(str::to_string),
            entries,
            current_user: current,
            total_donors,
            next_rank_gap,
        }
    }
}
