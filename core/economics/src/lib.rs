// core/economics/src/lib.rs

pub mod leaderboard;
pub mod rewards;

pub use leaderboard::{
    LeaderEntry, Leaderboard, LeaderboardConfig, Period, RankTier, RewardEvent, Standings,
};
pub use rewards::{RewardCalculator, RewardConfig};

/// Display unit for reward balances
pub const POINTS_UNIT: &str = "pts";
