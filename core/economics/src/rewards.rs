// core/economics/src/rewards.rs

use rewear_primitives::Category;
use serde::{Deserialize, Serialize};

/// Points credited to a donor per listed item, by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// T-Shirt listings
    pub t_shirt_points: u32,

    /// Pant listings
    pub pant_points: u32,

    /// Jacket listings
    pub jacket_points: u32,

    /// Shoe listings
    pub shoes_points: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            t_shirt_points: 5,
            pant_points: 7,
            jacket_points: 10,
            shoes_points: 6,
        }
    }
}

/// Reward calculator
#[derive(Debug, Clone, Default)]
pub struct RewardCalculator {
    config: RewardConfig,
}

impl RewardCalculator {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    /// Points for listing an item of `category`. Fixed at listing time.
    pub fn points_for(&self, category: Category) -> u32 {
        match category {
            Category::TShirt => self.config.t_shirt_points,
            Category::Pant => self.config.pant_points,
            Category::Jacket => self.config.jacket_points,
            Category::Shoes => self.config.shoes_points,
        }
    }

    /// Whether `points` is what a listing of `category` earns
    pub fn is_valid_award(&self, category: Category, points: u32) -> bool {
        self.points_for(category) == points
    }
}
