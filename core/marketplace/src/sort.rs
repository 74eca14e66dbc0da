// core/marketplace/src/sort.rs

use crate::types::Item;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Ordering rule applied to filtered items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// Most recently uploaded first
    #[default]
    Latest,
    /// Closest to the viewer first
    Nearby,
    /// Most requested first
    Popular,
    /// Highest reward first
    PointsHigh,
    /// Lowest reward first
    PointsLow,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Latest => "latest",
            SortStrategy::Nearby => "nearby",
            SortStrategy::Popular => "popular",
            SortStrategy::PointsHigh => "points-high",
            SortStrategy::PointsLow => "points-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortStrategy::Latest => "Latest",
            SortStrategy::Nearby => "Nearest",
            SortStrategy::Popular => "Most Requested",
            SortStrategy::PointsHigh => "Highest Points",
            SortStrategy::PointsLow => "Lowest Points",
        }
    }

    pub fn all() -> &'static [SortStrategy] {
        &[
            SortStrategy::Latest,
            SortStrategy::Nearby,
            SortStrategy::Popular,
            SortStrategy::PointsHigh,
            SortStrategy::PointsLow,
        ]
    }

    /// Compare two items under this strategy
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortStrategy::Latest => b.uploaded_at.cmp(&a.uploaded_at),
            // `+ 0.0` folds -0.0 into 0.0 so equal distances compare equal
            SortStrategy::Nearby => (a.distance + 0.0).total_cmp(&(b.distance + 0.0)),
            SortStrategy::Popular => b.requests_count.cmp(&a.requests_count),
            SortStrategy::PointsHigh => b.points.cmp(&a.points),
            SortStrategy::PointsLow => a.points.cmp(&b.points),
        }
    }
}

/// Unrecognized names fall back to `Latest`
impl From<&str> for SortStrategy {
    fn from(value: &str) -> Self {
        match SortStrategy::all().iter().find(|s| s.as_str() == value) {
            Some(strategy) => *strategy,
            None => {
                warn!(strategy = %value, "Unrecognized sort strategy, using latest");
                SortStrategy::Latest
            }
        }
    }
}

impl<'de> Deserialize<'de> for SortStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SortStrategy::from(raw.as_str()))
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
