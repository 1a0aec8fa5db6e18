use serde::{Deserialize, Serialize};

use crate::models::signal::FibLevel;

/// Retracement levels derived from a high/low range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    pub level_236: f64,
    pub level_382: f64,
    pub level_618: f64,
    pub level_100: f64,
}

impl FibonacciLevels {
    /// Levels paired with their names, in the fixed order signal generation
    /// scans them.
    pub fn named(&self) -> [(FibLevel, f64); 4] {
        [
            (FibLevel::Pct236, self.level_236),
            (FibLevel::Pct382, self.level_382),
            (FibLevel::Pct618, self.level_618),
            (FibLevel::Pct100, self.level_100),
        ]
    }
}
