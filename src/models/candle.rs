use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed kline reduced to the fields the pipeline consumes: the bar's open
/// time and its close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// One stored sample of a named price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn from_candle(candle: &Candle) -> Self {
        Self {
            timestamp: candle.timestamp,
            price: candle.close,
        }
    }

    /// Stored prices must be finite and non-negative; anything else is
    /// discarded at the pipeline boundary.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
