use serde::{Deserialize, Serialize};
use std::fmt;

/// RSI-driven trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSignal {
    Buy,
    Sell,
    Hold,
}

/// Relation between the short- and long-window moving averages across the two
/// most recent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverState {
    GoldenCross,
    DeathCross,
    NoCross,
}

/// Named Fibonacci retracement levels, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FibLevel {
    Pct236,
    Pct382,
    Pct618,
    Pct100,
}

impl FibLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FibLevel::Pct236 => "23.6%",
            FibLevel::Pct382 => "38.2%",
            FibLevel::Pct618 => "61.8%",
            FibLevel::Pct100 => "100%",
        }
    }
}

impl fmt::Display for FibLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing the current price against a retracement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FibSignal {
    ResistanceHit(FibLevel),
    SupportHit(FibLevel),
    NoSignal,
}
