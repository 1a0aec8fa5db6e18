//! Threshold-based signal generation from RSI values and retracement levels.

use crate::models::{FibSignal, FibonacciLevels, TradeSignal};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Minimum percentage distance from a retracement level before a touch is
/// reported.
pub const FIB_TOUCH_THRESHOLD_PCT: f64 = 5.0;

/// Map an RSI value to a trade signal. Both comparisons are strict: an RSI
/// sitting exactly on a threshold holds.
pub fn rsi_signal(rsi: f64) -> TradeSignal {
    if rsi > RSI_OVERBOUGHT {
        TradeSignal::Sell
    } else if rsi < RSI_OVERSOLD {
        TradeSignal::Buy
    } else {
        TradeSignal::Hold
    }
}

/// Compare the current price against the retracement levels.
///
/// Only the first level in scan order (23.6%) is ever consulted: if the price
/// sits at least [`FIB_TOUCH_THRESHOLD_PCT`] away from it the touch is
/// reported, otherwise the evaluation ends with `NoSignal` without checking
/// the remaining levels.
pub fn fibonacci_signal(current_price: f64, levels: &FibonacciLevels) -> FibSignal {
    let (name, level) = levels.named()[0];
    let pct_diff = ((current_price - level) / level).abs() * 100.0;

    if pct_diff >= FIB_TOUCH_THRESHOLD_PCT {
        if current_price > level {
            FibSignal::ResistanceHit(name)
        } else {
            FibSignal::SupportHit(name)
        }
    } else {
        FibSignal::NoSignal
    }
}
