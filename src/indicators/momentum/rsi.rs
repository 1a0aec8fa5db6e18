//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

use crate::error::InsufficientData;

/// Fixed lookback: 14 samples, 13 adjacent-pair transitions.
pub const RSI_PERIOD: usize = 14;

/// Compute RSI over the first [`RSI_PERIOD`] samples of an oldest-first price
/// window. Gains and losses are averaged over the full period, and a window
/// with no losses yields exactly 100.
pub fn compute_rsi(prices: &[f64]) -> Result<f64, InsufficientData> {
    if prices.len() < RSI_PERIOD {
        return Err(InsufficientData {
            required: RSI_PERIOD,
            actual: prices.len(),
        });
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..RSI_PERIOD {
        let delta = prices[i] - prices[i - 1];
        if delta >= 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let average_gain = gains / RSI_PERIOD as f64;
    let average_loss = losses / RSI_PERIOD as f64;

    if average_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = average_gain / average_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}
