//! Fibonacci retracement levels

use crate::models::FibonacciLevels;

/// Derive retracement levels from a high/low range. The function does not
/// check `high >= low`; callers supply `high = max(window)` and
/// `low = min(window)` over at least two samples. A zero range collapses
/// every level onto the price itself.
pub fn compute_fibonacci_levels(high: f64, low: f64) -> FibonacciLevels {
    let range = high - low;
    FibonacciLevels {
        level_236: high - range * 0.236,
        level_382: high - range * 0.382,
        level_618: high - range * 0.618,
        level_100: low,
    }
}
