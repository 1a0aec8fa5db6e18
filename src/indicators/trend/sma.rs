//! SMA (Simple Moving Average) indicator

/// Compute simple moving averages in compact form: one entry per full window,
/// or `period` `None`s when the input is too short to fill a single window.
///
/// Input ordering is preserved — the window at output index `i` starts at
/// input index `i`. Call sites feed most-recent-first slices, so index 0 is
/// the window anchored at the newest sample, which is the orientation the
/// crossover detector expects. `period` must be positive.
pub fn compute_sma(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || prices.len() < period {
        return vec![None; period];
    }

    (0..=prices.len() - period)
        .map(|i| Some(prices[i..i + period].iter().sum::<f64>() / period as f64))
        .collect()
}
