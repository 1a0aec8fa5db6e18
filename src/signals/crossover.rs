//! Golden/death cross detection over a pair of SMA series.

use crate::models::CrossoverState;

/// Classify the relation between a short- and long-window SMA series, both
/// indexed most-recent-first (index 0 = current, index 1 = prior).
///
/// A golden cross is the short average closing above the long one after
/// sitting at or below it the sample before; a death cross is the mirror
/// image. Missing values at either index mean the series is still warming up
/// and report as `NoCross`.
pub fn detect_crossover(short: &[Option<f64>], long: &[Option<f64>]) -> CrossoverState {
    fn head_pair(series: &[Option<f64>]) -> Option<(f64, f64)> {
        Some((series.first().copied()??, series.get(1).copied()??))
    }

    let (Some((short_now, short_prev)), Some((long_now, long_prev))) =
        (head_pair(short), head_pair(long))
    else {
        return CrossoverState::NoCross;
    };

    if short_now > long_now && short_prev <= long_prev {
        CrossoverState::GoldenCross
    } else if short_now < long_now && short_prev >= long_prev {
        CrossoverState::DeathCross
    } else {
        CrossoverState::NoCross
    }
}
