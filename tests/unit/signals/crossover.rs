//! Unit tests for golden/death cross detection

use trendwatch::models::CrossoverState;
use trendwatch::signals::detect_crossover;

#[test]
fn test_golden_cross_when_short_overtakes_long() {
    let short = [Some(101.0), Some(99.0)];
    let long = [Some(100.0), Some(100.0)];
    assert_eq!(detect_crossover(&short, &long), CrossoverState::GoldenCross);
}

#[test]
fn test_death_cross_when_short_falls_below_long() {
    let short = [Some(99.0), Some(101.0)];
    let long = [Some(100.0), Some(100.0)];
    assert_eq!(detect_crossover(&short, &long), CrossoverState::DeathCross);
}

#[test]
fn test_flat_series_report_no_cross() {
    let short = [Some(100.0), Some(100.0)];
    let long = [Some(100.0), Some(100.0)];
    assert_eq!(detect_crossover(&short, &long), CrossoverState::NoCross);
}

#[test]
fn test_touch_from_below_counts_as_golden_cross() {
    // Prior samples equal, current short above: the boundary is inclusive.
    let short = [Some(101.0), Some(100.0)];
    let long = [Some(100.0), Some(100.0)];
    assert_eq!(detect_crossover(&short, &long), CrossoverState::GoldenCross);
}

#[test]
fn test_persistent_lead_is_not_a_cross() {
    // Short already above long on both samples: no transition happened.
    let short = [Some(102.0), Some(101.0)];
    let long = [Some(100.0), Some(100.0)];
    assert_eq!(detect_crossover(&short, &long), CrossoverState::NoCross);
}

#[test]
fn test_missing_history_reports_no_cross() {
    assert_eq!(
        detect_crossover(&[None, Some(1.0)], &[Some(1.0), Some(1.0)]),
        CrossoverState::NoCross
    );
    assert_eq!(
        detect_crossover(&[Some(1.0)], &[Some(1.0), Some(1.0)]),
        CrossoverState::NoCross
    );
    assert_eq!(detect_crossover(&[], &[]), CrossoverState::NoCross);
}
