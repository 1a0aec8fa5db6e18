//! Unit tests for Fibonacci retracement levels

use trendwatch::indicators::compute_fibonacci_levels;

#[test]
fn test_levels_from_100_50_range() {
    let levels = compute_fibonacci_levels(100.0, 50.0);
    assert!((levels.level_236 - 88.2).abs() < 1e-9);
    assert!((levels.level_382 - 80.9).abs() < 1e-9);
    assert!((levels.level_618 - 69.1).abs() < 1e-9);
    assert_eq!(levels.level_100, 50.0);
}

#[test]
fn test_levels_are_ordered_within_the_range() {
    let levels = compute_fibonacci_levels(31_500.0, 28_200.0);
    assert!(levels.level_236 > levels.level_382);
    assert!(levels.level_382 > levels.level_618);
    assert!(levels.level_618 > levels.level_100);
    assert!(levels.level_236 < 31_500.0);
}

#[test]
fn test_zero_range_collapses_to_the_price() {
    let levels = compute_fibonacci_levels(42.0, 42.0);
    assert_eq!(levels.level_236, 42.0);
    assert_eq!(levels.level_382, 42.0);
    assert_eq!(levels.level_618, 42.0);
    assert_eq!(levels.level_100, 42.0);
}

#[test]
fn test_computation_is_pure() {
    assert_eq!(
        compute_fibonacci_levels(123.4, 56.7),
        compute_fibonacci_levels(123.4, 56.7)
    );
}
