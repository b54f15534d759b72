//! Unit tests for moving averages, deviation ratios and perfect order

use equitrix::indicators::moving_average::{deviation_pct, perfect_order, rolling_mean};

fn some_all(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn test_rolling_mean_leading_nulls() {
    let values = some_all(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let mean = rolling_mean(&values, 3);
    assert_eq!(mean[0], None);
    assert_eq!(mean[1], None);
    assert_eq!(mean[2], Some(2.0));
    assert_eq!(mean[3], Some(3.0));
    assert_eq!(mean[4], Some(4.0));
}

#[test]
fn test_rolling_mean_window_longer_than_series() {
    let values = some_all(&[10.0, 11.0]);
    assert_eq!(rolling_mean(&values, 5), vec![None, None]);
}

#[test]
fn test_rolling_mean_null_inside_window() {
    let values = vec![Some(1.0), None, Some(3.0), Some(4.0), Some(5.0)];
    let mean = rolling_mean(&values, 2);
    // Any window containing the null stays null.
    assert_eq!(mean, vec![None, None, None, Some(3.5), Some(4.5)]);
}

#[test]
fn test_deviation_pct() {
    let closes = some_all(&[110.0, 90.0]);
    let ma = some_all(&[100.0, 100.0]);
    let dev = deviation_pct(&closes, &ma);
    assert_eq!(dev, vec![Some(10.0), Some(-10.0)]);
}

#[test]
fn test_deviation_pct_null_or_zero_ma() {
    let closes = some_all(&[110.0, 90.0]);
    let ma = vec![None, Some(0.0)];
    assert_eq!(deviation_pct(&closes, &ma), vec![None, None]);
}

#[test]
fn test_perfect_order_strict() {
    let short = vec![Some(3.0), Some(2.0), Some(2.0)];
    let middle = vec![Some(2.0), Some(2.0), Some(1.0)];
    let long = vec![Some(1.0), Some(1.0), Some(3.0)];
    // Second column fails the strict short > middle comparison.
    assert_eq!(perfect_order(&short, &middle, &long), vec![1, 0, 0]);
}

#[test]
fn test_perfect_order_null_is_false() {
    let short = vec![Some(3.0)];
    let middle = vec![None];
    let long = vec![Some(1.0)];
    assert_eq!(perfect_order(&short, &middle, &long), vec![0]);
}
