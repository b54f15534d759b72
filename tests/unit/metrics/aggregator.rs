//! Unit tests for the multi-security metric aggregator

use chrono::NaiveDate;
use equitrix::metrics::aggregate_metrics;
use equitrix::models::frame::{Column, MarketFrame, MarketRow};
use equitrix::{EngineError, IndicatorConfig};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

fn quote(code: &str, day: u32, close: f64) -> MarketRow {
    MarketRow::quote(code, date(day), close, close + 1.0, close - 1.0, close, 1000.0)
}

fn interleaved_frame() -> MarketFrame {
    // Two securities with interleaved rows, ascending dates per code.
    MarketFrame::prices(vec![
        quote("1301", 1, 100.0),
        quote("7203", 1, 2000.0),
        quote("1301", 2, 101.0),
        quote("7203", 2, 2010.0),
        quote("1301", 3, 102.0),
    ])
}

#[test]
fn test_round_trip_preserves_row_count() {
    let frame = interleaved_frame();
    let rows = aggregate_metrics(&frame, &IndicatorConfig::default()).unwrap();
    assert_eq!(rows.len(), frame.len());
}

#[test]
fn test_partition_order_is_stable() {
    let frame = interleaved_frame();
    let rows = aggregate_metrics(&frame, &IndicatorConfig::default()).unwrap();

    let dates_1301: Vec<_> = rows
        .iter()
        .filter(|r| r.code.as_deref() == Some("1301"))
        .map(|r| r.date.unwrap())
        .collect();
    assert_eq!(dates_1301, vec![date(1), date(2), date(3)]);

    let count_7203 = rows
        .iter()
        .filter(|r| r.code.as_deref() == Some("7203"))
        .count();
    assert_eq!(count_7203, 2);
}

#[test]
fn test_missing_column_fails_before_any_work() {
    let frame = MarketFrame::new(
        vec![Column::Code, Column::Date, Column::AdjustmentClose],
        vec![quote("1301", 1, 100.0)],
    );
    let err = aggregate_metrics(&frame, &IndicatorConfig::default()).unwrap_err();
    assert_eq!(err, EngineError::MissingColumn(Column::AdjustmentOpen));
}

#[test]
fn test_rows_without_code_are_dropped() {
    let mut rows = vec![quote("1301", 1, 100.0), quote("1301", 2, 101.0)];
    rows.push(MarketRow {
        date: Some(date(3)),
        close: Some(50.0),
        ..MarketRow::default()
    });
    let frame = MarketFrame::prices(rows);
    let out = aggregate_metrics(&frame, &IndicatorConfig::default()).unwrap();
    assert_eq!(out.len(), 2);
}

#[test]
fn test_empty_frame_yields_empty_output() {
    let frame = MarketFrame::prices(vec![]);
    let rows = aggregate_metrics(&frame, &IndicatorConfig::default()).unwrap();
    assert!(rows.is_empty());
}
