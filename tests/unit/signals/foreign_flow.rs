//! Unit tests for the foreign-flow momentum signal

use chrono::NaiveDate;
use equitrix::models::frame::{Column, MarketFrame, MarketRow};
use equitrix::signals::{ForeignFlowSignal, Signal};
use equitrix::EngineError;

fn flow_frame(balances: &[Option<f64>]) -> MarketFrame {
    let rows = balances
        .iter()
        .enumerate()
        .map(|(i, &balance)| MarketRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).map(|d| d + chrono::Days::new(7 * i as u64)),
            foreigners_balance: balance,
            ..MarketRow::default()
        })
        .collect();
    MarketFrame::new(vec![Column::ForeignersBalance, Column::Date], rows)
}

#[test]
fn test_double_the_mean_is_a_buy() {
    // Mean of the prior weeks is 100; 200 hits the 2x bar exactly.
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(200.0),
        ]))
        .unwrap();
    assert_eq!(signal[4], 1);
}

#[test]
fn test_negative_double_is_a_sell() {
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(-200.0),
        ]))
        .unwrap();
    assert_eq!(signal[4], -1);
}

#[test]
fn test_in_between_is_neutral() {
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(100.0),
            Some(150.0),
        ]))
        .unwrap();
    assert_eq!(signal[4], 0);
}

#[test]
fn test_first_week_has_no_mean() {
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[Some(1000.0)]))
        .unwrap();
    assert_eq!(signal, vec![0]);
}

#[test]
fn test_mean_excludes_current_week() {
    // Prior week alone forms the mean (min one observation); week 2's own
    // value does not dilute it.
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[Some(50.0), Some(100.0)]))
        .unwrap();
    assert_eq!(signal, vec![0, 1]);
}

#[test]
fn test_negative_mean_overlap_prefers_sell() {
    // Mean -100: the buy rule (>= -200) and the sell rule (<= 200) both
    // hold for a mildly positive balance; the sell assignment wins.
    let signal = ForeignFlowSignal
        .calculate(&flow_frame(&[
            Some(-100.0),
            Some(-100.0),
            Some(-100.0),
            Some(-100.0),
            Some(50.0),
        ]))
        .unwrap();
    assert_eq!(signal[4], -1);
}

#[test]
fn test_missing_column_is_a_precondition_failure() {
    let frame = MarketFrame::new(vec![Column::Date], vec![]);
    let err = ForeignFlowSignal.calculate(&frame).unwrap_err();
    assert_eq!(err, EngineError::MissingColumn(Column::ForeignersBalance));
}
