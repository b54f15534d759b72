//! Derived-indicator output model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily record enriched with the pipeline's derived fields.
///
/// Nullable fields stay `None` while their window has not filled yet or
/// an operand was missing; flag fields fall back to 0 in those cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub code: Option<String>,
    pub date: Option<NaiveDate>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,

    pub sma_short: Option<f64>,
    pub sma_middle: Option<f64>,
    pub sma_long: Option<f64>,
    pub dev_short_pct: Option<f64>,
    pub dev_middle_pct: Option<f64>,
    pub dev_long_pct: Option<f64>,
    /// 1 when short MA > middle MA > long MA strictly.
    pub perfect_order: u8,
    /// Cumulative count of days whose low is at or above the prior low.
    pub higher_low_days: u32,
    /// Most recent date whose volume reached the spike threshold.
    pub high_volume_date: Option<NaiveDate>,
    pub short_ma: Option<f64>,
    /// 1 when close is strictly above the short moving average.
    pub above_short_ma: u8,
    /// Calendar days since the latest above-MA date, 0 on such a date
    /// itself, `None` before the first one.
    pub days_since_above: Option<i64>,
}
