//! Financial-soundness plus value screen.

use crate::error::Result;
use crate::models::frame::{Column, MarketFrame, MarketRow};

use super::Signal;

/// +1 only when a row clears every bar at once:
/// - equity ratio at least 30%
/// - operating margin (operating profit / net sales) at least 10%
/// - price/earnings at most 15
/// - price/book at most 1.2
///
/// A missing operand or zero denominator fails the whole conjunction
/// (coerce-or-null: loaders turn non-numeric statement values into nulls,
/// and a null never matches).
pub struct QualityValueSignal;

const REQUIRED: &[Column] = &[
    Column::EquityToAssetRatio,
    Column::OperatingProfit,
    Column::NetSales,
    Column::EarningsPerShare,
    Column::BookValuePerShare,
    Column::Close,
];

impl Signal for QualityValueSignal {
    fn name(&self) -> &'static str {
        "quality_value"
    }

    fn required_columns(&self) -> &'static [Column] {
        REQUIRED
    }

    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>> {
        frame.require(REQUIRED)?;
        Ok(frame
            .rows()
            .iter()
            .map(|row| if passes(row) { 1 } else { 0 })
            .collect())
    }
}

fn passes(row: &MarketRow) -> bool {
    let Some(equity_ratio) = row.equity_to_asset_ratio else {
        return false;
    };
    let Some(op_margin) = ratio(row.operating_profit, row.net_sales) else {
        return false;
    };
    let Some(per) = ratio(row.raw_close, row.earnings_per_share) else {
        return false;
    };
    let Some(pbr) = ratio(row.raw_close, row.book_value_per_share) else {
        return false;
    };
    equity_ratio >= 30.0 && op_margin >= 0.10 && per <= 15.0 && pbr <= 1.2
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}
