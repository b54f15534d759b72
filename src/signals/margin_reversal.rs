//! Contrarian margin-balance signal.

use crate::error::Result;
use crate::models::frame::{Column, MarketFrame};

use super::{pct_change, Signal};

/// Weekly buy-margin balances, traded against the crowd:
/// - balance up 20% or more week over week: -1 (sell)
/// - balance down 20% or more: +1 (buy)
/// - otherwise 0
pub struct MarginReversalSignal;

const REQUIRED: &[Column] = &[Column::LongMarginTradeVolume, Column::Date];

impl Signal for MarginReversalSignal {
    fn name(&self) -> &'static str {
        "margin_reversal"
    }

    fn required_columns(&self) -> &'static [Column] {
        REQUIRED
    }

    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>> {
        frame.require(REQUIRED)?;

        let balances: Vec<_> = frame.rows().iter().map(|r| r.long_margin_volume).collect();
        let signal = pct_change(&balances)
            .iter()
            .map(|change| match change {
                Some(c) if *c >= 0.2 => -1,
                Some(c) if *c <= -0.2 => 1,
                _ => 0,
            })
            .collect();
        Ok(signal)
    }
}
