//! Short-interest squeeze signal.

use crate::error::Result;
use crate::models::frame::{Column, MarketFrame};

use super::{pct_change, Signal};

/// Short-positions-to-float ratio, week over week: an increase of 50% or
/// more reads +1 (squeeze candidate), everything else 0. This signal
/// never emits -1.
pub struct ShortSqueezeSignal;

const REQUIRED: &[Column] = &[Column::ShortPositionsToSharesOutstandingRatio, Column::Date];

impl Signal for ShortSqueezeSignal {
    fn name(&self) -> &'static str {
        "short_squeeze"
    }

    fn required_columns(&self) -> &'static [Column] {
        REQUIRED
    }

    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>> {
        frame.require(REQUIRED)?;

        let ratios: Vec<_> = frame.rows().iter().map(|r| r.short_ratio).collect();
        let signal = pct_change(&ratios)
            .iter()
            .map(|change| match change {
                Some(c) if *c >= 0.5 => 1,
                _ => 0,
            })
            .collect();
        Ok(signal)
    }
}
