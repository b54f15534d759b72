//! Foreign-investor flow momentum signal.

use crate::error::Result;
use crate::models::frame::{Column, MarketFrame};

use super::Signal;

/// Weekly foreign-investor net balance against its trailing 4-week mean
/// (current week excluded, at least one prior week required):
/// - balance at or above 2x the mean: +1 (buy)
/// - balance at or below -2x the mean: -1 (sell)
/// - otherwise 0
///
/// When the mean is negative both thresholds can hold at once; the sell
/// rule wins, matching the upstream rule ordering.
pub struct ForeignFlowSignal;

const REQUIRED: &[Column] = &[Column::ForeignersBalance, Column::Date];
const MEAN_WEEKS: usize = 4;

impl Signal for ForeignFlowSignal {
    fn name(&self) -> &'static str {
        "foreign_flow"
    }

    fn required_columns(&self) -> &'static [Column] {
        REQUIRED
    }

    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>> {
        frame.require(REQUIRED)?;

        let balances: Vec<_> = frame.rows().iter().map(|r| r.foreigners_balance).collect();
        let signal = (0..balances.len())
            .map(|i| {
                let (Some(current), Some(mean)) = (balances[i], trailing_mean(&balances, i))
                else {
                    return 0;
                };
                let mut value = 0;
                if current >= 2.0 * mean {
                    value = 1;
                }
                if current <= -2.0 * mean {
                    value = -1;
                }
                value
            })
            .collect();
        Ok(signal)
    }
}

/// Mean of the up-to-four prior weeks' balances, skipping missing cells.
/// `None` when no prior week has a value.
fn trailing_mean(balances: &[Option<f64>], i: usize) -> Option<f64> {
    let window = &balances[i.saturating_sub(MEAN_WEEKS)..i];
    let present: Vec<f64> = window.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}
