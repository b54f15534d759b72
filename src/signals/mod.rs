//! Independent trading signals over market frames.
//!
//! Each signal is a single capability: map a frame to a per-row column of
//! -1/0/+1 values, index-aligned with the input. A signal declares the
//! columns it needs and fails before computing when one is absent; sparse
//! or indeterminate cells become the neutral 0 instead of errors.

pub mod foreign_flow;
pub mod margin_reversal;
pub mod quality_value;
pub mod registry;
pub mod sector_momentum;
pub mod short_squeeze;

pub use foreign_flow::ForeignFlowSignal;
pub use margin_reversal::MarginReversalSignal;
pub use quality_value::QualityValueSignal;
pub use registry::SignalRegistry;
pub use sector_momentum::SectorMomentumSignal;
pub use short_squeeze::ShortSqueezeSignal;

use crate::error::Result;
use crate::models::frame::{Column, MarketFrame};

/// A self-contained trading signal.
///
/// Implementations are stateless across calls and never mutate the input
/// frame. Each documents its own polarity; the engine attaches no
/// intrinsic meaning to the -1/0/+1 values.
pub trait Signal: Send + Sync {
    /// Unique registry name.
    fn name(&self) -> &'static str;

    /// Columns the frame must declare before `calculate` runs.
    fn required_columns(&self) -> &'static [Column];

    /// Compute the signal column, aligned with `frame`'s rows.
    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>>;
}

/// Period-over-period fractional change. The first position, a missing
/// operand, or a zero previous value all yield `None`.
pub(crate) fn pct_change(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    for i in 1..values.len() {
        if let (Some(prev), Some(cur)) = (values[i - 1], values[i]) {
            if prev != 0.0 {
                out[i] = Some((cur - prev) / prev);
            }
        }
    }
    out
}
