//! Technical-indicator pipeline for one security's daily series.

pub mod moving_average;
pub mod pipeline;
pub mod staircase;
pub mod trend_persistence;

pub use pipeline::compute_indicators;
