//! Daily stock metrics and signal computation engine.
//!
//! The crate turns per-security daily time series (adjusted OHLCV plus
//! margin, short-interest and fundamental columns) into derived metrics:
//!
//! - a technical-indicator pipeline ([`indicators::compute_indicators`])
//!   that adds moving averages, deviation ratios, a perfect-order flag,
//!   a staircase-low counter and short-term trend persistence,
//! - a per-code aggregator ([`metrics::aggregate_metrics`]) that applies
//!   the pipeline to every security partition of a multi-security frame,
//! - a registry of independent trading signals ([`signals::SignalRegistry`])
//!   that each map a frame to a per-row -1/0/+1 column.
//!
//! Everything is synchronous and in-memory; loading and persistence belong
//! to the callers.

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;

pub use config::IndicatorConfig;
pub use error::{EngineError, Result};
pub use indicators::compute_indicators;
pub use metrics::aggregate_metrics;
pub use models::frame::{Column, MarketFrame, MarketRow};
pub use models::indicators::IndicatorRow;
pub use signals::{Signal, SignalRegistry};
