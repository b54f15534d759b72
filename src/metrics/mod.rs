//! Multi-security metric aggregation.

pub mod aggregator;

pub use aggregator::aggregate_metrics;
