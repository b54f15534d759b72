//! Engine error types.

use crate::models::frame::Column;
use thiserror::Error;

/// Errors surfaced by the metric and signal engine.
///
/// Only configuration-level problems become errors: missing columns,
/// invalid window sizes, or histories too short for a point-in-time
/// signal. Sparse or indeterminate data (nulls, zero denominators)
/// is absorbed into null metrics and neutral signals instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("required column {0} is missing")]
    MissingColumn(Column),

    #[error("{name} must be at least 1, got {got}")]
    InvalidWindow { name: &'static str, got: usize },

    #[error("insufficient history: {needed} distinct dates required, found {found}")]
    InsufficientHistory { needed: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
