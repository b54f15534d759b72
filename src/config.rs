//! Engine configuration.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Window and threshold settings for the technical-indicator pipeline.
///
/// Defaults match the upstream screening setup: 5/25/75-day moving
/// averages, a 30-day volume lookback with a 5x spike multiplier, and a
/// 5-day window for the short-term trend flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub short_window: usize,
    pub middle_window: usize,
    pub long_window: usize,
    pub lookback_days: usize,
    pub volume_multiplier: f64,
    pub short_trend_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            short_window: 5,
            middle_window: 25,
            long_window: 75,
            lookback_days: 30,
            volume_multiplier: 5.0,
            short_trend_window: 5,
        }
    }
}

impl IndicatorConfig {
    /// Reject zero-sized windows before any per-row work starts.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("short_window", self.short_window),
            ("middle_window", self.middle_window),
            ("long_window", self.long_window),
            ("lookback_days", self.lookback_days),
            ("short_trend_window", self.short_trend_window),
        ];
        for (name, got) in windows {
            if got == 0 {
                return Err(EngineError::InvalidWindow { name, got });
            }
        }
        Ok(())
    }
}

/// Get the current environment (development, sandbox, production).
pub fn environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}
