//! Per-security indicator pipeline.

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::models::frame::MarketRow;
use crate::models::indicators::IndicatorRow;

use super::moving_average::{deviation_pct, perfect_order, rolling_mean};
use super::staircase::{higher_low_days, high_volume_dates};
use super::trend_persistence::{above_short_ma, days_since_flagged, flagged_dates};

/// Compute every derived indicator for one security's daily series.
///
/// The series must be one security in ascending date order; the pipeline
/// does not re-sort. Series shorter than a window produce leading nulls
/// for the dependent fields, and an empty series yields an empty result,
/// never an error. The input is left untouched.
pub fn compute_indicators(
    series: &[MarketRow],
    config: &IndicatorConfig,
) -> Result<Vec<IndicatorRow>> {
    config.validate()?;
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let dates: Vec<_> = series.iter().map(|r| r.date).collect();
    let closes: Vec<_> = series.iter().map(|r| r.close).collect();
    let lows: Vec<_> = series.iter().map(|r| r.low).collect();
    let volumes: Vec<_> = series.iter().map(|r| r.volume).collect();

    let sma_short = rolling_mean(&closes, config.short_window);
    let sma_middle = rolling_mean(&closes, config.middle_window);
    let sma_long = rolling_mean(&closes, config.long_window);

    let dev_short = deviation_pct(&closes, &sma_short);
    let dev_middle = deviation_pct(&closes, &sma_middle);
    let dev_long = deviation_pct(&closes, &sma_long);
    let perfect = perfect_order(&sma_short, &sma_middle, &sma_long);

    let staircase = higher_low_days(&lows);
    let volume_dates =
        high_volume_dates(&dates, &volumes, config.lookback_days, config.volume_multiplier);

    let short_ma = rolling_mean(&closes, config.short_trend_window);
    let above = above_short_ma(&closes, &short_ma);
    let flagged = flagged_dates(&dates, &above);
    let elapsed = days_since_flagged(&dates, &flagged);

    let rows = series
        .iter()
        .enumerate()
        .map(|(i, row)| IndicatorRow {
            code: row.code.clone(),
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            sma_short: sma_short[i],
            sma_middle: sma_middle[i],
            sma_long: sma_long[i],
            dev_short_pct: dev_short[i],
            dev_middle_pct: dev_middle[i],
            dev_long_pct: dev_long[i],
            perfect_order: perfect[i],
            higher_low_days: staircase[i],
            high_volume_date: volume_dates[i],
            short_ma: short_ma[i],
            above_short_ma: above[i],
            days_since_above: elapsed[i],
        })
        .collect();

    Ok(rows)
}
