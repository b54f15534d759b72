//! Sector-momentum point-in-time signal.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{EngineError, Result};
use crate::models::frame::{Column, MarketFrame};

use super::Signal;

/// Ranks sectors by their 20-trading-day return (mean close on the latest
/// date vs. the date 20 unique-date steps earlier) and marks every row on
/// the latest date whose sector is in the top 3 with +1. Rows on earlier
/// dates are always 0; the signal is point-in-time, not a history.
///
/// Needs at least 21 distinct dates; shorter histories are a
/// configuration error rather than a silent fallback.
pub struct SectorMomentumSignal;

const REQUIRED: &[Column] = &[Column::Sector33Code, Column::Close, Column::Date];
const RETURN_DATES: usize = 21;
const TOP_SECTORS: usize = 3;

impl Signal for SectorMomentumSignal {
    fn name(&self) -> &'static str {
        "sector_momentum"
    }

    fn required_columns(&self) -> &'static [Column] {
        REQUIRED
    }

    fn calculate(&self, frame: &MarketFrame) -> Result<Vec<i8>> {
        frame.require(REQUIRED)?;

        let mut dates: Vec<NaiveDate> = frame.rows().iter().filter_map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();
        if dates.len() < RETURN_DATES {
            return Err(EngineError::InsufficientHistory {
                needed: RETURN_DATES,
                found: dates.len(),
            });
        }
        let latest = dates[dates.len() - 1];
        let past = dates[dates.len() - RETURN_DATES];

        let latest_close = sector_mean_close(frame, latest);
        let past_close = sector_mean_close(frame, past);

        let mut returns: Vec<(&str, f64)> = latest_close
            .iter()
            .filter_map(|(sector, now)| {
                let then = past_close.get(sector)?;
                if *then == 0.0 {
                    return None;
                }
                Some((*sector, (now - then) / then))
            })
            .collect();
        returns.sort_by(|a, b| b.1.total_cmp(&a.1));
        let top: Vec<&str> = returns
            .iter()
            .take(TOP_SECTORS)
            .map(|(sector, _)| *sector)
            .collect();

        let signal = frame
            .rows()
            .iter()
            .map(|row| {
                let on_latest = row.date == Some(latest);
                let in_top = row
                    .sector_code
                    .as_deref()
                    .is_some_and(|sector| top.contains(&sector));
                if on_latest && in_top {
                    1
                } else {
                    0
                }
            })
            .collect();
        Ok(signal)
    }
}

/// Mean close per sector over the rows of one date.
fn sector_mean_close(frame: &MarketFrame, date: NaiveDate) -> HashMap<&str, f64> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for row in frame.rows() {
        if row.date != Some(date) {
            continue;
        }
        let (Some(sector), Some(close)) = (row.sector_code.as_deref(), row.raw_close) else {
            continue;
        };
        let entry = sums.entry(sector).or_insert((0.0, 0));
        entry.0 += close;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(sector, (sum, count))| (sector, sum / count as f64))
        .collect()
}
