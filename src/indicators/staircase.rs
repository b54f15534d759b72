//! Staircase-low counter and high-volume-date marker.

use chrono::NaiveDate;

/// Carry the last seen value forward over missing cells.
pub fn forward_fill(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut last = None;
    for value in values {
        if value.is_some() {
            last = *value;
        }
        out.push(last);
    }
    out
}

/// Cumulative count of days whose (forward-filled) low is at or above the
/// previous day's low. Ties count. The count never resets within a series;
/// it is not a consecutive-run streak.
pub fn higher_low_days(lows: &[Option<f64>]) -> Vec<u32> {
    let filled = forward_fill(lows);
    let mut out = Vec::with_capacity(filled.len());
    let mut count = 0u32;
    for i in 0..filled.len() {
        if i > 0 {
            if let (Some(prev), Some(cur)) = (filled[i - 1], filled[i]) {
                if cur >= prev {
                    count += 1;
                }
            }
        }
        out.push(count);
    }
    out
}

/// Latest date whose volume reached `multiplier` times the trailing mean
/// volume over `lookback` days, forward-filled so every later row still
/// references it.
pub fn high_volume_dates(
    dates: &[Option<NaiveDate>],
    volumes: &[Option<f64>],
    lookback: usize,
    multiplier: f64,
) -> Vec<Option<NaiveDate>> {
    let mean = super::moving_average::rolling_mean(volumes, lookback);
    let mut out = Vec::with_capacity(volumes.len());
    let mut last_marked = None;
    for i in 0..volumes.len() {
        if let (Some(volume), Some(mean), Some(date)) = (volumes[i], mean[i], dates[i]) {
            if volume >= mean * multiplier {
                last_marked = Some(date);
            }
        }
        out.push(last_marked);
    }
    out
}
