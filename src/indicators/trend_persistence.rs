//! Short-term trend persistence: the above-MA flag and the number of
//! calendar days since the flag last fired.

use chrono::NaiveDate;

/// 1 where close is strictly above the short moving average, else 0.
/// A null close or MA reads as not-above.
pub fn above_short_ma(closes: &[Option<f64>], short_ma: &[Option<f64>]) -> Vec<u8> {
    closes
        .iter()
        .zip(short_ma)
        .map(|(close, ma)| match (close, ma) {
            (Some(c), Some(m)) if c > m => 1,
            _ => 0,
        })
        .collect()
}

/// Calendar days from each row's date back to the latest flagged date at
/// or before it. A flagged row reads 0; rows before the first flagged
/// date read `None`.
///
/// `flagged` must be sorted ascending; the lookup is a binary search, so
/// the growing set of flagged dates never forces a per-row rescan.
pub fn days_since_flagged(
    dates: &[Option<NaiveDate>],
    flagged: &[NaiveDate],
) -> Vec<Option<i64>> {
    dates
        .iter()
        .map(|date| {
            let date = (*date)?;
            let idx = flagged.partition_point(|&d| d <= date);
            if idx == 0 {
                None
            } else {
                Some((date - flagged[idx - 1]).num_days())
            }
        })
        .collect()
}

/// Dates whose flag is set, in the order they occur. Input dates are
/// ascending per series, so the result is already sorted.
pub fn flagged_dates(dates: &[Option<NaiveDate>], flags: &[u8]) -> Vec<NaiveDate> {
    dates
        .iter()
        .zip(flags)
        .filter_map(|(date, flag)| if *flag == 1 { *date } else { None })
        .collect()
}
