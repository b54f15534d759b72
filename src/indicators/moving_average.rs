//! Simple moving averages, deviation ratios and the perfect-order flag.

/// Trailing simple mean over `window` observations.
///
/// The first `window - 1` positions are `None`, as is any position whose
/// window contains a missing value (full-window semantics).
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        let mut sum = 0.0;
        let mut complete = true;
        for value in slice {
            match value {
                Some(v) => sum += v,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}

/// Percentage deviation of close from its moving average:
/// `(close - ma) / ma * 100`. A null or zero MA yields `None`.
pub fn deviation_pct(closes: &[Option<f64>], ma: &[Option<f64>]) -> Vec<Option<f64>> {
    closes
        .iter()
        .zip(ma)
        .map(|(close, ma)| match (close, ma) {
            (Some(c), Some(m)) if *m != 0.0 => Some((c - m) / m * 100.0),
            _ => None,
        })
        .collect()
}

/// 1 where short MA > middle MA > long MA strictly, else 0.
/// Any null operand makes the comparison false.
pub fn perfect_order(
    short: &[Option<f64>],
    middle: &[Option<f64>],
    long: &[Option<f64>],
) -> Vec<u8> {
    (0..short.len())
        .map(|i| match (short[i], middle[i], long[i]) {
            (Some(s), Some(m), Some(l)) if s > m && m > l => 1,
            _ => 0,
        })
        .collect()
}
