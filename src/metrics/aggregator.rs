//! Applies the indicator pipeline to every security partition of a frame.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::indicators::compute_indicators;
use crate::models::frame::{MarketFrame, PRICE_COLUMNS};
use crate::models::indicators::IndicatorRow;

/// Run the indicator pipeline over each security in `frame` and
/// concatenate the results.
///
/// The frame must carry the daily-price schema; a missing column is a
/// configuration error raised before any per-partition work. Partitions
/// are independent and keep their original row order; partitions the
/// pipeline reports as empty are skipped with a warning, so the output
/// row count equals the input minus those rows only.
pub fn aggregate_metrics(
    frame: &MarketFrame,
    config: &IndicatorConfig,
) -> Result<Vec<IndicatorRow>> {
    frame.require(PRICE_COLUMNS)?;
    config.validate()?;

    // Partition row indices by code, keeping first-seen code order and
    // original row order within each partition.
    let mut order: Vec<&str> = Vec::new();
    let mut partitions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, row) in frame.rows().iter().enumerate() {
        let Some(code) = row.code.as_deref() else {
            warn!(row = i, "row without a security code skipped");
            continue;
        };
        match partitions.entry(code) {
            Entry::Vacant(entry) => {
                order.push(code);
                entry.insert(vec![i]);
            }
            Entry::Occupied(mut entry) => entry.get_mut().push(i),
        }
    }
    debug!(partitions = order.len(), rows = frame.len(), "aggregating metrics");

    let mut out = Vec::with_capacity(frame.len());
    for code in order {
        let indices = &partitions[code];
        let series: Vec<_> = indices.iter().map(|&i| frame.rows()[i].clone()).collect();
        let rows = compute_indicators(&series, config)?;
        // Today the pipeline returns no rows only for an empty series;
        // the skip keeps the row-count contract should it ever filter a
        // whole partition.
        if rows.is_empty() {
            warn!(code, "empty partition skipped");
            continue;
        }
        out.extend(rows);
    }
    Ok(out)
}
