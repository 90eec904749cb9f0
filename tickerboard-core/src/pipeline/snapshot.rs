//! Latest-row snapshot table across symbols.

use crate::domain::SeriesMap;
use serde::{Deserialize, Serialize};

/// One symbol's most recent trading day, ready for tabular display and
/// export. Prices are rounded half-up to 2 decimals at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub symbol: String,
    pub latest_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

/// Round half-up to 2 decimal places.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build the snapshot table from aligned series.
///
/// One row per symbol with data, in selection order. A symbol whose series
/// is empty is excluded outright; callers must not assume one row per
/// requested symbol.
pub fn snapshot(aligned: &SeriesMap) -> Vec<SnapshotRow> {
    aligned
        .iter_ordered()
        .filter_map(|(symbol, rows)| {
            rows.last().map(|last| SnapshotRow {
                symbol: symbol.to_string(),
                latest_close: round2(last.close),
                open: round2(last.open),
                high: round2(last.high),
                low: round2(last.low),
                volume: last.volume,
            })
        })
        .collect()
}
