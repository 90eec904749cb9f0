//! Output shaping — plot bundles and the snapshot table.
//!
//! Pure reshaping: no numeric work happens here. The chart collaborator
//! gets per-symbol parallel vectors; the export collaborator gets the
//! snapshot rows untouched.

use crate::domain::{DerivedSeries, SeriesMap};
use super::snapshot::SnapshotRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parallel plottable vectors for one symbol.
///
/// All OHLCV vectors have the same length as `dates`. `pct_changes` has
/// max(0, len(dates) - 1) entries; entry *i* pairs with `dates[i + 1]`,
/// since the first date has no prior close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBundle {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub opens: Vec<f64>,
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub volumes: Vec<u64>,
    pub pct_changes: Vec<f64>,
}

/// Everything one request produces for its consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOutput {
    /// One bundle per requested symbol, selection order, empty vectors for
    /// symbols with no data.
    pub plot_bundles: Vec<PlotBundle>,
    /// Snapshot rows, selection order, symbols with no data excluded.
    pub table_rows: Vec<SnapshotRow>,
}

/// Zip aligned series and derived series into consumer-facing shapes.
pub fn format(
    aligned: &SeriesMap,
    derived: &HashMap<String, DerivedSeries>,
    table_rows: Vec<SnapshotRow>,
) -> DashboardOutput {
    let plot_bundles = aligned
        .iter_ordered()
        .map(|(symbol, rows)| {
            let pct_changes = derived
                .get(symbol)
                .map(|points| points.iter().map(|p| p.pct_change).collect())
                .unwrap_or_default();

            PlotBundle {
                symbol: symbol.to_string(),
                dates: rows.iter().map(|r| r.date).collect(),
                opens: rows.iter().map(|r| r.open).collect(),
                closes: rows.iter().map(|r| r.close).collect(),
                highs: rows.iter().map(|r| r.high).collect(),
                lows: rows.iter().map(|r| r.low).collect(),
                volumes: rows.iter().map(|r| r.volume).collect(),
                pct_changes,
            }
        })
        .collect();

    DashboardOutput {
        plot_bundles,
        table_rows,
    }
}
