//! Daily percent-change derivation from the close series.

use crate::domain::{DerivedSeries, PctChangePoint, SeriesMap};
use std::collections::HashMap;

/// Compute the day-over-day percent change of the close for every symbol.
///
/// A series of n rows yields max(0, n-1) points; the first trading day has
/// no prior close and therefore no point. A zero prior close produces a
/// non-finite value which is passed through untouched, never replaced
/// with a default.
pub fn derive(aligned: &SeriesMap) -> HashMap<String, DerivedSeries> {
    aligned
        .iter_ordered()
        .map(|(symbol, rows)| {
            let points = rows
                .windows(2)
                .map(|w| PctChangePoint {
                    date: w[1].date,
                    pct_change: (w[1].close - w[0].close) / w[0].close * 100.0,
                })
                .collect();
            (symbol.to_string(), points)
        })
        .collect()
}
