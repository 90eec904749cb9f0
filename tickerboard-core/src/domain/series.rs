//! Per-symbol series collections, keyed by symbol but iterated in
//! user-selection order.

use super::record::DailyRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw or aligned per-symbol series for one request.
///
/// Every requested symbol has an entry: a symbol the provider returned
/// nothing for holds an empty `Vec`, never a missing key. `symbols` keeps
/// the user's selection order so every downstream output is reproducible.
#[derive(Debug, Clone)]
pub struct SeriesMap {
    /// Requested symbols in user-selection order.
    pub symbols: Vec<String>,
    /// Rows per symbol.
    pub series: HashMap<String, Vec<DailyRecord>>,
}

impl SeriesMap {
    /// An empty map covering the given symbols.
    pub fn with_symbols(symbols: Vec<String>) -> Self {
        let series = symbols
            .iter()
            .map(|s| (s.clone(), Vec::new()))
            .collect();
        Self { symbols, series }
    }

    /// The rows for one symbol; empty slice for anything unknown.
    pub fn series_for(&self, symbol: &str) -> &[DailyRecord] {
        self.series.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate (symbol, rows) pairs in selection order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&str, &[DailyRecord])> {
        self.symbols
            .iter()
            .map(|sym| (sym.as_str(), self.series_for(sym)))
    }
}

/// One day-over-day percent move of the closing price.
///
/// The point for day *i* carries day *i*'s date; the first day of a series
/// has no point at all (there is no prior close), so a series of n rows
/// yields max(0, n-1) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PctChangePoint {
    pub date: NaiveDate,
    pub pct_change: f64,
}

/// Percent-change points for one symbol.
pub type DerivedSeries = Vec<PctChangePoint>;
