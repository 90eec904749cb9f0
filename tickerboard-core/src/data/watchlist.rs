//! Watchlist configuration — the selectable ticker list.
//!
//! Stored as a TOML config file holding the offered tickers, the default
//! selection shown on first load, and the default start date of the
//! requested range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The selectable ticker list and its defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Watchlist {
    pub tickers: Vec<String>,
    pub default_selection: Vec<String>,
    pub default_start: NaiveDate,
}

impl Watchlist {
    /// Load a watchlist from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read watchlist file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a watchlist from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let list: Self = toml::from_str(content).map_err(|e| format!("parse watchlist TOML: {e}"))?;
        for sym in &list.default_selection {
            if !list.tickers.contains(sym) {
                return Err(format!("default selection '{sym}' is not in the ticker list"));
            }
        }
        Ok(list)
    }

    /// Serialize the watchlist to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize watchlist: {e}"))
    }

    /// The built-in large-cap US watchlist.
    pub fn default_us() -> Self {
        Self {
            tickers: [
                "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "IBM", "INTC",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_selection: vec!["AAPL".into(), "MSFT".into()],
            default_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }
}
