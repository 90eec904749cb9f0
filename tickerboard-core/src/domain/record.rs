//! DailyRecord — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV values for a single symbol on a single trading day.
///
/// Prices arrive split/dividend-adjusted from the provider. OHLC ordering
/// (`low <= open <= high` and so on) is not validated anywhere in the
/// pipeline: upstream data is carried as delivered, including NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyRecord {
    /// Returns true if any price field is NaN (a gap row from the provider).
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }
}
