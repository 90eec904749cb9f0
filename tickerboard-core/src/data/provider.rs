//! Market-data provider trait and structured error types.
//!
//! The MarketDataProvider trait abstracts over the external data source
//! (Yahoo Finance in production) so the pipeline can be exercised against
//! a mock in tests.

use crate::domain::DailyRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// Faults raised by a provider implementation. Any of these is fatal to
/// the request that triggered the fetch; the store maps them all to
/// `DashboardError::DataUnavailable`. There is no automatic retry.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("provider error: {0}")]
    Other(String),
}

/// Trait for market-data providers.
///
/// `fetch` is one batched call covering every requested symbol for the
/// whole date range; it is the only blocking operation in a request.
/// A symbol the provider knows nothing about (invalid ticker, no trading
/// days in range) maps to an empty row list or may be absent from the
/// returned map entirely; absence is not a fault.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV rows for all symbols over a date range.
    fn fetch(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, Vec<DailyRecord>>, ProviderError>;
}
