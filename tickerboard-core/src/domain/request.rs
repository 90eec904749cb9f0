//! RequestContext — the validated input of one dashboard pass.

use chrono::NaiveDate;
use thiserror::Error;

/// Request-level failures. Anything below this level (a symbol with no
/// rows, a non-finite percent change) is absorbed by the pipeline and
/// never aborts the request.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("market data unavailable: {0}")]
    DataUnavailable(String),
}

/// One user interaction's worth of input: which symbols, over which dates.
///
/// Construction validates the preconditions, so a `RequestContext` in hand
/// means the provider may be called. Nothing is retained across requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    symbols: Vec<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl RequestContext {
    /// Build a context from the user's selection, collapsing duplicate
    /// symbols while preserving first-seen order.
    ///
    /// Fails with `InvalidRequest` if the selection is empty or the date
    /// range is inverted, before any fetch is attempted.
    pub fn new(
        symbols: impl IntoIterator<Item = String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, DashboardError> {
        let mut deduped: Vec<String> = Vec::new();
        for sym in symbols {
            if !deduped.contains(&sym) {
                deduped.push(sym);
            }
        }

        if deduped.is_empty() {
            return Err(DashboardError::InvalidRequest(
                "no symbols selected".into(),
            ));
        }
        if start > end {
            return Err(DashboardError::InvalidRequest(format!(
                "start date {start} is after end date {end}"
            )));
        }

        Ok(Self {
            symbols: deduped,
            start,
            end,
        })
    }

    /// Requested symbols in user-selection order, duplicates collapsed.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn dedupes_preserving_selection_order() {
        let ctx = RequestContext::new(
            ["MSFT", "AAPL", "MSFT", "TSLA"].map(String::from),
            date("2024-01-02"),
            date("2024-06-28"),
        )
        .unwrap();
        assert_eq!(ctx.symbols(), ["MSFT", "AAPL", "TSLA"]);
    }

    #[test]
    fn rejects_empty_selection() {
        let err =
            RequestContext::new(Vec::new(), date("2024-01-02"), date("2024-06-28")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = RequestContext::new(
            ["AAPL".to_string()],
            date("2024-06-28"),
            date("2024-01-02"),
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRequest(_)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let ctx = RequestContext::new(
            ["AAPL".to_string()],
            date("2024-01-02"),
            date("2024-01-02"),
        );
        assert!(ctx.is_ok());
    }
}
