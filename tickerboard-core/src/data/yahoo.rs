//! Yahoo Finance data provider.
//!
//! Fetches daily OHLCV rows from Yahoo's v8 chart API, one request per
//! symbol inside the single batched `fetch` call. Closes arrive with a
//! separate adjusted-close track; the adjustment ratio is applied to all
//! four price columns so downstream consumers see split/dividend-adjusted
//! values throughout.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; format drift surfaces as `ProviderError::ResponseFormat`.

use super::provider::{MarketDataProvider, ProviderError};
use crate::domain::DailyRecord;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    /// Provider with the default 30-second request timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Provider with a caller-chosen request timeout. A request that
    /// exceeds it fails with `ProviderError::Timeout` instead of hanging.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the chart API URL for a symbol and date range.
    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d\
             &includeAdjustedClose=true"
        )
    }

    /// Parse the chart API response into adjusted daily rows.
    ///
    /// A "Not Found" error code or an empty timestamp track yields an
    /// empty series; an unknown ticker is not a request-level fault.
    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<DailyRecord>, ProviderError> {
        let result = match resp.chart.result {
            Some(result) => result,
            None => {
                return match resp.chart.error {
                    Some(err) if err.code == "Not Found" => {
                        log::warn!("{symbol}: unknown to provider, treating as empty series");
                        Ok(Vec::new())
                    }
                    Some(err) => Err(ProviderError::ResponseFormat(format!(
                        "{}: {}",
                        err.code, err.description
                    ))),
                    None => Err(ProviderError::ResponseFormat(
                        "empty result with no error".into(),
                    )),
                };
            }
        };

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("result array is empty".into()))?;

        let timestamps = match data.timestamp {
            Some(ts) => ts,
            // No trading days in range
            None => return Ok(Vec::new()),
        };

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("no quote data".into()))?;

        let adj_closes = data
            .indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let n = timestamps.len();
        let mut rows = Vec::with_capacity(n);

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    ProviderError::ResponseFormat(format!("invalid timestamp: {ts}"))
                })?;

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();
            let adj_close = adj_closes
                .as_ref()
                .and_then(|v| v.get(i).copied().flatten());

            // Skip rows where all OHLCV are None (holidays/non-trading days)
            if open.is_none()
                && high.is_none()
                && low.is_none()
                && close.is_none()
                && volume.is_none()
            {
                continue;
            }

            let open = open.unwrap_or(f64::NAN);
            let high = high.unwrap_or(f64::NAN);
            let low = low.unwrap_or(f64::NAN);
            let close = close.unwrap_or(f64::NAN);

            // Scale OHLC by the adjustment ratio when both tracks are usable.
            let ratio = match (adj_close, close) {
                (Some(adj), c) if c != 0.0 && c.is_finite() && adj.is_finite() => adj / c,
                _ => 1.0,
            };

            rows.push(DailyRecord {
                date,
                open: open * ratio,
                high: high * ratio,
                low: low * ratio,
                close: close * ratio,
                volume: volume.unwrap_or(0),
            });
        }

        Ok(rows)
    }

    /// One HTTP round trip for one symbol.
    fn fetch_symbol(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, ProviderError> {
        let url = Self::chart_url(symbol, start, end);

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::NetworkUnreachable(e.to_string())
            }
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            log::warn!("{symbol}: provider returned 404, treating as empty series");
            return Ok(Vec::new());
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ProviderError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            return Err(ProviderError::Other(format!("HTTP {status} for {symbol}")));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            ProviderError::ResponseFormat(format!("failed to parse response for {symbol}: {e}"))
        })?;

        Self::parse_response(symbol, chart)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, Vec<DailyRecord>>, ProviderError> {
        let mut out = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let rows = self.fetch_symbol(symbol, start, end)?;
            log::debug!("{symbol}: fetched {} rows from {start} to {end}", rows.len());
            out.insert(symbol.clone(), rows);
        }
        Ok(out)
    }
}
