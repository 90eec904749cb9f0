//! Raw series store — one batched provider fetch per request.

use super::provider::MarketDataProvider;
use crate::domain::{DashboardError, RequestContext, SeriesMap};

/// Load raw per-symbol series for a request.
///
/// One batched provider call covers all symbols. A symbol the provider
/// returned nothing for stays in the map with an empty series; a provider
/// fault fails the whole request with `DataUnavailable` and no partial
/// state is kept.
pub fn load_series(
    provider: &dyn MarketDataProvider,
    ctx: &RequestContext,
) -> Result<SeriesMap, DashboardError> {
    let mut fetched = provider
        .fetch(ctx.symbols(), ctx.start(), ctx.end())
        .map_err(|e| DashboardError::DataUnavailable(e.to_string()))?;

    let mut map = SeriesMap::with_symbols(ctx.symbols().to_vec());
    for symbol in &map.symbols {
        if let Some(rows) = fetched.remove(symbol) {
            if rows.is_empty() {
                log::warn!("{symbol}: no rows in requested range");
            }
            map.series.insert(symbol.clone(), rows);
        } else {
            log::warn!("{symbol}: absent from provider response, treating as empty series");
        }
    }
    Ok(map)
}
