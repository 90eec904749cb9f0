//! External data: provider abstraction, Yahoo Finance fetch, per-request
//! series store, watchlist configuration.

pub mod provider;
pub mod store;
pub mod watchlist;
pub mod yahoo;

pub use provider::{MarketDataProvider, ProviderError};
pub use store::load_series;
pub use watchlist::Watchlist;
pub use yahoo::YahooProvider;
