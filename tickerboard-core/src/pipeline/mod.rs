//! The request pipeline: load → align → derive → snapshot → format.

pub mod align;
pub mod derive;
pub mod format;
pub mod snapshot;

pub use format::{DashboardOutput, PlotBundle};
pub use snapshot::SnapshotRow;

use crate::data::{self, MarketDataProvider};
use crate::domain::{DashboardError, RequestContext};

/// Run one full dashboard pass for a validated request.
///
/// A single synchronous sweep with no retained state: the provider is
/// called exactly once, then alignment, derivation, snapshot and output
/// shaping run in order. Identical raw content yields identical output.
pub fn run_request(
    provider: &dyn MarketDataProvider,
    ctx: &RequestContext,
) -> Result<DashboardOutput, DashboardError> {
    let raw = data::load_series(provider, ctx)?;
    let aligned = align::align(raw);
    let derived = derive::derive(&aligned);
    let table_rows = snapshot::snapshot(&aligned);
    Ok(format::format(&aligned, &derived, table_rows))
}
