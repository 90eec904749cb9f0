//! Tickerboard Report — the export surface of the dashboard.
//!
//! Three export formats for a request's output:
//! - **CSV**: the snapshot table, one row per symbol, fixed column order
//! - **Text report**: the same table as a bordered, paginated document
//!   with a title header and page-number footers
//! - **JSON**: the full plot-bundle set for external charting tools
//!
//! `save_artifacts` writes all three into a timestamped directory.

pub mod export;
pub mod report;

pub use export::{save_artifacts, snapshot_csv};
pub use report::{render_report, ReportLayout};
