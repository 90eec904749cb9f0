//! CSV, JSON, and artifact-bundle generation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tickerboard_core::pipeline::{DashboardOutput, SnapshotRow};

/// Fixed export column order of the snapshot table.
pub const SNAPSHOT_COLUMNS: [&str; 6] = [
    "Symbol",
    "Latest Price",
    "Opening Price",
    "High",
    "Low",
    "Volume",
];

/// One snapshot row as export cells, column order matching
/// `SNAPSHOT_COLUMNS`. Prices carry exactly two decimals.
pub fn row_cells(row: &SnapshotRow) -> [String; 6] {
    [
        row.symbol.clone(),
        format!("{:.2}", row.latest_close),
        format!("{:.2}", row.open),
        format!("{:.2}", row.high),
        format!("{:.2}", row.low),
        row.volume.to_string(),
    ]
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Render the snapshot table as UTF-8 CSV with a header row.
pub fn snapshot_csv(rows: &[SnapshotRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(SNAPSHOT_COLUMNS)?;
    for row in rows {
        wtr.write_record(row_cells(row))?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize the full request output (plot bundles + table) to pretty JSON.
pub fn export_json(output: &DashboardOutput) -> Result<String> {
    serde_json::to_string_pretty(output).context("failed to serialize DashboardOutput to JSON")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one request.
///
/// Creates a directory named `snapshot_{timestamp}/` under `output_dir`
/// containing:
/// - `snapshot.csv` — the snapshot table
/// - `report.txt` — the paginated table document
/// - `plot_bundles.json` — the full `DashboardOutput`
///
/// Returns the path to the created directory.
pub fn save_artifacts(output: &DashboardOutput, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!("snapshot_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let csv = snapshot_csv(&output.table_rows)?;
    std::fs::write(run_dir.join("snapshot.csv"), &csv)?;

    let report = crate::report::render_report(&output.table_rows, &crate::report::ReportLayout::default());
    std::fs::write(run_dir.join("report.txt"), &report)?;

    let json = export_json(output)?;
    std::fs::write(run_dir.join("plot_bundles.json"), &json)?;

    Ok(run_dir)
}
