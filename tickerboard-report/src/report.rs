//! Paginated table document — the printable form of the snapshot.
//!
//! Renders the snapshot rows as a bordered table with a centered title on
//! every page and a centered `Page N` footer, the layout a document
//! exporter would hand to a page renderer. Column widths are equal:
//! usable page width divided by the column count.

use crate::export::{row_cells, SNAPSHOT_COLUMNS};
use tickerboard_core::pipeline::SnapshotRow;

/// Page geometry and title of the rendered document.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub title: String,
    /// Total character width of a page.
    pub page_width: usize,
    /// Left/right margin, in characters.
    pub margin: usize,
    /// Data rows per page before a page break.
    pub rows_per_page: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            title: "Stock Market Snapshot".into(),
            page_width: 96,
            margin: 2,
            rows_per_page: 40,
        }
    }
}

/// Render the snapshot table as a paginated text document.
pub fn render_report(rows: &[SnapshotRow], layout: &ReportLayout) -> String {
    let cols = SNAPSHOT_COLUMNS.len();
    let usable = layout.page_width.saturating_sub(2 * layout.margin);
    let col_width = (usable / cols).max(3);
    let margin = " ".repeat(layout.margin);

    let rows_per_page = layout.rows_per_page.max(1);
    let pages: Vec<&[SnapshotRow]> = if rows.is_empty() {
        vec![&[]]
    } else {
        rows.chunks(rows_per_page).collect()
    };

    let mut doc = String::new();
    for (page_no, page_rows) in pages.iter().enumerate() {
        if page_no > 0 {
            doc.push('\n');
        }

        doc.push_str(&center(&layout.title, layout.page_width));
        doc.push_str("\n\n");

        doc.push_str(&margin);
        doc.push_str(&rule(col_width, cols));
        doc.push('\n');

        doc.push_str(&margin);
        doc.push_str(&table_line(&SNAPSHOT_COLUMNS.map(String::from), col_width));
        doc.push('\n');

        doc.push_str(&margin);
        doc.push_str(&rule(col_width, cols));
        doc.push('\n');

        for row in *page_rows {
            doc.push_str(&margin);
            doc.push_str(&table_line(&row_cells(row), col_width));
            doc.push('\n');
        }

        doc.push_str(&margin);
        doc.push_str(&rule(col_width, cols));
        doc.push('\n');

        doc.push('\n');
        doc.push_str(&center(&format!("Page {}", page_no + 1), layout.page_width));
        doc.push('\n');
    }

    doc
}

/// A `+----+----+` horizontal rule.
fn rule(col_width: usize, cols: usize) -> String {
    let mut line = String::from("+");
    for _ in 0..cols {
        line.push_str(&"-".repeat(col_width));
        line.push('+');
    }
    line
}

/// One bordered table line, every cell padded or truncated to `col_width`.
fn table_line(cells: &[String; 6], col_width: usize) -> String {
    let mut line = String::from("|");
    for cell in cells {
        let mut text = cell.clone();
        if text.len() > col_width {
            text.truncate(col_width);
        }
        line.push_str(&format!("{text:<col_width$}"));
        line.push('|');
    }
    line
}

fn center(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let pad = (width - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str) -> SnapshotRow {
        SnapshotRow {
            symbol: symbol.into(),
            latest_close: 185.5,
            open: 184.0,
            high: 186.25,
            low: 183.75,
            volume: 48_000_000,
        }
    }

    #[test]
    fn single_page_has_title_table_and_footer() {
        let doc = render_report(&[row("AAPL")], &ReportLayout::default());

        assert!(doc.contains("Stock Market Snapshot"));
        assert!(doc.contains("Page 1"));
        assert!(doc.contains("AAPL"));
        assert!(doc.contains("185.50"));
        assert!(!doc.contains("Page 2"));
    }

    #[test]
    fn rows_flow_across_pages_with_numbered_footers() {
        let rows: Vec<SnapshotRow> = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]
            .iter()
            .map(|s| row(s))
            .collect();
        let layout = ReportLayout {
            rows_per_page: 2,
            ..ReportLayout::default()
        };

        let doc = render_report(&rows, &layout);
        assert!(doc.contains("Page 3"));
        assert!(!doc.contains("Page 4"));
        // Header row repeats on every page
        assert_eq!(doc.matches("Symbol").count(), 3);
        assert!(doc.contains("TSLA"));
    }

    #[test]
    fn all_table_lines_share_one_width() {
        let doc = render_report(&[row("AAPL"), row("MSFT")], &ReportLayout::default());
        let widths: Vec<usize> = doc
            .lines()
            .filter(|l| {
                let t = l.trim_start();
                t.starts_with('|') || t.starts_with('+')
            })
            .map(|l| l.len())
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn oversized_cells_are_truncated_to_the_column() {
        let layout = ReportLayout {
            page_width: 40,
            margin: 2,
            ..ReportLayout::default()
        };
        let doc = render_report(&[row("EXTREMELYLONGTICKER")], &layout);
        // usable 36 / 6 cols = 6 chars per cell
        assert!(doc.contains("EXTREM"));
        assert!(!doc.contains("EXTREMELYLONGTICKER"));
    }

    #[test]
    fn empty_table_still_renders_one_page() {
        let doc = render_report(&[], &ReportLayout::default());
        assert!(doc.contains("Stock Market Snapshot"));
        assert!(doc.contains("Page 1"));
    }
}
