//! Series alignment — ascending unique dates per symbol.
//!
//! Providers occasionally deliver rows out of order or with duplicate
//! dates. Alignment re-sorts each series ascending (stable) and keeps the
//! first occurrence of a duplicate date. Calendar gaps are preserved as-is:
//! no forward-fill, no synthetic rows.

use crate::domain::SeriesMap;

/// Normalize every series to strictly ascending unique dates.
///
/// Empty series stay in the map: they still participate in iteration,
/// they just contribute nothing downstream.
pub fn align(mut raw: SeriesMap) -> SeriesMap {
    for rows in raw.series.values_mut() {
        // Stable sort, so first-occurrence-wins survives the dedup below.
        rows.sort_by_key(|r| r.date);
        rows.dedup_by(|later, earlier| later.date == earlier.date);
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyRecord;
    use chrono::NaiveDate;

    fn record(date: &str, close: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1000,
        }
    }

    fn map_of(symbol: &str, rows: Vec<DailyRecord>) -> SeriesMap {
        let mut map = SeriesMap::with_symbols(vec![symbol.into()]);
        map.series.insert(symbol.into(), rows);
        map
    }

    #[test]
    fn sorts_out_of_order_rows() {
        let raw = map_of(
            "AAPL",
            vec![
                record("2024-01-04", 102.0),
                record("2024-01-02", 100.0),
                record("2024-01-03", 101.0),
            ],
        );

        let aligned = align(raw);
        let rows = aligned.series_for("AAPL");
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(rows[0].close, 100.0);
    }

    #[test]
    fn duplicate_dates_keep_first_occurrence() {
        let raw = map_of(
            "AAPL",
            vec![
                record("2024-01-02", 100.0),
                record("2024-01-03", 101.0),
                record("2024-01-03", 999.0),
            ],
        );

        let aligned = align(raw);
        let rows = aligned.series_for("AAPL");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].close, 101.0);
    }

    #[test]
    fn empty_series_is_retained() {
        let raw = map_of("XXXX", Vec::new());
        let aligned = align(raw);
        assert_eq!(aligned.symbols, ["XXXX"]);
        assert!(aligned.series_for("XXXX").is_empty());
    }
}
