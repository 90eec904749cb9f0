//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Alignment — output strictly ascending by date, no duplicates
//! 2. Derivation — length law and date pairing
//! 3. Idempotence — same raw content, same output
//! 4. Snapshot — row count/order law and the rounding law

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tickerboard_core::domain::{DailyRecord, SeriesMap};
use tickerboard_core::pipeline::{align, derive, format, snapshot};

// ── Strategies (proptest) ────────────────────────────────────────────

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Unsorted rows with possible duplicate dates.
fn arb_rows() -> impl Strategy<Value = Vec<DailyRecord>> {
    prop::collection::vec((0i64..120, 1.0..500.0_f64, 0u64..1_000_000), 0..40).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(offset, close, volume)| DailyRecord {
                    date: base_date() + Duration::days(offset),
                    open: close * 0.99,
                    high: close * 1.02,
                    low: close * 0.97,
                    close,
                    volume,
                })
                .collect()
        },
    )
}

fn map_of(rows: Vec<DailyRecord>) -> SeriesMap {
    let mut map = SeriesMap::with_symbols(vec!["SYM".into()]);
    map.series.insert("SYM".into(), rows);
    map
}

// ── 1. Alignment ─────────────────────────────────────────────────────

proptest! {
    /// Aligned output is strictly ascending by date with no duplicates.
    #[test]
    fn aligned_series_strictly_ascending(rows in arb_rows()) {
        let aligned = align::align(map_of(rows));
        let out = aligned.series_for("SYM");
        for w in out.windows(2) {
            prop_assert!(w[0].date < w[1].date);
        }
    }

    /// Alignment never invents rows: output dates are a subset of input dates.
    #[test]
    fn alignment_only_drops_duplicates(rows in arb_rows()) {
        let input_dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let aligned = align::align(map_of(rows));
        for rec in aligned.series_for("SYM") {
            prop_assert!(input_dates.contains(&rec.date));
        }
    }
}

// ── 2. Derivation ────────────────────────────────────────────────────

proptest! {
    /// A series of n rows derives exactly max(0, n-1) points, each carrying
    /// the date of the later row of its pair.
    #[test]
    fn derived_length_and_date_pairing(rows in arb_rows()) {
        let aligned = align::align(map_of(rows));
        let derived = derive::derive(&aligned);

        let series = aligned.series_for("SYM");
        let points = &derived["SYM"];
        prop_assert_eq!(points.len(), series.len().saturating_sub(1));
        for (i, point) in points.iter().enumerate() {
            prop_assert_eq!(point.date, series[i + 1].date);
        }
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Running the full in-memory pipeline twice on identical raw content
    /// yields identical plot bundles and snapshot rows.
    #[test]
    fn pipeline_is_idempotent(rows in arb_rows()) {
        let run = |raw: SeriesMap| {
            let aligned = align::align(raw);
            let derived = derive::derive(&aligned);
            let table = snapshot::snapshot(&aligned);
            format::format(&aligned, &derived, table)
        };

        let raw = map_of(rows);
        let first = run(raw.clone());
        let second = run(raw);
        prop_assert_eq!(first, second);
    }
}

// ── 4. Snapshot ──────────────────────────────────────────────────────

proptest! {
    /// One row per non-empty symbol, in selection order; every price equals
    /// the source value rounded to exactly 2 decimals, volume untouched.
    #[test]
    fn snapshot_rounding_and_order(a in arb_rows(), b in arb_rows()) {
        let round2 = |v: f64| (v * 100.0).round() / 100.0;

        let mut map = SeriesMap::with_symbols(vec!["AAA".into(), "BBB".into()]);
        map.series.insert("AAA".into(), a);
        map.series.insert("BBB".into(), b);
        let aligned = align::align(map);

        let rows = snapshot::snapshot(&aligned);

        let expected_symbols: Vec<&str> = aligned
            .iter_ordered()
            .filter(|(_, series)| !series.is_empty())
            .map(|(sym, _)| sym)
            .collect();
        let got_symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
        prop_assert_eq!(got_symbols, expected_symbols);

        for row in &rows {
            let last = aligned.series_for(&row.symbol).last().unwrap();
            prop_assert_eq!(row.latest_close, round2(last.close));
            prop_assert_eq!(row.open, round2(last.open));
            prop_assert_eq!(row.high, round2(last.high));
            prop_assert_eq!(row.low, round2(last.low));
            prop_assert_eq!(row.volume, last.volume);
        }
    }
}
