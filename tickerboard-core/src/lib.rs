//! Tickerboard Core — multi-symbol time-series aggregation and snapshot
//! derivation for the stock dashboard.
//!
//! This crate contains the heart of the dashboard:
//! - Domain types (daily records, per-symbol series maps, request context)
//! - Market-data provider trait with the Yahoo Finance implementation
//! - Per-request series store (one batched fetch, no retained state)
//! - Alignment (ascending unique dates, first-occurrence-wins dedup)
//! - Percent-change derivation with explicit non-finite passthrough
//! - Snapshot table and plot-bundle output shaping
//!
//! Chart rendering, widget layout and document byte formats live with the
//! consumers of `DashboardOutput`; this crate only defines the shapes they
//! are handed.

pub mod data;
pub mod domain;
pub mod pipeline;
