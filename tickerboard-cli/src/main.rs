//! Tickerboard CLI — snapshot, export, and watchlist commands.
//!
//! Commands:
//! - `snapshot` — fetch the selected symbols and print the latest-day table
//! - `export` — fetch and write the artifact set (CSV, report, JSON)
//! - `watchlist` — print the configured ticker list and defaults

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tickerboard_core::data::{Watchlist, YahooProvider};
use tickerboard_core::domain::RequestContext;
use tickerboard_core::pipeline::{run_request, DashboardOutput};
use tickerboard_report::save_artifacts;

#[derive(Parser)]
#[command(
    name = "tickerboard",
    about = "Tickerboard CLI — multi-symbol stock snapshot and export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the selected symbols and print the latest market snapshot.
    Snapshot {
        /// Symbols to view (e.g., AAPL MSFT). Defaults to the watchlist selection.
        symbols: Vec<String>,

        /// Start date (YYYY-MM-DD). Defaults to the watchlist start date.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Watchlist TOML file. Defaults to the built-in US large-cap list.
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Provider request timeout in seconds.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Fetch and write snapshot.csv, report.txt, and plot_bundles.json.
    Export {
        /// Symbols to export. Defaults to the watchlist selection.
        symbols: Vec<String>,

        /// Start date (YYYY-MM-DD). Defaults to the watchlist start date.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Watchlist TOML file. Defaults to the built-in US large-cap list.
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Provider request timeout in seconds.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,

        /// Output directory for the artifact set.
        #[arg(long, default_value = "exports")]
        output_dir: PathBuf,
    },
    /// Print the configured ticker list and its defaults.
    Watchlist {
        /// Watchlist TOML file. Defaults to the built-in US large-cap list.
        #[arg(long)]
        watchlist: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            symbols,
            start,
            end,
            watchlist,
            timeout_secs,
        } => {
            let output = fetch(symbols, start, end, watchlist, timeout_secs)?;
            print_snapshot(&output);
            Ok(())
        }
        Commands::Export {
            symbols,
            start,
            end,
            watchlist,
            timeout_secs,
            output_dir,
        } => {
            let output = fetch(symbols, start, end, watchlist, timeout_secs)?;
            let run_dir = save_artifacts(&output, &output_dir)?;
            println!("Artifacts saved to: {}", run_dir.display());
            Ok(())
        }
        Commands::Watchlist { watchlist } => {
            let list = load_watchlist(watchlist)?;
            println!("Tickers:   {}", list.tickers.join(" "));
            println!("Defaults:  {}", list.default_selection.join(" "));
            println!("Start:     {}", list.default_start);
            Ok(())
        }
    }
}

fn load_watchlist(path: Option<PathBuf>) -> Result<Watchlist> {
    match path {
        Some(p) => Watchlist::from_file(&p).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(Watchlist::default_us()),
    }
}

/// Resolve defaults, validate the request, and run one pipeline pass.
fn fetch(
    symbols: Vec<String>,
    start: Option<String>,
    end: Option<String>,
    watchlist: Option<PathBuf>,
    timeout_secs: u64,
) -> Result<DashboardOutput> {
    let list = load_watchlist(watchlist)?;

    let symbols = if symbols.is_empty() {
        list.default_selection.clone()
    } else {
        symbols
    };

    let start_date = match start {
        Some(s) => parse_date(&s)?,
        None => list.default_start,
    };
    let end_date = match end {
        Some(s) => parse_date(&s)?,
        None => chrono::Local::now().date_naive(),
    };

    let ctx = RequestContext::new(symbols, start_date, end_date)?;
    let provider = YahooProvider::with_timeout(Duration::from_secs(timeout_secs));

    Ok(run_request(&provider, &ctx)?)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => Ok(d),
        Err(_) => bail!("invalid date '{s}', expected YYYY-MM-DD"),
    }
}

fn print_snapshot(output: &DashboardOutput) {
    println!();
    println!("=== Latest Market Snapshot ===");
    println!(
        "{:<8} {:>14} {:>14} {:>12} {:>12} {:>14}",
        "Symbol", "Latest Price", "Opening Price", "High", "Low", "Volume"
    );
    println!("{}", "-".repeat(78));
    for row in &output.table_rows {
        println!(
            "{:<8} {:>14.2} {:>14.2} {:>12.2} {:>12.2} {:>14}",
            row.symbol, row.latest_close, row.open, row.high, row.low, row.volume
        );
    }

    println!();
    for bundle in &output.plot_bundles {
        if bundle.dates.is_empty() {
            println!("WARNING: {}: no data in requested range", bundle.symbol);
            continue;
        }
        match bundle.pct_changes.last() {
            Some(pct) if pct.is_finite() => println!(
                "{:<8} {} trading days, last change {:+.2}%",
                bundle.symbol,
                bundle.dates.len(),
                pct
            ),
            _ => println!(
                "{:<8} {} trading days",
                bundle.symbol,
                bundle.dates.len()
            ),
        }
    }
    println!();
}
