//! smcscan CLI — scan OHLCV candle files for smart-money signals.
//!
//! Commands:
//! - `scan` — load candles from CSV files (or generate a synthetic series)
//!   and print the detected signals as a table or JSON
//! - `detectors` — list registered detectors in aggregation order
//!
//! The engine itself lives in `smcscan-core`; this binary only feeds it
//! candles and formats what comes back.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smcscan_core::config::ScanConfig;
use smcscan_core::domain::{Candle, Signal};
use smcscan_core::factory::DETECTOR_ORDER;
use smcscan_core::synthetic;

#[derive(Parser)]
#[command(name = "smcscan", about = "smcscan CLI — smart-money candle scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan candle files and print detected signals.
    Scan {
        /// CSV files with time,open,high,low,close,volume columns.
        files: Vec<PathBuf>,

        /// Path to a TOML scan config (detector subset, today_only).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep signals only when the series ends on the reference date.
        #[arg(long, default_value_t = false)]
        today: bool,

        /// Reference date for --today (YYYY-MM-DD). Defaults to the current UTC date.
        #[arg(long)]
        date: Option<String>,

        /// Print signals as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Scan a seeded synthetic random walk instead of files.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Number of synthetic bars.
        #[arg(long, default_value_t = 500)]
        bars: usize,

        /// Seed for the synthetic series.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List registered detectors in aggregation order.
    Detectors,
}

/// One CSV row. `time` is a unix timestamp in seconds or milliseconds.
#[derive(Debug, Deserialize)]
struct CsvCandle {
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Exchange exports commonly carry millisecond timestamps; a seconds value
/// this large is far beyond any plausible candle time.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

fn parse_time(raw: i64) -> Result<DateTime<Utc>> {
    let (secs, millis) = if raw.unsigned_abs() >= MILLIS_THRESHOLD as u64 {
        (raw.div_euclid(1000), raw.rem_euclid(1000))
    } else {
        (raw, 0)
    };
    DateTime::from_timestamp(secs, (millis * 1_000_000) as u32)
        .with_context(|| format!("timestamp out of range: {raw}"))
}

fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut candles = Vec::new();
    for row in reader.deserialize() {
        let row: CsvCandle =
            row.with_context(|| format!("malformed row in {}", path.display()))?;
        candles.push(Candle {
            time: parse_time(row.time)?,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }
    for candle in &candles {
        if !candle.is_sane() {
            bail!(
                "{}: insane candle at {} (high < low or non-positive price)",
                path.display(),
                candle.time
            );
        }
    }
    for pair in candles.windows(2) {
        if pair[1].time <= pair[0].time {
            bail!(
                "{}: candle times must be strictly increasing (got {} after {})",
                path.display(),
                pair[1].time,
                pair[0].time
            );
        }
    }
    Ok(candles)
}

fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(ScanConfig::from_toml_str(&raw)?)
        }
        None => Ok(ScanConfig::default()),
    }
}

fn print_signals(label: &str, signals: &[Signal], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(signals)?);
        return Ok(());
    }
    println!("{label}: {} signal(s)", signals.len());
    for signal in signals {
        println!("  {:<24} {:<8} {:.4}", signal.kind.label(), signal.direction, signal.price);
    }
    Ok(())
}

fn run_scan(
    files: Vec<PathBuf>,
    config: Option<PathBuf>,
    today: bool,
    date: Option<String>,
    json: bool,
    synthetic: bool,
    bars: usize,
    seed: u64,
) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let reference_date = match &date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {raw}"))?,
        None => Utc::now().date_naive(),
    };
    let filter_today = today || config.today_only;

    let scanner = config.build_scanner()?;

    if synthetic {
        // Seeded walk ending today, so --today has something to match.
        let start = Utc::now() - Duration::days(bars.saturating_sub(1) as i64);
        let candles = synthetic::random_walk(start, bars, 100.0, 0.0003, 0.02, seed);
        let signals = if filter_today {
            scanner.scan_on(&candles, reference_date)
        } else {
            scanner.scan(&candles)
        };
        return print_signals("synthetic", &signals, json);
    }

    if files.is_empty() {
        bail!("no input files (pass CSV paths, or use --synthetic)");
    }

    // The scanner is shared read-only across workers; each file scans
    // independently.
    let results: Vec<(PathBuf, Vec<Signal>)> = files
        .par_iter()
        .map(|path| {
            let candles = load_candles(path)?;
            let signals = if filter_today {
                scanner.scan_on(&candles, reference_date)
            } else {
                scanner.scan(&candles)
            };
            info!(file = %path.display(), bars = candles.len(), signals = signals.len(), "scanned");
            Ok((path.clone(), signals))
        })
        .collect::<Result<_>>()?;

    for (path, signals) in &results {
        print_signals(&path.display().to_string(), signals, json)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smcscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            files,
            config,
            today,
            date,
            json,
            synthetic,
            bars,
            seed,
        } => run_scan(files, config, today, date, json, synthetic, bars, seed),
        Commands::Detectors => {
            for name in DETECTOR_ORDER {
                println!("{name}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_timestamps_parse() {
        let t = parse_time(1_704_153_600).unwrap();
        assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn millisecond_timestamps_parse() {
        let t = parse_time(1_704_153_600_000).unwrap();
        assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn absurd_timestamp_is_an_error() {
        assert!(parse_time(i64::MAX).is_err());
    }
}
