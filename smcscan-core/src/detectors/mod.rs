//! Signal detectors — independent causal passes over a candle series.
//!
//! Detectors are stateless and portfolio-agnostic: each receives the shared
//! candle slice and a bar index, and appends zero or more signals for that
//! bar. An implementation must only read `candles[0..=index]`, which makes
//! every detector usable bar-by-bar in a live stream as well as over a full
//! batch replay.

pub mod breaker_block;
pub mod candlestick;
pub mod liquidity_grab;
pub mod market_structure;
pub mod order_block;

use crate::domain::{Candle, Signal};

/// Trait for signal detectors.
///
/// # Architecture invariant
/// Detectors must never inspect bars beyond the current index — no lookahead.
/// They share no mutable state and may run concurrently over the same slice.
pub trait Detector: std::fmt::Debug + Send + Sync {
    /// Machine name used by the factory and scan config (e.g., "order_block").
    fn name(&self) -> &'static str;

    /// First bar index this detector evaluates; earlier bars never emit.
    fn warmup_bars(&self) -> usize;

    /// Evaluate a single bar, appending any signals it produces to `out`.
    ///
    /// A single bar may legitimately append more than one signal (e.g., a
    /// liquidity grab on both sides, or several candlestick patterns).
    fn evaluate(&self, candles: &[Candle], index: usize, out: &mut Vec<Signal>);

    /// Run the detector over the whole series in chronological order.
    ///
    /// A series shorter than `warmup_bars() + 1` yields an empty result —
    /// never an error.
    fn scan(&self, candles: &[Candle]) -> Vec<Signal> {
        let mut out = Vec::new();
        for index in self.warmup_bars()..candles.len() {
            self.evaluate(candles, index, &mut out);
        }
        out
    }
}

/// Null detector — never emits. Used as a stub in tests that don't need
/// real detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDetector;

impl Detector for NullDetector {
    fn name(&self) -> &'static str {
        "null"
    }

    fn warmup_bars(&self) -> usize {
        0
    }

    fn evaluate(&self, _candles: &[Candle], _index: usize, _out: &mut Vec<Signal>) {}
}

// Re-export concrete detector types.
pub use breaker_block::BreakerBlock;
pub use candlestick::CandlestickPatterns;
pub use liquidity_grab::LiquidityGrab;
pub use market_structure::MarketStructureShift;
pub use order_block::OrderBlock;

/// Build candles from (open, high, low, close) tuples with sequential dates.
#[cfg(test)]
pub(crate) fn make_candles(ohlc: &[(f64, f64, f64, f64)]) -> Vec<Candle> {
    use chrono::TimeZone;
    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    ohlc.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Candle {
            time: base + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000.0,
        })
        .collect()
}
