//! Scan orchestration — runs detectors in a fixed order, concatenates output.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::detectors::{
    BreakerBlock, CandlestickPatterns, Detector, LiquidityGrab, MarketStructureShift, OrderBlock,
};
use crate::domain::{Candle, Signal};

/// Runs a stack of detectors over a candle series and concatenates their
/// output in stack order.
///
/// The canonical stack order (liquidity grab, order block, breaker block,
/// market structure, candlestick) is the de facto display priority when
/// several kinds reference the same bar — consumers render top to bottom.
/// Per-detector output order is always preserved.
pub struct Scanner {
    detectors: Vec<Box<dyn Detector>>,
}

impl Scanner {
    /// Build a scanner from an explicit detector stack, scanned in the given order.
    pub fn new(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    /// The canonical five-detector stack in its fixed aggregation order.
    pub fn default_stack() -> Self {
        Self::new(vec![
            Box::new(LiquidityGrab),
            Box::new(OrderBlock),
            Box::new(BreakerBlock),
            Box::new(MarketStructureShift),
            Box::new(CandlestickPatterns),
        ])
    }

    /// Detector names in scan order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Scan the full series: each detector passes over the same input
    /// independently, and the outputs are concatenated in stack order.
    pub fn scan(&self, candles: &[Candle]) -> Vec<Signal> {
        let mut signals = Vec::new();
        for detector in &self.detectors {
            let found = detector.scan(candles);
            debug!(detector = detector.name(), count = found.len(), "detector pass complete");
            signals.extend(found);
        }
        info!(bars = candles.len(), signals = signals.len(), "scan complete");
        signals
    }

    /// Scan with the same-day filter applied.
    ///
    /// The filter is coarse: it compares only the **last** bar's date against
    /// `date`. A series ending on the reference date passes in full — signals
    /// from earlier bars included — and anything else yields nothing. Signals
    /// carry no date of their own, so a per-signal filter is not possible.
    pub fn scan_on(&self, candles: &[Candle], date: NaiveDate) -> Vec<Signal> {
        match candles.last() {
            Some(last) if last.date() == date => self.scan(candles),
            _ => Vec::new(),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::default_stack()
    }
}
