//! Liquidity grab detector — a wick beyond a prior extreme that fails to hold.
//!
//! Price trading through the previous bar's high (or low) sweeps the resting
//! stops there; closing back inside marks the move as a failed breakout. A
//! high-side grab is bearish, a low-side grab bullish.

use super::Detector;
use crate::domain::{Candle, Direction, Signal, SignalKind};

/// Detects stop-hunts against the previous bar's extremes.
///
/// The two sides are evaluated independently — a single wide-ranging bar can
/// grab both pools and emit both signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityGrab;

impl Detector for LiquidityGrab {
    fn name(&self) -> &'static str {
        "liquidity_grab"
    }

    fn warmup_bars(&self) -> usize {
        2
    }

    fn evaluate(&self, candles: &[Candle], index: usize, out: &mut Vec<Signal>) {
        if index < self.warmup_bars() {
            return;
        }
        let Some(bar) = candles.get(index) else {
            return;
        };
        let prev = &candles[index - 1];

        if bar.high > prev.high && bar.close < prev.high {
            out.push(Signal {
                kind: SignalKind::LiquidityGrabHigh,
                direction: Direction::Sell,
                price: bar.close,
            });
        }
        if bar.low < prev.low && bar.close > prev.low {
            out.push(Signal {
                kind: SignalKind::LiquidityGrabLow,
                direction: Direction::Buy,
                price: bar.close,
            });
        }
    }
}
