//! Breaker block detector — a breakout through a bar that closed against it.
//!
//! The reference bar sits two periods back: a close above its high when it
//! was itself down-closing (or below its low when it was up-closing) marks a
//! reversal structure.

use super::Detector;
use crate::domain::{Candle, Direction, Signal, SignalKind};

/// Detects breakout closes through the two-bars-back reference extreme.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakerBlock;

impl Detector for BreakerBlock {
    fn name(&self) -> &'static str {
        "breaker_block"
    }

    fn warmup_bars(&self) -> usize {
        3
    }

    fn evaluate(&self, candles: &[Candle], index: usize, out: &mut Vec<Signal>) {
        if index < self.warmup_bars() {
            return;
        }
        let Some(bar) = candles.get(index) else {
            return;
        };
        let reference = &candles[index - 2];

        if bar.close > reference.high && reference.is_bearish() {
            out.push(Signal {
                kind: SignalKind::BullishBreakerBlock,
                direction: Direction::Buy,
                price: bar.close,
            });
        }
        if bar.close < reference.low && reference.is_bullish() {
            out.push(Signal {
                kind: SignalKind::BearishBreakerBlock,
                direction: Direction::Sell,
                price: bar.close,
            });
        }
    }
}
