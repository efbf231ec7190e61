//! Market structure shift detector — a close beyond the two-bars-back extreme.

use super::Detector;
use crate::domain::{Candle, Direction, Signal, SignalKind};

/// Detects trend-direction changes against the extreme two bars back.
///
/// The two directions are checked as a strict else-if: the bearish branch is
/// only evaluated when the bullish one did not match, so a bar emits at most
/// one MSS signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketStructureShift;

impl Detector for MarketStructureShift {
    fn name(&self) -> &'static str {
        "market_structure"
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
        let reference = &candles[index - 2];

        if bar.close > reference.high {
            out.push(Signal {
                kind: SignalKind::MssBullish,
                direction: Direction::Buy,
                price: bar.close,
            });
        } else if bar.close < reference.low {
            out.push(Signal {
                kind: SignalKind::MssBearish,
                direction: Direction::Sell,
                price: bar.close,
            });
        }
    }
}
