//! Candlestick pattern detector — per-bar geometry against the predecessor.
//!
//! Four independent categories: engulfing, pin bar, doji, inside bar. Each
//! category that matches appends its own signal, so one bar can carry several
//! pattern signals at once (a bullish pin bar on a wide-ranging bar is often
//! also a doji). Within engulfing and pin bar, the two directions exclude
//! each other on the same bar.

use super::Detector;
use crate::domain::{Candle, Direction, Signal, SignalKind};

/// Wick-to-body (and wick-to-opposite-wick) multiple a pin bar must exceed.
const PIN_WICK_RATIO: f64 = 2.0;

/// Body-to-range ceiling for a doji.
const DOJI_BODY_RATIO: f64 = 0.1;

/// Classifies single-bar and two-bar candlestick patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickPatterns;

impl Detector for CandlestickPatterns {
    fn name(&self) -> &'static str {
        "candlestick"
    }

    fn warmup_bars(&self) -> usize {
        1
    }

    fn evaluate(&self, candles: &[Candle], index: usize, out: &mut Vec<Signal>) {
        if index < self.warmup_bars() {
            return;
        }
        let Some(bar) = candles.get(index) else {
            return;
        };
        let prev = &candles[index - 1];

        let body = bar.body();
        let range = bar.range();
        let upper_wick = bar.upper_wick();
        let lower_wick = bar.lower_wick();

        // Engulfing: a close beyond the prior bar's open, against its color.
        if bar.is_bullish() && prev.is_bearish() && bar.close > prev.open {
            out.push(Signal {
                kind: SignalKind::BullishEngulfing,
                direction: Direction::Buy,
                price: bar.close,
            });
        } else if bar.is_bearish() && prev.is_bullish() && bar.close < prev.open {
            out.push(Signal {
                kind: SignalKind::BearishEngulfing,
                direction: Direction::Sell,
                price: bar.close,
            });
        }

        // Pin bar: one wick dominates both the body and the opposite wick.
        if upper_wick > PIN_WICK_RATIO * body && upper_wick > PIN_WICK_RATIO * lower_wick {
            out.push(Signal {
                kind: SignalKind::BearishPinBar,
                direction: Direction::Sell,
                price: bar.close,
            });
        } else if lower_wick > PIN_WICK_RATIO * body && lower_wick > PIN_WICK_RATIO * upper_wick {
            out.push(Signal {
                kind: SignalKind::BullishPinBar,
                direction: Direction::Buy,
                price: bar.close,
            });
        }

        // Doji: negligible body relative to the full range. Non-strict
        // compare, no division: a zero-range bar qualifies exactly when its
        // body is also zero.
        if body <= DOJI_BODY_RATIO * range {
            out.push(Signal {
                kind: SignalKind::Doji,
                direction: Direction::Neutral,
                price: bar.close,
            });
        }

        // Inside bar: the whole range sits strictly inside the predecessor's.
        if bar.high < prev.high && bar.low > prev.low {
            out.push(Signal {
                kind: SignalKind::InsideBar,
                direction: Direction::Neutral,
                price: bar.close,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::make_candles;

    fn kinds(signals: &[Signal]) -> Vec<SignalKind> {
        signals.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn bullish_engulfing_fires() {
        // Prev closed down from 100; bar closes up beyond 100.
        let candles = make_candles(&[(100.0, 101.0, 97.0, 98.0), (98.0, 102.0, 97.5, 101.0)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(kinds(&out).contains(&SignalKind::BullishEngulfing));
        assert_eq!(out[0].direction, Direction::Buy);
        assert_eq!(out[0].price, 101.0);
    }

    #[test]
    fn bearish_engulfing_fires() {
        // Prev closed up from 98; bar closes down beyond 98.
        let candles = make_candles(&[(98.0, 101.0, 97.0, 100.0), (100.0, 100.5, 96.0, 97.0)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(kinds(&out).contains(&SignalKind::BearishEngulfing));
    }

    #[test]
    fn up_close_short_of_prior_open_is_not_engulfing() {
        // Bullish bar against a bearish prev, but close (99.5) <= prev open (100).
        let candles = make_candles(&[(100.0, 101.0, 97.0, 98.0), (98.0, 100.0, 97.5, 99.5)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(!kinds(&out).contains(&SignalKind::BullishEngulfing));
    }

    #[test]
    fn bearish_pin_bar_fires() {
        // Long upper wick: open 100, high 110, low 99.5, close 100.5.
        // body = 0.5, upper = 9.5, lower = 0.5.
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.0, 110.0, 99.5, 100.5)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(kinds(&out).contains(&SignalKind::BearishPinBar));
        assert!(!kinds(&out).contains(&SignalKind::BullishPinBar));
    }

    #[test]
    fn bullish_pin_bar_arithmetic() {
        // open=100, high=100.2, low=90, close=99:
        // body = 1.0, upper = 100.2 - 100 = 0.2, lower = 99 - 90 = 9.0.
        // Bearish side fails (0.2 < 2.0); bullish side holds (9 > 2 and 9 > 0.4).
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.0, 100.2, 90.0, 99.0)]);
        let out = CandlestickPatterns.scan(&candles);
        let k = kinds(&out);
        assert!(k.contains(&SignalKind::BullishPinBar));
        assert!(!k.contains(&SignalKind::BearishPinBar));
        // body (1.0) <= 0.1 * range (1.02) — the same bar is also a doji.
        assert!(k.contains(&SignalKind::Doji));
    }

    #[test]
    fn balanced_wicks_are_not_a_pin_bar() {
        // upper == lower: neither wick doubles the other.
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.0, 104.0, 96.4, 100.2)]);
        let out = CandlestickPatterns.scan(&candles);
        let k = kinds(&out);
        assert!(!k.contains(&SignalKind::BearishPinBar));
        assert!(!k.contains(&SignalKind::BullishPinBar));
    }

    #[test]
    fn doji_fires_on_negligible_body() {
        // body 0.4 <= 0.1 * range 5.0.
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.0, 103.0, 98.0, 100.4)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(kinds(&out).contains(&SignalKind::Doji));
        let doji = out.iter().find(|s| s.kind == SignalKind::Doji).unwrap();
        assert_eq!(doji.direction, Direction::Neutral);
    }

    #[test]
    fn zero_range_zero_body_is_a_doji() {
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.0, 100.0, 100.0, 100.0)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(kinds(&out).contains(&SignalKind::Doji));
    }

    #[test]
    fn zero_range_nonzero_body_is_not_a_doji() {
        // high == low but open != close: body 0.5 > 0.1 * 0.
        // (Geometrically degenerate input — the comparison must still be exact.)
        let candles = make_candles(&[(99.0, 101.0, 98.0, 100.0), (100.5, 100.0, 100.0, 100.0)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(!kinds(&out).contains(&SignalKind::Doji));
    }

    #[test]
    fn inside_bar_fires() {
        // Prev spans 90..110; bar spans 95..105.
        let candles = make_candles(&[(100.0, 110.0, 90.0, 102.0), (101.0, 105.0, 95.0, 103.0)]);
        let out = CandlestickPatterns.scan(&candles);
        let inside = out.iter().find(|s| s.kind == SignalKind::InsideBar).unwrap();
        assert_eq!(inside.direction, Direction::Neutral);
        assert_eq!(inside.price, 103.0);
    }

    #[test]
    fn touching_extreme_is_not_inside() {
        // bar.high == prev.high: strict inequality fails.
        let candles = make_candles(&[(100.0, 110.0, 90.0, 102.0), (101.0, 110.0, 95.0, 103.0)]);
        let out = CandlestickPatterns.scan(&candles);
        assert!(!kinds(&out).contains(&SignalKind::InsideBar));
    }

    #[test]
    fn categories_co_fire_on_one_bar() {
        // Prev bearish 102->98 spanning 90..110; bar bullish, closes above the
        // prev open (102) while its whole range stays inside the predecessor's.
        let candles = make_candles(&[(102.0, 110.0, 90.0, 98.0), (98.0, 106.0, 95.0, 103.0)]);
        let out = CandlestickPatterns.scan(&candles);
        let k = kinds(&out);
        assert!(k.contains(&SignalKind::BullishEngulfing));
        assert!(k.contains(&SignalKind::InsideBar));
    }

    #[test]
    fn no_fire_on_first_bar() {
        let candles = make_candles(&[(100.0, 100.0, 100.0, 100.0)]);
        assert!(CandlestickPatterns.scan(&candles).is_empty());
    }
}
