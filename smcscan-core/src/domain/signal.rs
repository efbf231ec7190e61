//! Signal — an immutable market event emitted by a detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional intent of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
    Neutral,
}

impl Direction {
    /// Uppercase wire/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
            Direction::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural or candlestick event a signal describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    LiquidityGrabHigh,
    LiquidityGrabLow,
    BullishOrderBlock,
    BearishOrderBlock,
    BullishBreakerBlock,
    BearishBreakerBlock,
    MssBullish,
    MssBearish,
    BullishEngulfing,
    BearishEngulfing,
    BullishPinBar,
    BearishPinBar,
    Doji,
    InsideBar,
}

impl SignalKind {
    /// Human-readable label for tables and logs.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::LiquidityGrabHigh => "Liquidity Grab (High)",
            SignalKind::LiquidityGrabLow => "Liquidity Grab (Low)",
            SignalKind::BullishOrderBlock => "Bullish Order Block",
            SignalKind::BearishOrderBlock => "Bearish Order Block",
            SignalKind::BullishBreakerBlock => "Bullish Breaker Block",
            SignalKind::BearishBreakerBlock => "Bearish Breaker Block",
            SignalKind::MssBullish => "MSS Bullish",
            SignalKind::MssBearish => "MSS Bearish",
            SignalKind::BullishEngulfing => "Bullish Engulfing",
            SignalKind::BearishEngulfing => "Bearish Engulfing",
            SignalKind::BullishPinBar => "Bullish Pin Bar",
            SignalKind::BearishPinBar => "Bearish Pin Bar",
            SignalKind::Doji => "Doji",
            SignalKind::InsideBar => "Inside Bar",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable market event emitted by a detector.
///
/// `price` is always the close of the bar that triggered the signal. A signal
/// carries no bar index and no timestamp: two signals of the same kind,
/// direction, and price are indistinguishable even when they originate from
/// different bars. Consumers that need provenance must keep the candle series
/// they scanned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub direction: Direction,
    pub price: f64,
}
