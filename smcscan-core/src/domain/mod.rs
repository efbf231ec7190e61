//! Domain types — candles in, signals out.

pub mod candle;
pub mod signal;

pub use candle::Candle;
pub use signal::{Direction, Signal, SignalKind};
