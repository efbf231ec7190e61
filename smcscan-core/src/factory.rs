//! Factory — converts configured detector names into runtime trait objects.

use crate::detectors::{
    BreakerBlock, CandlestickPatterns, Detector, LiquidityGrab, MarketStructureShift, OrderBlock,
};

/// Registered detector names in the canonical aggregation order.
pub const DETECTOR_ORDER: &[&str] = &[
    "liquidity_grab",
    "order_block",
    "breaker_block",
    "market_structure",
    "candlestick",
];

/// Errors that can occur during detector construction.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown detector type: {0}")]
    UnknownDetector(String),
}

/// Create a detector from its registered name.
pub fn create_detector(name: &str) -> Result<Box<dyn Detector>, FactoryError> {
    match name {
        "liquidity_grab" => Ok(Box::new(LiquidityGrab)),
        "order_block" => Ok(Box::new(OrderBlock)),
        "breaker_block" => Ok(Box::new(BreakerBlock)),
        "market_structure" => Ok(Box::new(MarketStructureShift)),
        "candlestick" => Ok(Box::new(CandlestickPatterns)),
        other => Err(FactoryError::UnknownDetector(other.to_string())),
    }
}
