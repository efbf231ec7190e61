//! smcscan core — candle domain types, signal detectors, scan aggregation.
//!
//! This crate contains the whole detection engine:
//! - Domain types (candles, signals, directions)
//! - Five independent detector passes (liquidity grab, order block, breaker
//!   block, market structure shift, candlestick patterns)
//! - A scanner that concatenates detector output in a fixed order, with an
//!   optional coarse same-day filter
//! - Detector factory and TOML-loadable scan configuration
//! - A seeded synthetic candle generator for demos and benchmarks
//!
//! Everything is pure and synchronous: detectors read a shared immutable
//! candle slice and write only to their own output, so they can be driven
//! from independent threads without locking.

pub mod config;
pub mod detectors;
pub mod domain;
pub mod factory;
pub mod scan;
pub mod synthetic;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core types are Send + Sync.
    ///
    /// Detectors are documented as safe to drive from independent threads;
    /// if any type loses these bounds, the build breaks here first.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::Candle>();
        require_sync::<domain::Candle>();
        require_send::<domain::Signal>();
        require_sync::<domain::Signal>();
        require_send::<domain::SignalKind>();
        require_sync::<domain::SignalKind>();
        require_send::<domain::Direction>();
        require_sync::<domain::Direction>();

        // Detector concrete types
        require_send::<detectors::LiquidityGrab>();
        require_sync::<detectors::LiquidityGrab>();
        require_send::<detectors::OrderBlock>();
        require_sync::<detectors::OrderBlock>();
        require_send::<detectors::BreakerBlock>();
        require_sync::<detectors::BreakerBlock>();
        require_send::<detectors::MarketStructureShift>();
        require_sync::<detectors::MarketStructureShift>();
        require_send::<detectors::CandlestickPatterns>();
        require_sync::<detectors::CandlestickPatterns>();
        require_send::<detectors::NullDetector>();
        require_sync::<detectors::NullDetector>();

        // Scanner and config
        require_send::<scan::Scanner>();
        require_sync::<scan::Scanner>();
        require_send::<config::ScanConfig>();
        require_sync::<config::ScanConfig>();
    }

    /// Architecture contract: the Detector trait receives only the candle
    /// slice and an index — no portfolio, no clock, no mutable detector state.
    ///
    /// The type system enforces causality at the seam: `evaluate` takes
    /// `&self`, so a detector cannot accumulate state across bars, and the
    /// only data it can reach is the slice it was handed. This test exists to
    /// document the contract and break loudly if the signature ever changes.
    #[test]
    fn detector_trait_is_stateless_over_immutable_input() {
        fn _check_trait_object_builds(
            det: &dyn detectors::Detector,
            candles: &[domain::Candle],
            out: &mut Vec<domain::Signal>,
        ) {
            det.evaluate(candles, 0, out)
        }
    }
}
