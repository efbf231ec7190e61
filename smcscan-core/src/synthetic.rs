//! Synthetic candle generator — seeded random walk for demos and benchmarks.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Candle;

/// Generate a daily random-walk candle series.
///
/// Deterministic for a given seed. Each bar opens at the previous close,
/// moves by `drift + volatility * noise` (noise uniform in [-1, 1]), and
/// grows wicks proportional to the day's volatility. Price is floored at 1%
/// of `start_price` so long bearish seeds stay positive.
pub fn random_walk(
    start: DateTime<Utc>,
    bars: usize,
    start_price: f64,
    drift: f64,
    volatility: f64,
    seed: u64,
) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let floor = start_price * 0.01;
    let mut prev_close = start_price;
    let mut out = Vec::with_capacity(bars);

    for i in 0..bars {
        let open = prev_close;
        let noise: f64 = rng.gen_range(-1.0..1.0);
        let close = (open * (1.0 + drift + volatility * noise)).max(floor);

        let body_top = open.max(close);
        let body_bottom = open.min(close);
        let upper: f64 = rng.gen_range(0.0..=volatility) * open;
        let lower: f64 = rng.gen_range(0.0..=volatility) * open;

        out.push(Candle {
            time: start + Duration::days(i as i64),
            open,
            high: body_top + upper,
            low: (body_bottom - lower).max(floor * 0.5),
            close,
            volume: rng.gen_range(500.0..5000.0),
        });
        prev_close = close;
    }
    out
}
