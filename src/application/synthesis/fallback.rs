use super::SynthesisSpan;
use super::sampling::{FALLBACK_BOUNDS, centered, synthesize_point};
use crate::domain::series::SeriesStore;
use rand::Rng;
use tracing::info;

/// Daily compounding of the upward drift.
const DAILY_DRIFT: f64 = 1.0003;
/// Full width of the multiplicative noise: U(-1%, +1%).
const NOISE_WIDTH: f64 = 0.02;

/// Generates a full series from scratch when no source data is available.
///
/// Produces exactly `span.max_points` consecutive days from `span.start`, with
/// `close[i] = seed * 1.0003^i * (1 + U(-0.01, 0.01))`.
pub fn generate_fallback<R: Rng + ?Sized>(span: &SynthesisSpan, rng: &mut R) -> SeriesStore {
    let points = (0..span.max_points)
        .map(|i| {
            let trend = DAILY_DRIFT.powi(i as i32);
            let close = span.seed_close * trend * (1.0 + centered(rng, NOISE_WIDTH));
            synthesize_point(span.date_at(i), close, &FALLBACK_BOUNDS, rng)
        })
        .collect();

    let store = SeriesStore::from_points(points);
    info!(
        "Fallback series generated: {} points from {}",
        store.len(),
        span.start
    );
    store
}
