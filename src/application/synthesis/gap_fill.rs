use super::SynthesisSpan;
use super::sampling::{GAP_FILL_BOUNDS, centered, synthesize_point};
use crate::domain::series::{Field, SeriesStore};
use rand::Rng;
use tracing::{debug, info};

/// Full width of the per-day close change: U(-2.5%, +2.5%).
const DAILY_CHANGE_WIDTH: f64 = 0.05;

/// Extends a short store with synthetic days up to [`SynthesisSpan::target_len`].
///
/// Day `i` of the span is generated for every `i` from the current length up
/// to the target, each close stepping from the previous one. The walk starts
/// from the last stored close, or from the seed when there is none (or it is
/// zero). Returns the number of synthesized points; zero when the store
/// already covers enough of the span.
pub fn gap_fill<R: Rng + ?Sized>(
    store: &mut SeriesStore,
    span: &SynthesisSpan,
    rng: &mut R,
) -> usize {
    let existing = store.len();
    if !span.needs_fill(existing) {
        debug!(
            "Gap-fill skipped: {} points cover at least {:.0}% of {} days",
            existing,
            span.trigger_ratio * 100.0,
            span.total_days()
        );
        return 0;
    }

    let target = span.target_len();
    let mut prev_close = store
        .view()
        .last()
        .and_then(|p| p.valid(Field::Close))
        .filter(|c| *c != 0.0)
        .unwrap_or(span.seed_close);

    let mut synthesized = Vec::with_capacity(target.saturating_sub(existing));
    for i in existing..target {
        let close = prev_close * (1.0 + centered(rng, DAILY_CHANGE_WIDTH));
        synthesized.push(synthesize_point(span.date_at(i), close, &GAP_FILL_BOUNDS, rng));
        prev_close = close;
    }

    let count = synthesized.len();
    store.append_synthesized(synthesized);
    info!(
        "Gap-fill synthesized {} points ({} ingested, {} total)",
        count,
        existing,
        store.len()
    );
    count
}
