//! Placeholder series generation.
//!
//! Neither generator models the market: gap-fill is a bounded multiplicative
//! random walk, fallback is a fixed drift with multiplicative noise.

pub mod fallback;
pub mod gap_fill;
pub mod sampling;

pub use fallback::generate_fallback;
pub use gap_fill::gap_fill;

use chrono::NaiveDate;

/// First day of the expected series.
pub const SPAN_START: (i32, u32, u32) = (2017, 8, 29);
/// Last day of the expected series.
pub const SPAN_END: (i32, u32, u32) = (2025, 8, 28);
/// Close used when no prior point anchors the walk.
pub const SEED_CLOSE: f64 = 40.73;
pub const MAX_SYNTHESIZED_POINTS: usize = 2000;
/// Gap-fill only runs when the store covers less than this share of the span.
pub const FILL_TRIGGER_RATIO: f64 = 0.8;

/// Calendar window and limits shared by gap-fill and fallback generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub max_points: usize,
    pub trigger_ratio: f64,
    pub seed_close: f64,
}

impl Default for SynthesisSpan {
    fn default() -> Self {
        let (sy, sm, sd) = SPAN_START;
        let (ey, em, ed) = SPAN_END;
        Self {
            start: NaiveDate::from_ymd_opt(sy, sm, sd).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(ey, em, ed).unwrap_or_default(),
            max_points: MAX_SYNTHESIZED_POINTS,
            trigger_ratio: FILL_TRIGGER_RATIO,
            seed_close: SEED_CLOSE,
        }
    }
}

impl SynthesisSpan {
    /// Whole calendar days between start and end.
    pub fn total_days(&self) -> usize {
        (self.end - self.start).num_days().max(0) as usize
    }

    /// Length a gap-filled store reaches.
    pub fn target_len(&self) -> usize {
        self.max_points.min(self.total_days())
    }

    pub fn needs_fill(&self, len: usize) -> bool {
        (len as f64) < self.trigger_ratio * self.total_days() as f64
    }

    /// Date of the `index`-th day of the span.
    pub fn date_at(&self, index: usize) -> NaiveDate {
        self.start + chrono::Duration::days(index as i64)
    }
}
