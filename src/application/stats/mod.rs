// Descriptive statistics and correlation over series views
pub mod correlation;
pub mod descriptive;
pub mod engine;

pub use correlation::{CorrelationMatrix, pearson};
pub use descriptive::{FieldSummary, summarize};
pub use engine::{CORRELATION_FEATURES, SUMMARY_FEATURES, StatsEngine, StatsRow};
