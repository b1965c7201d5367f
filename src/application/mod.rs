// Source text to normalized series
pub mod ingestion;

// Gap-fill and fallback generation
pub mod synthesis;

// Descriptive statistics and correlation
pub mod stats;

// Demonstration forecasts and diagnostics
pub mod forecast;

// Console tables, JSON export and the research report
pub mod reporting;

// Loaded series and derived views
pub mod session;

pub use session::{AnalyticsSession, SessionSettings, SessionSnapshot};
