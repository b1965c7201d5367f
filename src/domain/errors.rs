use thiserror::Error;

/// Failures around the price series. None of them are fatal: each has a
/// fallback or a degraded result at the layer that sees it.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Series source {origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    #[error("Insufficient data for {field}: no valid values")]
    InsufficientData { field: String },

    #[error("Malformed value in column {column}: {raw:?}")]
    MalformedField { column: String, raw: String },
}

impl SeriesError {
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        SeriesError::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}
