use crate::domain::errors::SeriesError;
use crate::domain::ports::SeriesSource;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory source for tests and offline runs.
pub struct MockSeriesSource {
    response: Result<String, String>,
    fetches: AtomicUsize,
}

impl MockSeriesSource {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SeriesSource for MockSeriesSource {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    async fn fetch(&self) -> Result<String, SeriesError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.response
            .clone()
            .map_err(|reason| SeriesError::unavailable(self.describe(), reason))
    }
}
