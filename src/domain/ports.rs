use crate::domain::errors::SeriesError;
use async_trait::async_trait;

/// Where raw series text comes from (HTTP endpoint, local file, test fixture).
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Human-readable origin for logs and errors.
    fn describe(&self) -> String;

    /// Fetches the full CSV body. Network errors, timeouts, non-2xx statuses
    /// and unreadable bodies all surface as [`SeriesError::SourceUnavailable`].
    async fn fetch(&self) -> Result<String, SeriesError>;
}
