use crate::domain::errors::SeriesError;
use crate::domain::ports::SeriesSource;
use crate::infrastructure::core::HttpClientFactory;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;
use tracing::debug;

/// Downloads the series CSV over HTTP(S).
pub struct HttpSeriesSource {
    client: ClientWithMiddleware,
    url: String,
}

impl HttpSeriesSource {
    pub fn new(url: impl Into<String>, timeout: Duration, max_retries: u32) -> Self {
        Self {
            client: HttpClientFactory::create_client(timeout, max_retries),
            url: url.into(),
        }
    }
}

#[async_trait]
impl SeriesSource for HttpSeriesSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, SeriesError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SeriesError::unavailable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeriesError::unavailable(&self.url, format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SeriesError::unavailable(&self.url, e))?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
