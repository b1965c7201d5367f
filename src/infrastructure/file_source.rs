use crate::domain::errors::SeriesError;
use crate::domain::ports::SeriesSource;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the series CSV from a local file.
pub struct FileSeriesSource {
    path: PathBuf,
}

impl FileSeriesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeriesSource for FileSeriesSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, SeriesError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SeriesError::unavailable(self.describe(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let source = FileSeriesSource::new("/nonexistent/stockcast/series.csv");

        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, SeriesError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/stockcast/series.csv"));
    }

    #[tokio::test]
    async fn test_reads_file_contents() {
        let path =
            std::env::temp_dir().join(format!("stockcast_source_{}.csv", std::process::id()));
        tokio::fs::write(&path, "date,close\n2020-01-02,75.09\n").await.unwrap();

        let body = FileSeriesSource::new(&path).fetch().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(body.starts_with("date,close"));
    }
}
