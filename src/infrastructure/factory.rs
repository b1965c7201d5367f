use crate::config::{Config, Mode};
use crate::domain::ports::SeriesSource;
use crate::infrastructure::file_source::FileSeriesSource;
use crate::infrastructure::http_source::HttpSeriesSource;
use crate::infrastructure::mock::MockSeriesSource;
use std::sync::Arc;
use tracing::info;

pub struct SourceFactory;

impl SourceFactory {
    pub fn create_source(config: &Config) -> Arc<dyn SeriesSource> {
        match (config.mode, config.source_path.as_ref()) {
            (Mode::File, Some(path)) => {
                info!("Using file source {}", path.display());
                Arc::new(FileSeriesSource::new(path.clone()))
            }
            (Mode::Offline, _) => {
                info!("Offline mode: the fallback series will be generated");
                Arc::new(MockSeriesSource::unavailable("offline mode"))
            }
            // Config::from_env rejects file mode without a path.
            (Mode::File, None) | (Mode::Http, _) => {
                info!("Using HTTP source {}", config.source_url);
                Arc::new(HttpSeriesSource::new(
                    config.source_url.clone(),
                    config.fetch_timeout(),
                    config.fetch_max_retries,
                ))
            }
        }
    }
}
