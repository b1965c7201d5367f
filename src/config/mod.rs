//! Configuration module for Stockcast.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Source, Synthesis, and Forecast.

mod forecast_config;
mod source_config;
mod synthesis_config;

pub use forecast_config::ForecastEnvConfig;
pub use source_config::{DEFAULT_SOURCE_URL, SourceEnvConfig};
pub use synthesis_config::SynthesisEnvConfig;

use crate::application::synthesis::SynthesisSpan;
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Where the session series comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Http,
    File,
    /// Skip the fetch entirely and use the fallback series.
    Offline,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Mode::Http),
            "file" => Ok(Mode::File),
            "offline" => Ok(Mode::Offline),
            _ => anyhow::bail!(
                "Invalid SERIES_MODE: {}. Must be 'http', 'file', or 'offline'",
                s
            ),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // Source
    pub source_url: String,
    pub source_path: Option<PathBuf>,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,

    // Synthesis
    pub synthesis: SynthesisEnvConfig,

    // Forecast
    pub dashboard_horizon: usize,
    pub model_horizon: usize,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let source = SourceEnvConfig::from_env()?;
        let synthesis = SynthesisEnvConfig::from_env()?;
        let forecast = ForecastEnvConfig::from_env()?;

        // A configured path implies file mode unless SERIES_MODE says otherwise.
        let mode = match env::var("SERIES_MODE") {
            Ok(m) => Mode::from_str(&m)?,
            Err(_) if source.path.is_some() => Mode::File,
            Err(_) => Mode::Http,
        };
        if mode == Mode::File && source.path.is_none() {
            anyhow::bail!("SERIES_MODE=file requires SERIES_SOURCE_PATH");
        }

        Ok(Config {
            mode,
            source_url: source.url,
            source_path: source.path,
            fetch_timeout_secs: source.timeout_secs,
            fetch_max_retries: source.max_retries,
            synthesis,
            dashboard_horizon: forecast.dashboard_horizon,
            model_horizon: forecast.model_horizon,
            rng_seed: forecast.rng_seed,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn synthesis_span(&self) -> SynthesisSpan {
        self.synthesis.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(Mode::from_str("HTTP").unwrap(), Mode::Http);
        assert_eq!(Mode::from_str("file").unwrap(), Mode::File);
        assert_eq!(Mode::from_str("Offline").unwrap(), Mode::Offline);
        assert!(Mode::from_str("s3").is_err());
    }
}
