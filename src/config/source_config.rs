//! Series source configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Daily AAPL series published alongside the research dashboard.
pub const DEFAULT_SOURCE_URL: &str = concat!(
    "https://ppl-ai-code-interpreter-files.s3.amazonaws.com/web/direct-files/",
    "f8e88344240f08433310110e0216a0b3/ee3e6782-b1c4-49fc-ad24-454a8d38ef51/191f2ec9.csv"
);

/// Source environment configuration
#[derive(Debug, Clone)]
pub struct SourceEnvConfig {
    pub url: String,
    pub path: Option<PathBuf>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl SourceEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("SERIES_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            path: env::var("SERIES_SOURCE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            timeout_secs: env::var("SERIES_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("Failed to parse SERIES_FETCH_TIMEOUT_SECS")?,
            max_retries: env::var("SERIES_FETCH_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("Failed to parse SERIES_FETCH_MAX_RETRIES")?,
        })
    }
}
