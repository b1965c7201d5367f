use crate::application::forecast::{DASHBOARD_HORIZON, MODEL_HORIZON};
use anyhow::{Context, Result};
use std::env;

/// Forecast horizons and randomness.
#[derive(Debug, Clone)]
pub struct ForecastEnvConfig {
    pub dashboard_horizon: usize,
    pub model_horizon: usize,
    /// Fixed seed for reproducible runs; OS entropy when unset.
    pub rng_seed: Option<u64>,
}

impl ForecastEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            dashboard_horizon: Self::parse_usize("FORECAST_HORIZON", DASHBOARD_HORIZON)?,
            model_horizon: Self::parse_usize("MODEL_FORECAST_HORIZON", MODEL_HORIZON)?,
            rng_seed: env::var("RNG_SEED")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("Failed to parse RNG_SEED")?,
        })
    }

    fn parse_usize(key: &str, default: usize) -> Result<usize> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<usize>()
            .context(format!("Failed to parse {}", key))
    }
}
