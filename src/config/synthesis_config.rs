//! Synthetic series configuration parsing from environment variables.
//!
//! Defaults reproduce the dashboard's fixed span: 2017-08-29 to 2025-08-28,
//! at most 2000 points, seeded at 40.73.

use crate::application::synthesis::{
    FILL_TRIGGER_RATIO, MAX_SYNTHESIZED_POINTS, SEED_CLOSE, SynthesisSpan,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;

#[derive(Debug, Clone)]
pub struct SynthesisEnvConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_points: usize,
    pub trigger_ratio: f64,
    pub seed_close: f64,
}

impl SynthesisEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = SynthesisSpan::default();

        let start_date = Self::parse_date("SYNTH_START_DATE", defaults.start)?;
        let end_date = Self::parse_date("SYNTH_END_DATE", defaults.end)?;
        if end_date < start_date {
            anyhow::bail!(
                "SYNTH_END_DATE ({}) is before SYNTH_START_DATE ({})",
                end_date,
                start_date
            );
        }

        let trigger_ratio = env::var("SYNTH_TRIGGER_RATIO")
            .ok()
            .map(|v| v.parse::<f64>())
            .transpose()
            .context("Failed to parse SYNTH_TRIGGER_RATIO")?
            .unwrap_or(FILL_TRIGGER_RATIO);
        if !(0.0..=1.0).contains(&trigger_ratio) {
            anyhow::bail!("SYNTH_TRIGGER_RATIO must be within [0, 1], got {}", trigger_ratio);
        }

        Ok(Self {
            start_date,
            end_date,
            max_points: env::var("SYNTH_MAX_POINTS")
                .unwrap_or_else(|_| MAX_SYNTHESIZED_POINTS.to_string())
                .parse::<usize>()
                .context("Failed to parse SYNTH_MAX_POINTS")?,
            trigger_ratio,
            seed_close: env::var("SYNTH_SEED_CLOSE")
                .unwrap_or_else(|_| SEED_CLOSE.to_string())
                .parse::<f64>()
                .context("Failed to parse SYNTH_SEED_CLOSE")?,
        })
    }

    pub fn span(&self) -> SynthesisSpan {
        SynthesisSpan {
            start: self.start_date,
            end: self.end_date,
            max_points: self.max_points,
            trigger_ratio: self.trigger_ratio,
            seed_close: self.seed_close,
        }
    }

    fn parse_date(key: &str, default: NaiveDate) -> Result<NaiveDate> {
        match env::var(key) {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .context(format!("Failed to parse {} (expected YYYY-MM-DD)", key)),
            Err(_) => Ok(default),
        }
    }
}
