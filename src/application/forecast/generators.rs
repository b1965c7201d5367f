//! Demonstration forecast curves.
//!
//! These are not fitted models. Each curve is a random-walk projection from
//! the last known close, labelled with a model name so the dashboard has
//! something to draw. Randomness comes from the caller's generator.

use crate::application::synthesis::sampling::{centered, unit};
use crate::domain::performance::model_performance::{ENSEMBLE_LSTM_WEIGHT, ENSEMBLE_SARIMAX_WEIGHT};
use crate::domain::series::SeriesView;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

pub const DASHBOARD_HORIZON: usize = 30;
pub const MODEL_HORIZON: usize = 60;

const SARIMAX_DRIFT: f64 = 1.0005;
const LSTM_DRIFT: f64 = 1.0008;
/// ±5% band around SARIMAX values.
const BAND_UPPER: f64 = 1.05;
const BAND_LOWER: f64 = 0.95;

/// Side-by-side SARIMAX / LSTM / ensemble projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    pub dates: Vec<NaiveDate>,
    pub sarimax: Vec<f64>,
    pub lstm: Vec<f64>,
    pub ensemble: Vec<f64>,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Single-model projection, optionally with a confidence band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelForecast {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<Vec<f64>>,
}

fn horizon_dates(anchor: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as i64)
        .map(|d| anchor + chrono::Duration::days(d))
        .collect()
}

/// Projects `horizon` days past `anchor` from the last close of `history`.
///
/// Each day draws its own drift `1 + U(-0.48, 0.52) * 0.02` and compounds it
/// `i + 1` times; the LSTM leg compounds `drift * 1.001`. SARIMAX adds
/// ±1.5% noise, LSTM ±1%, and the ensemble is the fixed 35/65 blend.
/// Returns `None` when the history has no usable last close.
pub fn forecast<R: Rng + ?Sized>(
    history: SeriesView<'_>,
    horizon: usize,
    anchor: NaiveDate,
    rng: &mut R,
) -> Option<ForecastSeries> {
    let last = history.last_close()?;

    let mut sarimax = Vec::with_capacity(horizon);
    let mut lstm = Vec::with_capacity(horizon);
    let mut ensemble = Vec::with_capacity(horizon);

    for i in 0..horizon {
        let steps = i as i32 + 1;
        let trend = 1.0 + (unit(rng) - 0.48) * 0.02;
        let sarimax_noise = centered(rng, 0.03);
        let lstm_noise = centered(rng, 0.02);

        let s = last * trend.powi(steps) * (1.0 + sarimax_noise);
        let l = last * (trend * 1.001).powi(steps) * (1.0 + lstm_noise);

        sarimax.push(s);
        lstm.push(l);
        ensemble.push(ENSEMBLE_SARIMAX_WEIGHT * s + ENSEMBLE_LSTM_WEIGHT * l);
    }

    Some(ForecastSeries {
        dates: horizon_dates(anchor, horizon),
        sarimax,
        lstm,
        ensemble,
    })
}

/// SARIMAX-labelled projection: drift 1.0005 per day, ±2% noise, and a band
/// at exactly ±5% of each value.
pub fn sarimax_forecast<R: Rng + ?Sized>(
    recent: SeriesView<'_>,
    horizon: usize,
    anchor: NaiveDate,
    rng: &mut R,
) -> Option<ModelForecast> {
    let last = recent.last_close()?;

    let values: Vec<f64> = (0..horizon)
        .map(|i| last * SARIMAX_DRIFT.powi(i as i32 + 1) * (1.0 + centered(rng, 0.04)))
        .collect();
    let upper = values.iter().map(|v| v * BAND_UPPER).collect();
    let lower = values.iter().map(|v| v * BAND_LOWER).collect();

    Some(ModelForecast {
        dates: horizon_dates(anchor, horizon),
        values,
        upper: Some(upper),
        lower: Some(lower),
    })
}

/// LSTM-labelled projection: drift 1.0008 per day, ±1.5% noise, no band.
pub fn lstm_forecast<R: Rng + ?Sized>(
    recent: SeriesView<'_>,
    horizon: usize,
    anchor: NaiveDate,
    rng: &mut R,
) -> Option<ModelForecast> {
    let last = recent.last_close()?;

    let values = (0..horizon)
        .map(|i| last * LSTM_DRIFT.powi(i as i32 + 1) * (1.0 + centered(rng, 0.03)))
        .collect();

    Some(ModelForecast {
        dates: horizon_dates(anchor, horizon),
        values,
        upper: None,
        lower: None,
    })
}

/// `n` residuals uniform in (-1, 1).
pub fn residuals<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| centered(rng, 2.0)).collect()
}

/// Placeholder autocorrelation: lag `L` in 1..=lags gets `exp(-L/5) * U(-0.2, 0.2)`.
pub fn acf<R: Rng + ?Sized>(lags: usize, rng: &mut R) -> Vec<f64> {
    (1..=lags)
        .map(|lag| (-(lag as f64) / 5.0).exp() * centered(rng, 0.4))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::{DataPoint, SeriesStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 29).unwrap()
    }

    fn history(close: Option<f64>) -> SeriesStore {
        let mut p = DataPoint::new(anchor());
        p.close = close;
        SeriesStore::from_points(vec![p])
    }

    #[test]
    fn test_forecast_shape_and_blend() {
        let store = history(Some(200.0));
        let mut rng = StdRng::seed_from_u64(9);

        let fc = forecast(store.view(), DASHBOARD_HORIZON, anchor(), &mut rng).unwrap();

        assert_eq!(fc.len(), 30);
        assert_eq!(fc.dates[0].to_string(), "2025-08-30");
        for i in 0..fc.len() {
            let blend = 0.35 * fc.sarimax[i] + 0.65 * fc.lstm[i];
            assert!((fc.ensemble[i] - blend).abs() < 1e-9);
        }
    }

    #[test]
    fn test_forecast_needs_a_close() {
        let store = history(None);
        let mut rng = StdRng::seed_from_u64(9);

        assert!(forecast(store.view(), 30, anchor(), &mut rng).is_none());
        assert!(sarimax_forecast(store.view(), 60, anchor(), &mut rng).is_none());
        assert!(lstm_forecast(SeriesStore::new().view(), 60, anchor(), &mut rng).is_none());
    }

    #[test]
    fn test_sarimax_band_contains_values() {
        let store = history(Some(150.0));
        let mut rng = StdRng::seed_from_u64(21);

        let fc = sarimax_forecast(store.view(), MODEL_HORIZON, anchor(), &mut rng).unwrap();
        let upper = fc.upper.unwrap();
        let lower = fc.lower.unwrap();

        assert_eq!(fc.values.len(), 60);
        for i in 0..60 {
            assert!(lower[i] <= fc.values[i] && fc.values[i] <= upper[i]);
            assert_eq!(upper[i], fc.values[i] * 1.05);
            assert_eq!(lower[i], fc.values[i] * 0.95);
        }
    }

    #[test]
    fn test_lstm_noise_bound() {
        let store = history(Some(100.0));
        let mut rng = StdRng::seed_from_u64(4);

        let fc = lstm_forecast(store.view(), MODEL_HORIZON, anchor(), &mut rng).unwrap();

        assert!(fc.upper.is_none() && fc.lower.is_none());
        for (i, v) in fc.values.iter().enumerate() {
            let trend = 100.0 * LSTM_DRIFT.powi(i as i32 + 1);
            assert!((v / trend - 1.0).abs() <= 0.015 + 1e-12);
        }
    }

    #[test]
    fn test_residuals_and_acf_bounds() {
        let mut rng = StdRng::seed_from_u64(77);

        let res = residuals(100, &mut rng);
        assert_eq!(res.len(), 100);
        assert!(res.iter().all(|r| r.abs() <= 1.0));

        let lags = acf(20, &mut rng);
        assert_eq!(lags.len(), 20);
        let loosest = 0.4 * (-1.0_f64 / 5.0).exp();
        for (i, v) in lags.iter().enumerate() {
            assert!(v.abs() <= loosest);
            assert!(v.abs() <= 0.2 * (-((i + 1) as f64) / 5.0).exp() + 1e-15);
        }
    }
}
