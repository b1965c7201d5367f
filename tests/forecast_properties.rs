use chrono::NaiveDate;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stockcast::application::forecast::diagnostics::{accuracy_distributions, training_curves};
use stockcast::application::forecast::{
    acf, forecast, lstm_forecast, residuals, sarimax_forecast,
};
use stockcast::domain::series::{DataPoint, Field, SeriesStore};

// --- Helpers ---

/// Always yields the midpoint: `random::<f64>()` returns exactly 0.5.
struct FixedRng;

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        1 << 31
    }

    fn next_u64(&mut self) -> u64 {
        1 << 63
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0x80);
    }
}

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 29).unwrap()
}

fn store_ending_at(close: f64) -> SeriesStore {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let points = (0..120)
        .map(|i| {
            let mut p = DataPoint::new(start + chrono::Duration::days(i));
            p.set(Field::Close, Some(if i == 119 { close } else { 100.0 }));
            p
        })
        .collect();
    SeriesStore::from_points(points)
}

// --- Forecast family ---

#[test]
fn test_forecast_midpoint_sequence() {
    let store = store_ending_at(200.0);

    let f = forecast(store.view(), 30, anchor(), &mut FixedRng).unwrap();

    assert_eq!(f.len(), 30);
    assert_eq!(f.dates[0].to_string(), "2025-08-30");
    assert_eq!(f.dates[29].to_string(), "2025-09-28");

    let trend: f64 = 1.0 + (0.5 - 0.48) * 0.02;
    for i in 0..30 {
        let steps = i as i32 + 1;
        let s = 200.0 * trend.powi(steps);
        let l = 200.0 * (trend * 1.001).powi(steps);
        assert!((f.sarimax[i] - s).abs() < 1e-9);
        assert!((f.lstm[i] - l).abs() < 1e-9);
        assert!((f.ensemble[i] - (0.35 * s + 0.65 * l)).abs() < 1e-9);
    }
}

#[test]
fn test_sarimax_band_is_exact() {
    let store = store_ending_at(150.0);
    let mut rng = StdRng::seed_from_u64(99);

    let f = sarimax_forecast(store.view(), 60, anchor(), &mut rng).unwrap();
    let upper = f.upper.as_ref().unwrap();
    let lower = f.lower.as_ref().unwrap();

    assert_eq!(f.values.len(), 60);
    for i in 0..60 {
        assert_eq!(upper[i], f.values[i] * 1.05);
        assert_eq!(lower[i], f.values[i] * 0.95);
        assert!(lower[i] < f.values[i] && f.values[i] < upper[i]);
    }
}

#[test]
fn test_model_forecasts_midpoint_follow_drift() {
    let store = store_ending_at(100.0);

    let sarimax = sarimax_forecast(store.view(), 60, anchor(), &mut FixedRng).unwrap();
    let lstm = lstm_forecast(store.view(), 60, anchor(), &mut FixedRng).unwrap();

    assert!(lstm.upper.is_none() && lstm.lower.is_none());
    for i in 0..60 {
        let steps = i as i32 + 1;
        assert_eq!(sarimax.values[i], 100.0 * 1.0005_f64.powi(steps));
        assert_eq!(lstm.values[i], 100.0 * 1.0008_f64.powi(steps));
    }
}

#[test]
fn test_forecasts_need_a_close() {
    let store = SeriesStore::from_points(vec![DataPoint::new(anchor())]);

    assert!(forecast(store.view(), 30, anchor(), &mut FixedRng).is_none());
    assert!(sarimax_forecast(store.view(), 60, anchor(), &mut FixedRng).is_none());
    assert!(lstm_forecast(store.view(), 60, anchor(), &mut FixedRng).is_none());
}

#[test]
fn test_residuals_and_acf_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);

    let r = residuals(100, &mut rng);
    assert_eq!(r.len(), 100);
    assert!(r.iter().all(|v| (-1.0..=1.0).contains(v)));

    let a = acf(20, &mut rng);
    assert_eq!(a.len(), 20);
    let bound = 0.4 * (-1.0_f64 / 5.0).exp();
    for (k, v) in a.iter().enumerate() {
        let lag = (k + 1) as f64;
        assert!(v.abs() <= bound);
        assert!(v.abs() <= 0.2 * (-lag / 5.0).exp() + 1e-15);
    }

    assert!(residuals(10, &mut FixedRng).iter().all(|v| *v == 0.0));
    assert!(acf(5, &mut FixedRng).iter().all(|v| *v == 0.0));
}

// --- Diagnostics ---

#[test]
fn test_training_curves_decay() {
    let curves = training_curves(100, &mut FixedRng);

    assert_eq!(curves.epochs.len(), 100);
    assert_eq!(curves.epochs[0], 1);
    for pair in curves.train_loss.windows(2) {
        assert!(pair[1] < pair[0]);
    }
    for pair in curves.validation_loss.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn test_accuracy_distributions_peak_at_model_mean() {
    let (grid, curves) = accuracy_distributions();

    assert_eq!(grid.len(), 100);
    assert_eq!(grid[0], 90.0);
    assert!((grid[99] - 99.9).abs() < 1e-9);
    assert_eq!(curves.len(), 3);

    for curve in curves {
        let peak = curve
            .density
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| grid[i])
            .unwrap();
        assert!((peak - curve.model.performance().accuracy).abs() < 0.051);
    }
}
