//! Series behind the model-detail and hypothesis charts.

use crate::application::synthesis::sampling::unit;
use crate::domain::performance::model_performance::{
    ENSEMBLE_LSTM_WEIGHT, ENSEMBLE_SARIMAX_WEIGHT, ForecastModel,
};
use crate::domain::series::{Field, SeriesView};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

pub const TRAINING_EPOCHS: usize = 100;
pub const WEIGHT_ITERATIONS: usize = 50;
pub const DISTRIBUTION_SAMPLES: usize = 100;

/// Loss per epoch for the LSTM training chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingCurves {
    pub epochs: Vec<usize>,
    pub train_loss: Vec<f64>,
    pub validation_loss: Vec<f64>,
}

/// Exponentially decaying losses with a small positive jitter.
pub fn training_curves<R: Rng + ?Sized>(epochs: usize, rng: &mut R) -> TrainingCurves {
    let epoch_ids: Vec<usize> = (1..=epochs).collect();
    let train_loss = epoch_ids
        .iter()
        .map(|&e| 0.1 * (-(e as f64) / 20.0).exp() + 0.001 * unit(rng))
        .collect();
    let validation_loss = epoch_ids
        .iter()
        .map(|&e| 0.12 * (-(e as f64) / 25.0).exp() + 0.002 * unit(rng))
        .collect();

    TrainingCurves {
        epochs: epoch_ids,
        train_loss,
        validation_loss,
    }
}

/// Ensemble weights as the optimizer converges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPath {
    pub iterations: Vec<usize>,
    pub sarimax: Vec<f64>,
    pub lstm: Vec<f64>,
}

/// SARIMAX weight decays from 0.5 toward 0.35 with jitter; LSTM is the complement.
pub fn ensemble_weight_path<R: Rng + ?Sized>(iterations: usize, rng: &mut R) -> WeightPath {
    let ids: Vec<usize> = (1..=iterations).collect();
    let sarimax: Vec<f64> = ids
        .iter()
        .map(|&i| 0.5 - 0.15 * (1.0 - (-(i as f64) / 10.0).exp()) + 0.02 * unit(rng))
        .collect();
    let lstm = sarimax.iter().map(|w| 1.0 - w).collect();

    WeightPath {
        iterations: ids,
        sarimax,
        lstm,
    }
}

/// Actual closes against the three models' in-sample predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleComparison {
    pub dates: Vec<NaiveDate>,
    pub actual: Vec<f64>,
    pub sarimax: Vec<f64>,
    pub lstm: Vec<f64>,
    pub ensemble: Vec<f64>,
}

/// Perturbs each test close: SARIMAX within ±4%, LSTM within ±2%, ensemble blended.
/// Days without a close are left out.
pub fn ensemble_comparison<R: Rng + ?Sized>(
    test: SeriesView<'_>,
    rng: &mut R,
) -> EnsembleComparison {
    let mut out = EnsembleComparison {
        dates: Vec::new(),
        actual: Vec::new(),
        sarimax: Vec::new(),
        lstm: Vec::new(),
        ensemble: Vec::new(),
    };

    for point in test {
        let Some(close) = point.valid(Field::Close) else {
            continue;
        };
        let s = close * (0.96 + unit(rng) * 0.08);
        let l = close * (0.98 + unit(rng) * 0.04);
        out.dates.push(point.date);
        out.actual.push(close);
        out.sarimax.push(s);
        out.lstm.push(l);
        out.ensemble.push(ENSEMBLE_SARIMAX_WEIGHT * s + ENSEMBLE_LSTM_WEIGHT * l);
    }
    out
}

/// (actual, predicted) pairs for the LSTM validation scatter.
pub fn validation_scatter<R: Rng + ?Sized>(actual: &[f64], rng: &mut R) -> Vec<(f64, f64)> {
    actual
        .iter()
        .map(|&price| (price, price * (0.98 + unit(rng) * 0.04)))
        .collect()
}

/// Unnormalized Gaussian curve of one model's accuracy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyDistribution {
    pub model: ForecastModel,
    pub density: Vec<f64>,
}

/// Accuracy grid (90.0 to 99.9 in steps of 0.1) and each model's curve over it.
pub fn accuracy_distributions() -> (Vec<f64>, Vec<AccuracyDistribution>) {
    let grid: Vec<f64> = (0..DISTRIBUTION_SAMPLES)
        .map(|k| 90.0 + k as f64 * 0.1)
        .collect();

    let curves = ForecastModel::ALL
        .iter()
        .map(|&model| {
            let mean = model.performance().accuracy;
            let sd = model.accuracy_spread();
            AccuracyDistribution {
                model,
                density: grid
                    .iter()
                    .map(|x| (-0.5 * ((x - mean) / sd).powi(2)).exp())
                    .collect(),
            }
        })
        .collect();

    (grid, curves)
}
