use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of the SARIMAX leg in the ensemble blend; LSTM takes the rest.
pub const ENSEMBLE_SARIMAX_WEIGHT: f64 = 0.35;
pub const ENSEMBLE_LSTM_WEIGHT: f64 = 0.65;

/// Feature labels shared by the importance and SHAP tables.
pub const IMPORTANCE_FEATURES: [&str; 9] = [
    "Volume",
    "Volatility",
    "ROE",
    "ROCE",
    "PEG",
    "MACD",
    "EMA12",
    "EMA26",
    "RSI",
];

/// SARIMAX exogenous-variable importance, aligned with [`IMPORTANCE_FEATURES`].
pub const SARIMAX_FEATURE_IMPORTANCE: [f64; 9] =
    [0.23, 0.31, 0.12, 0.08, 0.15, 0.28, 0.18, 0.14, 0.22];

/// Mean absolute SHAP values of the LSTM, aligned with [`IMPORTANCE_FEATURES`].
pub const LSTM_SHAP_VALUES: [f64; 9] = [0.18, 0.35, 0.08, 0.06, 0.12, 0.32, 0.25, 0.19, 0.28];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    Sarimax,
    Lstm,
    Ensemble,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 3] = [
        ForecastModel::Sarimax,
        ForecastModel::Lstm,
        ForecastModel::Ensemble,
    ];

    /// Published evaluation figures for the model.
    pub fn performance(&self) -> ModelPerformance {
        match self {
            ForecastModel::Sarimax => ModelPerformance {
                mae: 2.34,
                rmse: 3.45,
                mape: 1.87,
                accuracy: 94.2,
            },
            ForecastModel::Lstm => ModelPerformance {
                mae: 1.89,
                rmse: 2.76,
                mape: 1.45,
                accuracy: 95.8,
            },
            ForecastModel::Ensemble => ModelPerformance {
                mae: 1.67,
                rmse: 2.45,
                mape: 1.32,
                accuracy: 96.5,
            },
        }
    }

    /// Spread of the accuracy distribution drawn on the hypothesis tab.
    pub fn accuracy_spread(&self) -> f64 {
        match self {
            ForecastModel::Sarimax => 1.5,
            ForecastModel::Lstm => 1.2,
            ForecastModel::Ensemble => 1.0,
        }
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastModel::Sarimax => write!(f, "SARIMAX"),
            ForecastModel::Lstm => write!(f, "LSTM"),
            ForecastModel::Ensemble => write!(f, "Ensemble"),
        }
    }
}

/// Evaluation metrics for one model. Accuracy and MAPE are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
    pub accuracy: f64,
}

/// Pairwise model comparison with its 95% confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HypothesisComparison {
    pub challenger: ForecastModel,
    pub baseline: ForecastModel,
    pub p_value: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub mean_difference: f64,
}

impl HypothesisComparison {
    pub fn label(&self) -> String {
        format!("{} vs {}", self.challenger, self.baseline)
    }

    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

pub const HYPOTHESIS_COMPARISONS: [HypothesisComparison; 3] = [
    HypothesisComparison {
        challenger: ForecastModel::Lstm,
        baseline: ForecastModel::Sarimax,
        p_value: 0.023,
        ci_lower: 0.12,
        ci_upper: 0.89,
        mean_difference: 0.505,
    },
    HypothesisComparison {
        challenger: ForecastModel::Ensemble,
        baseline: ForecastModel::Lstm,
        p_value: 0.041,
        ci_lower: 0.08,
        ci_upper: 0.76,
        mean_difference: 0.42,
    },
    HypothesisComparison {
        challenger: ForecastModel::Ensemble,
        baseline: ForecastModel::Sarimax,
        p_value: 0.001,
        ci_lower: 0.34,
        ci_upper: 1.23,
        mean_difference: 0.785,
    },
];
