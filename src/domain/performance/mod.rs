// Published model evaluation figures
pub mod model_performance;

pub use model_performance::{ForecastModel, HypothesisComparison, ModelPerformance};
