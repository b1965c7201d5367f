// Demonstration forecasts and chart diagnostics
pub mod diagnostics;
pub mod generators;

pub use generators::{
    DASHBOARD_HORIZON, ForecastSeries, MODEL_HORIZON, ModelForecast, acf, forecast, lstm_forecast,
    residuals, sarimax_forecast,
};
