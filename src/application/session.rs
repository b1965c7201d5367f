//! Analytics session: the loaded series plus everything derived from it.
//!
//! A session is built once per run. The store never changes afterwards, so
//! every slice handed out is a borrowed view. Forecast and diagnostics calls
//! draw from the session's own generator; seed it for reproducible output.

use crate::application::forecast::diagnostics::{
    self, AccuracyDistribution, EnsembleComparison, TRAINING_EPOCHS, TrainingCurves,
    WEIGHT_ITERATIONS, WeightPath,
};
use crate::application::forecast::{self, ForecastSeries, ModelForecast};
use crate::application::ingestion::{LoadedSeries, SeriesLoader, SeriesOrigin};
use crate::application::stats::{
    CORRELATION_FEATURES, CorrelationMatrix, SUMMARY_FEATURES, StatsEngine, StatsRow,
};
use crate::domain::errors::SeriesError;
use crate::domain::series::{Field, SeriesStore, SeriesView};
use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

/// Window of the main dashboard chart.
pub const DASHBOARD_WINDOW: usize = 365;
pub const OVERVIEW_WINDOW: usize = 500;
pub const RECENT_WINDOW: usize = 200;
/// Held-out tail used by the per-model tabs.
pub const TEST_WINDOW: usize = 100;
pub const VALIDATION_WINDOW: usize = 50;
pub const RESIDUAL_COUNT: usize = 100;
pub const ACF_LAGS: usize = 20;

/// Knobs that shape a session but not its data.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub rng_seed: Option<u64>,
    /// Day the forecast calendars start after.
    pub anchor: NaiveDate,
    pub dashboard_horizon: usize,
    pub model_horizon: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            rng_seed: None,
            anchor: Utc::now().date_naive(),
            dashboard_horizon: forecast::DASHBOARD_HORIZON,
            model_horizon: forecast::MODEL_HORIZON,
        }
    }
}

pub struct AnalyticsSession {
    store: SeriesStore,
    origin: SeriesOrigin,
    rng: StdRng,
    settings: SessionSettings,
}

impl AnalyticsSession {
    /// Loads the series through `loader`. Never fails: a dead source yields
    /// the fallback series.
    pub async fn load(loader: &SeriesLoader, settings: SessionSettings) -> Self {
        let mut rng = Self::make_rng(settings.rng_seed);
        let loaded = loader.load(&mut rng).await;
        Self::assemble(loaded, rng, settings)
    }

    /// Wraps an already loaded series.
    pub fn from_loaded(loaded: LoadedSeries, settings: SessionSettings) -> Self {
        let rng = Self::make_rng(settings.rng_seed);
        Self::assemble(loaded, rng, settings)
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn assemble(loaded: LoadedSeries, rng: StdRng, settings: SessionSettings) -> Self {
        info!(
            "Session ready: {} points, fallback={}",
            loaded.store.len(),
            loaded.origin.is_fallback()
        );
        Self {
            store: loaded.store,
            origin: loaded.origin,
            rng,
            settings,
        }
    }

    pub fn view(&self) -> SeriesView<'_> {
        self.store.view()
    }

    pub fn origin(&self) -> &SeriesOrigin {
        &self.origin
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn stats(&self) -> StatsEngine<'_> {
        StatsEngine::new(self.view())
    }

    // Dashboard slices

    pub fn dashboard_window(&self) -> SeriesView<'_> {
        self.view().tail(DASHBOARD_WINDOW)
    }

    pub fn overview_window(&self) -> SeriesView<'_> {
        self.view().tail(OVERVIEW_WINDOW)
    }

    pub fn recent_window(&self) -> SeriesView<'_> {
        self.view().tail(RECENT_WINDOW)
    }

    /// Points from 500 to 100 before the end.
    pub fn train_window(&self) -> SeriesView<'_> {
        self.view().between_from_end(OVERVIEW_WINDOW, TEST_WINDOW)
    }

    pub fn test_window(&self) -> SeriesView<'_> {
        self.view().tail(TEST_WINDOW)
    }

    // Generators

    /// Dashboard projection from the last year of history.
    pub fn dashboard_forecast(&mut self) -> Result<ForecastSeries, SeriesError> {
        let history = self.store.view().tail(DASHBOARD_WINDOW);
        forecast::forecast(
            history,
            self.settings.dashboard_horizon,
            self.settings.anchor,
            &mut self.rng,
        )
        .ok_or_else(Self::no_close)
    }

    /// Final ensemble view: the last 200 points and their projection.
    pub fn ensemble_final(&mut self) -> Result<(SeriesView<'_>, ForecastSeries), SeriesError> {
        let history = self.store.view().tail(RECENT_WINDOW);
        let projection = forecast::forecast(
            history,
            self.settings.dashboard_horizon,
            self.settings.anchor,
            &mut self.rng,
        )
        .ok_or_else(Self::no_close)?;
        Ok((history, projection))
    }

    pub fn sarimax_forecast(&mut self) -> Result<ModelForecast, SeriesError> {
        let test = self.store.view().tail(TEST_WINDOW);
        forecast::sarimax_forecast(
            test,
            self.settings.model_horizon,
            self.settings.anchor,
            &mut self.rng,
        )
        .ok_or_else(Self::no_close)
    }

    pub fn lstm_forecast(&mut self) -> Result<ModelForecast, SeriesError> {
        let test = self.store.view().tail(TEST_WINDOW);
        forecast::lstm_forecast(
            test,
            self.settings.model_horizon,
            self.settings.anchor,
            &mut self.rng,
        )
        .ok_or_else(Self::no_close)
    }

    pub fn residuals(&mut self) -> Vec<f64> {
        forecast::residuals(RESIDUAL_COUNT, &mut self.rng)
    }

    pub fn acf(&mut self) -> Vec<f64> {
        forecast::acf(ACF_LAGS, &mut self.rng)
    }

    // Diagnostics

    pub fn training_curves(&mut self) -> TrainingCurves {
        diagnostics::training_curves(TRAINING_EPOCHS, &mut self.rng)
    }

    pub fn ensemble_weight_path(&mut self) -> WeightPath {
        diagnostics::ensemble_weight_path(WEIGHT_ITERATIONS, &mut self.rng)
    }

    pub fn ensemble_comparison(&mut self) -> EnsembleComparison {
        let test = self.store.view().tail(TEST_WINDOW);
        diagnostics::ensemble_comparison(test, &mut self.rng)
    }

    /// Actual against predicted closes over the last 50 points.
    pub fn validation_scatter(&mut self) -> Vec<(f64, f64)> {
        let actual = self.store.view().tail(VALIDATION_WINDOW).values(Field::Close);
        diagnostics::validation_scatter(&actual, &mut self.rng)
    }

    pub fn accuracy_distributions(&self) -> (Vec<f64>, Vec<AccuracyDistribution>) {
        diagnostics::accuracy_distributions()
    }

    /// Every derived series at once, for JSON export.
    pub fn snapshot(&mut self) -> Result<SessionSnapshot, SeriesError> {
        let stats = self.stats();
        let summary = stats.stats_table(&SUMMARY_FEATURES);
        let correlations = stats.correlation_matrix(&CORRELATION_FEATURES);
        let (accuracy_grid, accuracy_curves) = self.accuracy_distributions();

        Ok(SessionSnapshot {
            origin: self.origin.clone(),
            points: self.store.len(),
            first_date: self.view().first().map(|p| p.date),
            last_date: self.view().last().map(|p| p.date),
            summary,
            correlations,
            dashboard_forecast: self.dashboard_forecast()?,
            sarimax_forecast: self.sarimax_forecast()?,
            lstm_forecast: self.lstm_forecast()?,
            residuals: self.residuals(),
            acf: self.acf(),
            training_curves: self.training_curves(),
            ensemble_weights: self.ensemble_weight_path(),
            ensemble_comparison: self.ensemble_comparison(),
            validation_scatter: self.validation_scatter(),
            accuracy_grid,
            accuracy_curves,
        })
    }

    fn no_close() -> SeriesError {
        SeriesError::InsufficientData {
            field: Field::Close.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub origin: SeriesOrigin,
    pub points: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub summary: Vec<StatsRow>,
    pub correlations: CorrelationMatrix,
    pub dashboard_forecast: ForecastSeries,
    pub sarimax_forecast: ModelForecast,
    pub lstm_forecast: ModelForecast,
    pub residuals: Vec<f64>,
    pub acf: Vec<f64>,
    pub training_curves: TrainingCurves,
    pub ensemble_weights: WeightPath,
    pub ensemble_comparison: EnsembleComparison,
    pub validation_scatter: Vec<(f64, f64)>,
    pub accuracy_grid: Vec<f64>,
    pub accuracy_curves: Vec<AccuracyDistribution>,
}
