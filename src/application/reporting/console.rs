//! Console output and JSON export for session results.

use crate::application::forecast::{ForecastSeries, ModelForecast};
use crate::application::ingestion::SeriesOrigin;
use crate::application::stats::{CorrelationMatrix, StatsRow};
use crate::domain::performance::model_performance::{
    ForecastModel, HYPOTHESIS_COMPARISONS, IMPORTANCE_FEATURES, LSTM_SHAP_VALUES,
    SARIMAX_FEATURE_IMPORTANCE,
};
use crate::domain::series::SeriesView;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

const WIDTH: usize = 80;

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn print_header(&self, title: &str, origin: &SeriesOrigin, view: SeriesView<'_>) {
        println!("{}", "=".repeat(WIDTH));
        println!("📈 {}", title);
        println!("{}", "=".repeat(WIDTH));
        match origin {
            SeriesOrigin::Ingested {
                source,
                rows,
                dropped_rows,
                synthesized,
            } => {
                println!("Source:       {}", source);
                println!(
                    "Rows:         {} parsed, {} dropped, {} synthesized",
                    rows, dropped_rows, synthesized
                );
            }
            SeriesOrigin::Fallback { source, reason } => {
                println!("Source:       {} (unavailable)", source);
                println!("⚠️  Fallback:  {}", reason);
            }
        }
        if let (Some(first), Some(last)) = (view.first(), view.last()) {
            println!("Period:       {} to {} ({} points)", first.date, last.date, view.len());
        }
        println!("{}", "=".repeat(WIDTH));
    }

    pub fn print_stats_table(&self, rows: &[StatsRow]) {
        println!(
            "\n{:<14} | {:>6} | {:>14} | {:>14} | {:>14} | {:>14} | {:>7}",
            "Field", "Count", "Mean", "Std Dev", "Min", "Max", "Corr"
        );
        println!("{}", "-".repeat(WIDTH + 24));
        for row in rows {
            println!(
                "{:<14} | {:>6} | {:>14.4} | {:>14.4} | {:>14.4} | {:>14.4} | {:>7.3}",
                row.field.label(),
                row.summary.count,
                row.summary.mean,
                row.summary.std_dev,
                row.summary.min,
                row.summary.max,
                row.correlation_with_close
            );
        }
        println!();
    }

    pub fn print_correlations(&self, matrix: &CorrelationMatrix) {
        print!("\n{:<14}", "");
        for field in matrix.features() {
            print!(" {:>8}", abbreviate(field.name()));
        }
        println!();
        for (field, row) in matrix.features().iter().zip(matrix.rows()) {
            print!("{:<14}", field.label());
            for value in row {
                print!(" {:>8.3}", value);
            }
            println!();
        }

        let anchor = matrix
            .features()
            .first()
            .map(|f| f.label())
            .unwrap_or_default();
        println!("\n🔗 Correlation with {}:", anchor);
        for (field, corr) in matrix.against_first().into_iter().skip(1) {
            println!("  {:<14} {:>7.3}", field.label(), corr);
        }
        println!();
    }

    pub fn print_forecast(&self, forecast: &ForecastSeries) {
        println!(
            "\n{:<12} | {:>10} | {:>10} | {:>10}",
            "Date", "SARIMAX", "LSTM", "Ensemble"
        );
        println!("{}", "-".repeat(50));
        for i in 0..forecast.len() {
            println!(
                "{:<12} | {:>10.2} | {:>10.2} | {:>10.2}",
                forecast.dates[i], forecast.sarimax[i], forecast.lstm[i], forecast.ensemble[i]
            );
        }
        println!();
    }

    pub fn print_model_forecast(&self, model: ForecastModel, forecast: &ModelForecast) {
        println!("\n🔮 {} forecast ({} days)", model, forecast.values.len());
        for (i, (date, value)) in forecast.dates.iter().zip(&forecast.values).enumerate() {
            match (&forecast.lower, &forecast.upper) {
                (Some(lower), Some(upper)) => println!(
                    "  {}  {:>10.2}  [{:.2}, {:.2}]",
                    date, value, lower[i], upper[i]
                ),
                _ => println!("  {}  {:>10.2}", date, value),
            }
        }
        println!();
    }

    pub fn print_model_summary(&self) {
        println!(
            "\n{:<10} | {:>6} | {:>6} | {:>6} | {:>9}",
            "Model", "MAE", "RMSE", "MAPE%", "Accuracy%"
        );
        println!("{}", "-".repeat(50));
        for model in ForecastModel::ALL {
            let perf = model.performance();
            println!(
                "{:<10} | {:>6.2} | {:>6.2} | {:>6.2} | {:>9.1}",
                model.to_string(),
                perf.mae,
                perf.rmse,
                perf.mape,
                perf.accuracy
            );
        }

        println!("\n🧪 Hypothesis tests (95% CI):");
        for cmp in HYPOTHESIS_COMPARISONS {
            println!(
                "  {:<22} p = {:.3}  CI [{:.2}, {:.2}]",
                cmp.label(),
                cmp.p_value,
                cmp.ci_lower,
                cmp.ci_upper
            );
        }

        println!("\n{:<12} | {:>10} | {:>10}", "Feature", "SARIMAX", "LSTM SHAP");
        println!("{}", "-".repeat(38));
        for ((feature, importance), shap) in IMPORTANCE_FEATURES
            .iter()
            .zip(SARIMAX_FEATURE_IMPORTANCE)
            .zip(LSTM_SHAP_VALUES)
        {
            println!("{:<12} | {:>10.2} | {:>10.2}", feature, importance, shap);
        }
        println!();
    }

    /// Serializes `value` as pretty JSON to `path`, creating parent directories.
    pub fn export_json<T: Serialize>(&self, value: &T, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {:?}", parent))?;
        }

        let json_output =
            serde_json::to_string_pretty(value).context("Failed to serialize results to JSON")?;

        std::fs::write(path, json_output)
            .context(format!("Failed to write results to {}", path.display()))?;

        println!("💾 Results saved to: {}", path.display());
        Ok(())
    }
}

fn abbreviate(name: &str) -> String {
    name.chars().take(8).collect()
}
