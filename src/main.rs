//! Stockcast CLI
//!
//! Loads the daily AAPL series (or its fallback), then prints statistics,
//! correlations and demonstration forecasts, or writes the research report.
//!
//! # Usage
//! ```sh
//! cargo run -- summary
//! cargo run -- --file data/aapl.csv --seed 42 forecast --model sarimax --json
//! cargo run -- report --output out/report.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use stockcast::application::ingestion::SeriesLoader;
use stockcast::application::reporting::{ConsoleReporter, REPORT_FILE_NAME, ResearchReport};
use stockcast::application::stats::{CORRELATION_FEATURES, SUMMARY_FEATURES};
use stockcast::application::{AnalyticsSession, SessionSettings};
use stockcast::config::{Config, Mode};
use stockcast::domain::performance::ForecastModel;
use stockcast::infrastructure::SourceFactory;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Stock series analytics and demonstration forecasts",
    long_about = None
)]
struct Cli {
    /// Series CSV URL (overrides SERIES_SOURCE_URL)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Local series CSV (overrides SERIES_SOURCE_PATH, wins over --source)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Skip fetching and use the generated fallback series
    #[arg(long, global = true)]
    offline: bool,

    /// Random seed for reproducible synthesis and forecasts
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics per field
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Correlation matrix of the dashboard features
    Correlations {
        #[arg(long)]
        json: bool,
    },
    /// Demonstration forecast
    Forecast {
        #[arg(long, value_enum, default_value = "dashboard")]
        model: ForecastKind,

        #[arg(long)]
        json: bool,
    },
    /// Model figures and the research report file
    Report {
        #[arg(short, long, default_value = REPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Every derived series as one JSON document
    Export {
        #[arg(short, long, default_value = "stockcast_session.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ForecastKind {
    /// SARIMAX, LSTM and ensemble side by side
    Dashboard,
    Sarimax,
    Lstm,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so --json output stays parseable
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let config = apply_overrides(Config::from_env()?, &cli);
    info!(
        "Stockcast {} starting: Mode={:?}",
        env!("CARGO_PKG_VERSION"),
        config.mode
    );

    let settings = SessionSettings {
        rng_seed: config.rng_seed,
        dashboard_horizon: config.dashboard_horizon,
        model_horizon: config.model_horizon,
        ..SessionSettings::default()
    };
    let reporter = ConsoleReporter;

    match cli.command {
        // Built from published figures only, so the series is never fetched.
        Commands::Report { output } => write_report(&reporter, settings.anchor, &output),
        command => {
            let source = SourceFactory::create_source(&config);
            let loader = SeriesLoader::new(source, config.synthesis_span());
            let mut session = AnalyticsSession::load(&loader, settings).await;
            run_session_command(command, &mut session, &reporter)
        }
    }
}

fn run_session_command(
    command: Commands,
    session: &mut AnalyticsSession,
    reporter: &ConsoleReporter,
) -> Result<()> {
    match command {
        Commands::Summary { json } => {
            let rows = session.stats().stats_table(&SUMMARY_FEATURES);
            if json {
                print_json(&rows)?;
            } else {
                reporter.print_header("SERIES SUMMARY", session.origin(), session.view());
                reporter.print_stats_table(&rows);
            }
        }
        Commands::Correlations { json } => {
            let matrix = session.stats().correlation_matrix(&CORRELATION_FEATURES);
            if json {
                print_json(&matrix)?;
            } else {
                reporter.print_header("CORRELATIONS", session.origin(), session.view());
                reporter.print_correlations(&matrix);
            }
        }
        Commands::Forecast { model, json } => match model {
            ForecastKind::Dashboard => {
                let forecast = session.dashboard_forecast()?;
                if json {
                    print_json(&forecast)?;
                } else {
                    reporter.print_header("DASHBOARD FORECAST", session.origin(), session.view());
                    reporter.print_forecast(&forecast);
                }
            }
            ForecastKind::Sarimax | ForecastKind::Lstm => {
                let (label, forecast) = match model {
                    ForecastKind::Sarimax => (ForecastModel::Sarimax, session.sarimax_forecast()?),
                    _ => (ForecastModel::Lstm, session.lstm_forecast()?),
                };
                if json {
                    print_json(&forecast)?;
                } else {
                    reporter.print_header("MODEL FORECAST", session.origin(), session.view());
                    reporter.print_model_forecast(label, &forecast);
                }
            }
        },
        Commands::Report { output } => {
            write_report(reporter, session.settings().anchor, &output)?;
        }
        Commands::Export { output } => {
            let snapshot = session.snapshot()?;
            reporter.export_json(&snapshot, &output)?;
        }
    }

    Ok(())
}

fn write_report(reporter: &ConsoleReporter, anchor: NaiveDate, output: &Path) -> Result<()> {
    reporter.print_model_summary();
    ResearchReport::new(anchor).save(output)?;
    println!("📄 Research report written to: {}", output.display());
    Ok(())
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(url) = &cli.source {
        config.source_url = url.clone();
        config.mode = Mode::Http;
    }
    if let Some(path) = &cli.file {
        config.source_path = Some(path.clone());
        config.mode = Mode::File;
    }
    if cli.offline {
        config.mode = Mode::Offline;
    }
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    config
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{}", json);
    Ok(())
}
