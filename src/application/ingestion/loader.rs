use super::csv_parser::parse_series_csv;
use crate::application::synthesis::{SynthesisSpan, gap_fill, generate_fallback};
use crate::domain::ports::SeriesSource;
use crate::domain::series::SeriesStore;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// How the session's store came to be. Exactly one path runs per load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesOrigin {
    /// Parsed from the source, possibly extended by gap-fill.
    Ingested {
        source: String,
        rows: usize,
        dropped_rows: usize,
        synthesized: usize,
    },
    /// Source failed; the whole store is generated.
    Fallback { source: String, reason: String },
}

impl SeriesOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SeriesOrigin::Fallback { .. })
    }
}

#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub store: SeriesStore,
    pub origin: SeriesOrigin,
}

/// Fetches, parses and completes the session series.
pub struct SeriesLoader {
    source: Arc<dyn SeriesSource>,
    span: SynthesisSpan,
}

impl SeriesLoader {
    pub fn new(source: Arc<dyn SeriesSource>, span: SynthesisSpan) -> Self {
        Self { source, span }
    }

    pub fn span(&self) -> &SynthesisSpan {
        &self.span
    }

    /// Loads the series. A source failure is not an error here: the loader
    /// discards whatever it had and generates the fallback series instead.
    pub async fn load<R: Rng + ?Sized>(&self, rng: &mut R) -> LoadedSeries {
        let origin = self.source.describe();
        info!("Loading series from {}", origin);

        let text = match self.source.fetch().await {
            Ok(text) => text,
            Err(e) => {
                warn!("{}; generating fallback series", e);
                return LoadedSeries {
                    store: generate_fallback(&self.span, rng),
                    origin: SeriesOrigin::Fallback {
                        source: origin,
                        reason: e.to_string(),
                    },
                };
            }
        };

        let report = parse_series_csv(&text);
        info!(
            "Parsed {} rows from {} ({} kept, {} dropped, {} malformed fields)",
            report.rows,
            origin,
            report.store.len(),
            report.dropped_rows,
            report.malformed_fields
        );

        let mut store = report.store;
        let synthesized = gap_fill(&mut store, &self.span, rng);

        LoadedSeries {
            store,
            origin: SeriesOrigin::Ingested {
                source: origin,
                rows: report.rows,
                dropped_rows: report.dropped_rows,
                synthesized,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Field;
    use crate::infrastructure::mock::MockSeriesSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_failed_source_falls_back() {
        let loader = SeriesLoader::new(
            Arc::new(MockSeriesSource::unavailable("connection refused")),
            SynthesisSpan::default(),
        );
        let mut rng = StdRng::seed_from_u64(1);

        let loaded = loader.load(&mut rng).await;

        assert!(loaded.origin.is_fallback());
        assert_eq!(loaded.store.len(), 2000);
    }

    #[tokio::test]
    async fn test_short_source_is_gap_filled() {
        let csv = "date,close\n2017-08-29,150.0\n2017-08-30,151.0\n2017-08-31,149.5";
        let loader = SeriesLoader::new(
            Arc::new(MockSeriesSource::with_body(csv)),
            SynthesisSpan::default(),
        );
        let mut rng = StdRng::seed_from_u64(2);

        let loaded = loader.load(&mut rng).await;

        match &loaded.origin {
            SeriesOrigin::Ingested { rows, synthesized, .. } => {
                assert_eq!(*rows, 3);
                assert_eq!(*synthesized, 1997);
            }
            other => panic!("expected ingested origin, got {:?}", other),
        }
        assert_eq!(loaded.store.len(), 2000);
        assert_eq!(loaded.store.view().values(Field::Close)[..3], [150.0, 151.0, 149.5]);
    }
}
