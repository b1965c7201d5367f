use super::correlation::{CorrelationMatrix, pearson};
use super::descriptive::{FieldSummary, summarize};
use crate::domain::series::{Field, SeriesView};
use serde::Serialize;

/// Features shown in the dashboard correlation chart.
pub const CORRELATION_FEATURES: [Field; 8] = [
    Field::Close,
    Field::Volume,
    Field::Volatility,
    Field::Roe,
    Field::Roce,
    Field::PegRatio,
    Field::Macd,
    Field::Rsi,
];

/// Features listed in the statistics table.
pub const SUMMARY_FEATURES: [Field; 9] = [
    Field::Close,
    Field::Volume,
    Field::Volatility,
    Field::Roe,
    Field::Roce,
    Field::PegRatio,
    Field::Macd,
    Field::Ema12,
    Field::Rsi,
];

/// One row of the statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub field: Field,
    #[serde(flatten)]
    pub summary: FieldSummary,
    /// Positional correlation of this field's valid values with the valid closes.
    pub correlation_with_close: f64,
}

/// Read-only statistics over a series view.
#[derive(Debug, Clone, Copy)]
pub struct StatsEngine<'a> {
    view: SeriesView<'a>,
}

impl<'a> StatsEngine<'a> {
    pub fn new(view: SeriesView<'a>) -> Self {
        Self { view }
    }

    pub fn view(&self) -> SeriesView<'a> {
        self.view
    }

    /// Count, mean, population std dev, min and max of a field's valid
    /// values, or `None` when it has none.
    pub fn describe(&self, field: Field) -> Option<FieldSummary> {
        summarize(&self.view.values(field))
    }

    /// Pearson correlation of two fields' independently filtered values.
    pub fn correlation(&self, a: Field, b: Field) -> f64 {
        pearson(&self.view.values(a), &self.view.values(b))
    }

    pub fn correlation_matrix(&self, features: &[Field]) -> CorrelationMatrix {
        let series: Vec<Vec<f64>> = features.iter().map(|f| self.view.values(*f)).collect();
        CorrelationMatrix::build(features, &series)
    }

    /// Table rows for `features`, skipping fields without any valid value.
    pub fn stats_table(&self, features: &[Field]) -> Vec<StatsRow> {
        let closes = self.view.values(Field::Close);
        features
            .iter()
            .filter_map(|&field| {
                let values = self.view.values(field);
                let summary = summarize(&values)?;
                Some(StatsRow {
                    field,
                    summary,
                    correlation_with_close: pearson(&values, &closes),
                })
            })
            .collect()
    }
}
