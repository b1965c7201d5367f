use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary of one field's valid values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divisor = count).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarizes `values`, skipping NaN. Returns `None` when nothing is left,
/// so callers skip the row instead of showing zeros.
pub fn summarize(values: &[f64]) -> Option<FieldSummary> {
    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        return None;
    }

    Some(FieldSummary {
        count: valid.len(),
        mean: Statistics::mean(&valid),
        std_dev: Statistics::population_std_dev(&valid),
        min: Statistics::min(&valid),
        max: Statistics::max(&valid),
    })
}
