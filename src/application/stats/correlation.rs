use crate::domain::series::Field;
use serde::Serialize;

/// Pearson correlation of two sequences paired by position.
///
/// Only the first `min(x.len(), y.len())` elements of each are used; callers
/// own the semantic alignment. Returns 0 for an empty pairing or when either
/// side has zero variance. The result is not clamped, so rounding can land a
/// hair outside [-1, 1].
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }

    let x = &x[..n];
    let y = &y[..n];

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut numer = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        numer += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denom = (sum_sq_x * sum_sq_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    numer / denom
}

/// Square matrix of pairwise correlations over an ordered feature list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    features: Vec<Field>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Builds the matrix from each feature's own valid values.
    ///
    /// Each list is filtered independently and then paired by position, so
    /// when missing days differ between two features the pairs drift apart.
    ///
    /// The diagonal is 1.0 for any feature with at least one value and 0.0
    /// for one with none.
    ///
    /// `series` holds one list per feature, in the same order.
    pub(crate) fn build(features: &[Field], series: &[Vec<f64>]) -> Self {
        debug_assert_eq!(features.len(), series.len());
        let n = features.len();
        let mut values = vec![vec![0.0; n]; n];

        for i in 0..n {
            values[i][i] = if series[i].is_empty() { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let corr = pearson(&series[i], &series[j]);
                values[i][j] = corr;
                values[j][i] = corr;
            }
        }

        Self {
            features: features.to_vec(),
            values,
        }
    }

    pub fn features(&self) -> &[Field] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Correlation between two named features, if both are in the matrix.
    pub fn between(&self, a: Field, b: Field) -> Option<f64> {
        let i = self.features.iter().position(|f| *f == a)?;
        let j = self.features.iter().position(|f| *f == b)?;
        Some(self.values[i][j])
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// First row paired with its feature: each feature's correlation with the
    /// first one (the dashboard's "correlation with close" bars).
    pub fn against_first(&self) -> Vec<(Field, f64)> {
        match self.values.first() {
            Some(row) => self.features.iter().copied().zip(row.iter().copied()).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_and_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let z = [8.0, 6.0, 4.0, 2.0];

        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &z) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_self_correlation_and_symmetry() {
        let x = [3.1, -2.0, 7.5, 0.4, 9.9];
        let y = [1.0, 0.5, 2.5, -1.0, 4.0];

        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &y), pearson(&y, &x));
    }

    #[test]
    fn test_zero_variance_and_empty() {
        assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(pearson(&[], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_truncates_to_shorter_prefix() {
        // Only the first three pairs count; the tail would break the correlation.
        let x = [1.0, 2.0, 3.0, 100.0, -50.0];
        let y = [10.0, 20.0, 30.0];

        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_symmetry_and_diagonal() {
        let features = [Field::Close, Field::Volume, Field::Rsi, Field::Macd];
        let series = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![10.0, 9.0, 12.0, 7.0],
            vec![42.0],
            vec![],
        ];

        let matrix = CorrelationMatrix::build(&features, &series);

        assert_eq!(matrix.len(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 0), 1.0);
        assert_eq!(matrix.get(2, 2), 1.0);
        assert_eq!(matrix.get(3, 3), 0.0);
        assert_eq!(matrix.between(Field::Close, Field::Macd), Some(0.0));
        assert_eq!(matrix.between(Field::Close, Field::Ema50), None);
        assert_eq!(matrix.against_first()[1].0, Field::Volume);
    }
}
