use stockcast::application::ingestion::parse_series_csv;
use stockcast::application::stats::{CORRELATION_FEATURES, StatsEngine, pearson, summarize};
use stockcast::domain::series::Field;

const SAMPLE_CSV: &str = "\
date,close,volume,volatility,roe,roce,peg_ratio,macd,rsi
2024-01-02,185.6,82488700,0.21,1.56,0.54,2.9,1.2,55.1
2024-01-03,184.2,58414500,0.22,1.56,0.54,2.9,0.9,50.3
2024-01-04,181.9,71983600,0.25,1.55,0.53,2.8,0.1,42.7
2024-01-05,181.2,62303300,,1.55,0.53,2.8,-0.4,40.2
2024-01-08,185.5,59144500,0.24,1.56,0.54,2.9,0.3,58.9
2024-01-09,185.1,42841800,0.23,1.56,0.54,n/a,0.5,56.0
";

#[test]
fn test_pearson_identity_symmetry_and_zero_variance() {
    let x = [1.5, 3.0, -2.0, 8.25, 4.0];
    let y = [2.0, 1.0, 0.5, 9.0, 3.5];

    assert!((pearson(&x, &x) - 1.0).abs() < 1e-9);
    assert_eq!(pearson(&x, &y), pearson(&y, &x));
    assert_eq!(pearson(&x, &[5.0; 5]), 0.0);
    assert_eq!(pearson(&[], &[]), 0.0);

    let r = pearson(&x, &y);
    assert!((-1.0..=1.0).contains(&r));
}

#[test]
fn test_summarize_constant_and_missing() {
    let summary = summarize(&[5.0, 5.0, 5.0]).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.mean, 5.0);
    assert_eq!(summary.std_dev, 0.0);
    assert_eq!(summary.min, 5.0);
    assert_eq!(summary.max, 5.0);

    assert!(summarize(&[]).is_none());
    assert!(summarize(&[f64::NAN]).is_none());
}

#[test]
fn test_engine_over_parsed_csv() {
    let report = parse_series_csv(SAMPLE_CSV);
    assert_eq!(report.rows, 6);
    assert_eq!(report.store.len(), 6);
    // "n/a" in peg_ratio
    assert_eq!(report.malformed_fields, 1);

    let engine = StatsEngine::new(report.store.view());

    let close = engine.describe(Field::Close).unwrap();
    assert_eq!(close.count, 6);
    assert_eq!(close.min, 181.2);
    assert_eq!(close.max, 185.6);

    // Missing and malformed cells are skipped, not zeroed.
    assert_eq!(engine.describe(Field::Volatility).unwrap().count, 5);
    assert_eq!(engine.describe(Field::PegRatio).unwrap().count, 5);
    assert!(engine.describe(Field::Ema50).is_none());

    assert!((engine.correlation(Field::Close, Field::Close) - 1.0).abs() < 1e-9);
    assert!(engine.correlation(Field::Close, Field::Rsi) > 0.5);
}

#[test]
fn test_infinite_close_does_not_reach_statistics() {
    let report = parse_series_csv("date,close\n2020-01-01,10\n2020-01-02,inf\n2020-01-03,12");
    assert_eq!(report.malformed_fields, 1);

    let close = StatsEngine::new(report.store.view()).describe(Field::Close).unwrap();
    assert_eq!(close.count, 2);
    assert!((close.mean - 11.0).abs() < 1e-12);
    assert!((close.std_dev - 1.0).abs() < 1e-12);
    assert_eq!(close.max, 12.0);
}

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let report = parse_series_csv(SAMPLE_CSV);
    let engine = StatsEngine::new(report.store.view());

    let matrix = engine.correlation_matrix(&CORRELATION_FEATURES);

    assert_eq!(matrix.len(), CORRELATION_FEATURES.len());
    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..matrix.len() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
            assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&matrix.get(i, j)));
        }
    }
    assert_eq!(
        matrix.between(Field::Close, Field::Rsi),
        Some(engine.correlation(Field::Close, Field::Rsi))
    );
}

#[test]
fn test_matrix_diagonal_is_zero_for_absent_field() {
    let report = parse_series_csv(SAMPLE_CSV);
    let engine = StatsEngine::new(report.store.view());

    let matrix = engine.correlation_matrix(&[Field::Close, Field::Ema50]);

    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(1, 1), 0.0);
    assert_eq!(matrix.get(0, 1), 0.0);
}
