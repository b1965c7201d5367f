use crate::domain::errors::SeriesError;
use crate::domain::series::{CellValue, DataPoint, Field, SeriesStore};
use chrono::{DateTime, NaiveDate};
use std::str::FromStr;
use tracing::{debug, warn};

pub const DATE_COLUMN: &str = "date";

/// Parsed store plus what was lost on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub store: SeriesStore,
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Rows without a usable date, plus rows the reader could not split.
    pub dropped_rows: usize,
    /// Cells of fixed numeric fields that did not parse as numbers.
    pub malformed_fields: usize,
}

/// Parses comma-separated series text into a normalized store.
///
/// The first line holds the column names. The `date` column becomes the
/// row key; every other cell is read as a number and, failing that, kept as
/// raw text. No quoting is recognized and short rows leave trailing fields
/// missing. A bad cell never fails the parse: it only costs that cell, and a
/// bad date only that row.
pub fn parse_series_csv(text: &str) -> ParseReport {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(|s| s.trim().to_string()).collect(),
        Err(e) => {
            warn!("Series header unreadable: {}", e);
            return ParseReport::default();
        }
    };

    let Some(date_idx) = headers.iter().position(|h| h == DATE_COLUMN) else {
        if !headers.iter().all(|h| h.is_empty()) {
            warn!("Series has no '{}' column; columns: {:?}", DATE_COLUMN, headers);
        }
        let rows = reader.records().count();
        return ParseReport {
            rows,
            dropped_rows: rows,
            ..ParseReport::default()
        };
    };

    let columns: Vec<Option<Field>> = headers.iter().map(|h| Field::from_str(h).ok()).collect();

    let mut report = ParseReport::default();
    let mut points = Vec::new();

    for (line, record) in reader.records().enumerate() {
        report.rows += 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable series row {}: {}", line + 2, e);
                report.dropped_rows += 1;
                continue;
            }
        };

        let raw_date = record.get(date_idx).unwrap_or("");
        let Some(date) = parse_date(raw_date) else {
            warn!("Skipping series row {}: bad date {:?}", line + 2, raw_date);
            report.dropped_rows += 1;
            continue;
        };

        let mut point = DataPoint::new(date);
        for (idx, raw) in record.iter().enumerate() {
            if idx == date_idx {
                continue;
            }
            let Some(header) = headers.get(idx) else {
                continue;
            };

            match columns[idx] {
                Some(field) => match parse_number(header, raw) {
                    Ok(value) => point.set(field, value),
                    Err(e) => {
                        debug!("{}", e);
                        report.malformed_fields += 1;
                        point.extra.insert(header.clone(), CellValue::Text(raw.to_string()));
                    }
                },
                None => {
                    let cell = match parse_number(header, raw) {
                        Ok(Some(v)) => CellValue::Number(v),
                        _ => CellValue::Text(raw.to_string()),
                    };
                    point.extra.insert(header.clone(), cell);
                }
            }
        }
        points.push(point);
    }

    report.store = SeriesStore::from_points(points);
    report
}

/// Empty cells are simply missing; anything else must be a finite number.
fn parse_number(column: &str, raw: &str) -> Result<Option<f64>, SeriesError> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(SeriesError::MalformedField {
            column: column.to_string(),
            raw: raw.to_string(),
        }),
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339, or any token starting with a `YYYY-MM-DD` date
/// (e.g. `2017-10-25 00:00:00+00:00`). Only the calendar date is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
