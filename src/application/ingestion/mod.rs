// Source text to normalized series
pub mod csv_parser;
pub mod loader;

pub use csv_parser::{ParseReport, parse_date, parse_series_csv};
pub use loader::{LoadedSeries, SeriesLoader, SeriesOrigin};
