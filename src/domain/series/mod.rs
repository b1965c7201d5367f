pub mod data_point;
pub mod store;

pub use data_point::{CellValue, DataPoint, Field};
pub use store::{SeriesStore, SeriesView};
