pub mod core;
pub mod factory;
pub mod file_source;
pub mod http_source;
pub mod mock;

pub use factory::SourceFactory;
pub use file_source::FileSeriesSource;
pub use http_source::HttpSeriesSource;
pub use mock::MockSeriesSource;
