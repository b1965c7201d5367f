pub mod console;
pub mod research_report;

pub use console::ConsoleReporter;
pub use research_report::{REPORT_FILE_NAME, ResearchReport};
