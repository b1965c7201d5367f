// Daily series data model
pub mod series;

// Published model figures
pub mod performance;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
