//! Error handling for growth screening operations.

use thiserror::Error;

/// Specialized error type for growth screening operations
#[derive(Debug, Error)]
pub enum GrowthScreenError {
    /// A measurement value was rejected before any arithmetic ran
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
    /// A reference table failed invariant validation
    #[error("Invalid reference table: {0}")]
    InvalidReferenceTable(String),
    /// A date string could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for growth screening operations
pub type Result<T> = std::result::Result<T, GrowthScreenError>;
