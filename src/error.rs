//! Error types for the verhulst library.

use thiserror::Error;

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur at the crate's contract boundaries.
///
/// The analytic pipeline itself never fails on degenerate input; every
/// component defines an explicit fallback for short or dirty series. Errors
/// are reserved for genuine contract violations such as unparseable records
/// handed to the ingestion layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// No usable observations were found in the input.
    #[error("no data rows found in input")]
    EmptyData,

    /// A record could not be parsed into a (period, value) observation.
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// A field held a value outside its domain (NaN, infinite).
    #[error("invalid value on line {line}: {value}")]
    NonFiniteValue { line: usize, value: String },
}
