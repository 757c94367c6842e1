//! Metrics, statistics, validation, and data-generation utilities.

pub mod metrics;
pub mod stats;
pub mod synthetic;
pub mod validation;

pub use metrics::{calculate_error_metrics, ErrorMetrics};
pub use stats::DatasetStats;
pub use validation::{rolling_validation, ValidationResult, DEFAULT_TRAIN_RATIO};
