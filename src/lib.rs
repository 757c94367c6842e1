//! # verhulst
//!
//! Logistic-recurrence forecasting for discrete time series.
//!
//! Fits the discrete logistic map `P(n) = r * P(n-1) * (1 - P(n-1)/K)` to a
//! historical series and projects it forward: preprocessing with gap filling
//! and smoothing, heuristic and grid-search parameter fitting, rolling
//! holdout validation, sensitivity and saturation analysis, confidence-banded
//! predictions, and narrative insight generation. The whole pipeline is pure
//! and deterministic; degenerate input degrades to documented fallbacks
//! rather than errors.
//!
//! ```
//! use verhulst::prelude::*;
//!
//! let data = vec![
//!     Observation::new(2010, 1000.0),
//!     Observation::new(2011, 1100.0),
//!     Observation::new(2012, 1210.0),
//!     Observation::new(2013, 1331.0),
//! ];
//! let result = run_pipeline(&data, 2);
//! assert_eq!(result.predictions.len(), 6);
//! ```

pub mod analysis;
pub mod core;
pub mod error;
pub mod export;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod predict;
pub mod preprocess;
pub mod utils;

pub use error::{ModelError, Result};

pub mod prelude {
    pub use crate::analysis::{Insight, SaturationAnalysis, SensitivityAnalysis};
    pub use crate::core::{Observation, PredictionPoint};
    pub use crate::error::{ModelError, Result};
    pub use crate::model::ModelParameters;
    pub use crate::pipeline::{run_pipeline, PipelineResult};
    pub use crate::predict::generate_predictions;
    pub use crate::preprocess::{preprocess, PreprocessingResult};
    pub use crate::utils::{calculate_error_metrics, ErrorMetrics};
}
