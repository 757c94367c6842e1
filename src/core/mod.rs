//! Core data structures: observations and prediction points.

pub mod prediction;
pub mod series;

pub use prediction::PredictionPoint;
pub use series::Observation;
