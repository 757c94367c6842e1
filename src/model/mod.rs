//! The logistic model: recurrence kernel, parameters, estimation, and
//! grid-search refinement.

pub mod estimate;
pub mod logistic;
pub mod optimize;
mod params;

pub use estimate::{estimate_basic, estimate_weighted};
pub use optimize::{optimize, GridSearchConfig};
pub use params::ModelParameters;
