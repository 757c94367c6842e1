//! Model diagnostics: sensitivity sweeps, saturation assessment, and
//! narrative insight generation.

pub mod insight;
pub mod saturation;
pub mod sensitivity;

pub use insight::{
    generate_insights, ConfidenceFactors, ConfidenceLevel, GrowthTrend, Insight, RiskLevel,
    StabilityLevel,
};
pub use saturation::{analyze_saturation, SaturationAnalysis};
pub use sensitivity::{sensitivity_analysis, SensitivityAnalysis, SensitivityPoint, StableZone};
