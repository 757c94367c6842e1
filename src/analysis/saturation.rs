//! Proximity-to-capacity analysis and growth dampening.

use crate::core::{Observation, PredictionPoint};
use crate::model::ModelParameters;

/// How close the series sits to its carrying capacity and how strongly
/// future growth should be dampened in response.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationAnalysis {
    /// True when the last observed value exceeds 70% of K.
    pub is_approaching: bool,
    /// First forecast period whose prediction reaches 95% of K.
    pub saturation_period: Option<i64>,
    /// Last observed value as a percentage of K.
    pub saturation_pct: f64,
    /// Multiplier applied to r for forecast-only steps.
    pub growth_adjustment: f64,
    pub explanation: String,
}

/// Assess saturation from the last observation and an initial undamped
/// forecast.
pub fn analyze_saturation(
    data: &[Observation],
    predictions: &[PredictionPoint],
    params: &ModelParameters,
) -> SaturationAnalysis {
    let last = data.last().map(|o| o.value).unwrap_or(0.0);
    let saturation_pct = last / params.k * 100.0;
    let is_approaching = saturation_pct > 70.0;

    let saturation_period = predictions
        .iter()
        .find(|p| p.is_forecast() && p.predicted >= params.k * 0.95)
        .map(|p| p.period);

    let growth_adjustment = if saturation_pct > 90.0 {
        0.5
    } else if saturation_pct > 80.0 {
        0.7
    } else if saturation_pct > 70.0 {
        0.85
    } else {
        1.0
    };

    let explanation = if saturation_pct > 90.0 {
        "The series has reached near-saturation levels. Growth is significantly \
         reduced by capacity constraints. Further growth will be minimal."
    } else if saturation_pct > 70.0 {
        "The series is approaching carrying capacity. Growth is slowing as the \
         capacity limit becomes more impactful. Expect gradual stabilization."
    } else if saturation_pct > 50.0 {
        "The series is at moderate density relative to carrying capacity. Growth \
         continues but may begin slowing in future periods."
    } else {
        "The series is well below carrying capacity. The current trajectory shows \
         room for significant expansion before the capacity limit is reached."
    }
    .to_string();

    SaturationAnalysis {
        is_approaching,
        saturation_period,
        saturation_pct,
        growth_adjustment,
        explanation,
    }
}
