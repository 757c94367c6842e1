//! Forecast generation with confidence bands and saturation dampening.

use crate::analysis::SaturationAnalysis;
use crate::core::{Observation, PredictionPoint};
use crate::model::{logistic, ModelParameters};

/// Simulate the fitted recurrence across the historical window plus
/// `horizon` forecast periods.
///
/// In-sample points carry the observed value and its absolute error;
/// forecast points have no actual. The growth rate used for steps past the
/// historical boundary is dampened by the saturation adjustment when one
/// is supplied. Every step is floored at 0 and capped at 1.05 K.
///
/// The confidence half-width is a fixed 10% in-sample and widens by 2
/// percentage points per period beyond the input.
pub fn generate_predictions(
    data: &[Observation],
    params: &ModelParameters,
    horizon: usize,
    saturation: Option<&SaturationAnalysis>,
) -> Vec<PredictionPoint> {
    let len = data.len();
    let start_period = data.first().map(|o| o.period).unwrap_or(0);
    let effective_r = match saturation {
        Some(s) => params.r * s.growth_adjustment,
        None => params.r,
    };

    let mut state = params.p0;
    let mut results = Vec::with_capacity(len + horizon);

    for i in 0..len + horizon {
        let predicted = state.round();
        let actual = data.get(i).map(|o| o.value);
        let error = actual.map(|a| (a - predicted).abs());

        let multiplier = if actual.is_some() {
            0.1
        } else {
            0.1 + (i - len) as f64 * 0.02
        };

        results.push(PredictionPoint {
            period: start_period + i as i64,
            actual,
            predicted,
            error,
            confidence_low: (predicted * (1.0 - multiplier)).round(),
            confidence_high: (predicted * (1.0 + multiplier)).round(),
        });

        // Dampening applies only to steps taken past the historical boundary.
        let r = if i >= len { effective_r } else { params.r };
        state = logistic::step(state, r, params.k).clamp(0.0, params.k * 1.05);
    }

    results
}
