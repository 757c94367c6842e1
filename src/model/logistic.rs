//! The logistic recurrence kernel and in-sample forward simulation.
//!
//! The entire crate fits and forecasts with a single formula, the discrete
//! logistic map `P(n) = r * P(n-1) * (1 - P(n-1) / K)`.

use crate::core::Observation;
use crate::model::ModelParameters;

/// One step of the logistic recurrence.
///
/// Pure arithmetic with no bounds checking; callers clamp the result as
/// their context requires.
#[inline]
pub fn step(prev: f64, r: f64, k: f64) -> f64 {
    r * prev * (1.0 - prev / k)
}

/// Simulate the recurrence over `len` periods starting at `params.p0`.
///
/// Emits the rounded value at each period while stepping from the unrounded
/// state. The state is floored at zero between steps; no upper cap is
/// applied here, that is the forecast generator's concern.
pub fn simulate(len: usize, params: &ModelParameters) -> Vec<f64> {
    let mut out = Vec::with_capacity(len);
    let mut state = params.p0;
    for _ in 0..len {
        out.push(state.round());
        state = step(state, params.r, params.k).max(0.0);
    }
    out
}

/// Simulate the recurrence over the length of `data`.
pub fn simulate_over(data: &[Observation], params: &ModelParameters) -> Vec<f64> {
    simulate(data.len(), params)
}
