//! Grid-search refinement of heuristic parameter estimates.

use crate::core::{series, Observation};
use crate::model::{logistic, ModelParameters};
use crate::utils::metrics;

/// Configuration for the grid search.
///
/// `iterations` is the total cell budget; each axis gets approximately
/// `sqrt(iterations)` samples, so the default of 100 yields a ~10x10 grid.
#[derive(Debug, Clone)]
pub struct GridSearchConfig {
    pub iterations: usize,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self { iterations: 100 }
    }
}

/// Refine a parameter estimate by grid search over (r, K).
///
/// The search window derives from the starting estimate: `r` spans
/// `[max(0.5, 0.5 r0), min(4, 1.5 r0)]` and `K` spans
/// `[max(1.5 P0, 0.5 K0), 2 K0]`. Each cell is scored by the mean squared
/// error of a forward simulation over the input series. Best-so-far starts
/// at the initial estimate's own score, so the result never fits worse than
/// the starting point; ties keep the earlier cell (r ascending outer loop,
/// K ascending inner loop).
pub fn optimize(
    data: &[Observation],
    initial: &ModelParameters,
    config: &GridSearchConfig,
) -> ModelParameters {
    let actual = series::values(data);
    let score = |candidate: &ModelParameters| {
        let predicted = logistic::simulate_over(data, candidate);
        metrics::mse(&actual, &predicted)
    };

    let mut best = initial.with_optimization_applied(true);
    let mut best_mse = score(initial);

    let r_lo = (initial.r * 0.5).max(0.5);
    let r_hi = (initial.r * 1.5).min(4.0);
    let k_lo = (initial.k * 0.5).max(initial.p0 * 1.5);
    let k_hi = initial.k * 2.0;

    let samples_per_axis = (config.iterations as f64).sqrt();
    for r in axis_samples(r_lo, r_hi, samples_per_axis) {
        for k in axis_samples(k_lo, k_hi, samples_per_axis) {
            let candidate = initial.with_r(r).with_k(k);
            let mse = score(&candidate);
            if mse < best_mse {
                best_mse = mse;
                best = candidate.with_optimization_applied(true);
            }
        }
    }

    best
}

/// Inclusive evenly spaced samples over `[lo, hi]`.
///
/// Yields `floor(count) + 1` points for a non-degenerate range, a single
/// point when the range collapses, and nothing when it is inverted.
fn axis_samples(lo: f64, hi: f64, count: f64) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / count;
    let n = if hi < lo {
        0
    } else if step > 0.0 {
        ((hi - lo) / step).floor() as usize + 1
    } else {
        1
    };
    (0..n).map(move |i| lo + i as f64 * step)
}
