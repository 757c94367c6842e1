//! Per-axis sensitivity sweeps around a fitted parameter set.

use crate::core::{series, Observation};
use crate::model::logistic;
use crate::model::ModelParameters;
use crate::utils::metrics::calculate_error_metrics;

/// One sampled point of a sweep: the swept parameter value and the
/// in-sample MSE of the simulation run with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityPoint {
    pub value: f64,
    pub mse: f64,
}

/// Per-axis range of parameter values whose MSE stays within twice the
/// axis minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StableZone {
    pub r_min: f64,
    pub r_max: f64,
    pub k_min: f64,
    pub k_max: f64,
}

/// Result of sweeping r and K independently around the fitted values.
#[derive(Debug, Clone)]
pub struct SensitivityAnalysis {
    pub r_sensitivity: Vec<SensitivityPoint>,
    pub k_sensitivity: Vec<SensitivityPoint>,
    pub stable_zone: StableZone,
    /// Swept r with the lowest MSE, first-found on ties.
    pub optimal_r: f64,
    /// Swept K with the lowest MSE, first-found on ties.
    pub optimal_k: f64,
}

/// Sweep each parameter axis while holding the other fixed.
///
/// The r axis samples multipliers 0.5 to 1.5 in steps of 0.1; the K axis
/// samples 0.5 to 2.0 in steps of 0.15. Each axis has 11 points. Optima
/// are chosen per axis, not jointly.
pub fn sensitivity_analysis(
    data: &[Observation],
    base: &ModelParameters,
) -> SensitivityAnalysis {
    let actual = series::values(data);

    let score = |params: &ModelParameters| {
        let predicted = logistic::simulate_over(data, params);
        calculate_error_metrics(&actual, &predicted).mse
    };

    let r_sensitivity: Vec<SensitivityPoint> = (0..=10)
        .map(|i| {
            let value = base.r * (0.5 + i as f64 * 0.1);
            SensitivityPoint {
                value,
                mse: score(&base.with_r(value)),
            }
        })
        .collect();

    let k_sensitivity: Vec<SensitivityPoint> = (0..=10)
        .map(|i| {
            let value = base.k * (0.5 + i as f64 * 0.15);
            SensitivityPoint {
                value,
                mse: score(&base.with_k(value)),
            }
        })
        .collect();

    let optimal_r = axis_minimum(&r_sensitivity);
    let optimal_k = axis_minimum(&k_sensitivity);

    let (r_min, r_max) = stable_range(&r_sensitivity);
    let (k_min, k_max) = stable_range(&k_sensitivity);

    SensitivityAnalysis {
        r_sensitivity,
        k_sensitivity,
        stable_zone: StableZone {
            r_min,
            r_max,
            k_min,
            k_max,
        },
        optimal_r,
        optimal_k,
    }
}

fn axis_minimum(points: &[SensitivityPoint]) -> f64 {
    let mut best = points[0];
    for point in &points[1..] {
        if point.mse < best.mse {
            best = *point;
        }
    }
    best.value
}

/// Range of swept values with MSE within twice the axis minimum. The
/// comparison is inclusive so the zone always contains the optimum, even
/// when the minimum MSE is exactly 0.
fn stable_range(points: &[SensitivityPoint]) -> (f64, f64) {
    let min_mse = points.iter().map(|p| p.mse).fold(f64::INFINITY, f64::min);
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in points {
        if point.mse <= min_mse * 2.0 {
            lo = lo.min(point.value);
            hi = hi.max(point.value);
        }
    }
    (lo, hi)
}
