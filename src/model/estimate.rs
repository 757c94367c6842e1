//! Heuristic parameter estimation from historical data.
//!
//! Two strategies derive a starting growth rate and carrying capacity:
//! a plain ratio average (`estimate_basic`, used as the untuned baseline in
//! validation) and a time-weighted variant (`estimate_weighted`, the
//! starting point for real forecasts). Both fall back to fixed defaults for
//! series shorter than two observations.

use crate::core::{series, Observation};
use crate::model::ModelParameters;

/// Lower clamp for the estimated growth rate.
pub const R_MIN: f64 = 0.5;
/// Upper clamp for the estimated growth rate.
pub const R_MAX: f64 = 4.0;

/// Fallback parameters for series with fewer than two observations.
fn default_parameters(first: Option<&Observation>) -> ModelParameters {
    let first_value = first.map(|o| o.value).unwrap_or(0.0);
    let k = if first_value * 10.0 != 0.0 {
        first_value * 10.0
    } else {
        10_000.0
    };
    let p0 = if first_value != 0.0 { first_value } else { 1000.0 };
    ModelParameters::new(1.5, k, p0)
}

/// Basic estimate: average of consecutive value ratios, clamped.
///
/// Ratios with a non-positive denominator are skipped. The capacity is the
/// larger of 1.5x the observed maximum and 5x the initial value.
pub fn estimate_basic(data: &[Observation]) -> ModelParameters {
    if data.len() < 2 {
        return default_parameters(data.first());
    }

    let p0 = data[0].value;

    let mut ratios = Vec::with_capacity(data.len() - 1);
    for pair in data.windows(2) {
        if pair[0].value > 0.0 {
            ratios.push(pair[1].value / pair[0].value);
        }
    }

    let avg_rate = if ratios.is_empty() {
        1.5
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    };
    let r = avg_rate.clamp(R_MIN, R_MAX);

    let max = series::max_value(data);
    let k = (max * 1.5).max(p0 * 5.0);

    ModelParameters::new(r, k, p0)
}

/// Time-weighted estimate used as the optimizer's starting point.
///
/// The growth rate is an exponentially weighted average of consecutive
/// ratios with recent observations weighted up to roughly 3x the oldest.
/// The capacity tier depends on how much the recent half of the series is
/// still growing. Pre-clamp values are retained in `r_original` and
/// `k_original`; the final rate is clamped to `[0.5, 4]` and the capacity
/// floored at `2 * p0`.
///
/// When a smoothed companion series is supplied the growth trend is read
/// from it, but `p0` and the observed maximum always come from `data`.
pub fn estimate_weighted(
    data: &[Observation],
    smoothed: Option<&[Observation]>,
) -> ModelParameters {
    if data.len() < 2 {
        let defaults = default_parameters(data.first());
        return ModelParameters {
            r_original: Some(defaults.r),
            k_original: Some(defaults.k),
            ..defaults
        };
    }

    let working = match smoothed {
        Some(s) if !s.is_empty() => s,
        _ => data,
    };
    let p0 = data[0].value;
    let n = working.len();

    // Exponentially time-weighted ratio average.
    let mut weighted_rate_sum = 0.0;
    let mut weight_sum = 0.0;
    for i in 1..n {
        if working[i - 1].value > 0.0 {
            let rate = working[i].value / working[i - 1].value;
            let weight = ((i as f64 / n as f64) * 1.1).exp();
            weighted_rate_sum += rate * weight;
            weight_sum += weight;
        }
    }
    let weighted_avg_rate = if weight_sum > 0.0 {
        weighted_rate_sum / weight_sum
    } else {
        1.5
    };

    // Relative growth over the recent half of the series.
    let recent = &working[n - n.div_ceil(2)..];
    let mut recent_rates = Vec::with_capacity(recent.len().saturating_sub(1));
    for pair in recent.windows(2) {
        if pair[0].value > 0.0 {
            recent_rates.push((pair[1].value - pair[0].value) / pair[0].value);
        }
    }
    let avg_recent_growth = if recent_rates.is_empty() {
        0.05
    } else {
        recent_rates.iter().sum::<f64>() / recent_rates.len() as f64
    };

    let max = series::max_value(data);
    let last = data[data.len() - 1].value;

    let k_estimate = if avg_recent_growth < 0.02 && last > max * 0.9 {
        // Near saturation: the ceiling is barely above the observed maximum.
        max * 1.1
    } else if avg_recent_growth < 0.05 {
        // Slowing growth.
        max * 1.3
    } else {
        // Active growth: extrapolate the ceiling from the growth pace.
        max * (1.5 + avg_recent_growth * 5.0)
    };

    let r = weighted_avg_rate.clamp(R_MIN, R_MAX);
    let k = k_estimate.max(p0 * 2.0);

    ModelParameters {
        r,
        k,
        p0,
        r_original: Some(weighted_avg_rate),
        k_original: Some(k_estimate),
        optimization_applied: false,
    }
}
