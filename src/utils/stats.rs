//! Descriptive statistics over observation series.

use crate::core::Observation;
use statrs::statistics::Statistics;

/// Summary statistics of a historical series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    /// Number of observations.
    pub size: usize,
    /// Earliest period, 0 for an empty series.
    pub min_period: i64,
    /// Latest period, 0 for an empty series.
    pub max_period: i64,
    /// Smallest observed value.
    pub min_value: f64,
    /// Largest observed value.
    pub max_value: f64,
    /// Mean relative growth per period.
    pub avg_growth_rate: f64,
}

impl DatasetStats {
    /// Compute summary statistics for a period-ordered series.
    pub fn from_series(data: &[Observation]) -> Self {
        if data.is_empty() {
            return Self {
                size: 0,
                min_period: 0,
                max_period: 0,
                min_value: 0.0,
                max_value: 0.0,
                avg_growth_rate: 0.0,
            };
        }

        let values: Vec<f64> = data.iter().map(|o| o.value).collect();

        Self {
            size: data.len(),
            min_period: data.iter().map(|o| o.period).min().unwrap_or(0),
            max_period: data.iter().map(|o| o.period).max().unwrap_or(0),
            min_value: values.iter().copied().fold(f64::INFINITY, f64::min),
            max_value: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg_growth_rate: avg_growth_rate(data),
        }
    }
}

/// Mean relative growth per period.
///
/// Sums `(v[i] - v[i-1]) / v[i-1]` over steps with a positive denominator
/// and divides by the total step count, mirroring the dataset-statistics
/// contract used by the insight generator.
pub fn avg_growth_rate(data: &[Observation]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in data.windows(2) {
        if pair[0].value > 0.0 {
            total += (pair[1].value - pair[0].value) / pair[0].value;
        }
    }
    total / (data.len() - 1) as f64
}

/// Population standard deviation, 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.population_variance().sqrt()
}
