//! Observation type and ordered-series helpers.
//!
//! A series is an ordered `&[Observation]` slice; periods sit on a unit-step
//! integer axis (years, quarters, ticks). The preprocessor guarantees that
//! after cleaning no two observations share a period and the axis is
//! contiguous between the first and last observed period.

/// A single (period, value) observation of a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Position on the unit-step integer time axis.
    pub period: i64,
    /// Observed value at that period.
    pub value: f64,
}

impl Observation {
    pub fn new(period: i64, value: f64) -> Self {
        Self { period, value }
    }
}

/// Extract the value column of a series.
pub fn values(series: &[Observation]) -> Vec<f64> {
    series.iter().map(|o| o.value).collect()
}

/// Return a copy of the series sorted ascending by period.
pub fn sorted_by_period(series: &[Observation]) -> Vec<Observation> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|o| o.period);
    sorted
}

/// Maximum observed value, or 0.0 for an empty series.
pub fn max_value(series: &[Observation]) -> f64 {
    series.iter().map(|o| o.value).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_extracts_value_column() {
        let series = vec![
            Observation::new(2020, 100.0),
            Observation::new(2021, 110.0),
        ];
        assert_eq!(values(&series), vec![100.0, 110.0]);
        assert!(values(&[]).is_empty());
    }

    #[test]
    fn sorted_by_period_orders_ascending() {
        let series = vec![
            Observation::new(2022, 3.0),
            Observation::new(2020, 1.0),
            Observation::new(2021, 2.0),
        ];
        let sorted = sorted_by_period(&series);
        let periods: Vec<i64> = sorted.iter().map(|o| o.period).collect();
        assert_eq!(periods, vec![2020, 2021, 2022]);
    }

    #[test]
    fn max_value_handles_empty_series() {
        assert_eq!(max_value(&[]), 0.0);

        let series = vec![Observation::new(1, 5.0), Observation::new(2, 12.0)];
        assert_eq!(max_value(&series), 12.0);
    }
}
