//! Prediction point structure emitted by the forecast generator.

/// One row of the prediction table.
///
/// `actual` and `error` are present only for in-sample periods; for periods
/// beyond the historical series both are `None`. Confidence bounds are a
/// heuristic band around the point prediction and are always populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionPoint {
    /// Period on the series time axis.
    pub period: i64,
    /// Observed value for in-sample periods, `None` for pure forecasts.
    pub actual: Option<f64>,
    /// Model prediction, rounded to a whole value.
    pub predicted: f64,
    /// `|actual - predicted|`, defined only when `actual` is present.
    pub error: Option<f64>,
    /// Lower confidence bound (rounded).
    pub confidence_low: f64,
    /// Upper confidence bound (rounded).
    pub confidence_high: f64,
}

impl PredictionPoint {
    /// True for periods beyond the historical series.
    pub fn is_forecast(&self) -> bool {
        self.actual.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_points_have_no_actual() {
        let in_sample = PredictionPoint {
            period: 2020,
            actual: Some(100.0),
            predicted: 98.0,
            error: Some(2.0),
            confidence_low: 88.0,
            confidence_high: 108.0,
        };
        assert!(!in_sample.is_forecast());

        let forecast = PredictionPoint {
            period: 2025,
            actual: None,
            predicted: 150.0,
            error: None,
            confidence_low: 135.0,
            confidence_high: 165.0,
        };
        assert!(forecast.is_forecast());
    }
}
