//! Accuracy metrics between actual and predicted sequences.
//!
//! A note on MAPE: percentage terms with a zero actual are skipped in the
//! numerator, but the divisor stays at the full sequence length. This skew
//! is intentional and preserved for compatibility with existing exported
//! artifacts; do not change it without coordinating the export format.

/// Error metrics for one (actual, predicted) pair of sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Mean absolute percentage error, zero-actual terms skipped.
    pub mape: f64,
    /// Coefficient of determination, floored at 0.
    pub r2: f64,
}

impl ErrorMetrics {
    /// All-zero metrics, the fallback for empty or mismatched input.
    pub fn zero() -> Self {
        Self {
            mae: 0.0,
            mse: 0.0,
            rmse: 0.0,
            mape: 0.0,
            r2: 0.0,
        }
    }
}

/// Compute all metrics between two equal-length sequences.
///
/// Empty input or a length mismatch yields [`ErrorMetrics::zero`]. R²
/// falls back to 0 when the actual sequence has no variance, and negative
/// R² values are floored at 0.
pub fn calculate_error_metrics(actual: &[f64], predicted: &[f64]) -> ErrorMetrics {
    if actual.is_empty() || actual.len() != predicted.len() {
        return ErrorMetrics::zero();
    }

    let n = actual.len() as f64;
    let mut sum_abs_error = 0.0;
    let mut sum_sq_error = 0.0;
    let mut sum_abs_pct_error = 0.0;

    for (a, p) in actual.iter().zip(predicted.iter()) {
        let error = a - p;
        sum_abs_error += error.abs();
        sum_sq_error += error * error;
        if *a != 0.0 {
            sum_abs_pct_error += (error / a).abs();
        }
    }

    let mae = sum_abs_error / n;
    let mse = sum_sq_error / n;
    let rmse = mse.sqrt();
    let mape = (sum_abs_pct_error / n) * 100.0;

    let mean_actual = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let r2 = if ss_tot > 0.0 {
        (1.0 - sum_sq_error / ss_tot).max(0.0)
    } else {
        0.0
    };

    ErrorMetrics {
        mae,
        mse,
        rmse,
        mape,
        r2,
    }
}

/// Mean squared error alone, for hot scoring loops.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != predicted.len() {
        return 0.0;
    }
    let n = actual.len() as f64;
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / n
}
