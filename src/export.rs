//! Delimited export of predictions and fitted parameters.
//!
//! The column layout is fixed for interoperability with previously exported
//! artifacts: the fitted r and K appear only on the first data row, absent
//! actuals and errors are written as `N/A`, and an optional error-metrics
//! block is appended after a blank separator line.

use crate::core::PredictionPoint;
use crate::model::ModelParameters;
use crate::utils::metrics::ErrorMetrics;

const HEADER: &str = "Period,Actual,Predicted,Error,Confidence Low,Confidence High,\
Growth Rate (r),Carrying Capacity (K)";

/// Render predictions as a delimited table.
pub fn export_delimited(
    predictions: &[PredictionPoint],
    params: &ModelParameters,
    metrics: Option<&ErrorMetrics>,
) -> String {
    let mut lines = Vec::with_capacity(predictions.len() + 1);
    lines.push(HEADER.to_string());

    for (index, p) in predictions.iter().enumerate() {
        let actual = p
            .actual
            .map(|a| format!("{a:.0}"))
            .unwrap_or_else(|| "N/A".to_string());
        let error = p
            .error
            .map(|e| format!("{e:.0}"))
            .unwrap_or_else(|| "N/A".to_string());
        let (r, k) = if index == 0 {
            (format!("{:.4}", params.r), format!("{:.0}", params.k))
        } else {
            (String::new(), String::new())
        };

        lines.push(format!(
            "{},{},{:.0},{},{:.0},{:.0},{},{}",
            p.period, actual, p.predicted, error, p.confidence_low, p.confidence_high, r, k
        ));
    }

    let mut out = lines.join("\n");

    if let Some(m) = metrics {
        out.push_str("\n\n");
        out.push_str("Error Metrics\n");
        out.push_str(&format!("MAE,{:.2}\n", m.mae));
        out.push_str(&format!("MSE,{:.2}\n", m.mse));
        out.push_str(&format!("RMSE,{:.2}\n", m.rmse));
        out.push_str(&format!("MAPE,{:.2}%\n", m.mape));
        out.push_str(&format!("R²,{:.2}%", m.r2 * 100.0));
    }

    out
}
