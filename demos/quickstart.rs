//! Minimal walkthrough: fit a series, print the forecast table and the
//! narrative outputs.

use verhulst::export::export_delimited;
use verhulst::prelude::*;

fn main() {
    let data = vec![
        Observation::new(2010, 1200.0),
        Observation::new(2011, 1350.0),
        Observation::new(2012, 1530.0),
        Observation::new(2013, 1710.0),
        Observation::new(2014, 1890.0),
        Observation::new(2015, 2050.0),
        Observation::new(2016, 2180.0),
    ];

    let result = run_pipeline(&data, 5);

    println!(
        "Fitted r = {:.4}, K = {:.0}, P0 = {:.0} (optimized: {})",
        result.params.r, result.params.k, result.params.p0, result.params.optimization_applied
    );
    println!(
        "MAPE = {:.2}%, R^2 = {:.3}, validation improvement = {:.1}%",
        result.error_metrics.mape, result.error_metrics.r2, result.validation.improvement
    );
    println!();

    for line in &result.insight.summary {
        println!("{line}");
    }
    println!();

    println!(
        "{}",
        export_delimited(&result.predictions, &result.params, Some(&result.error_metrics))
    );
}
