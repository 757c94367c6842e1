//! Fitted parameter set for the logistic recurrence.

/// Parameters of the discrete logistic model.
///
/// `r` is the per-step growth coefficient, `k` the carrying capacity the
/// recurrence converges toward, and `p0` the initial value anchoring the
/// forward simulation. `r_original` and `k_original` retain the pre-clamp
/// heuristic estimates for explanatory display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Growth-rate coefficient, clamped to `[0.5, 4]` by the estimators.
    pub r: f64,
    /// Carrying capacity, always positive and at least `2 * p0` after
    /// estimation.
    pub k: f64,
    /// Initial value of the recurrence.
    pub p0: f64,
    /// Heuristic growth rate before clamping, when an estimator produced one.
    pub r_original: Option<f64>,
    /// Heuristic capacity before flooring, when an estimator produced one.
    pub k_original: Option<f64>,
    /// Whether grid search refined the heuristic estimate.
    pub optimization_applied: bool,
}

impl ModelParameters {
    /// Create a parameter set with no recorded heuristic originals.
    pub fn new(r: f64, k: f64, p0: f64) -> Self {
        Self {
            r,
            k,
            p0,
            r_original: None,
            k_original: None,
            optimization_applied: false,
        }
    }

    /// Copy of this parameter set with a different growth rate.
    pub fn with_r(self, r: f64) -> Self {
        Self { r, ..self }
    }

    /// Copy of this parameter set with a different carrying capacity.
    pub fn with_k(self, k: f64) -> Self {
        Self { k, ..self }
    }

    /// Copy of this parameter set with the optimization marker set.
    pub fn with_optimization_applied(self, applied: bool) -> Self {
        Self {
            optimization_applied: applied,
            ..self
        }
    }
}
