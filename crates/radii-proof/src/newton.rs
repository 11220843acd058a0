//! Newton iteration followed by a radii polynomial certificate.

use radii_core::errors::{ErrorInfo, RadiiError};
use serde::{Deserialize, Serialize};

use crate::existence::RadiiBounds;
use crate::report::Certificate;

fn default_max_iters() -> usize {
    15
}

fn default_tolerance() -> f64 {
    1e-12
}

/// Newton driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewtonOpts {
    /// Iteration budget.
    #[serde(default = "default_max_iters")]
    pub max_iters: usize,
    /// Convergence threshold on the norm of the Newton step.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Whether to keep the step norm of every iteration.
    #[serde(default)]
    pub record_history: bool,
}

impl Default for NewtonOpts {
    fn default() -> Self {
        Self {
            max_iters: default_max_iters(),
            tolerance: default_tolerance(),
            record_history: false,
        }
    }
}

/// Result of one Newton update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonStep<X> {
    /// Updated iterate.
    pub next: X,
    /// Norm of the correction that produced `next`.
    pub step_norm: f64,
}

/// Problem-specific pieces consumed by the driver.
///
/// The driver never inspects iterates; correctness of the bounds returned by
/// [`NewtonProblem::bounds`] is the implementor's responsibility.
pub trait NewtonProblem {
    /// Approximate solution type.
    type Iterate: Clone;

    /// Performs one Newton update from `x`.
    fn step(&mut self, x: &Self::Iterate) -> Result<NewtonStep<Self::Iterate>, RadiiError>;

    /// Computes `Y`, `Z1`, optionally `Z2`, and `R` at the converged iterate.
    fn bounds(&mut self, x: &Self::Iterate) -> Result<RadiiBounds, RadiiError>;
}

/// Converged Newton run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewtonOutcome<X> {
    /// Final iterate.
    pub iterate: X,
    /// Number of updates performed.
    pub iterations: usize,
    /// Norm of the last correction.
    pub step_norm: f64,
    /// Step norms per iteration when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<f64>,
}

fn newton_error(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

/// Iterates `problem.step` from `x0` until the step norm drops below the tolerance.
pub fn newton<P: NewtonProblem>(
    problem: &mut P,
    x0: P::Iterate,
    opts: &NewtonOpts,
) -> Result<NewtonOutcome<P::Iterate>, RadiiError> {
    if !opts.tolerance.is_finite() || opts.tolerance < 0.0 {
        return Err(RadiiError::Domain(
            ErrorInfo::new("invalid-tolerance", "newton tolerance must be finite and non-negative")
                .with_context("tolerance", opts.tolerance.to_string()),
        ));
    }

    let mut x = x0;
    let mut history = Vec::new();
    let mut last_norm = f64::INFINITY;
    for iteration in 1..=opts.max_iters {
        let NewtonStep { next, step_norm } = problem.step(&x)?;
        tracing::debug!(iteration, step_norm, "newton step");
        if opts.record_history {
            history.push(step_norm);
        }
        if !step_norm.is_finite() {
            return Err(RadiiError::Newton(
                newton_error("newton-diverged", "newton step norm is not finite")
                    .with_context("iteration", iteration.to_string()),
            ));
        }
        x = next;
        last_norm = step_norm;
        if step_norm <= opts.tolerance {
            return Ok(NewtonOutcome {
                iterate: x,
                iterations: iteration,
                step_norm,
                history,
            });
        }
    }

    tracing::warn!(
        max_iters = opts.max_iters,
        step_norm = last_norm,
        "newton iteration budget exhausted"
    );
    Err(RadiiError::Newton(
        newton_error("newton-not-converged", "newton did not reach the tolerance")
            .with_context("max_iters", opts.max_iters.to_string())
            .with_context("step_norm", last_norm.to_string())
            .with_hint("increase max_iters or improve the initial guess"),
    ))
}

/// Runs [`newton`], evaluates the bounds at the limit and solves for the
/// existence interval.
///
/// Domain errors from the bounds propagate unchanged. An empty interval is a
/// valid outcome; see [`Certificate::is_proven`].
pub fn certify<P: NewtonProblem>(
    problem: &mut P,
    x0: P::Iterate,
    opts: &NewtonOpts,
) -> Result<Certificate<P::Iterate>, RadiiError> {
    let outcome = newton(problem, x0, opts)?;
    let bounds = problem.bounds(&outcome.iterate)?;
    let existence = bounds.solve()?;
    if existence.is_empty() {
        tracing::warn!(iterations = outcome.iterations, "bounds do not certify a solution");
    } else {
        tracing::debug!(
            lower = existence.inf(),
            upper = existence.sup(),
            "existence interval certified"
        );
    }
    Ok(Certificate {
        iterate: outcome.iterate,
        iterations: outcome.iterations,
        step_norm: outcome.step_norm,
        bounds,
        existence,
        certificate_hash: None,
    })
}
