//! Rigorous existence intervals from radii polynomial bounds.
//!
//! Given a residual bound `Y`, a linear defect bound `Z1`, an optional
//! Lipschitz bound `Z2` and an outer radius `R`, the routines below return
//! the radii `r ⊆ [0, R]` for which the Newton-like map is a contraction on
//! the ball of radius `r`. Endpoints are rounded inward: the left endpoint
//! toward `+inf` and the right endpoint toward `-inf`, so every radius in the
//! returned interval satisfies the inequalities in exact arithmetic.
//!
//! An empty interval means "no certificate". Invalid inputs are errors.

use radii_core::errors::{ErrorInfo, RadiiError};
use radii_core::{prev_float, Interval, Supremum};
use serde::{Deserialize, Serialize};

fn check_bound(name: &str, value: f64) -> Result<(), RadiiError> {
    if !value.is_finite() {
        return Err(RadiiError::Domain(
            ErrorInfo::new("non-finite-bound", format!("{name} must be finite"))
                .with_context("bound", name)
                .with_context("value", value.to_string()),
        ));
    }
    if value < 0.0 {
        return Err(RadiiError::Domain(
            ErrorInfo::new("negative-bound", format!("{name} must be non-negative"))
                .with_context("bound", name)
                .with_context("value", value.to_string()),
        ));
    }
    Ok(())
}

/// Certified radii for the linear inequality `Y + (Z1 - 1) r <= 0`.
///
/// Interval inputs are first widened to their supremum.
pub fn interval_of_existence(
    y: impl Supremum,
    z1: impl Supremum,
    r_max: impl Supremum,
) -> Result<Interval, RadiiError> {
    let (y, z1, r_max) = (y.supremum(), z1.supremum(), r_max.supremum());
    check_bound("Y", y)?;
    check_bound("Z1", z1)?;
    check_bound("R", r_max)?;

    if z1 >= 1.0 {
        tracing::debug!(z1, "no contraction: Z1 is not below one");
        return Ok(Interval::empty());
    }

    // sup of the enclosure: the exact threshold Y / (1 - Z1) is at most this.
    let r = Interval::point(y) / (Interval::point(1.0) - Interval::point(z1));
    let r_lower = r.sup();
    if (0.0..=r_max).contains(&r_lower) {
        Interval::new(r_lower, r_max)
    } else {
        tracing::debug!(r_lower, r_max, "threshold radius exceeds R");
        Ok(Interval::empty())
    }
}

/// Certified radii for `Y + (Z1 - 1) r + Z2 r² / 2 <= 0` together with
/// `Z1 + Z2 r < 1`.
///
/// With `Z2 = 0` this is exactly [`interval_of_existence`]. Interval inputs
/// are first widened to their supremum.
pub fn interval_of_existence_quadratic(
    y: impl Supremum,
    z1: impl Supremum,
    z2: impl Supremum,
    r_max: impl Supremum,
) -> Result<Interval, RadiiError> {
    let (y, z1, z2, r_max) = (
        y.supremum(),
        z1.supremum(),
        z2.supremum(),
        r_max.supremum(),
    );
    if z2 == 0.0 {
        return interval_of_existence(y, z1, r_max);
    }
    check_bound("Y", y)?;
    check_bound("Z1", z1)?;
    check_bound("Z2", z2)?;
    check_bound("R", r_max)?;

    let y_i = Interval::point(y);
    let z1_i = Interval::point(z1);
    let z2_i = Interval::point(z2);

    let b = z1_i - 1.0;
    let delta = b.sqr() - 2.0 * z2_i * y_i;
    // A discriminant whose enclosure reaches below zero may have no real root.
    if delta.inf() < 0.0 {
        tracing::debug!(delta_inf = delta.inf(), "discriminant is not certified non-negative");
        return Ok(Interval::empty());
    }
    let sqrt_delta = delta.sqrt();

    // Smaller root rounded up, larger root rounded down: both shrink the window.
    let r1 = ((-b - sqrt_delta) / z2_i).sup();
    let r2 = ((-b + sqrt_delta) / z2_i).inf();

    // Z1 + Z2 r < 1, checked on the upper bound of its enclosure.
    let contracts = |r: f64| (z1_i + z2_i * r).sup() < 1.0;

    if !(0.0..=r_max).contains(&r1) || !contracts(r1) {
        tracing::debug!(r1, r_max, "smaller root is outside [0, R] or fails Z1 + Z2 r < 1");
        return Ok(Interval::empty());
    }
    if r1 > r2 {
        tracing::debug!(r1, r2, "roots crossed under rounding");
        return Ok(Interval::empty());
    }

    if r2 <= r_max && contracts(r2) {
        return Interval::new(r1, r2);
    }
    if contracts(r_max) {
        return Interval::new(r1, r_max);
    }
    // Just below the vertex -b / Z2, where Z1 + Z2 r reaches one.
    let x = prev_float((-b / z2_i).inf());
    if r1 <= x && x <= r2 && x <= r_max {
        return Interval::new(r1, x);
    }
    Interval::new(r1, r1)
}

/// Bundle of radii polynomial bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiiBounds {
    /// Residual bound.
    pub y: Interval,
    /// Bound on the linear defect of the approximate inverse.
    pub z1: Interval,
    /// Lipschitz bound of the derivative; `None` for the linear form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z2: Option<Interval>,
    /// Outer radius over which the bounds hold.
    pub r: f64,
}

impl RadiiBounds {
    /// Bounds for the linear form.
    pub fn linear(y: impl Into<Interval>, z1: impl Into<Interval>, r: f64) -> Self {
        Self {
            y: y.into(),
            z1: z1.into(),
            z2: None,
            r,
        }
    }

    /// Bounds for the quadratic form.
    pub fn quadratic(
        y: impl Into<Interval>,
        z1: impl Into<Interval>,
        z2: impl Into<Interval>,
        r: f64,
    ) -> Self {
        Self {
            y: y.into(),
            z1: z1.into(),
            z2: Some(z2.into()),
            r,
        }
    }

    /// Runs the matching existence routine.
    pub fn solve(&self) -> Result<Interval, RadiiError> {
        match self.z2 {
            Some(z2) => interval_of_existence_quadratic(self.y, self.z1, z2, self.r),
            None => interval_of_existence(self.y, self.z1, self.r),
        }
    }
}
