//! Certificates produced by the Newton driver.

use radii_core::errors::RadiiError;
use radii_core::Interval;
use serde::{Deserialize, Serialize};

use crate::existence::RadiiBounds;
use crate::hash::stable_hash_string;

/// Outcome of a certified Newton run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate<X> {
    /// Approximate solution at which the bounds were evaluated.
    pub iterate: X,
    /// Newton iterations performed.
    pub iterations: usize,
    /// Norm of the last Newton correction.
    pub step_norm: f64,
    /// Bounds fed into the existence routine.
    pub bounds: RadiiBounds,
    /// Certified radii; empty when the bounds prove nothing.
    pub existence: Interval,
    /// Stable hash of the certificate contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_hash: Option<String>,
}

impl<X> Certificate<X> {
    /// Returns true when a nonempty existence interval was certified.
    pub fn is_proven(&self) -> bool {
        !self.existence.is_empty()
    }

    /// Smallest certified radius: a true solution lies within it of the iterate.
    pub fn error_radius(&self) -> Option<f64> {
        self.is_proven().then(|| self.existence.inf())
    }

    /// Largest certified radius: the solution is unique in that ball.
    pub fn uniqueness_radius(&self) -> Option<f64> {
        self.is_proven().then(|| self.existence.sup())
    }
}

impl<X: Serialize> Certificate<X> {
    /// Stamps [`Certificate::certificate_hash`] with the hash of the remaining fields.
    pub fn with_hash(mut self) -> Result<Self, RadiiError> {
        self.certificate_hash = None;
        let hash = stable_hash_string(&self)?;
        self.certificate_hash = Some(hash);
        Ok(self)
    }
}
