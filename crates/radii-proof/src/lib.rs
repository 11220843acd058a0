#![deny(missing_docs)]
#![doc = "Rigorous existence intervals from radii polynomial bounds, and a Newton driver that turns converged iterates into certificates."]

/// Existence-interval solvers.
pub mod existence;
/// Canonical hashing helpers.
pub mod hash;
/// Newton driver.
pub mod newton;
/// Certificate reports.
pub mod report;
/// Serde helpers for JSON artefacts.
#[path = "serde.rs"]
pub mod serde_io;

pub use existence::{interval_of_existence, interval_of_existence_quadratic, RadiiBounds};
pub use hash::stable_hash_string;
pub use newton::{certify, newton, NewtonOpts, NewtonOutcome, NewtonProblem, NewtonStep};
pub use report::Certificate;
pub use serde_io::{
    certificate_from_json, certificate_to_json, opts_from_json, to_canonical_json_bytes,
};
