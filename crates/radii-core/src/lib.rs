#![deny(missing_docs)]
#![doc = "Core error surface, directed-rounding interval arithmetic and numeric traits shared by the radii crates."]

pub mod errors;
pub mod interval;
pub mod number;
pub mod rounding;

pub use errors::{ErrorInfo, RadiiError};
pub use interval::{prev_float, Interval};
pub use number::{Number, Supremum};
