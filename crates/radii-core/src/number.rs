//! Numeric traits implemented by `f64` and [`Interval`].

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::interval::Interval;

/// Coefficient type for sequences and operators.
pub trait Number:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + Supremum
    + 'static
{
    /// Additive identity.
    fn zero() -> Self;
    /// Multiplicative identity.
    fn one() -> Self;
    /// Embeds a float.
    fn from_f64(value: f64) -> Self;
    /// Absolute value.
    fn abs_value(self) -> Self;
    /// Pointwise maximum.
    fn max_value(self, other: Self) -> Self;
}

/// Reduction of a value to a single conservative upper bound.
pub trait Supremum {
    /// Upper bound of the value: the value itself for floats, `sup` for intervals.
    fn supremum(&self) -> f64;
}

impl Supremum for f64 {
    fn supremum(&self) -> f64 {
        *self
    }
}

impl Supremum for Interval {
    fn supremum(&self) -> f64 {
        self.sup()
    }
}

impl Number for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn abs_value(self) -> Self {
        self.abs()
    }

    fn max_value(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Number for Interval {
    fn zero() -> Self {
        Interval::point(0.0)
    }

    fn one() -> Self {
        Interval::point(1.0)
    }

    fn from_f64(value: f64) -> Self {
        Interval::point(value)
    }

    fn abs_value(self) -> Self {
        self.abs()
    }

    fn max_value(self, other: Self) -> Self {
        self.max(&other)
    }
}
