//! Closed floating-point intervals with outward rounding.

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, RadiiError};
use crate::rounding::{
    add_down, add_up, div_down, div_up, mul_down, mul_up, next_down, sqrt_down, sqrt_up,
    sub_down, sub_up,
};

/// Closed interval `[lo, hi]` of extended reals, or the empty set.
///
/// Every arithmetic operation rounds the lower endpoint toward `-inf` and the
/// upper endpoint toward `+inf`, so the result always encloses the exact
/// image of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Option<[f64; 2]>", try_from = "Option<[f64; 2]>")]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The empty interval.
    pub const EMPTY: Interval = Interval {
        lo: f64::INFINITY,
        hi: f64::NEG_INFINITY,
    };

    /// The whole extended real line.
    pub const ENTIRE: Interval = Interval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Creates `[lo, hi]`, rejecting `NaN` endpoints and reversed bounds.
    pub fn new(lo: f64, hi: f64) -> Result<Self, RadiiError> {
        if lo.is_nan() || hi.is_nan() || lo > hi || lo == f64::INFINITY || hi == f64::NEG_INFINITY
        {
            return Err(RadiiError::Domain(
                ErrorInfo::new("invalid-interval", "interval endpoints must satisfy lo <= hi")
                    .with_context("lo", lo.to_string())
                    .with_context("hi", hi.to_string()),
            ));
        }
        Ok(Self { lo, hi })
    }

    /// Degenerate interval `[x, x]`. `NaN` maps to the entire line.
    pub fn point(x: f64) -> Self {
        if x.is_nan() || x.is_infinite() {
            return Self::ENTIRE;
        }
        Self { lo: x, hi: x }
    }

    /// Returns the empty interval.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns true for the empty set.
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Lower endpoint (`+inf` for the empty set).
    pub fn inf(&self) -> f64 {
        self.lo
    }

    /// Upper endpoint (`-inf` for the empty set).
    pub fn sup(&self) -> f64 {
        self.hi
    }

    /// Returns true when `x` lies in the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Returns true when every point of `self` lies in `other`.
    pub fn is_subset(&self, other: &Interval) -> bool {
        self.is_empty() || (other.lo <= self.lo && self.hi <= other.hi)
    }

    /// Set intersection.
    pub fn intersect(&self, other: &Interval) -> Interval {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo > hi {
            Self::EMPTY
        } else {
            Self { lo, hi }
        }
    }

    /// Smallest interval containing both operands.
    pub fn hull(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Range of `|x|` over the interval.
    pub fn abs(&self) -> Interval {
        if self.is_empty() || self.lo >= 0.0 {
            *self
        } else if self.hi <= 0.0 {
            -*self
        } else {
            Self {
                lo: 0.0,
                hi: (-self.lo).max(self.hi),
            }
        }
    }

    /// Range of `x²`, tighter than `self * self` when the interval straddles zero.
    pub fn sqr(&self) -> Interval {
        let a = self.abs();
        if a.is_empty() {
            return a;
        }
        Self {
            lo: mul_down(a.lo, a.lo),
            hi: mul_up(a.hi, a.hi),
        }
    }

    /// Square root over the non-negative part of the interval.
    pub fn sqrt(&self) -> Interval {
        if self.is_empty() || self.hi < 0.0 {
            return Self::EMPTY;
        }
        Self {
            lo: sqrt_down(self.lo.max(0.0)),
            hi: sqrt_up(self.hi),
        }
    }

    /// Elementwise maximum `{max(x, y)}`.
    pub fn max(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self {
            lo: self.lo.max(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

/// Largest float strictly below `x`.
pub fn prev_float(x: f64) -> f64 {
    next_down(x)
}

impl Default for Interval {
    fn default() -> Self {
        Self::point(0.0)
    }
}

impl From<f64> for Interval {
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}

impl From<Interval> for Option<[f64; 2]> {
    fn from(value: Interval) -> Self {
        if value.is_empty() {
            None
        } else {
            Some([value.lo, value.hi])
        }
    }
}

impl TryFrom<Option<[f64; 2]>> for Interval {
    type Error = RadiiError;

    fn try_from(value: Option<[f64; 2]>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::EMPTY),
            Some([lo, hi]) => Self::new(lo, hi),
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "[{:e}, {:e}]", self.lo, self.hi)
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        if self.is_empty() {
            return self;
        }
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::EMPTY;
        }
        Interval {
            lo: add_down(self.lo, rhs.lo),
            hi: add_up(self.hi, rhs.hi),
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::EMPTY;
        }
        Interval {
            lo: sub_down(self.lo, rhs.hi),
            hi: sub_up(self.hi, rhs.lo),
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::EMPTY;
        }
        let pairs = [
            (self.lo, rhs.lo),
            (self.lo, rhs.hi),
            (self.hi, rhs.lo),
            (self.hi, rhs.hi),
        ];
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (a, b) in pairs {
            lo = lo.min(mul_down(a, b));
            hi = hi.max(mul_up(a, b));
        }
        Interval { lo, hi }
    }
}

impl Div for Interval {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() || (rhs.lo == 0.0 && rhs.hi == 0.0) {
            return Interval::EMPTY;
        }
        if rhs.contains(0.0) {
            return Interval::ENTIRE;
        }
        let pairs = [
            (self.lo, rhs.lo),
            (self.lo, rhs.hi),
            (self.hi, rhs.lo),
            (self.hi, rhs.hi),
        ];
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (a, b) in pairs {
            lo = lo.min(div_down(a, b));
            hi = hi.max(div_up(a, b));
        }
        Interval { lo, hi }
    }
}

macro_rules! scalar_ops {
    ($($trait:ident $method:ident),*) => {
        $(
            impl $trait<f64> for Interval {
                type Output = Interval;

                fn $method(self, rhs: f64) -> Interval {
                    $trait::$method(self, Interval::point(rhs))
                }
            }

            impl $trait<Interval> for f64 {
                type Output = Interval;

                fn $method(self, rhs: Interval) -> Interval {
                    $trait::$method(Interval::point(self), rhs)
                }
            }
        )*
    };
}

scalar_ops!(Add add, Sub sub, Mul mul, Div div);

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Interval) {
        *self = *self + rhs;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Interval) {
        *self = *self - rhs;
    }
}
