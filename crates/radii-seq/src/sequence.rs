//! Finite coefficient sequences over a truncated space.

use std::ops::{Add, Div, Mul, Neg, Sub};

use radii_core::errors::{ErrorInfo, RadiiError};
use radii_core::Number;
use serde::{Deserialize, Deserializer, Serialize};

use crate::multiplication::Multiplication;
use crate::rule::ConvolutionRule;
use crate::space::{incompatible, SequenceSpace};

/// Coefficients of a truncated expansion, stored in the space's index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence<S, T> {
    space: S,
    coefficients: Vec<T>,
}

#[derive(Deserialize)]
struct RawSequence<S, T> {
    space: S,
    coefficients: Vec<T>,
}

// Deserialised sequences go through the same length check as `Sequence::new`.
impl<'de, S, T> Deserialize<'de> for Sequence<S, T>
where
    S: SequenceSpace + Deserialize<'de>,
    T: Number + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSequence::<S, T>::deserialize(deserializer)?;
        Sequence::new(raw.space, raw.coefficients).map_err(serde::de::Error::custom)
    }
}

impl<S: SequenceSpace, T: Number> Sequence<S, T> {
    /// Wraps `coefficients`; the length must equal the space dimension.
    pub fn new(space: S, coefficients: Vec<T>) -> Result<Self, RadiiError> {
        if coefficients.len() != space.dimension() {
            return Err(RadiiError::Space(
                ErrorInfo::new(
                    "dimension-mismatch",
                    "coefficient count does not match the space dimension",
                )
                .with_context("space", space.describe())
                .with_context("expected", space.dimension().to_string())
                .with_context("actual", coefficients.len().to_string()),
            ));
        }
        Ok(Self {
            space,
            coefficients,
        })
    }

    /// Zero sequence on `space`.
    pub fn zeros(space: S) -> Self {
        let coefficients = vec![T::zero(); space.dimension()];
        Self {
            space,
            coefficients,
        }
    }

    /// Underlying space.
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Coefficients in storage order.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Mutable coefficients in storage order.
    pub fn coefficients_mut(&mut self) -> &mut [T] {
        &mut self.coefficients
    }

    /// Consumes the sequence and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Coefficient at `index`; zero outside the truncation.
    pub fn get(&self, index: S::Index) -> T {
        self.space
            .position(index)
            .map(|pos| self.coefficients[pos])
            .unwrap_or_else(T::zero)
    }

    /// Overwrites the coefficient at `index`.
    pub fn set(&mut self, index: S::Index, value: T) -> Result<(), RadiiError> {
        let Some(pos) = self.space.position(index) else {
            return Err(RadiiError::Space(
                ErrorInfo::new("index-out-of-space", "index lies outside the truncation")
                    .with_context("space", self.space.describe())
                    .with_context("index", format!("{index:?}")),
            ));
        };
        self.coefficients[pos] = value;
        Ok(())
    }

    /// Restricts or zero-extends the sequence onto a compatible space.
    pub fn project(&self, space: &S) -> Result<Self, RadiiError> {
        if !self.space.is_compatible(space) {
            return Err(incompatible(&self.space.describe(), &space.describe()));
        }
        let coefficients = space.indices().into_iter().map(|k| self.get(k)).collect();
        Ok(Self {
            space: space.clone(),
            coefficients,
        })
    }

    /// Applies `f` to every coefficient.
    pub fn map<U: Number>(&self, f: impl Fn(T) -> U) -> Sequence<S, U> {
        Sequence {
            space: self.space.clone(),
            coefficients: self.coefficients.iter().copied().map(f).collect(),
        }
    }

    /// Converts coefficients into a wider numeric type, e.g. `f64` into `Interval`.
    pub fn promote<U: Number + From<T>>(&self) -> Sequence<S, U> {
        self.map(U::from)
    }

    fn combine(&self, other: &Self, sign: T) -> Result<Self, RadiiError> {
        let space = self.space.union(&other.space)?;
        let mut out = Self::zeros(space);
        for (index, value) in self.space.indices().into_iter().zip(&self.coefficients) {
            if let Some(pos) = out.space.position(index) {
                out.coefficients[pos] += *value;
            }
        }
        for (index, value) in other.space.indices().into_iter().zip(&other.coefficients) {
            if let Some(pos) = out.space.position(index) {
                out.coefficients[pos] += sign * *value;
            }
        }
        Ok(out)
    }

    /// Sum on the union of both truncations.
    pub fn try_add(&self, other: &Self) -> Result<Self, RadiiError> {
        self.combine(other, T::one())
    }

    /// Difference on the union of both truncations.
    pub fn try_sub(&self, other: &Self) -> Result<Self, RadiiError> {
        self.combine(other, -T::one())
    }
}

impl<S: ConvolutionRule, T: Number> Sequence<S, T> {
    /// Full discrete convolution, on the product space of both truncations.
    pub fn try_mul(&self, other: &Self) -> Result<Self, RadiiError> {
        let codomain = self.space.product_space(&other.space)?;
        let operator =
            Multiplication::new(self.clone()).project(other.space.clone(), codomain)?;
        operator.apply(other)
    }

    /// Convolution square.
    pub fn square(&self) -> Result<Self, RadiiError> {
        self.try_mul(self)
    }
}

impl<S: SequenceSpace, T: Number> Neg for Sequence<S, T> {
    type Output = Sequence<S, T>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

// Adding a scalar adds the constant function.
impl<S: SequenceSpace, T: Number> Add<T> for Sequence<S, T> {
    type Output = Sequence<S, T>;

    fn add(mut self, rhs: T) -> Self::Output {
        let index = self.space.constant_index();
        if let Some(pos) = self.space.position(index) {
            self.coefficients[pos] += rhs;
        }
        self
    }
}

impl<S: SequenceSpace, T: Number> Sub<T> for Sequence<S, T> {
    type Output = Sequence<S, T>;

    fn sub(self, rhs: T) -> Self::Output {
        self + (-rhs)
    }
}

impl<S: SequenceSpace, T: Number> Mul<T> for Sequence<S, T> {
    type Output = Sequence<S, T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

impl<S: SequenceSpace, T: Number> Div<T> for Sequence<S, T> {
    type Output = Sequence<S, T>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|c| c / rhs)
    }
}
