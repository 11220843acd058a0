//! Weighted sequence norms and the operator norms they induce.

use radii_core::errors::{ErrorInfo, RadiiError};
use radii_core::Number;
use serde::{Deserialize, Serialize};

use crate::operator::LinearOperator;
use crate::sequence::Sequence;
use crate::space::{Chebyshev, Fourier, SequenceSpace, Taylor, Tensor, Univariate};

/// Weight attached to `|k|` in an ℓ¹ norm.
///
/// Geometric rates are at least one, which keeps `‖a * b‖ <= ‖a‖ ‖b‖` on
/// every family. Deserialisation checks this too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightRepr", into = "WeightRepr")]
pub enum Weight {
    /// `w(k) = 1`.
    Identity,
    /// `w(k) = ν^|k|` with `ν >= 1`.
    Geometric(f64),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "rate", rename_all = "snake_case")]
enum WeightRepr {
    Identity,
    Geometric(f64),
}

impl From<Weight> for WeightRepr {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Identity => WeightRepr::Identity,
            Weight::Geometric(nu) => WeightRepr::Geometric(nu),
        }
    }
}

impl TryFrom<WeightRepr> for Weight {
    type Error = RadiiError;

    fn try_from(repr: WeightRepr) -> Result<Self, Self::Error> {
        match repr {
            WeightRepr::Identity => Ok(Weight::Identity),
            WeightRepr::Geometric(nu) => Weight::geometric(nu),
        }
    }
}

impl Weight {
    /// Geometric weight; `nu` must be finite and at least one.
    pub fn geometric(nu: f64) -> Result<Self, RadiiError> {
        if !nu.is_finite() || nu < 1.0 {
            return Err(RadiiError::Domain(
                ErrorInfo::new("invalid-weight", "geometric weight rate must be finite and at least one")
                    .with_context("nu", nu.to_string()),
            ));
        }
        Ok(Weight::Geometric(nu))
    }

    /// Evaluates `w(k)` in `T`; interval types get a rigorous enclosure.
    pub fn at<T: Number>(&self, k: usize) -> T {
        match self {
            Weight::Identity => T::one(),
            Weight::Geometric(nu) => {
                let base = T::from_f64(*nu);
                let mut acc = T::one();
                for _ in 0..k {
                    acc = acc * base;
                }
                acc
            }
        }
    }
}

/// Spaces whose indices carry an ℓ¹ weight.
pub trait Ell1Weighted: SequenceSpace {
    /// Weight of `index`, including the symmetry multiplicity of the family.
    fn ell1_factor<T: Number>(&self, index: Self::Index, weight: &Weight) -> T;
}

impl Ell1Weighted for Taylor {
    fn ell1_factor<T: Number>(&self, index: isize, weight: &Weight) -> T {
        weight.at(index.unsigned_abs())
    }
}

impl Ell1Weighted for Fourier {
    fn ell1_factor<T: Number>(&self, index: isize, weight: &Weight) -> T {
        weight.at(index.unsigned_abs())
    }
}

// Only nonnegative Chebyshev indices are stored; each k > 0 stands for ±k.
impl Ell1Weighted for Chebyshev {
    fn ell1_factor<T: Number>(&self, index: isize, weight: &Weight) -> T {
        let w: T = weight.at(index.unsigned_abs());
        if index == 0 {
            w
        } else {
            w + w
        }
    }
}

impl Ell1Weighted for Univariate {
    fn ell1_factor<T: Number>(&self, index: isize, weight: &Weight) -> T {
        match self {
            Univariate::Taylor(s) => s.ell1_factor(index, weight),
            Univariate::Fourier(s) => s.ell1_factor(index, weight),
            Univariate::Chebyshev(s) => s.ell1_factor(index, weight),
        }
    }
}

impl<const N: usize> Ell1Weighted for Tensor<N> {
    fn ell1_factor<T: Number>(&self, index: [isize; N], weight: &Weight) -> T {
        self.axes()
            .iter()
            .zip(index)
            .fold(T::one(), |acc, (axis, k)| acc * axis.ell1_factor::<T>(k, weight))
    }
}

/// Norm on sequences of a given space.
pub trait BanachSpace<S: SequenceSpace> {
    /// Norm of `a`.
    fn norm<T: Number>(&self, a: &Sequence<S, T>) -> T;

    /// Norm of `op` as a map from `(S, self)` to `(S, self)`.
    fn operator_norm<T: Number>(&self, op: &LinearOperator<S, S, T>) -> T;
}

/// Weighted ℓ¹ norm `Σ |a_k| w(k)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ell1 {
    /// Weight applied on every axis.
    pub weight: Weight,
}

impl Ell1 {
    /// Unweighted ℓ¹.
    pub fn identity() -> Self {
        Self {
            weight: Weight::Identity,
        }
    }

    /// Geometrically weighted ℓ¹.
    pub fn geometric(nu: f64) -> Result<Self, RadiiError> {
        Ok(Self {
            weight: Weight::geometric(nu)?,
        })
    }
}

impl<S: Ell1Weighted> BanachSpace<S> for Ell1 {
    fn norm<T: Number>(&self, a: &Sequence<S, T>) -> T {
        a.space()
            .indices()
            .into_iter()
            .zip(a.coefficients())
            .fold(T::zero(), |acc, (k, &c)| {
                acc + c.abs_value() * a.space().ell1_factor::<T>(k, &self.weight)
            })
    }

    // Weighted maximum column sum.
    fn operator_norm<T: Number>(&self, op: &LinearOperator<S, S, T>) -> T {
        let rows = op.codomain().indices();
        let mut best = T::zero();
        for (col, j) in op.domain().indices().into_iter().enumerate() {
            let mut column = T::zero();
            for (row, &i) in rows.iter().enumerate() {
                let entry = op.coefficients()[(row, col)];
                column += entry.abs_value() * op.codomain().ell1_factor::<T>(i, &self.weight);
            }
            let scaled = column / op.domain().ell1_factor::<T>(j, &self.weight);
            best = best.max_value(scaled);
        }
        best
    }
}

/// Supremum norm `max |a_k|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EllInf;

impl<S: SequenceSpace> BanachSpace<S> for EllInf {
    fn norm<T: Number>(&self, a: &Sequence<S, T>) -> T {
        a.coefficients()
            .iter()
            .fold(T::zero(), |acc, &c| acc.max_value(c.abs_value()))
    }

    // Maximum row sum.
    fn operator_norm<T: Number>(&self, op: &LinearOperator<S, S, T>) -> T {
        let m = op.coefficients();
        let mut best = T::zero();
        for row in 0..m.nrows() {
            let mut sum = T::zero();
            for col in 0..m.ncols() {
                sum += m[(row, col)].abs_value();
            }
            best = best.max_value(sum);
        }
        best
    }
}
