//! Dense linear operators between truncated sequence spaces.

use nalgebra::DMatrix;
use radii_core::errors::{ErrorInfo, RadiiError};
use radii_core::Number;

use crate::norm::BanachSpace;
use crate::sequence::Sequence;
use crate::space::SequenceSpace;

fn mismatch(code: &str, expected: String, actual: String) -> RadiiError {
    RadiiError::Space(
        ErrorInfo::new(code, "operator spaces do not line up")
            .with_context("expected", expected)
            .with_context("actual", actual),
    )
}

/// Dense matrix from `domain` to `codomain`.
///
/// Rows follow the storage order of the codomain, columns that of the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearOperator<D, C, T: nalgebra::Scalar> {
    domain: D,
    codomain: C,
    coefficients: DMatrix<T>,
}

impl<D: SequenceSpace, C: SequenceSpace, T: Number> LinearOperator<D, C, T> {
    /// Zero operator.
    pub fn zeros(domain: D, codomain: C) -> Self {
        let coefficients =
            DMatrix::from_element(codomain.dimension(), domain.dimension(), T::zero());
        Self {
            domain,
            codomain,
            coefficients,
        }
    }

    /// Wraps an existing matrix; its shape must be `codomain × domain`.
    pub fn from_matrix(domain: D, codomain: C, coefficients: DMatrix<T>) -> Result<Self, RadiiError> {
        if coefficients.nrows() != codomain.dimension() || coefficients.ncols() != domain.dimension()
        {
            return Err(mismatch(
                "dimension-mismatch",
                format!("{}x{}", codomain.dimension(), domain.dimension()),
                format!("{}x{}", coefficients.nrows(), coefficients.ncols()),
            ));
        }
        Ok(Self {
            domain,
            codomain,
            coefficients,
        })
    }

    /// Domain space.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Codomain space.
    pub fn codomain(&self) -> &C {
        &self.codomain
    }

    /// Backing matrix.
    pub fn coefficients(&self) -> &DMatrix<T> {
        &self.coefficients
    }

    /// Mutable entries in column-major order. The shape stays tied to the spaces.
    pub fn coefficients_mut(&mut self) -> &mut [T] {
        self.coefficients.as_mut_slice()
    }

    pub(crate) fn entry_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.coefficients[(row, col)]
    }

    /// Entry at (codomain index, domain index); `None` outside either truncation.
    pub fn entry(&self, i: C::Index, j: D::Index) -> Option<T> {
        let row = self.codomain.position(i)?;
        let col = self.domain.position(j)?;
        Some(self.coefficients[(row, col)])
    }

    /// Resets every entry to zero.
    pub fn fill_zero(&mut self) {
        self.coefficients.fill(T::zero());
    }

    /// Matrix-vector product. The sequence must live on the domain.
    pub fn apply(&self, x: &Sequence<D, T>) -> Result<Sequence<C, T>, RadiiError> {
        if x.space() != &self.domain {
            return Err(mismatch(
                "domain-mismatch",
                self.domain.describe(),
                x.space().describe(),
            ));
        }
        let mut out = vec![T::zero(); self.codomain.dimension()];
        for (col, &xj) in x.coefficients().iter().enumerate() {
            if xj == T::zero() {
                continue;
            }
            for (row, slot) in out.iter_mut().enumerate() {
                *slot += self.coefficients[(row, col)] * xj;
            }
        }
        Sequence::new(self.codomain.clone(), out)
    }

    /// Composition `self ∘ rhs`; the codomain of `rhs` must equal our domain.
    pub fn compose<E: SequenceSpace>(
        &self,
        rhs: &LinearOperator<E, D, T>,
    ) -> Result<LinearOperator<E, C, T>, RadiiError> {
        if rhs.codomain() != &self.domain {
            return Err(mismatch(
                "domain-mismatch",
                self.domain.describe(),
                rhs.codomain().describe(),
            ));
        }
        let (rows, inner, cols) = (
            self.coefficients.nrows(),
            self.coefficients.ncols(),
            rhs.coefficients.ncols(),
        );
        let mut out = LinearOperator::zeros(rhs.domain().clone(), self.codomain.clone());
        for c in 0..cols {
            for k in 0..inner {
                let b = rhs.coefficients[(k, c)];
                if b == T::zero() {
                    continue;
                }
                for r in 0..rows {
                    out.coefficients[(r, c)] += self.coefficients[(r, k)] * b;
                }
            }
        }
        Ok(out)
    }

    /// Entrywise difference of operators on identical spaces.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, RadiiError> {
        if rhs.domain != self.domain || rhs.codomain != self.codomain {
            return Err(mismatch(
                "operator-space-mismatch",
                format!("{} -> {}", self.domain.describe(), self.codomain.describe()),
                format!("{} -> {}", rhs.domain.describe(), rhs.codomain.describe()),
            ));
        }
        let mut out = self.clone();
        for (slot, &value) in out.coefficients.iter_mut().zip(rhs.coefficients.iter()) {
            *slot = *slot - value;
        }
        Ok(out)
    }

    /// Applies `f` to every entry, e.g. to promote `f64` entries into intervals.
    pub fn map<U: Number>(&self, f: impl Fn(T) -> U) -> LinearOperator<D, C, U> {
        LinearOperator {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            coefficients: self.coefficients.map(f),
        }
    }
}

impl<S: SequenceSpace, T: Number> LinearOperator<S, S, T> {
    /// Identity on `space`.
    pub fn identity(space: S) -> Self {
        let mut out = Self::zeros(space.clone(), space);
        for k in 0..out.coefficients.nrows() {
            out.coefficients[(k, k)] = T::one();
        }
        out
    }

    /// Operator norm induced by `norm` on both sides.
    pub fn opnorm<X: BanachSpace<S>>(&self, norm: &X) -> T {
        norm.operator_norm(self)
    }
}
