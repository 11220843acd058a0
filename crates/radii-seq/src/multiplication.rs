//! Multiplication by a fixed sequence, as an abstract map and as a matrix.

use std::ops::{Add, Div, Mul, Neg, Sub};

use radii_core::errors::RadiiError;
use radii_core::Number;

use crate::norm::BanachSpace;
use crate::operator::LinearOperator;
use crate::rule::ConvolutionRule;
use crate::sequence::Sequence;
use crate::space::incompatible;

/// The map `x ↦ kernel * x` for a fixed kernel sequence.
///
/// The kernel is never mutated; arithmetic on multiplications acts on the
/// kernels and re-wraps the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplication<S, T> {
    sequence: Sequence<S, T>,
}

impl<S: ConvolutionRule, T: Number> Multiplication<S, T> {
    /// Wraps `kernel`.
    pub fn new(kernel: Sequence<S, T>) -> Self {
        Self { sequence: kernel }
    }

    /// The kernel.
    pub fn sequence(&self) -> &Sequence<S, T> {
        &self.sequence
    }

    /// Operator norm on a Banach algebra: the norm of the kernel itself.
    pub fn opnorm<X: BanachSpace<S>>(&self, norm: &X) -> T {
        norm.norm(&self.sequence)
    }

    /// Compiles the multiplication into a dense operator from `domain` to `codomain`.
    pub fn project(&self, domain: S, codomain: S) -> Result<LinearOperator<S, S, T>, RadiiError> {
        self.project_as::<T>(domain, codomain)
    }

    /// Like [`Multiplication::project`], with entries promoted into `U`.
    pub fn project_as<U: Number + From<T>>(
        &self,
        domain: S,
        codomain: S,
    ) -> Result<LinearOperator<S, S, U>, RadiiError> {
        self.check_spaces(&domain, &codomain)?;
        let mut out = LinearOperator::zeros(domain, codomain);
        self.fill(&mut out);
        Ok(out)
    }

    /// Overwrites `target` with the projection onto its own domain and codomain.
    ///
    /// Spaces are validated before any write, so a failed call leaves
    /// `target` untouched. On success every previous entry is discarded.
    pub fn project_into<U: Number + From<T>>(
        &self,
        target: &mut LinearOperator<S, S, U>,
    ) -> Result<(), RadiiError> {
        self.check_spaces(target.domain(), target.codomain())?;
        target.fill_zero();
        self.fill(target);
        Ok(())
    }

    fn check_spaces(&self, domain: &S, codomain: &S) -> Result<(), RadiiError> {
        if !domain.is_compatible(codomain) {
            return Err(incompatible(&domain.describe(), &codomain.describe()));
        }
        let kernel = self.sequence.space();
        if !kernel.is_compatible(domain) {
            return Err(incompatible(&kernel.describe(), &domain.describe()));
        }
        Ok(())
    }

    // C[i, fold(j)] += k[extract(i, j)] for every valid pair. Chebyshev
    // columns receive two contributions, hence the accumulation.
    fn fill<U: Number + From<T>>(&self, target: &mut LinearOperator<S, S, U>) {
        let kernel = self.sequence.space().clone();
        let domain = target.domain().clone();
        let rows = target.codomain().indices();
        for j in domain.mult_domain_indices() {
            let Some(col) = domain.position(domain.fold_column(j)) else {
                continue;
            };
            for (row, &i) in rows.iter().enumerate() {
                if !kernel.is_valid(i, j) {
                    continue;
                }
                let value = self.sequence.get(kernel.extract_offset(i, j));
                *target.entry_mut(row, col) += U::from(value);
            }
        }
    }

    /// Sum of multiplication operators.
    pub fn try_add(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Self::new(self.sequence.try_add(&other.sequence)?))
    }

    /// Difference of multiplication operators.
    pub fn try_sub(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Self::new(self.sequence.try_sub(&other.sequence)?))
    }

    /// Composition, i.e. multiplication by the product of the kernels.
    pub fn try_mul(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Self::new(self.sequence.try_mul(&other.sequence)?))
    }
}

impl<S: ConvolutionRule, T: Number> Neg for Multiplication<S, T> {
    type Output = Multiplication<S, T>;

    fn neg(self) -> Self::Output {
        Multiplication::new(-self.sequence)
    }
}

macro_rules! scalar_ops {
    ($($trait:ident $method:ident),*) => {
        $(
            impl<S: ConvolutionRule, T: Number> $trait<T> for Multiplication<S, T> {
                type Output = Multiplication<S, T>;

                fn $method(self, rhs: T) -> Self::Output {
                    Multiplication::new($trait::$method(self.sequence, rhs))
                }
            }
        )*
    };
}

scalar_ops!(Add add, Sub sub, Mul mul, Div div);
