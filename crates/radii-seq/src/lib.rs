#![deny(missing_docs)]
#![doc = "Truncated sequence spaces (Taylor, Fourier, Chebyshev and their tensor products), their convolution index model, and multiplication operators compiled into dense matrices."]

/// Multiplication operators and their projection onto matrices.
pub mod multiplication;
/// Weighted norms and induced operator norms.
pub mod norm;
/// Dense linear operators between sequence spaces.
pub mod operator;
/// Convolution index model per space family.
pub mod rule;
/// Coefficient sequences and their arithmetic.
pub mod sequence;
/// Sequence spaces and index sets.
pub mod space;

pub use multiplication::Multiplication;
pub use norm::{BanachSpace, Ell1, Ell1Weighted, EllInf, Weight};
pub use operator::LinearOperator;
pub use rule::ConvolutionRule;
pub use sequence::Sequence;
pub use space::{Chebyshev, Fourier, SequenceSpace, Taylor, Tensor, Univariate};
