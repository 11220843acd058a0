//! Per-family convolution rules.
//!
//! A multiplication operator with kernel `k` maps column `j` of its domain to
//! row `i` of its codomain. The rules below say which `(i, j)` pairs carry a
//! nonzero entry and which kernel coefficient lands there. The fill loop in
//! [`crate::multiplication`] is written once against this trait.

use crate::space::{cartesian, Chebyshev, Fourier, SequenceSpace, Taylor, Tensor, Univariate};

/// Index model of a sequence-space family.
pub trait ConvolutionRule: SequenceSpace {
    /// Offsets the fill loop ranges over when `self` is the domain.
    fn mult_domain_indices(&self) -> Vec<Self::Index>;

    /// Whether `(i, j)` carries a kernel contribution, `self` being the kernel space.
    fn is_valid(&self, i: Self::Index, j: Self::Index) -> bool;

    /// Kernel index read for a valid `(i, j)`, `self` being the kernel space.
    fn extract_offset(&self, i: Self::Index, j: Self::Index) -> Self::Index;

    /// Operator column receiving the contribution of offset `j`, `self` being the domain.
    fn fold_column(&self, j: Self::Index) -> Self::Index;
}

impl ConvolutionRule for Taylor {
    fn mult_domain_indices(&self) -> Vec<isize> {
        self.indices()
    }

    fn is_valid(&self, i: isize, j: isize) -> bool {
        (0..=self.order() as isize).contains(&(i - j))
    }

    fn extract_offset(&self, i: isize, j: isize) -> isize {
        i - j
    }

    fn fold_column(&self, j: isize) -> isize {
        j
    }
}

impl ConvolutionRule for Fourier {
    fn mult_domain_indices(&self) -> Vec<isize> {
        self.indices()
    }

    fn is_valid(&self, i: isize, j: isize) -> bool {
        (i - j).unsigned_abs() <= self.order()
    }

    fn extract_offset(&self, i: isize, j: isize) -> isize {
        i - j
    }

    fn fold_column(&self, j: isize) -> isize {
        j
    }
}

// Chebyshev coefficients are even in the index, so the product-to-sum
// identity becomes a convolution over the symmetric range -n..=n. Each
// nonzero column j is reached twice (from +j and -j), which yields
// k[|i-j|] + k[i+j]; column 0 is reached once and reads k[i].
impl ConvolutionRule for Chebyshev {
    fn mult_domain_indices(&self) -> Vec<isize> {
        let n = self.order() as isize;
        (-n..=n).collect()
    }

    fn is_valid(&self, i: isize, j: isize) -> bool {
        (i - j).unsigned_abs() <= self.order()
    }

    fn extract_offset(&self, i: isize, j: isize) -> isize {
        (i - j).abs()
    }

    fn fold_column(&self, j: isize) -> isize {
        j.abs()
    }
}

impl ConvolutionRule for Univariate {
    fn mult_domain_indices(&self) -> Vec<isize> {
        match self {
            Univariate::Taylor(s) => s.mult_domain_indices(),
            Univariate::Fourier(s) => s.mult_domain_indices(),
            Univariate::Chebyshev(s) => s.mult_domain_indices(),
        }
    }

    fn is_valid(&self, i: isize, j: isize) -> bool {
        match self {
            Univariate::Taylor(s) => s.is_valid(i, j),
            Univariate::Fourier(s) => s.is_valid(i, j),
            Univariate::Chebyshev(s) => s.is_valid(i, j),
        }
    }

    fn extract_offset(&self, i: isize, j: isize) -> isize {
        match self {
            Univariate::Taylor(s) => s.extract_offset(i, j),
            Univariate::Fourier(s) => s.extract_offset(i, j),
            Univariate::Chebyshev(s) => s.extract_offset(i, j),
        }
    }

    fn fold_column(&self, j: isize) -> isize {
        match self {
            Univariate::Taylor(s) => s.fold_column(j),
            Univariate::Fourier(s) => s.fold_column(j),
            Univariate::Chebyshev(s) => s.fold_column(j),
        }
    }
}

impl<const N: usize> ConvolutionRule for Tensor<N> {
    fn mult_domain_indices(&self) -> Vec<[isize; N]> {
        cartesian(&self.axes().map(|axis| axis.mult_domain_indices()))
    }

    fn is_valid(&self, i: [isize; N], j: [isize; N]) -> bool {
        self.axes()
            .iter()
            .zip(i.iter().zip(j.iter()))
            .all(|(axis, (&ik, &jk))| axis.is_valid(ik, jk))
    }

    fn extract_offset(&self, i: [isize; N], j: [isize; N]) -> [isize; N] {
        let mut offset = [0isize; N];
        for (k, axis) in self.axes().iter().enumerate() {
            offset[k] = axis.extract_offset(i[k], j[k]);
        }
        offset
    }

    fn fold_column(&self, j: [isize; N]) -> [isize; N] {
        let mut column = [0isize; N];
        for (k, axis) in self.axes().iter().enumerate() {
            column[k] = axis.fold_column(j[k]);
        }
        column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taylor_rule_is_lower_triangular_band() {
        let kernel = Taylor::new(2);
        assert!(kernel.is_valid(3, 1));
        assert!(kernel.is_valid(1, 1));
        assert!(!kernel.is_valid(1, 2));
        assert!(!kernel.is_valid(4, 1));
        assert_eq!(kernel.extract_offset(3, 1), 2);
    }

    #[test]
    fn fourier_rule_is_symmetric_band() {
        let kernel = Fourier::new(1, 1.0).unwrap();
        assert!(kernel.is_valid(-1, 0));
        assert!(kernel.is_valid(2, 1));
        assert!(!kernel.is_valid(2, 0));
        assert_eq!(kernel.extract_offset(-1, 0), -1);
    }

    #[test]
    fn chebyshev_offsets_range_symmetrically_and_fold() {
        let domain = Chebyshev::new(2);
        assert_eq!(domain.mult_domain_indices(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(domain.fold_column(-2), 2);
        let kernel = Chebyshev::new(3);
        assert_eq!(kernel.extract_offset(1, -2), 3);
        assert!(!kernel.is_valid(2, -2));
    }

    #[test]
    fn tensor_rule_is_axiswise_conjunction() {
        let kernel = Tensor::new([Taylor::new(1).into(), Chebyshev::new(1).into()]);
        assert!(kernel.is_valid([1, 0], [0, 1]));
        assert!(!kernel.is_valid([2, 0], [0, 1]));
        assert!(!kernel.is_valid([1, 0], [0, 2]));
        assert_eq!(kernel.extract_offset([1, 0], [0, -1]), [1, 1]);
        assert_eq!(kernel.fold_column([1, -1]), [1, 1]);
        assert_eq!(kernel.mult_domain_indices().len(), 2 * 3);
    }
}
