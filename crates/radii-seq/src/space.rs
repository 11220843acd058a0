//! Truncated sequence spaces and their finite index sets.

use radii_core::errors::{ErrorInfo, RadiiError};
use serde::{Deserialize, Serialize};

pub(crate) fn incompatible(left: &str, right: &str) -> RadiiError {
    RadiiError::Space(
        ErrorInfo::new("incompatible-spaces", "sequence spaces are not compatible")
            .with_context("left", left)
            .with_context("right", right),
    )
}

/// Finite index set of a truncated sequence space.
///
/// `indices` must enumerate the space in storage order, so that the `n`-th
/// index has `position == Some(n)`.
pub trait SequenceSpace: Clone + std::fmt::Debug + PartialEq {
    /// Index type: `isize` for univariate spaces, `[isize; N]` for tensors.
    type Index: Copy + std::fmt::Debug + PartialEq;

    /// Number of stored coefficients.
    fn dimension(&self) -> usize;

    /// All indices, in storage order.
    fn indices(&self) -> Vec<Self::Index>;

    /// Storage position of `index`, or `None` when outside the truncation.
    fn position(&self, index: Self::Index) -> Option<usize>;

    /// Returns true when `index` belongs to the truncation.
    fn contains(&self, index: Self::Index) -> bool {
        self.position(index).is_some()
    }

    /// Index of the constant function.
    fn constant_index(&self) -> Self::Index;

    /// Same algebraic family; orders may differ.
    fn is_compatible(&self, other: &Self) -> bool;

    /// Smallest space containing both truncations.
    fn union(&self, other: &Self) -> Result<Self, RadiiError>;

    /// Space holding the full convolution product of two sequences.
    fn product_space(&self, other: &Self) -> Result<Self, RadiiError>;

    /// Short label used in error contexts.
    fn describe(&self) -> String;
}

/// Taylor series truncated at `order`: indices `0..=order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Taylor {
    order: usize,
}

impl Taylor {
    /// Creates a Taylor space of the given order.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Truncation order.
    pub fn order(&self) -> usize {
        self.order
    }
}

/// Fourier series truncated at `order` with fundamental `frequency`:
/// indices `-order..=order`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FourierRepr")]
pub struct Fourier {
    order: usize,
    frequency: f64,
}

#[derive(Deserialize)]
struct FourierRepr {
    order: usize,
    frequency: f64,
}

impl TryFrom<FourierRepr> for Fourier {
    type Error = RadiiError;

    fn try_from(repr: FourierRepr) -> Result<Self, Self::Error> {
        Fourier::new(repr.order, repr.frequency)
    }
}

impl Fourier {
    /// Creates a Fourier space; the frequency must be finite and positive.
    pub fn new(order: usize, frequency: f64) -> Result<Self, RadiiError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(RadiiError::Domain(
                ErrorInfo::new("invalid-frequency", "fourier frequency must be finite and positive")
                    .with_context("frequency", frequency.to_string()),
            ));
        }
        Ok(Self { order, frequency })
    }

    /// Truncation order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Fundamental frequency.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// Chebyshev series truncated at `order`: indices `0..=order`, with
/// coefficients extended evenly to negative indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chebyshev {
    order: usize,
}

impl Chebyshev {
    /// Creates a Chebyshev space of the given order.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Truncation order.
    pub fn order(&self) -> usize {
        self.order
    }
}

fn order_of(order: usize) -> isize {
    order as isize
}

impl SequenceSpace for Taylor {
    type Index = isize;

    fn dimension(&self) -> usize {
        self.order + 1
    }

    fn indices(&self) -> Vec<isize> {
        (0..=order_of(self.order)).collect()
    }

    fn position(&self, index: isize) -> Option<usize> {
        (0..=order_of(self.order))
            .contains(&index)
            .then_some(index as usize)
    }

    fn constant_index(&self) -> isize {
        0
    }

    fn is_compatible(&self, _other: &Self) -> bool {
        true
    }

    fn union(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Taylor::new(self.order.max(other.order)))
    }

    fn product_space(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Taylor::new(self.order + other.order))
    }

    fn describe(&self) -> String {
        format!("Taylor({})", self.order)
    }
}

impl SequenceSpace for Fourier {
    type Index = isize;

    fn dimension(&self) -> usize {
        2 * self.order + 1
    }

    fn indices(&self) -> Vec<isize> {
        let n = order_of(self.order);
        (-n..=n).collect()
    }

    fn position(&self, index: isize) -> Option<usize> {
        let n = order_of(self.order);
        (-n..=n).contains(&index).then_some((index + n) as usize)
    }

    fn constant_index(&self) -> isize {
        0
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.frequency == other.frequency
    }

    fn union(&self, other: &Self) -> Result<Self, RadiiError> {
        if !self.is_compatible(other) {
            return Err(incompatible(&self.describe(), &other.describe()));
        }
        Ok(Fourier {
            order: self.order.max(other.order),
            frequency: self.frequency,
        })
    }

    fn product_space(&self, other: &Self) -> Result<Self, RadiiError> {
        if !self.is_compatible(other) {
            return Err(incompatible(&self.describe(), &other.describe()));
        }
        Ok(Fourier {
            order: self.order + other.order,
            frequency: self.frequency,
        })
    }

    fn describe(&self) -> String {
        format!("Fourier({}, {})", self.order, self.frequency)
    }
}

impl SequenceSpace for Chebyshev {
    type Index = isize;

    fn dimension(&self) -> usize {
        self.order + 1
    }

    fn indices(&self) -> Vec<isize> {
        (0..=order_of(self.order)).collect()
    }

    fn position(&self, index: isize) -> Option<usize> {
        (0..=order_of(self.order))
            .contains(&index)
            .then_some(index as usize)
    }

    fn constant_index(&self) -> isize {
        0
    }

    fn is_compatible(&self, _other: &Self) -> bool {
        true
    }

    fn union(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Chebyshev::new(self.order.max(other.order)))
    }

    fn product_space(&self, other: &Self) -> Result<Self, RadiiError> {
        Ok(Chebyshev::new(self.order + other.order))
    }

    fn describe(&self) -> String {
        format!("Chebyshev({})", self.order)
    }
}

/// One axis of a tensor space, or a univariate space chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Univariate {
    /// Taylor axis.
    Taylor(Taylor),
    /// Fourier axis.
    Fourier(Fourier),
    /// Chebyshev axis.
    Chebyshev(Chebyshev),
}

impl Univariate {
    /// Truncation order of the axis.
    pub fn order(&self) -> usize {
        match self {
            Univariate::Taylor(s) => s.order(),
            Univariate::Fourier(s) => s.order(),
            Univariate::Chebyshev(s) => s.order(),
        }
    }
}

impl From<Taylor> for Univariate {
    fn from(space: Taylor) -> Self {
        Univariate::Taylor(space)
    }
}

impl From<Fourier> for Univariate {
    fn from(space: Fourier) -> Self {
        Univariate::Fourier(space)
    }
}

impl From<Chebyshev> for Univariate {
    fn from(space: Chebyshev) -> Self {
        Univariate::Chebyshev(space)
    }
}

impl SequenceSpace for Univariate {
    type Index = isize;

    fn dimension(&self) -> usize {
        match self {
            Univariate::Taylor(s) => s.dimension(),
            Univariate::Fourier(s) => s.dimension(),
            Univariate::Chebyshev(s) => s.dimension(),
        }
    }

    fn indices(&self) -> Vec<isize> {
        match self {
            Univariate::Taylor(s) => s.indices(),
            Univariate::Fourier(s) => s.indices(),
            Univariate::Chebyshev(s) => s.indices(),
        }
    }

    fn position(&self, index: isize) -> Option<usize> {
        match self {
            Univariate::Taylor(s) => s.position(index),
            Univariate::Fourier(s) => s.position(index),
            Univariate::Chebyshev(s) => s.position(index),
        }
    }

    fn constant_index(&self) -> isize {
        0
    }

    fn is_compatible(&self, other: &Self) -> bool {
        match (self, other) {
            (Univariate::Taylor(a), Univariate::Taylor(b)) => a.is_compatible(b),
            (Univariate::Fourier(a), Univariate::Fourier(b)) => a.is_compatible(b),
            (Univariate::Chebyshev(a), Univariate::Chebyshev(b)) => a.is_compatible(b),
            _ => false,
        }
    }

    fn union(&self, other: &Self) -> Result<Self, RadiiError> {
        match (self, other) {
            (Univariate::Taylor(a), Univariate::Taylor(b)) => a.union(b).map(Into::into),
            (Univariate::Fourier(a), Univariate::Fourier(b)) => a.union(b).map(Into::into),
            (Univariate::Chebyshev(a), Univariate::Chebyshev(b)) => a.union(b).map(Into::into),
            _ => Err(incompatible(&self.describe(), &other.describe())),
        }
    }

    fn product_space(&self, other: &Self) -> Result<Self, RadiiError> {
        match (self, other) {
            (Univariate::Taylor(a), Univariate::Taylor(b)) => a.product_space(b).map(Into::into),
            (Univariate::Fourier(a), Univariate::Fourier(b)) => {
                a.product_space(b).map(Into::into)
            }
            (Univariate::Chebyshev(a), Univariate::Chebyshev(b)) => {
                a.product_space(b).map(Into::into)
            }
            _ => Err(incompatible(&self.describe(), &other.describe())),
        }
    }

    fn describe(&self) -> String {
        match self {
            Univariate::Taylor(s) => s.describe(),
            Univariate::Fourier(s) => s.describe(),
            Univariate::Chebyshev(s) => s.describe(),
        }
    }
}

/// Tensor product of `N` univariate axes.
///
/// Coefficients are stored with the first axis varying fastest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor<const N: usize> {
    axes: [Univariate; N],
}

impl<const N: usize> Tensor<N> {
    /// Creates a tensor space from its axes.
    pub fn new(axes: [Univariate; N]) -> Self {
        Self { axes }
    }

    /// Axis spaces.
    pub fn axes(&self) -> &[Univariate; N] {
        &self.axes
    }

    /// Truncation order per axis.
    pub fn order(&self) -> [usize; N] {
        self.axes.map(|axis| axis.order())
    }

    fn try_zip(
        &self,
        other: &Self,
        f: impl Fn(&Univariate, &Univariate) -> Result<Univariate, RadiiError>,
    ) -> Result<Self, RadiiError> {
        let mut axes = self.axes;
        for (slot, (a, b)) in axes.iter_mut().zip(self.axes.iter().zip(other.axes.iter())) {
            *slot = f(a, b)?;
        }
        Ok(Self { axes })
    }
}

/// Cartesian product of per-axis index lists, first axis fastest.
pub(crate) fn cartesian<const N: usize>(lists: &[Vec<isize>; N]) -> Vec<[isize; N]> {
    if lists.iter().any(Vec::is_empty) {
        return Vec::new();
    }
    let total: usize = lists.iter().map(Vec::len).product();
    let mut out = Vec::with_capacity(total);
    let mut cursor = [0usize; N];
    for _ in 0..total {
        let mut index = [0isize; N];
        for axis in 0..N {
            index[axis] = lists[axis][cursor[axis]];
        }
        out.push(index);
        for axis in 0..N {
            cursor[axis] += 1;
            if cursor[axis] < lists[axis].len() {
                break;
            }
            cursor[axis] = 0;
        }
    }
    out
}

impl<const N: usize> SequenceSpace for Tensor<N> {
    type Index = [isize; N];

    fn dimension(&self) -> usize {
        self.axes.iter().map(SequenceSpace::dimension).product()
    }

    fn indices(&self) -> Vec<[isize; N]> {
        cartesian(&self.axes.map(|axis| axis.indices()))
    }

    fn position(&self, index: [isize; N]) -> Option<usize> {
        let mut position = 0;
        let mut stride = 1;
        for (axis, component) in self.axes.iter().zip(index) {
            position += axis.position(component)? * stride;
            stride *= axis.dimension();
        }
        Some(position)
    }

    fn constant_index(&self) -> [isize; N] {
        [0; N]
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.axes
            .iter()
            .zip(other.axes.iter())
            .all(|(a, b)| a.is_compatible(b))
    }

    fn union(&self, other: &Self) -> Result<Self, RadiiError> {
        self.try_zip(other, |a, b| a.union(b))
    }

    fn product_space(&self, other: &Self) -> Result<Self, RadiiError> {
        self.try_zip(other, |a, b| a.product_space(b))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.axes.iter().map(SequenceSpace::describe).collect();
        parts.join(" ⊗ ")
    }
}
