//! Canonical dimensions, their algebra, and type-level dimension tags.

use crate::base::BaseDimension;
use crate::seq;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{Div, Mul};
use log::trace;

/// A base dimension raised to an integer power, e.g. `T^-1`.
///
/// Terms straight from user input may carry a zero exponent or repeat a base; a canonical [`Dimension`] never holds
/// such terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExponentTerm {
    base: BaseDimension,
    exponent: i32,
}

impl ExponentTerm {
    /// Creates the term `base^exponent`.
    #[inline]
    pub const fn new(base: BaseDimension, exponent: i32) -> Self {
        Self { base, exponent }
    }

    /// The base dimension of this term.
    #[inline]
    pub const fn base(self) -> BaseDimension {
        self.base
    }

    /// The exponent of this term.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// The same base with the exponent negated.
    #[inline]
    pub const fn invert(self) -> Self {
        Self::new(self.base, -self.exponent)
    }
}

/// Terms order by base dimension first, exponent second.
impl PartialOrd for ExponentTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExponentTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then(self.exponent.cmp(&other.exponent))
    }
}

impl Display for ExponentTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.exponent == 1 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}^{}", self.base, self.exponent)
        }
    }
}

/// A derived physical dimension in canonical form.
///
/// A `Dimension` is a sequence of [`ExponentTerm`]s that is
///
/// - sorted ascending by base dimension,
/// - free of duplicate base dimensions,
/// - free of zero exponents.
///
/// The empty sequence is the dimensionless dimension. Values can only be obtained through canonicalization, so two
/// dimensions are physically the same exactly when they compare equal.
///
/// ```rust
/// use dimen_core::{dimension, BaseDimension, Dimension};
///
/// let velocity = dimension![BaseDimension::TIME => -1, BaseDimension::LENGTH => 1];
/// let length = dimension![BaseDimension::LENGTH => 1];
/// let time = dimension![BaseDimension::TIME => 1];
///
/// assert_eq!(velocity, length.divide(&time));
/// assert_eq!(velocity.to_string(), "L·T^-1");
/// assert!(velocity.multiply(&velocity.invert()).is_dimensionless());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension {
    terms: Vec<ExponentTerm>,
}

impl Dimension {
    /// Canonicalizes an arbitrary collection of exponent terms.
    ///
    /// The input may be unsorted, repeat base dimensions and contain zero exponents. Terms are merge-sorted by base
    /// dimension (then exponent), runs of the same base are collapsed by summing their exponents, and anything that
    /// sums to zero is dropped.
    pub fn new(terms: impl IntoIterator<Item = ExponentTerm>) -> Self {
        let sorted = seq::sort_by(terms.into_iter().collect(), ExponentTerm::cmp);
        let input_len = sorted.len();

        let mut canonical: Vec<ExponentTerm> = Vec::with_capacity(input_len);
        for term in sorted {
            match canonical.last_mut() {
                Some(last) if last.base == term.base => last.exponent += term.exponent,
                _ => canonical.push(term),
            }
        }
        canonical.retain(|term| term.exponent != 0);

        if canonical.len() != input_len {
            trace!(
                "canonicalized {} exponent terms into {}",
                input_len,
                canonical.len()
            );
        }

        Self { terms: canonical }
    }

    /// Alias of [`Dimension::new`].
    #[inline]
    pub fn canonicalize(terms: impl IntoIterator<Item = ExponentTerm>) -> Self {
        Self::new(terms)
    }

    /// The dimensionless dimension (no terms).
    #[inline]
    pub const fn dimensionless() -> Self {
        Self { terms: Vec::new() }
    }

    /// A dimension consisting of a single base dimension to the first power.
    pub fn base(base: BaseDimension) -> Self {
        Self {
            terms: vec![ExponentTerm::new(base, 1)],
        }
    }

    /// Whether this is the dimensionless dimension.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.terms.is_empty()
    }

    /// The canonical terms, sorted by base dimension.
    #[inline]
    pub fn terms(&self) -> &[ExponentTerm] {
        &self.terms
    }

    /// Exponent of `base` in this dimension (`0` if absent).
    pub fn exponent_of(&self, base: BaseDimension) -> i32 {
        self.terms
            .binary_search_by(|term| term.base.cmp(&base))
            .map(|idx| self.terms[idx].exponent)
            .unwrap_or(0)
    }

    /// Product of two dimensions: the canonical form of both term lists concatenated.
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        Self::new(self.terms.iter().chain(other.terms.iter()).copied())
    }

    /// Quotient of two dimensions: `self * other^-1`.
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.multiply(&other.invert())
    }

    /// Inverse dimension: every exponent negated.
    ///
    /// Negating exponents keeps the sort order and cannot introduce zeros, so the result is already canonical.
    pub fn invert(&self) -> Dimension {
        Self {
            terms: self.terms.iter().map(|term| term.invert()).collect(),
        }
    }

    /// Raises this dimension to an integer power.
    pub fn pow(&self, n: i32) -> Dimension {
        Self::new(
            self.terms
                .iter()
                .map(|term| ExponentTerm::new(term.base, term.exponent * n)),
        )
    }
}

impl FromIterator<ExponentTerm> for Dimension {
    fn from_iter<I: IntoIterator<Item = ExponentTerm>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<BaseDimension> for Dimension {
    fn from(base: BaseDimension) -> Self {
        Self::base(base)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.terms.is_empty() {
            return f.write_str("1");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str("·")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl Mul for &Dimension {
    type Output = Dimension;
    fn mul(self, rhs: &Dimension) -> Dimension {
        self.multiply(rhs)
    }
}

impl Mul for Dimension {
    type Output = Dimension;
    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for &Dimension {
    type Output = Dimension;
    fn div(self, rhs: &Dimension) -> Dimension {
        self.divide(rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;
    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimension tags
// ─────────────────────────────────────────────────────────────────────────────

/// Marker trait for type-level **dimension tags** (Length, Time, …).
///
/// A tag names a dimension at compile time so that units can be grouped (`LengthUnit`, …) and converted with a
/// purely static check. Its canonical value is available through [`DimensionTag::dimension`]. You usually model a
/// tag as an empty enum:
///
/// ```rust
/// use dimen_core::{BaseDimension, Dimension, DimensionTag};
///
/// pub enum Length {}
/// impl DimensionTag for Length {
///     fn dimension() -> Dimension {
///         Dimension::base(BaseDimension::LENGTH)
///     }
/// }
/// ```
pub trait DimensionTag: 'static {
    /// The canonical dimension this tag stands for.
    fn dimension() -> Dimension;
}

/// Tag for the product of two dimension tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulDim<A: DimensionTag, B: DimensionTag>(PhantomData<(A, B)>);
impl<A: DimensionTag, B: DimensionTag> DimensionTag for MulDim<A, B> {
    fn dimension() -> Dimension {
        A::dimension().multiply(&B::dimension())
    }
}

/// Tag for the quotient of two dimension tags, e.g. `Length / Time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: DimensionTag, D: DimensionTag>(PhantomData<(N, D)>);
impl<N: DimensionTag, D: DimensionTag> DimensionTag for DivDim<N, D> {
    fn dimension() -> Dimension {
        N::dimension().divide(&D::dimension())
    }
}

/// Tag for dimensionless quantities.
pub enum Dimensionless {}
impl DimensionTag for Dimensionless {
    fn dimension() -> Dimension {
        Dimension::dimensionless()
    }
}
