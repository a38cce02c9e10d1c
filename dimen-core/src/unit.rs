//! Unit types and traits.

use crate::dimension::{Dimension, DimensionTag, Dimensionless, DivDim, MulDim};
use crate::error::{Error, Result};
use crate::ratio::Ratio;
use crate::representation::Representation;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact scale of this unit relative to the *coherent reference unit* of its dimension.
///   Example: if metres are the reference (`Metre::RATIO == Ratio::ONE`), kilometres use `Ratio::KILO` because
///   `1 km = 1000 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to a type-level [`DimensionTag`]; [`Unit::dimension`] is its canonical value.
///
/// Units are normally declared with `#[derive(Unit)]` inside this crate. A manual implementation looks like:
///
/// ```rust
/// use dimen_core::{BaseDimension, Dimension, DimensionTag, Ratio, Unit};
///
/// pub enum Information {}
/// impl DimensionTag for Information {
///     fn dimension() -> Dimension {
///         Dimension::base(BaseDimension::AMOUNT_OF_SUBSTANCE)
///     }
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub enum Dozen {}
/// impl Unit for Dozen {
///     const RATIO: Ratio = Ratio::new(12, 1);
///     type Dim = Information;
///     const SYMBOL: &'static str = "doz";
/// }
///
/// assert_eq!(Dozen::descriptor().ratio(), Ratio::new(12, 1));
/// ```
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Scale relative to the coherent reference unit of the dimension.
    const RATIO: Ratio;

    /// Dimension tag to which this unit belongs.
    type Dim: DimensionTag;

    /// Printable symbol, shown by [`core::fmt::Display`]. Empty for composite units; see [`Unit::symbol`].
    const SYMBOL: &'static str;

    /// Printable symbol, composed from the parts for [`Per`] (`km/h`) and [`Prod`] (`m·m`).
    fn symbol() -> String {
        Self::SYMBOL.to_owned()
    }

    /// Canonical dimension of this unit.
    #[inline]
    fn dimension() -> Dimension {
        <Self::Dim as DimensionTag>::dimension()
    }

    /// Run-time description of this unit.
    fn descriptor() -> UnitDescriptor {
        UnitDescriptor::new(Self::symbol(), Self::dimension(), Self::RATIO)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`: its dimension is `N::Dim / D::Dim` and its ratio is `N::RATIO / D::RATIO`,
/// computed exactly at compile time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.divide(D::RATIO);
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";

    fn symbol() -> String {
        format!("{}/{}", N::symbol(), D::symbol())
    }
}

impl<N: Unit, D: Unit, R: Representation + Display> Display for Quantity<Per<N, D>, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value(), <Per<N, D>>::symbol())
    }
}

/// Unit representing the product of two other units.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.multiply(B::RATIO);
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";

    fn symbol() -> String {
        format!("{}·{}", A::symbol(), B::symbol())
    }
}

impl<A: Unit, B: Unit, R: Representation + Display> Display for Quantity<Prod<A, B>, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value(), <Prod<A, B>>::symbol())
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` has a ratio of one and an empty symbol.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: Ratio = Ratio::ONE;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
}

impl<R: Representation + Display> Display for Quantity<Unitless, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Run-time unit descriptor
// ─────────────────────────────────────────────────────────────────────────────

/// A unit as a value: canonical dimension plus exact scale.
///
/// Marker types give the compile-time guarantees; descriptors are what you inspect, compare and combine when the
/// unit is only known at run time (e.g. in a generic helper that logs or validates).
///
/// ```rust
/// use dimen_core::{Error, Ratio, Unit};
/// use dimen_core::length::{Centimetre, Decimetre};
/// use dimen_core::time::Second;
///
/// let dm = Decimetre::descriptor();
/// let cm = Centimetre::descriptor();
/// assert_eq!(dm.conversion_factor(&cm), Ok(Ratio::new(10, 1)));
/// assert!(matches!(dm.ensure_same(&cm), Err(Error::UnitMismatch { .. })));
/// assert!(matches!(
///     dm.conversion_factor(&Second::descriptor()),
///     Err(Error::DimensionMismatch { .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitDescriptor {
    symbol: String,
    dimension: Dimension,
    ratio: Ratio,
}

impl UnitDescriptor {
    /// Creates a descriptor from its parts. An empty symbol displays as the dimension and scale.
    pub fn new(symbol: impl Into<String>, dimension: Dimension, ratio: Ratio) -> Self {
        Self {
            symbol: symbol.into(),
            dimension,
            ratio,
        }
    }

    /// Printable symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Canonical dimension.
    #[inline]
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Scale relative to the coherent reference unit.
    #[inline]
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Whether values of this unit can be converted into `other`.
    #[inline]
    pub fn is_convertible(&self, other: &UnitDescriptor) -> bool {
        self.dimension == other.dimension
    }

    /// Factor that turns a value in `self` into a value in `to`: `ratio(self) / ratio(to)`.
    pub fn conversion_factor(&self, to: &UnitDescriptor) -> Result<Ratio> {
        if !self.is_convertible(to) {
            return Err(Error::DimensionMismatch {
                expected: to.dimension.clone(),
                found: self.dimension.clone(),
            });
        }
        Ok(self.ratio.divide(to.ratio))
    }

    /// Checks that `other` is the same unit (same dimension and same scale).
    pub fn ensure_same(&self, other: &UnitDescriptor) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension.clone(),
                found: other.dimension.clone(),
            });
        }
        if self.ratio != other.ratio {
            return Err(Error::UnitMismatch {
                dimension: self.dimension.clone(),
                expected: self.ratio,
                found: other.ratio,
            });
        }
        Ok(())
    }

    /// Product unit: dimensions multiply, ratios multiply.
    pub fn multiply(&self, other: &UnitDescriptor) -> UnitDescriptor {
        UnitDescriptor::new(
            self.compose(other, "·"),
            self.dimension.multiply(&other.dimension),
            self.ratio.multiply(other.ratio),
        )
    }

    /// Quotient unit: dimensions divide, ratios divide.
    pub fn divide(&self, other: &UnitDescriptor) -> UnitDescriptor {
        UnitDescriptor::new(
            self.compose(other, "/"),
            self.dimension.divide(&other.dimension),
            self.ratio.divide(other.ratio),
        )
    }

    fn compose(&self, other: &UnitDescriptor, op: &str) -> String {
        if self.symbol.is_empty() || other.symbol.is_empty() {
            String::new()
        } else {
            format!("{}{}{}", self.symbol, op, other.symbol)
        }
    }
}

impl Display for UnitDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "[{}]×{}", self.dimension, self.ratio)
        } else {
            f.write_str(&self.symbol)
        }
    }
}
