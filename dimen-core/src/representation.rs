//! Numeric representations backing a [`Quantity`](crate::Quantity).
//!
//! The trait hierarchy is:
//! ```text
//! QuantityValues           zero / min / max policy
//!   └── Representation     arithmetic + rescaling
//!         ├── Integral     adds `%`
//!         └── FloatingPoint
//! ```
//!
//! Cross-representation behaviour is described by three pairwise traits:
//!
//! - [`Promote<Rhs>`]: the common type two representations combine into (`i32` and `f32` give `f32`).
//! - [`CastFrom<Src>`]: an explicit, possibly lossy conversion.
//! - [`NonNarrowing<Src>`]: marks the conversions that are allowed implicitly: into a floating-point type, or from a
//!   non-floating one. Floating into integral has no impl.
//!
//! All of these are implemented for the primitive integers up to 64 bits (`isize` and `usize` included) and for
//! `f32`/`f64`. Integral rescaling computes in `i128`, so the 128-bit integers are not representations. Promotion
//! never loses range: same-width signed and unsigned operands meet in the next wider signed type, and `u64` has no
//! signed partner. `isize` and `usize` only promote with themselves and the floats. Custom representation types opt
//! in by implementing the traits themselves.

use crate::ratio::Ratio;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Rem, Sub};

/// Zero and extremal values of a representation.
///
/// [`Quantity::zero`](crate::Quantity::zero), [`Quantity::min_value`](crate::Quantity::min_value) and
/// [`Quantity::max_value`](crate::Quantity::max_value) are derived from this policy, so custom representation types
/// choose their own values.
pub trait QuantityValues: Sized {
    /// The additive identity.
    fn zero() -> Self;
    /// The lowest finite value.
    fn min_value() -> Self;
    /// The highest finite value.
    fn max_value() -> Self;
}

/// A numeric type that can back a quantity.
pub trait Representation:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + QuantityValues
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Whether this representation is floating point.
    const FLOATING_POINT: bool;

    /// One representation-native step, used by increment and decrement.
    fn one() -> Self;

    /// Multiplies by `factor`, computing `self * numerator / denominator`.
    ///
    /// Integral representations truncate toward zero.
    ///
    /// # Panics
    ///
    /// Integral representations panic when the result does not fit the type; see
    /// [`checked_rescale`](Representation::checked_rescale).
    fn rescale(self, factor: Ratio) -> Self;

    /// Like [`rescale`](Representation::rescale), but returns `None` instead of overflowing.
    fn checked_rescale(self, factor: Ratio) -> Option<Self> {
        Some(self.rescale(factor))
    }

    /// Like [`rescale`](Representation::rescale), but returns `None` when the result is not exactly representable.
    fn rescale_exact(self, factor: Ratio) -> Option<Self> {
        Some(self.rescale(factor))
    }
}

/// Non-floating representations; the only ones that support `%`.
pub trait Integral: Representation + Rem<Output = Self> {}

/// Floating-point representations.
pub trait FloatingPoint: Representation {}

/// The common representation two operands are promoted to before combining.
pub trait Promote<Rhs: Representation>: Representation {
    /// The promoted type.
    type Promoted: Representation;

    /// Converts the left operand into the promoted type.
    fn promote(self) -> Self::Promoted;

    /// Converts the right operand into the promoted type.
    fn promote_rhs(rhs: Rhs) -> Self::Promoted;
}

/// Explicit conversion from `Src`, possibly lossy.
pub trait CastFrom<Src>: Sized {
    /// Converts `src` with `as`-cast semantics.
    fn cast_from(src: Src) -> Self;
}

/// Marker for conversions from `Src` that never narrow floating point into non-floating point.
pub trait NonNarrowing<Src>: CastFrom<Src> {}

// ─────────────────────────────────────────────────────────────────────────────
// Primitive implementations
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_integral {
    ($($t:ty),+) => {
        $(
            impl QuantityValues for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }
                #[inline]
                fn min_value() -> Self {
                    <$t>::MIN
                }
                #[inline]
                fn max_value() -> Self {
                    <$t>::MAX
                }
            }

            impl Representation for $t {
                const FLOATING_POINT: bool = false;

                #[inline]
                fn one() -> Self {
                    1
                }

                fn rescale(self, factor: Ratio) -> Self {
                    match self.checked_rescale(factor) {
                        Some(value) => value,
                        None => panic!(
                            "overflow rescaling {} by {}: result does not fit in {}",
                            self,
                            factor,
                            stringify!($t)
                        ),
                    }
                }

                fn checked_rescale(self, factor: Ratio) -> Option<Self> {
                    if factor.is_one() {
                        return Some(self);
                    }
                    let wide = self as i128;
                    let num = factor.numerator() as i128;
                    let den = factor.denominator() as i128;
                    let scaled = match wide.checked_mul(num) {
                        Some(product) => product / den,
                        None => (wide / den).checked_mul(num)?,
                    };
                    <$t>::try_from(scaled).ok()
                }

                fn rescale_exact(self, factor: Ratio) -> Option<Self> {
                    let product = (self as i128).checked_mul(factor.numerator() as i128)?;
                    let den = factor.denominator() as i128;
                    if product % den != 0 {
                        return None;
                    }
                    <$t>::try_from(product / den).ok()
                }
            }

            impl Integral for $t {}
        )+
    };
}

macro_rules! impl_floating {
    ($($t:ty),+) => {
        $(
            impl QuantityValues for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }
                #[inline]
                fn min_value() -> Self {
                    <$t>::MIN
                }
                #[inline]
                fn max_value() -> Self {
                    <$t>::MAX
                }
            }

            impl Representation for $t {
                const FLOATING_POINT: bool = true;

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[allow(clippy::unnecessary_cast)]
                fn rescale(self, factor: Ratio) -> Self {
                    if factor.is_one() {
                        return self;
                    }
                    (self as f64 * factor.numerator() as f64 / factor.denominator() as f64) as $t
                }
            }

            impl FloatingPoint for $t {}
        )+
    };
}

impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_floating!(f32, f64);

macro_rules! impl_promote_self {
    ($($t:ty),+) => {
        $(
            impl Promote<$t> for $t {
                type Promoted = $t;
                #[inline]
                fn promote(self) -> $t {
                    self
                }
                #[inline]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )+
    };
}

macro_rules! impl_promote {
    ($($a:ty, $b:ty => $out:ty);+ $(;)?) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl Promote<$b> for $a {
                type Promoted = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            #[allow(clippy::unnecessary_cast)]
            impl Promote<$a> for $b {
                type Promoted = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

impl_promote_self!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl_promote! {
    // signed widening
    i8, i16 => i16; i8, i32 => i32; i8, i64 => i64;
    i16, i32 => i32; i16, i64 => i64;
    i32, i64 => i64;
    // unsigned widening
    u8, u16 => u16; u8, u32 => u32; u8, u64 => u64;
    u16, u32 => u32; u16, u64 => u64;
    u32, u64 => u64;
    // unsigned into a wider signed type
    u8, i16 => i16; u8, i32 => i32; u8, i64 => i64;
    u16, i32 => i32; u16, i64 => i64;
    u32, i64 => i64;
    // same-width signed and unsigned meet in the next wider signed type
    i8, u8 => i16; i16, u16 => i32; i32, u32 => i64;
    // integers with floats
    i8, f32 => f32; i16, f32 => f32; i32, f32 => f32; i64, f32 => f32;
    u8, f32 => f32; u16, f32 => f32; u32, f32 => f32; u64, f32 => f32;
    i8, f64 => f64; i16, f64 => f64; i32, f64 => f64; i64, f64 => f64;
    u8, f64 => f64; u16, f64 => f64; u32, f64 => f64; u64, f64 => f64;
    isize, f32 => f32; usize, f32 => f32; isize, f64 => f64; usize, f64 => f64;
    // floats
    f32, f64 => f64;
}

macro_rules! impl_cast_from {
    ($dst:ty; $($src:ty),+) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(src: $src) -> $dst {
                    src as $dst
                }
            }
        )+
    };
}

impl_cast_from!(i8; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(i16; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(i32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(i64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(isize; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(u8; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(u16; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(u32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(u64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(usize; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(f32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_cast_from!(f64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! impl_non_narrowing {
    ($dst:ty; $($src:ty),+) => {
        $(
            impl NonNarrowing<$src> for $dst {}
        )+
    };
}

// floating targets accept everything
impl_non_narrowing!(f32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_non_narrowing!(f64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
// integral targets accept integral sources only
impl_non_narrowing!(i8; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(i16; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(i32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(i64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(u8; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(u16; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(u32; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(u64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(isize; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_non_narrowing!(usize; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Whether converting `Src` into `Dst` is allowed by the no-narrowing policy.
///
/// This is the run-time form of the [`NonNarrowing`] rule, driven by [`Representation::FLOATING_POINT`].
#[inline]
pub fn is_non_narrowing<Src: Representation, Dst: Representation>() -> bool {
    Dst::FLOATING_POINT || !Src::FLOATING_POINT
}
