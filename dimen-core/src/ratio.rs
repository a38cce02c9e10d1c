//! Exact rational scale factors.

use crate::error::{Error, Result};
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul};

/// An exact, positive rational scale factor `numerator / denominator`.
///
/// Ratios are always stored in lowest terms with `numerator >= 0` and `denominator > 0`, so two ratios denote the
/// same factor exactly when they compare equal. Composition is exact; operands are cross-reduced before multiplying
/// so repeated composition does not grow the terms.
///
/// All arithmetic is `const`, which lets unit declarations compute their ratios at compile time. An invalid ratio
/// in a `const` context is a compile error:
///
/// ```compile_fail
/// use dimen_core::Ratio;
/// const BAD: Ratio = Ratio::new(1, 0);
/// let _ = BAD;
/// ```
///
/// ```rust
/// use dimen_core::Ratio;
///
/// const PER_MILLE: Ratio = Ratio::new(1, 1000);
/// assert_eq!(PER_MILLE.multiply(Ratio::new(1000, 1)), Ratio::ONE);
/// assert_eq!(Ratio::new(10, 4), Ratio::new(5, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Ratio {
    /// `10^-18`
    pub const ATTO: Self = Self::new(1, 1_000_000_000_000_000_000);
    /// `10^-15`
    pub const FEMTO: Self = Self::new(1, 1_000_000_000_000_000);
    /// `10^-12`
    pub const PICO: Self = Self::new(1, 1_000_000_000_000);
    /// `10^-9`
    pub const NANO: Self = Self::new(1, 1_000_000_000);
    /// `10^-6`
    pub const MICRO: Self = Self::new(1, 1_000_000);
    /// `10^-3`
    pub const MILLI: Self = Self::new(1, 1_000);
    /// `10^-2`
    pub const CENTI: Self = Self::new(1, 100);
    /// `10^-1`
    pub const DECI: Self = Self::new(1, 10);
    /// `1`
    pub const ONE: Self = Self::new(1, 1);
    /// `10^1`
    pub const DECA: Self = Self::new(10, 1);
    /// `10^2`
    pub const HECTO: Self = Self::new(100, 1);
    /// `10^3`
    pub const KILO: Self = Self::new(1_000, 1);
    /// `10^6`
    pub const MEGA: Self = Self::new(1_000_000, 1);
    /// `10^9`
    pub const GIGA: Self = Self::new(1_000_000_000, 1);
    /// `10^12`
    pub const TERA: Self = Self::new(1_000_000_000_000, 1);
    /// `10^15`
    pub const PETA: Self = Self::new(1_000_000_000_000_000, 1);
    /// `10^18`
    pub const EXA: Self = Self::new(1_000_000_000_000_000_000, 1);

    /// Creates the reduced ratio `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `num < 0` or `den <= 0`. In a `const` item this is reported at compile time.
    pub const fn new(num: i64, den: i64) -> Self {
        if !Self::is_valid(num, den) {
            panic!("invalid ratio: numerator must be >= 0 and denominator must be > 0");
        }
        Self::reduced(num as i128, den as i128)
    }

    /// Fallible counterpart of [`Ratio::new`] for values only known at run time.
    ///
    /// ```rust
    /// use dimen_core::{Error, Ratio};
    ///
    /// assert_eq!(Ratio::try_new(6, 4), Ok(Ratio::new(3, 2)));
    /// assert!(matches!(Ratio::try_new(1, -2), Err(Error::InvalidRatio { .. })));
    /// ```
    pub fn try_new(num: i64, den: i64) -> Result<Self> {
        if Self::is_valid(num, den) {
            Ok(Self::reduced(num as i128, den as i128))
        } else {
            Err(Error::InvalidRatio {
                numerator: num,
                denominator: den,
            })
        }
    }

    #[inline]
    const fn is_valid(num: i64, den: i64) -> bool {
        num >= 0 && den > 0
    }

    const fn reduced(num: i128, den: i128) -> Self {
        let g = gcd(num, den);
        let (num, den) = if g > 1 { (num / g, den / g) } else { (num, den) };
        if num > i64::MAX as i128 || den > i64::MAX as i128 {
            panic!("ratio overflow: reduced terms do not fit in i64");
        }
        Self {
            num: num as i64,
            den: den as i64,
        }
    }

    /// Numerator in lowest terms.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    /// Denominator in lowest terms (always positive).
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// Whether this ratio is exactly one.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Exact product `self * rhs`.
    pub const fn multiply(self, rhs: Ratio) -> Ratio {
        let g1 = gcd(self.num as i128, rhs.den as i128);
        let g2 = gcd(rhs.num as i128, self.den as i128);
        let (g1, g2) = (if g1 == 0 { 1 } else { g1 }, if g2 == 0 { 1 } else { g2 });
        let num = (self.num as i128 / g1) * (rhs.num as i128 / g2);
        let den = (self.den as i128 / g2) * (rhs.den as i128 / g1);
        Self::reduced(num, den)
    }

    /// Exact quotient `self / rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, since the result would have a zero denominator.
    pub const fn divide(self, rhs: Ratio) -> Ratio {
        if rhs.num == 0 {
            panic!("invalid ratio: division by a zero ratio");
        }
        self.multiply(Ratio {
            num: rhs.den,
            den: rhs.num,
        })
    }

    /// Nearest `f64` to this ratio.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl Mul for Ratio {
    type Output = Ratio;
    #[inline]
    fn mul(self, rhs: Ratio) -> Ratio {
        self.multiply(rhs)
    }
}

impl Div for Ratio {
    type Output = Ratio;
    #[inline]
    fn div(self, rhs: Ratio) -> Ratio {
        self.divide(rhs)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
