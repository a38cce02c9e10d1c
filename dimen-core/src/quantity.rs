//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::representation::{is_non_narrowing, CastFrom, Integral, NonNarrowing, Promote, Representation};
use crate::unit::{Per, Prod, Unit, UnitDescriptor};
use core::any::type_name;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, R>` wraps a value of representation `R` (`f64` unless stated otherwise) together with phantom type
/// information about its unit `U`. This enables compile-time dimensional analysis while maintaining zero runtime
/// cost.
///
/// Operands of `+`, `-`, `/`, `%` and the comparison operators must share the same unit type. Mixing units is a
/// compile error, and so is `%` on a floating representation:
///
/// ```compile_fail
/// use dimen_core::length::{Metres, Kilometres};
/// let _ = Metres::new(1.0) + Kilometres::new(1.0);
/// ```
///
/// ```compile_fail
/// use dimen_core::length::Metres;
/// use dimen_core::time::Seconds;
/// let _ = Metres::new(1.0) - Seconds::new(1.0);
/// ```
///
/// ```compile_fail
/// use dimen_core::length::{Metres, Kilometres};
/// let _ = Metres::new(1.0) == Kilometres::new(1.0);
/// ```
///
/// ```compile_fail
/// use dimen_core::length::Metres;
/// use dimen_core::time::Seconds;
/// let _ = Metres::new(1.0) < Seconds::new(1.0);
/// ```
///
/// ```compile_fail
/// use dimen_core::length::Metres;
/// let _ = Metres::new(7.5) % 2.0;
/// ```
///
/// Representations are promoted like the primitive numeric types: adding an `i32` quantity to an `f32` quantity
/// yields an `f32` quantity.
///
/// # Examples
///
/// ```rust
/// use dimen_core::{Quantity, Unit};
/// use dimen_core::length::{Metre, Kilometre};
///
/// let a = Quantity::<Metre, i32>::new(1);
/// let b = Quantity::<Metre, f32>::new(1000.0);
/// let sum: Quantity<Metre, f32> = a + b;
/// assert_eq!(sum.value(), 1001.0);
///
/// let km = Quantity::<Kilometre>::new(1.25);
/// assert_eq!(km.to::<Metre>().value(), 1250.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R: Representation = f64>(R, PhantomData<U>);

impl<U: Unit, R: Representation> Quantity<U, R> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use dimen_core::length::Metres;
    /// let d = Metres::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(self) -> R {
        self.0
    }

    /// The zero quantity, as defined by [`QuantityValues`](crate::representation::QuantityValues).
    #[inline]
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// The lowest value the representation allows.
    ///
    /// ```rust
    /// use dimen_core::Quantity;
    /// use dimen_core::length::Metre;
    /// assert_eq!(Quantity::<Metre, i8>::min_value().value(), i8::MIN);
    /// ```
    #[inline]
    pub fn min_value() -> Self {
        Self::new(R::min_value())
    }

    /// The highest value the representation allows.
    #[inline]
    pub fn max_value() -> Self {
        Self::new(R::max_value())
    }

    /// Builds a quantity from one of another representation, without narrowing.
    ///
    /// Only conversions into a floating-point representation, or out of a non-floating one, are available:
    ///
    /// ```rust
    /// use dimen_core::Quantity;
    /// use dimen_core::length::Metre;
    ///
    /// let q = Quantity::<Metre, f64>::from_quantity(Quantity::<Metre, i32>::new(1));
    /// assert_eq!(q.value(), 1.0);
    /// ```
    ///
    /// ```compile_fail
    /// use dimen_core::Quantity;
    /// use dimen_core::length::Metre;
    ///
    /// let _ = Quantity::<Metre, i32>::from_quantity(Quantity::<Metre, f64>::new(1.5));
    /// ```
    #[inline]
    pub fn from_quantity<R2>(other: Quantity<U, R2>) -> Self
    where
        R2: Representation,
        R: NonNarrowing<R2>,
    {
        Self::new(R::cast_from(other.0))
    }

    /// Explicitly converts the representation, with `as`-cast semantics.
    #[inline]
    pub fn cast<R2>(self) -> Quantity<U, R2>
    where
        R2: Representation + CastFrom<R>,
    {
        Quantity::new(R2::cast_from(self.0))
    }

    /// Converts the representation when the no-narrowing policy allows it, checked at run time.
    ///
    /// ```rust
    /// use dimen_core::{Error, Quantity};
    /// use dimen_core::length::Metre;
    ///
    /// let q = Quantity::<Metre, f64>::new(2.5);
    /// assert!(matches!(q.try_cast::<i32>(), Err(Error::NarrowingRepresentation { .. })));
    /// assert_eq!(q.try_cast::<f32>().map(|q| q.value()), Ok(2.5));
    /// ```
    pub fn try_cast<R2>(self) -> Result<Quantity<U, R2>>
    where
        R2: Representation + CastFrom<R>,
    {
        if is_non_narrowing::<R, R2>() {
            Ok(self.cast())
        } else {
            Err(Error::NarrowingRepresentation {
                from: type_name::<R>(),
                to: type_name::<R2>(),
            })
        }
    }

    /// Converts this quantity to another unit of the same dimension tag.
    ///
    /// The value is multiplied by `U::RATIO / T::RATIO`. Integral representations truncate toward zero; a
    /// truncating conversion is logged at `warn` level.
    ///
    /// # Panics
    ///
    /// Panics if an integral result does not fit the representation. Use [`Quantity::try_convert_to`] to get
    /// [`Error::ConversionOverflow`] instead.
    ///
    /// ```rust
    /// use dimen_core::Quantity;
    /// use dimen_core::length::{Centimetre, Decimetre};
    ///
    /// let dm = Quantity::<Decimetre, i32>::new(2);
    /// assert_eq!(dm.to::<Centimetre>().value(), 20);
    /// assert_eq!(dm.to::<Centimetre>().to::<Decimetre>().value(), 2);
    /// ```
    #[inline]
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T, R> {
        Quantity::new(self.rescaled::<T>())
    }

    /// Converts this quantity to any unit with the same canonical dimension.
    ///
    /// Unlike [`Quantity::to`], the target only needs to *denote* the same dimension, e.g. a velocity expressed as
    /// `Per<Metre, Second>` and a unit declared directly on the `L·T^-1` tag.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error::DimensionMismatch`] message if the dimensions differ, and like [`Quantity::to`] on
    /// integral overflow. Use [`Quantity::try_convert_to`] for a fallible version.
    pub fn convert_to<T: Unit>(self) -> Quantity<T, R> {
        if let Err(err) = Self::check_dimension::<T>() {
            panic!("{}", err);
        }
        Quantity::new(self.rescaled::<T>())
    }

    /// Fallible form of [`Quantity::convert_to`].
    ///
    /// Fails with [`Error::DimensionMismatch`] if the dimensions differ, with [`Error::ConversionOverflow`] if an
    /// integral result does not fit the representation, and with [`Error::InexactConversion`] if it would be
    /// truncated.
    ///
    /// ```rust
    /// use dimen_core::{Error, Quantity};
    /// use dimen_core::length::{Centimetre, Decimetre};
    /// use dimen_core::time::Second;
    ///
    /// let cm = Quantity::<Centimetre, i32>::new(25);
    /// assert!(matches!(cm.try_convert_to::<Decimetre>(), Err(Error::InexactConversion { .. })));
    /// assert!(matches!(cm.try_convert_to::<Second>(), Err(Error::DimensionMismatch { .. })));
    /// ```
    pub fn try_convert_to<T: Unit>(self) -> Result<Quantity<T, R>> {
        Self::check_dimension::<T>()?;
        let factor = U::RATIO.divide(T::RATIO);
        if self.0.checked_rescale(factor).is_none() {
            return Err(Error::ConversionOverflow {
                from: U::symbol(),
                to: T::symbol(),
            });
        }
        self.0
            .rescale_exact(factor)
            .map(Quantity::new)
            .ok_or_else(|| Error::InexactConversion {
                from: U::symbol(),
                to: T::symbol(),
            })
    }

    fn check_dimension<T: Unit>() -> Result<()> {
        let (found, expected) = (U::dimension(), T::dimension());
        if found == expected {
            Ok(())
        } else {
            Err(Error::DimensionMismatch { expected, found })
        }
    }

    fn rescaled<T: Unit>(self) -> R {
        let factor = U::RATIO.divide(T::RATIO);
        let value = self.0.rescale(factor);
        if !R::FLOATING_POINT && self.0.rescale_exact(factor).is_none() {
            warn!(
                "truncating conversion of {:?} from '{}' to '{}' (factor {})",
                self.0,
                U::symbol(),
                T::symbol(),
                factor
            );
        }
        value
    }

    /// Canonical dimension of this quantity's unit.
    #[inline]
    pub fn dimension(self) -> Dimension {
        U::dimension()
    }

    /// Run-time description of this quantity's unit.
    #[inline]
    pub fn descriptor(self) -> UnitDescriptor {
        U::descriptor()
    }

    /// Adds one representation step and returns the new quantity.
    ///
    /// ```rust
    /// use dimen_core::Quantity;
    /// use dimen_core::length::Metre;
    ///
    /// let mut q = Quantity::<Metre, i32>::new(1000);
    /// assert_eq!(q.increment().value(), 1001);
    /// assert_eq!(q.post_increment().value(), 1001);
    /// assert_eq!(q.value(), 1002);
    /// ```
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.0 = self.0 + R::one();
        *self
    }

    /// Adds one representation step and returns the quantity as it was before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.0 = self.0 + R::one();
        old
    }

    /// Subtracts one representation step and returns the new quantity.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.0 = self.0 - R::one();
        *self
    }

    /// Subtracts one representation step and returns the quantity as it was before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.0 = self.0 - R::one();
        old
    }

    /// Divides by a quantity of another unit, producing a quantity of the compound unit `U / D`.
    ///
    /// ```rust
    /// use dimen_core::{BaseDimension, Dimension};
    /// use dimen_core::length::Metres;
    /// use dimen_core::time::Seconds;
    ///
    /// let v = Metres::new(10.0).per(Seconds::new(2.0));
    /// assert_eq!(v.value(), 5.0);
    /// assert_eq!(
    ///     v.dimension(),
    ///     Dimension::base(BaseDimension::LENGTH).multiply(&Dimension::base(BaseDimension::TIME).invert())
    /// );
    /// ```
    #[inline]
    pub fn per<D, R2>(self, rhs: Quantity<D, R2>) -> Quantity<Per<U, D>, R::Promoted>
    where
        D: Unit,
        R2: Representation,
        R: Promote<R2>,
    {
        Quantity::new(self.0.promote() / R::promote_rhs(rhs.0))
    }

    /// Multiplies by a quantity of another unit, producing a quantity of the compound unit `U · B`.
    #[inline]
    pub fn times<B, R2>(self, rhs: Quantity<B, R2>) -> Quantity<Prod<U, B>, R::Promoted>
    where
        B: Unit,
        R2: Representation,
        R: Promote<R2>,
    {
        Quantity::new(self.0.promote() * R::promote_rhs(rhs.0))
    }
}

impl<U: Unit, R: Representation> Default for Quantity<U, R> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit, R: Representation> From<R> for Quantity<U, R> {
    #[inline]
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U, R1, R2> Add<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn add(self, rhs: Quantity<U, R2>) -> Self::Output {
        Quantity::new(self.0.promote() + R1::promote_rhs(rhs.0))
    }
}

impl<U: Unit, R: Representation> AddAssign for Quantity<U, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0 + rhs.0;
    }
}

impl<U, R1, R2> Sub<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn sub(self, rhs: Quantity<U, R2>) -> Self::Output {
        Quantity::new(self.0.promote() - R1::promote_rhs(rhs.0))
    }
}

impl<U: Unit, R: Representation> SubAssign for Quantity<U, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0 - rhs.0;
    }
}

impl<U: Unit, R: Representation + Neg<Output = R>> Neg for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U, R1, R2> Mul<R2> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn mul(self, rhs: R2) -> Self::Output {
        Quantity::new(self.0.promote() * R1::promote_rhs(rhs))
    }
}

impl<U: Unit, R: Representation> MulAssign<R> for Quantity<U, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.0 = self.0 * rhs;
    }
}

impl<U, R1, R2> Div<R2> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn div(self, rhs: R2) -> Self::Output {
        Quantity::new(self.0.promote() / R1::promote_rhs(rhs))
    }
}

impl<U: Unit, R: Representation> DivAssign<R> for Quantity<U, R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.0 = self.0 / rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<U, R> Mul<Quantity<U, R>> for $t
            where
                U: Unit,
                R: Representation,
                $t: Promote<R>,
            {
                type Output = Quantity<U, <$t as Promote<R>>::Promoted>;
                #[inline]
                fn mul(self, rhs: Quantity<U, R>) -> Self::Output {
                    Quantity::new(<$t as Promote<R>>::promote(self) * <$t as Promote<R>>::promote_rhs(rhs.0))
                }
            }
        )+
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Dividing two quantities of the same unit gives a bare scalar.
impl<U, R1, R2> Div<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = R1::Promoted;
    #[inline]
    fn div(self, rhs: Quantity<U, R2>) -> Self::Output {
        self.0.promote() / R1::promote_rhs(rhs.0)
    }
}

impl<N, D, R1, R2> Mul<Quantity<D, R2>> for Quantity<Per<N, D>, R1>
where
    N: Unit,
    D: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<N, R1::Promoted>;
    #[inline]
    fn mul(self, rhs: Quantity<D, R2>) -> Self::Output {
        Quantity::new(self.0.promote() * R1::promote_rhs(rhs.0))
    }
}

impl<N, D, R1, R2> Mul<Quantity<Per<N, D>, R2>> for Quantity<D, R1>
where
    N: Unit,
    D: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<N, R1::Promoted>;
    #[inline]
    fn mul(self, rhs: Quantity<Per<N, D>, R2>) -> Self::Output {
        Quantity::new(self.0.promote() * R1::promote_rhs(rhs.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Remainder (integral representations only)
// ─────────────────────────────────────────────────────────────────────────────

impl<U, R1, R2> Rem<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Integral + Promote<R2>,
    R2: Integral,
    R1::Promoted: Integral,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn rem(self, rhs: Quantity<U, R2>) -> Self::Output {
        Quantity::new(self.0.promote() % R1::promote_rhs(rhs.0))
    }
}

impl<U, R1, R2> Rem<R2> for Quantity<U, R1>
where
    U: Unit,
    R1: Integral + Promote<R2>,
    R2: Integral,
    R1::Promoted: Integral,
{
    type Output = Quantity<U, R1::Promoted>;
    #[inline]
    fn rem(self, rhs: R2) -> Self::Output {
        Quantity::new(self.0.promote() % R1::promote_rhs(rhs))
    }
}

impl<U, R1, R2> RemAssign<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Integral + Promote<R2, Promoted = R1>,
    R2: Integral,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity<U, R2>) {
        self.0 = self.0 % R1::promote_rhs(rhs.0);
    }
}

impl<U, R1, R2> RemAssign<R2> for Quantity<U, R1>
where
    U: Unit,
    R1: Integral + Promote<R2, Promoted = R1>,
    R2: Integral,
{
    #[inline]
    fn rem_assign(&mut self, rhs: R2) {
        self.0 = self.0 % R1::promote_rhs(rhs);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U, R1, R2> PartialEq<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    #[inline]
    fn eq(&self, other: &Quantity<U, R2>) -> bool {
        self.0.promote() == R1::promote_rhs(other.0)
    }
}

impl<U, R1, R2> PartialOrd<Quantity<U, R2>> for Quantity<U, R1>
where
    U: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<U, R2>) -> Option<Ordering> {
        self.0.promote().partial_cmp(&R1::promote_rhs(other.0))
    }
}

impl<U: Unit, R: Promote<R> + Eq> Eq for Quantity<U, R> {}

impl<U: Unit, R: Promote<R> + Ord> Ord for Quantity<U, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: Unit, R: Representation + Hash> Hash for Quantity<U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Representation + Serialize> Serialize for Quantity<U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Representation + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = R::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep unit symbols in serialized data.
///
/// # Examples
///
/// ```rust
/// use dimen_core::length::Metres;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimen_core::serde_with_unit")]
///     max_distance: Metres,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Metres,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U, R>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Representation + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &U::symbol())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` that does not match `U::symbol()` is rejected.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> core::result::Result<Quantity<U, R>, D::Error>
    where
        U: Unit,
        R: Representation + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U, R> Visitor<'de> for QuantityVisitor<U, R>
        where
            U: Unit,
            R: Representation + Deserialize<'de>,
        {
            type Value = Quantity<U, R>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit_str) = unit {
                    let expected = U::symbol();
                    if unit_str != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
