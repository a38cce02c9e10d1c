//! Length units.
//!
//! The coherent reference unit for this dimension is [`Metre`] (`Metre::RATIO == Ratio::ONE`). The other units are
//! exact decimal fractions or multiples of it, so integral quantities convert without rounding whenever the result
//! is a whole number.
//!
//! ```rust
//! use dimen_core::Quantity;
//! use dimen_core::length::{Centimetre, Decimetre};
//!
//! let dm = Quantity::<Decimetre, i32>::new(2);
//! assert_eq!(dm.to::<Centimetre>().value(), 20);
//! ```

use crate::{BaseDimension, Dimension, DimensionTag, Quantity, Unit};
use dimen_derive::Unit;

/// Dimension tag for length (`L`).
pub enum Length {}
impl DimensionTag for Length {
    fn dimension() -> Dimension {
        Dimension::base(BaseDimension::LENGTH)
    }
}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1)]
pub struct Metre;
/// A quantity measured in metres.
pub type Metres = Quantity<Metre>;
/// One metre.
pub const M: Metres = Metres::new(1.0);

/// Millimetre (`1/1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, ratio = 1 / 1000)]
pub struct Millimetre;
/// A quantity measured in millimetres.
pub type Millimetres = Quantity<Millimetre>;
/// One millimetre.
pub const MM: Millimetres = Millimetres::new(1.0);

/// Centimetre (`1/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, ratio = 1 / 100)]
pub struct Centimetre;
/// A quantity measured in centimetres.
pub type Centimetres = Quantity<Centimetre>;
/// One centimetre.
pub const CM: Centimetres = Centimetres::new(1.0);

/// Decimetre (`1/10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", dimension = Length, ratio = crate::Ratio::DECI)]
pub struct Decimetre;
/// A quantity measured in decimetres.
pub type Decimetres = Quantity<Decimetre>;
/// One decimetre.
pub const DM: Decimetres = Decimetres::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, ratio = 1000)]
pub struct Kilometre;
/// Type alias shorthand for [`Kilometre`].
pub type Km = Kilometre;
/// A quantity measured in kilometres.
pub type Kilometres = Quantity<Km>;
/// One kilometre.
pub const KM: Kilometres = Kilometres::new(1.0);

crate::impl_unit_conversions!(f64; Metre, Millimetre, Centimetre, Decimetre, Kilometre);
