//! Dimensional analysis for Rust numbers.
//!
//! `dimen` is the user-facing crate in this workspace. It re-exports the full API from `dimen-core` plus the
//! predefined units (length, time, frequency, velocity) and a set of short constructors in [`literals`].
//!
//! The core idea is: a value is always a `Quantity<U, R>`, where `U` is a zero-sized type describing the unit and `R`
//! is the numeric representation. Units carry an exact rational scale and a canonical dimension, so conversions are
//! exact wherever the representation allows and mismatched dimensions are rejected.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible units (you can’t add metres to seconds, or metres to kilometres without saying so).
//! - Makes unit conversion explicit and exact (`to::<TargetUnit>()`, integral representations included).
//! - Models derived dimensions as canonical values (`L·T^-1`) that can be compared, multiplied and inverted.
//! - Keeps integer and floating-point quantities apart: no implicit narrowing, `%` only on integers.
//!
//! # Quick start
//!
//! ```rust
//! use dimen::literals::*;
//! use dimen::{Centimetre, Decimetre, KilometrePerHour, Metre};
//!
//! let d = km(1.25_f64);
//! assert_eq!(d.to::<Metre>().value(), 1250.0);
//!
//! let dm = dimen::Quantity::<Decimetre, i32>::new(2);
//! assert_eq!(dm.to::<Centimetre>().value(), 20);
//!
//! let v = m(100.0_f64).per(s(20.0_f64));
//! assert_eq!(v.value(), 5.0);
//! assert!((v.to::<KilometrePerHour>().value() - 18.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimen::{Kilometres, Seconds};
//!
//! let d = Kilometres::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different unit types
//! ```
//!
//! ```compile_fail
//! use dimen::{Kilometres, Seconds};
//!
//! let _ = Kilometres::new(1.0) - Seconds::new(1.0); // nor subtract them
//! ```
//!
//! ```compile_fail
//! use dimen::{Kilometres, Metres};
//!
//! // comparisons need the same unit type; convert explicitly first
//! let _ = Kilometres::new(1.0) == Metres::new(1000.0);
//! ```
//!
//! ```compile_fail
//! use dimen::{Hours, Metres};
//!
//! let _ = Metres::new(1.0) < Hours::new(1.0);
//! ```
//!
//! ```compile_fail
//! use dimen::{Metre, Quantity};
//!
//! // no implicit float -> integer conversion
//! let _ = Quantity::<Metre, i32>::from_quantity(Quantity::<Metre, f64>::new(1.0));
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `dimen::length` (metres, millimetres, centimetres, decimetres, kilometres)
//! - `dimen::time` (milliseconds, seconds, minutes, hours)
//! - `dimen::frequency` (hertz, kilohertz)
//! - `dimen::velocity` (`Length / Time` aliases)
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U, R>`; serialization is the raw value only, and
//!   [`serde_with_unit`](crate::serde_with_unit) keeps the unit symbol.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use dimen_core::*;

/// Derive macro used by `dimen-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Ratio` and `crate::Quantity`, so it is intended for use
/// inside `dimen-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use dimen_derive::Unit;

pub use dimen_core::units::frequency;
pub use dimen_core::units::length;
pub use dimen_core::units::time;
pub use dimen_core::units::velocity;

pub use dimen_core::units::frequency::*;
pub use dimen_core::units::length::*;
pub use dimen_core::units::time::*;
pub use dimen_core::units::velocity::*;

/// Short constructors for the predefined units, generic over the representation.
///
/// ```rust
/// use dimen::literals::*;
///
/// let a = m(3_i32);
/// let b = mm(250.0_f32);
/// assert_eq!(a.value(), 3);
/// assert_eq!(b.to::<dimen::Metre>().value(), 0.25);
/// assert_eq!(khz(2_u32).to::<dimen::Hertz>().value(), 2000);
/// ```
pub mod literals {
    use crate::{
        Hertz, Hour, Kilohertz, Kilometre, KilometrePerHour, Metre, MetrePerSecond, Millimetre, Millisecond,
        Quantity, Representation, Second,
    };

    macro_rules! literal {
        ($($(#[$meta:meta])* $name:ident => $unit:ty;)+) => {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name<R: Representation>(value: R) -> Quantity<$unit, R> {
                    Quantity::new(value)
                }
            )+
        };
    }

    literal! {
        /// Metres.
        m => Metre;
        /// Millimetres.
        mm => Millimetre;
        /// Kilometres.
        km => Kilometre;
        /// Milliseconds.
        ms => Millisecond;
        /// Seconds.
        s => Second;
        /// Hours.
        h => Hour;
        /// Hertz.
        hz => Hertz;
        /// Kilohertz.
        khz => Kilohertz;
        /// Metres per second.
        mps => MetrePerSecond;
        /// Kilometres per hour.
        kmph => KilometrePerHour;
    }
}
