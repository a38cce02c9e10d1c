//! Velocity units (`Length / Time`).
//!
//! Velocity units are *pure type aliases* over [`Per`] using the length and time units defined elsewhere in the
//! crate, so their ratios are derived exactly from their parts (`km/h = 1000/3600 = 5/18`).
//!
//! ```rust
//! use dimen_core::length::Metres;
//! use dimen_core::time::Seconds;
//! use dimen_core::velocity::{KilometrePerHour, MetresPerSecond};
//!
//! let v: MetresPerSecond = Metres::new(100.0).per(Seconds::new(20.0));
//! assert_eq!(v.value(), 5.0);
//! assert!((v.to::<KilometrePerHour>().value() - 18.0).abs() < 1e-12);
//! ```

use crate::units::length::{Kilometre, Length, Metre};
use crate::units::time::{Hour, Second, Time};
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units.
pub type Velocity<N, D, R = f64> = Quantity<Per<N, D>, R>;

/// Metre per second.
pub type MetrePerSecond = Per<Metre, Second>;
/// A quantity measured in metres per second.
pub type MetresPerSecond = Quantity<MetrePerSecond>;

/// Kilometre per hour.
pub type KilometrePerHour = Per<Kilometre, Hour>;
/// A quantity measured in kilometres per hour.
pub type KilometresPerHour = Quantity<KilometrePerHour>;
