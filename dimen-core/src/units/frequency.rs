//! Frequency units (`T^-1`).
//!
//! [`Frequency`] is a named tag for the inverse-time dimension. Its canonical value is computed once and cached.
//! Because conversions between tags go through the canonical dimension, hertz also converts into a unit spelled as
//! "per second":
//!
//! ```rust
//! use dimen_core::{Per, Quantity, Unitless};
//! use dimen_core::frequency::Kilohertz;
//! use dimen_core::time::Second;
//!
//! let f = Quantity::<Kilohertz>::new(2.0);
//! let per_second = f.convert_to::<Per<Unitless, Second>>();
//! assert_eq!(per_second.value(), 2000.0);
//! ```

use crate::{BaseDimension, Dimension, DimensionTag, Ratio, Unit};
use dimen_derive::Unit;
use once_cell::sync::Lazy;

static FREQUENCY: Lazy<Dimension> = Lazy::new(|| Dimension::base(BaseDimension::TIME).invert());

/// Dimension tag for frequency (`T^-1`).
pub enum Frequency {}
impl DimensionTag for Frequency {
    fn dimension() -> Dimension {
        FREQUENCY.clone()
    }
}

/// Marker trait for any [`Unit`] whose dimension is [`Frequency`].
pub trait FrequencyUnit: Unit<Dim = Frequency> {}
impl<T: Unit<Dim = Frequency>> FrequencyUnit for T {}

/// Hertz (`1/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = Frequency, ratio = 1)]
pub struct Hertz;
/// Type alias shorthand for [`Hertz`].
pub type Hz = Hertz;

/// Kilohertz (`1000 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", dimension = Frequency, ratio = Ratio::KILO)]
pub struct Kilohertz;
/// Type alias shorthand for [`Kilohertz`].
pub type KHz = Kilohertz;

crate::impl_unit_conversions!(f64; Hertz, Kilohertz);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Millisecond, Second};
    use crate::{Error, Per, Quantity, Unitless};
    use approx::assert_relative_eq;

    #[test]
    fn frequency_is_inverse_time() {
        assert_eq!(Frequency::dimension().exponent_of(BaseDimension::TIME), -1);
        assert_eq!(Frequency::dimension().terms().len(), 1);
        assert_eq!(Hertz::dimension().to_string(), "T^-1");
    }

    #[test]
    fn kilohertz_to_hertz() {
        assert_eq!(Quantity::<Kilohertz, i32>::new(3).to::<Hertz>().value(), 3000);
        let hz: Quantity<Hz> = Quantity::<KHz>::new(0.5).into();
        assert_relative_eq!(hz.value(), 500.0);
    }

    #[test]
    fn converts_to_per_time_units() {
        let per_ms = Quantity::<Hertz>::new(1000.0).convert_to::<Per<Unitless, Millisecond>>();
        assert_relative_eq!(per_ms.value(), 1.0);
    }

    #[test]
    fn frequency_times_time_is_dimensionless() {
        let d = Hertz::dimension().multiply(&Second::dimension());
        assert!(d.is_dimensionless());
    }

    #[test]
    fn rejects_non_frequency_targets() {
        assert!(matches!(
            Quantity::<Hertz>::new(1.0).try_convert_to::<Second>(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Quantity::<Kilohertz>::new(4.0).to_string(), "4 kHz");
    }
}
