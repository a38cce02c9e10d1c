//! Time units.
//!
//! The coherent reference unit is the SI [`Second`]. Minutes and hours are exact integer multiples of it.
//!
//! ```rust
//! use dimen_core::time::{Hour, Minutes};
//!
//! let h = Minutes::new(90.0).to::<Hour>();
//! assert_eq!(h.value(), 1.5);
//! ```

use crate::{BaseDimension, Dimension, DimensionTag, Quantity, Ratio, Unit};
use dimen_derive::Unit;

/// Dimension tag for time (`T`).
pub enum Time {}
impl DimensionTag for Time {
    fn dimension() -> Dimension {
        Dimension::base(BaseDimension::TIME)
    }
}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;

/// Millisecond (`1/1000 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = Ratio::MILLI)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// One millisecond.
pub const MS: Milliseconds = Milliseconds::new(1.0);

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = Ratio::new(SECONDS_PER_MINUTE, 1))]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = Ratio::new(SECONDS_PER_HOUR, 1))]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

crate::impl_unit_conversions!(f64; Millisecond, Second, Minute, Hour);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn ratios_are_exact() {
        assert_eq!(Millisecond::RATIO, Ratio::new(1, 1000));
        assert_eq!(Second::RATIO, Ratio::ONE);
        assert_eq!(Minute::RATIO, Ratio::new(60, 1));
        assert_eq!(Hour::RATIO, Ratio::new(3600, 1));
    }

    #[test]
    fn milliseconds_to_seconds() {
        assert_abs_diff_eq!(Milliseconds::new(1000.0).to::<Second>().value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn hours_to_seconds_integral() {
        let h = Quantity::<Hour, u32>::new(2);
        assert_eq!(h.to::<Second>().value(), 7200);
        assert_eq!(h.to::<Minute>().value(), 120);
    }

    #[test]
    fn seconds_to_hours_truncates() {
        assert_eq!(Quantity::<Second, i32>::new(5399).to::<Hour>().value(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Seconds::new(2.5).to_string(), "2.5 s");
        assert_eq!(Quantity::<Minute, i32>::new(3).to_string(), "3 min");
    }

    proptest! {
        #[test]
        fn roundtrip_hour_second(h in -1e6..1e6f64) {
            let back = Hours::new(h).to::<Second>().to::<Hour>();
            prop_assert!((back.value() - h).abs() < 1e-9);
        }
    }
}
