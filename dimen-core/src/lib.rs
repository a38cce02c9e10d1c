//! Core type system for dimensional analysis and strongly typed quantities.
//!
//! `dimen-core` models physical dimensions at two levels:
//!
//! - As **values**: a [`Dimension`] is a canonical product of [`BaseDimension`]s raised to integer exponents
//!   (`L·T^-1`). Canonicalization sorts terms with a stable merge sort ([`seq`]), sums the exponents of repeated
//!   base dimensions and drops zeros, so two dimensions are physically equal exactly when they compare equal.
//! - As **types**: a *unit* is a zero-sized marker implementing [`Unit`], carrying an exact [`Ratio`] to the
//!   coherent reference unit of its dimension tag. A value tagged with a unit is a [`Quantity<U, R>`], generic over
//!   its numeric [`Representation`] (`f64` by default).
//!
//! Most users should depend on `dimen` (the facade crate) unless they need direct access to these primitives.
//!
//! # What the type system enforces
//!
//! - `+`, `-`, `/`, `%` and comparisons only accept quantities of the same unit.
//! - `%` is only available on integral representations.
//! - Implicit representation conversions never narrow a floating-point value into an integer.
//! - Unit ratios are validated at compile time.
//!
//! Conversions between units whose dimension is only known to match at run time go through
//! [`Quantity::convert_to`] / [`Quantity::try_convert_to`], which compare canonical dimensions.
//!
//! # Quick start
//!
//! ```rust
//! use dimen_core::Quantity;
//! use dimen_core::length::{Centimetre, Decimetre, Kilometres, Metre};
//!
//! let km = Kilometres::new(1.25);
//! assert_eq!(km.to::<Metre>().value(), 1250.0);
//!
//! let dm = Quantity::<Decimetre, i32>::new(2);
//! assert_eq!(dm.to::<Centimetre>().value(), 20);
//! ```
//!
//! Compose derived units:
//!
//! ```rust
//! use dimen_core::length::Metres;
//! use dimen_core::time::Seconds;
//! use dimen_core::velocity::MetresPerSecond;
//!
//! let v: MetresPerSecond = Metres::new(100.0).per(Seconds::new(20.0));
//! assert_eq!(v.value(), 5.0);
//! assert_eq!(v.dimension().to_string(), "L·T^-1");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U, R>`; serialization is the raw value only. The
//!   [`serde_with_unit`] helper keeps the unit symbol.
//!
//! # Panics and errors
//!
//! Fallible run-time operations return [`Result`] with an [`Error`]. [`Quantity::convert_to`], [`Ratio::new`] and
//! [`seq::split`] panic on misuse; each documents its panic and has a non-panicking counterpart. Arithmetic follows
//! the representation: integer overflow and division by zero behave like the primitive type, floats follow IEEE-754.
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod base;
mod dimension;
mod error;
mod macros;
mod quantity;
mod ratio;
pub mod registry;
pub mod representation;
pub mod seq;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use base::BaseDimension;
pub use dimension::{Dimension, DimensionTag, Dimensionless, DivDim, ExponentTerm, MulDim};
pub use error::{Error, Result};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use representation::{
    CastFrom, FloatingPoint, Integral, NonNarrowing, Promote, QuantityValues, Representation,
};
pub use unit::{Per, Prod, Unit, UnitDescriptor, Unitless};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `dimen-core` so they can implement formatting and conversion traits without running into
/// Rust's orphan rules.
pub mod units;

pub use units::frequency;
pub use units::length;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────
    pub enum TestDim {}
    impl DimensionTag for TestDim {
        fn dimension() -> Dimension {
            Dimension::base(BaseDimension::AMOUNT_OF_SUBSTANCE)
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const RATIO: Ratio = Ratio::ONE;
        type Dim = TestDim;
        const SYMBOL: &'static str = "tu";
    }
    impl core::fmt::Display for Quantity<TestUnit> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "{} tu", self.value())
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum DoubleTestUnit {}
    impl Unit for DoubleTestUnit {
        const RATIO: Ratio = Ratio::new(2, 1);
        type Dim = TestDim;
        const SYMBOL: &'static str = "dtu";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum HalfTestUnit {}
    impl Unit for HalfTestUnit {
        const RATIO: Ratio = Ratio::new(1, 2);
        type Dim = TestDim;
        const SYMBOL: &'static str = "htu";
    }

    type TU = Quantity<TestUnit>;
    type Dtu = Quantity<DoubleTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = TU::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn quantity_from_raw() {
        let q: TU = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_conversion_to_same_unit() {
        let q = TU::new(10.0);
        assert_eq!(q.to::<TestUnit>().value(), 10.0);
    }

    #[test]
    fn quantity_conversion_to_different_unit() {
        // 10 tu = 5 dtu = 20 htu
        let q = TU::new(10.0);
        assert_eq!(q.to::<DoubleTestUnit>().value(), 5.0);
        assert_eq!(q.to::<HalfTestUnit>().value(), 20.0);
    }

    #[test]
    fn quantity_conversion_roundtrip() {
        let original = Quantity::<TestUnit, i64>::new(100);
        let back = original.to::<HalfTestUnit>().to::<TestUnit>();
        assert_eq!(back.value(), original.value());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Per<N, D>
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn per_builds_compound_quantity() {
        let ratio = TU::new(100.0).per(Dtu::new(20.0));
        let _: Quantity<Per<TestUnit, DoubleTestUnit>> = ratio;
        assert_eq!(ratio.value(), 5.0);
        assert!(ratio.dimension().is_dimensionless());
    }

    #[test]
    fn per_ratio_conversion() {
        let v1: Quantity<Per<DoubleTestUnit, TestUnit>> = Quantity::new(10.0);
        let v2: Quantity<Per<TestUnit, TestUnit>> = v1.to();
        assert_eq!(v2.value(), 20.0);
    }

    #[test]
    fn per_multiplication_recovers_numerator() {
        let rate: Quantity<Per<TestUnit, DoubleTestUnit>> = Quantity::new(5.0);
        let time = Dtu::new(4.0);
        let result1: TU = rate * time;
        let result2: TU = time * rate;
        assert_eq!(result1.value(), 20.0);
        assert_eq!(result2.value(), 20.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // End to end: metres per second
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metres_per_second_end_to_end() {
        use crate::length::Metres;
        use crate::time::Seconds;
        use crate::velocity::MetrePerSecond;

        let length = Dimension::base(BaseDimension::LENGTH);
        let time = Dimension::base(BaseDimension::TIME);

        let v = Metres::new(10.0).per(Seconds::new(2.0));
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.dimension(), length.multiply(&time.invert()));
        assert_eq!(MetrePerSecond::descriptor().ratio(), Ratio::ONE);
        assert_eq!(v.to_string(), "5 m/s");
    }

    #[test]
    fn declared_base_dimension_builds_units() {
        use once_cell::sync::Lazy;

        static INFORMATION: Lazy<BaseDimension> = Lazy::new(|| BaseDimension::declare("Inf"));

        enum Information {}
        impl DimensionTag for Information {
            fn dimension() -> Dimension {
                Dimension::base(*INFORMATION)
            }
        }

        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Bit {}
        impl Unit for Bit {
            const RATIO: Ratio = Ratio::ONE;
            type Dim = Information;
            const SYMBOL: &'static str = "b";
        }

        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Byte {}
        impl Unit for Byte {
            const RATIO: Ratio = Ratio::new(8, 1);
            type Dim = Information;
            const SYMBOL: &'static str = "B";
        }

        let bits = Quantity::<Byte, u64>::new(3).to::<Bit>();
        assert_eq!(bits.value(), 24);

        let rate = Bit::dimension().divide(&crate::time::Second::dimension());
        assert_eq!(rate.exponent_of(*INFORMATION), 1);
        assert_eq!(rate.exponent_of(BaseDimension::TIME), -1);
        assert_eq!(rate.terms()[0].base(), BaseDimension::TIME);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_simple_quantity() {
        assert_eq!(format!("{}", TU::new(42.5)), "42.5 tu");
        assert_eq!(format!("{}", TU::new(-99.9)), "-99.9 tu");
    }

    #[test]
    fn display_per_quantity() {
        let q: Quantity<Per<TestUnit, DoubleTestUnit>> = Quantity::new(2.5);
        assert_eq!(format!("{}", q), "2.5 tu/dtu");
    }

    #[test]
    fn display_prod_and_unitless() {
        let q: Quantity<Prod<TestUnit, HalfTestUnit>, i32> = Quantity::new(3);
        assert_eq!(q.to_string(), "3 tu·htu");
        assert_eq!(Quantity::<Unitless>::new(0.5).to_string(), "0.5");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn edge_case_negative_values() {
        let neg = TU::new(-10.0);
        let pos = TU::new(5.0);

        assert_eq!((neg + pos).value(), -5.0);
        assert_eq!((neg - pos).value(), -15.0);
        assert_eq!((neg * 2.0f64).value(), -20.0);
    }

    #[test]
    fn edge_case_infinity() {
        let inf = TU::new(f64::INFINITY);
        assert!((inf / 2.0f64).value().is_infinite());
        assert!(TU::new(1.0) / TU::new(0.0) == f64::INFINITY);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity() {
            let json = serde_json::to_string(&TU::new(42.5)).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_integral_quantity() {
            let q: Quantity<TestUnit, i32> = serde_json::from_str("7").unwrap();
            assert_eq!(q.value(), 7);
        }

        #[test]
        fn serde_roundtrip() {
            let original = TU::new(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: TU = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, original);
        }

        // ─────────────────────────────────────────────────────────────────────────
        // serde_with_unit module tests
        // ─────────────────────────────────────────────────────────────────────────

        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            distance: TU,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                distance: TU::new(42.5),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(json, r#"{"distance":{"value":42.5,"unit":"tu"}}"#);
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"distance":{"value":42.5,"unit":"tu"}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_no_unit_field() {
            let json = r#"{"distance":{"value":42.5}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_wrong_unit() {
            let json = r#"{"distance":{"value":42.5,"unit":"wrong"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("unit mismatch"));
        }

        #[test]
        fn serde_with_unit_deserialize_missing_value() {
            let json = r#"{"distance":{"unit":"tu"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("missing field"));
        }

        #[test]
        fn serde_with_unit_deserialize_duplicate_value() {
            let json = r#"{"distance":{"value":42.5,"value":100.0,"unit":"tu"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("duplicate field"));
        }

        #[test]
        fn serde_with_unit_deserialize_invalid_format() {
            let json = r#"{"distance":"not_an_object"}"#;
            assert!(serde_json::from_str::<TestStruct>(json).is_err());
        }
    }
}
