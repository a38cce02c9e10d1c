//! Integration-level tests for the `dimen` facade crate.

use dimen::literals::*;
use dimen::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests per dimension
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length() {
    let km = Kilometres::new(1.0);
    let m: Metres = km.to();
    assert_abs_diff_eq!(m.value(), 1000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_time() {
    let h = Hours::new(1.0);
    let sec: Seconds = h.to();
    assert_abs_diff_eq!(sec.value(), 3600.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_frequency() {
    let f = khz(1.5_f64);
    assert_relative_eq!(f.to::<Hertz>().value(), 1500.0);
}

#[test]
fn smoke_test_velocity() {
    let v = kmph(72.0_f64);
    let v_mps: MetresPerSecond = v.to();
    assert_abs_diff_eq!(v_mps.value(), 20.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequence helpers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn split_type_names() {
    let (head, tail) = seq::split(vec!["int", "long", "double", "float", "size_t"], 2);
    assert_eq!(head, ["int", "long"]);
    assert_eq!(tail, ["double", "float", "size_t"]);

    let (head, tail) = seq::split(vec!["int", "long", "double"], 2);
    assert_eq!(head, ["int", "long"]);
    assert_eq!(tail, ["double"]);
}

#[test]
fn merge_and_push() {
    let merged = seq::merge_sorted(vec![1, 4, 9], vec![2, 3, 10], |a, b| a.cmp(b));
    assert_eq!(merged, [1, 2, 3, 4, 9, 10]);
    assert_eq!(seq::push_front(vec![3], [1, 2]), [1, 2, 3]);
    assert_eq!(seq::push_back(vec![1], [2, 3]), [1, 2, 3]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn squared_and_inverse_length_cancel() {
    let d = dimension![BaseDimension::LENGTH => 2, BaseDimension::LENGTH => -2];
    assert_eq!(d, Dimension::dimensionless());
}

#[test]
fn velocity_dimension_end_to_end() {
    let length = Dimension::base(BaseDimension::LENGTH);
    let time = Dimension::base(BaseDimension::TIME);

    let v = m(10.0_f64).per(s(2.0_f64));
    assert_eq!(v.value(), 5.0);
    assert_eq!(v.dimension(), length.multiply(&time.invert()));
    assert_eq!(v.dimension(), MetrePerSecond::dimension());
    assert_eq!(v.to_string(), "5 m/s");
}

#[test]
fn frequency_and_per_second_share_a_dimension() {
    assert_eq!(Hertz::dimension(), <Per<Unitless, Second>>::dimension());
    assert!(Hertz::descriptor().is_convertible(&<Per<Unitless, Second>>::descriptor()));
    assert!(!Hertz::descriptor().is_convertible(&Second::descriptor()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Ratios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn milli_times_kilo() {
    assert_eq!(Ratio::new(1, 1000).multiply(Ratio::new(1000, 1)), Ratio::new(1, 1));
}

#[test]
fn runtime_ratio_validation() {
    assert!(matches!(Ratio::try_new(1, 0), Err(Error::InvalidRatio { .. })));
    assert_eq!(Ratio::try_new(3600, 1000), Ok(Ratio::new(18, 5)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn float_quantity_from_integer() {
    let q = Quantity::<Metre, f64>::from_quantity(m(1_i32));
    assert_eq!(q.value(), 1.0);
}

#[test]
fn mixed_representation_addition() {
    let sum: Quantity<Metre, f32> = m(1_i32) + m(1000.0_f32);
    assert_eq!(sum.value(), 1001.0_f32);
}

#[test]
fn integral_remainder() {
    let mut q = m(7_i32);
    q %= 2_i32;
    assert_eq!(q.value(), 1);
    assert_eq!((m(1000_i32) % 10_i32).value(), 0);
}

#[test]
fn remainder_mixes_integral_representations() {
    let r: Quantity<Metre, i32> = m(7_i32) % m(2_i16);
    assert_eq!(r.value(), 1);
    assert_eq!((m(7_i32) % 2_i16).value(), 1);
}

#[test]
fn integral_overflow_is_reported() {
    assert!(matches!(
        km(3_000_i32).try_convert_to::<Millimetre>(),
        Err(Error::ConversionOverflow { .. })
    ));
    assert_eq!(km(3_000_i64).to::<Millimetre>().value(), 3_000_000_000);
}

#[test]
#[should_panic(expected = "overflow")]
fn integral_overflow_panics_on_to() {
    let _ = km(3_000_i32).to::<Millimetre>();
}

#[test]
fn increments() {
    let mut q = m(1000_i32);
    assert_eq!(q.increment().value(), 1001);
    let mut q = m(1000_i32);
    assert_eq!(q.decrement().value(), 999);
    let mut q = m(1000_i32);
    assert_eq!(q.post_increment().value(), 1000);
    assert_eq!(q.value(), 1001);
    let mut q = m(1000_i32);
    assert_eq!(q.post_decrement().value(), 1000);
    assert_eq!(q.value(), 999);
}

#[test]
fn factories() {
    assert_eq!(Quantity::<Second, i16>::zero().value(), 0);
    assert_eq!(Quantity::<Second, i16>::min_value().value(), i16::MIN);
    assert_eq!(Quantity::<Second, i16>::max_value().value(), i16::MAX);
}

#[test]
fn decimetres_centimetres() {
    assert_eq!(Quantity::<Decimetre, i32>::new(2).to::<Centimetre>().value(), 20);
    assert_eq!(Quantity::<Centimetre, i32>::new(20).to::<Decimetre>().value(), 2);
}

#[test]
fn comparisons() {
    assert!(ms(250_i32) < ms(250.5_f64));
    assert!(ms(3_u8) == ms(3_i64));
    assert!(h(2.0_f64) >= h(2_i32));
}

#[test]
fn same_unit_division_is_scalar() {
    let r: f64 = km(3.0_f64) / km(1.5_f64);
    assert_eq!(r, 2.0);
}

#[test]
fn cross_unit_division_after_explicit_conversion() {
    let r: f64 = m(500.0_f64) / km(1.0_f64).to::<Metre>();
    assert_eq!(r, 0.5);
}

#[test]
fn convert_to_and_try_convert_to() {
    let v = mps(10_i32);
    assert_eq!(v.convert_to::<KilometrePerHour>().value(), 36);
    assert!(matches!(
        mps(1_i32).try_convert_to::<KilometrePerHour>(),
        Err(Error::InexactConversion { .. })
    ));
    assert!(matches!(
        v.try_convert_to::<Hertz>(),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn descriptor_checks() {
    let err = Metre::descriptor().ensure_same(&Kilometre::descriptor()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unit mismatch in dimension L: expected scale 1, found 1000"
    );
    assert_eq!(
        Kilometre::descriptor().conversion_factor(&Millimetre::descriptor()),
        Ok(Ratio::MEGA)
    );
}

#[test]
fn declared_base_dimensions_are_listed() {
    let currency = BaseDimension::declare("Cur");
    assert!(registry::declared().contains(&currency));
    assert!(currency > BaseDimension::LUMINOUS_INTENSITY);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_integral_length_roundtrip(v in -1_000_000i64..1_000_000) {
        let mm = Quantity::<Kilometre, i64>::new(v).to::<Millimetre>();
        prop_assert_eq!(mm.value(), v * 1_000_000);
        prop_assert_eq!(mm.to::<Kilometre>().value(), v);
    }

    #[test]
    fn prop_velocity_kmph_roundtrip(v in -1e6..1e6f64) {
        let back = kmph(v).to::<MetrePerSecond>().to::<KilometrePerHour>();
        prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn prop_promotion_matches_primitive_addition(a in any::<i16>(), b in -1e3f32..1e3) {
        let sum = m(a) + m(b);
        prop_assert_eq!(sum.value(), a as f32 + b);
    }
}
