//! Macros for building dimensions and wiring unit conversions.

/// Builds a canonical [`Dimension`](crate::Dimension) from `base => exponent` pairs.
///
/// The pairs may be given in any order, repeat a base dimension, or cancel out entirely.
///
/// ```rust
/// use dimen_core::{dimension, BaseDimension, Dimension};
///
/// let area = dimension![BaseDimension::LENGTH => 1, BaseDimension::LENGTH => 1];
/// assert_eq!(area.exponent_of(BaseDimension::LENGTH), 2);
///
/// let none = dimension![BaseDimension::LENGTH => 2, BaseDimension::LENGTH => -2];
/// assert_eq!(none, Dimension::dimensionless());
///
/// assert!(dimension![].is_dimensionless());
/// ```
#[macro_export]
macro_rules! dimension {
    () => {
        $crate::Dimension::dimensionless()
    };
    ($($base:expr => $exp:expr),+ $(,)?) => {
        $crate::Dimension::new([
            $($crate::ExponentTerm::new($base, $exp)),+
        ])
    };
}

/// Generates `From` implementations for all pairs of units of one dimension tag, for a given representation.
///
/// Conversions go through [`Quantity::to`](crate::Quantity::to), so they are only available between units that
/// share the same tag.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($rep:ty; $unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($rep:ty; $first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first, $rep>> for $crate::Quantity<$rest, $rep> {
                fn from(value: $crate::Quantity<$first, $rep>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest, $rep>> for $crate::Quantity<$first, $rep> {
                fn from(value: $crate::Quantity<$rest, $rep>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($rep; $($rest),+);
    };
}
