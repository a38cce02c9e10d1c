//! Error types for dimen-core

use crate::dimension::Dimension;
use crate::ratio::Ratio;
use thiserror::Error;

/// Result type for dimen-core operations
pub type Result<T> = core::result::Result<T, Error>;

/// Dimensional and representational errors.
///
/// Most of these are caught by the type system: adding quantities of different units, taking `%` of a floating
/// representation, or narrowing a float into an integer simply do not compile. The variants below are what the
/// run-time boundary checks (descriptor comparisons, `try_*` conversions, ratios built from run-time values) report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two units (or quantities) have different canonical dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the operation.
        expected: Dimension,
        /// Dimension actually supplied.
        found: Dimension,
    },

    /// Two units share a dimension but differ in scale and were combined without an explicit conversion.
    #[error("unit mismatch in dimension {dimension}: expected scale {expected}, found {found}")]
    UnitMismatch {
        /// The shared dimension.
        dimension: Dimension,
        /// Scale ratio required by the operation.
        expected: Ratio,
        /// Scale ratio actually supplied.
        found: Ratio,
    },

    /// A conversion would narrow a floating-point representation into a non-floating one.
    #[error("narrowing representation: cannot convert {from} into {to} without an explicit cast")]
    NarrowingRepresentation {
        /// Source representation type.
        from: &'static str,
        /// Target representation type.
        to: &'static str,
    },

    /// A ratio with a negative numerator or a non-positive denominator.
    #[error("invalid ratio {numerator}/{denominator}: numerator must be >= 0 and denominator > 0")]
    InvalidRatio {
        /// Rejected numerator.
        numerator: i64,
        /// Rejected denominator.
        denominator: i64,
    },

    /// An integral conversion whose result is not exactly representable.
    #[error("inexact conversion from {from} to {to}: result would be truncated")]
    InexactConversion {
        /// Source unit symbol.
        from: String,
        /// Target unit symbol.
        to: String,
    },

    /// An integral conversion whose result does not fit the representation.
    #[error("conversion overflow from {from} to {to}: result does not fit the representation")]
    ConversionOverflow {
        /// Source unit symbol.
        from: String,
        /// Target unit symbol.
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseDimension;

    #[test]
    fn dimension_mismatch_message() {
        let err = Error::DimensionMismatch {
            expected: Dimension::base(BaseDimension::LENGTH),
            found: Dimension::base(BaseDimension::TIME),
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected L, found T");
    }

    #[test]
    fn unit_mismatch_message() {
        let err = Error::UnitMismatch {
            dimension: Dimension::base(BaseDimension::LENGTH),
            expected: Ratio::ONE,
            found: Ratio::KILO,
        };
        assert_eq!(
            err.to_string(),
            "unit mismatch in dimension L: expected scale 1, found 1000"
        );
    }

    #[test]
    fn invalid_ratio_message() {
        let err = Error::InvalidRatio {
            numerator: 1,
            denominator: 0,
        };
        assert!(err.to_string().starts_with("invalid ratio 1/0"));
    }
}
