//! Base dimensions: the atomic physical quantities every [`Dimension`](crate::Dimension) is built from.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::hash::{Hash, Hasher};

/// An atomic physical quantity (length, mass, time, …).
///
/// Base dimensions are identified by a process-wide unique id. Equality, ordering and hashing only look at the id;
/// the symbol is carried for display. The seven SI base dimensions are predeclared with fixed ids; additional ones
/// are allocated through [`BaseDimension::declare`].
///
/// ```rust
/// use dimen_core::BaseDimension;
///
/// assert!(BaseDimension::LENGTH < BaseDimension::TIME);
/// assert_eq!(BaseDimension::TIME.symbol(), "T");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BaseDimension {
    id: u32,
    symbol: &'static str,
}

impl BaseDimension {
    /// Length (`L`).
    pub const LENGTH: Self = Self::predeclared(0, "L");
    /// Mass (`M`).
    pub const MASS: Self = Self::predeclared(1, "M");
    /// Time (`T`).
    pub const TIME: Self = Self::predeclared(2, "T");
    /// Electric current (`I`).
    pub const ELECTRIC_CURRENT: Self = Self::predeclared(3, "I");
    /// Thermodynamic temperature (`Θ`).
    pub const TEMPERATURE: Self = Self::predeclared(4, "Θ");
    /// Amount of substance (`N`).
    pub const AMOUNT_OF_SUBSTANCE: Self = Self::predeclared(5, "N");
    /// Luminous intensity (`J`).
    pub const LUMINOUS_INTENSITY: Self = Self::predeclared(6, "J");

    /// All predeclared SI base dimensions, in id order.
    pub const SI: [Self; 7] = [
        Self::LENGTH,
        Self::MASS,
        Self::TIME,
        Self::ELECTRIC_CURRENT,
        Self::TEMPERATURE,
        Self::AMOUNT_OF_SUBSTANCE,
        Self::LUMINOUS_INTENSITY,
    ];

    /// First id handed out by the registry.
    pub(crate) const FIRST_DECLARED_ID: u32 = 64;

    const fn predeclared(id: u32, symbol: &'static str) -> Self {
        Self { id, symbol }
    }

    pub(crate) const fn from_parts(id: u32, symbol: &'static str) -> Self {
        Self { id, symbol }
    }

    /// Declares a fresh base dimension with the given display symbol.
    ///
    /// Every call allocates a new identity, ordered after all previously declared ones. Declare each base dimension
    /// once (typically in a `once_cell::sync::Lazy` static) and share it.
    ///
    /// ```rust
    /// use dimen_core::BaseDimension;
    ///
    /// let info = BaseDimension::declare("B");
    /// let other = BaseDimension::declare("B2");
    /// assert_ne!(info, other);
    /// assert!(info < other);
    /// assert!(BaseDimension::LUMINOUS_INTENSITY < info);
    /// ```
    pub fn declare(symbol: &'static str) -> Self {
        crate::registry::allocate(symbol)
    }

    /// Numeric identity of this base dimension.
    #[inline]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Display symbol of this base dimension.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        self.symbol
    }
}

impl PartialEq for BaseDimension {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BaseDimension {}

impl PartialOrd for BaseDimension {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseDimension {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for BaseDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_dimensions_are_strictly_ordered() {
        for pair in BaseDimension::SI.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn equality_ignores_symbol() {
        let a = BaseDimension::from_parts(0, "length");
        assert_eq!(a, BaseDimension::LENGTH);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(BaseDimension::MASS.to_string(), "M");
        assert_eq!(BaseDimension::TEMPERATURE.to_string(), "Θ");
    }

    #[test]
    fn declared_dimensions_sort_after_si() {
        let custom = BaseDimension::declare("X");
        assert!(custom.id() >= BaseDimension::FIRST_DECLARED_ID);
        assert!(BaseDimension::SI.iter().all(|si| *si < custom));
    }
}
