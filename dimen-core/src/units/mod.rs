//! Predefined unit modules grouped by dimension.
//!
//! `dimen-core` ships a small set of built-in units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust’s orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: length units (SI metre is the coherent reference unit).
//! - [`time`]: time units (SI second is the coherent reference unit).
//! - [`frequency`]: frequency units on the `T^-1` tag.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].

pub mod frequency;
pub mod length;
pub mod time;
pub mod velocity;
