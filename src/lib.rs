#![cfg_attr(not(test), no_std)]
//! This crate provides a correct, clean, and dependency-light software implementation of
//! [IEEE 754](https://en.wikipedia.org/wiki/Double-precision_floating-point_format) double
//! precision ("binary64") floating point arithmetic, for microcontrollers and other targets that
//! lack a hardware floating point unit.
//!
//! # Introduction
//!
//! The central type is [`Double`]: a 64-bit value holding the usual binary64 encoding, whose
//! arithmetic is carried out entirely with integer instructions. Results are correctly rounded
//! (round to nearest, ties to even), and therefore bit-for-bit identical to those of a hardware
//! FPU, for every operation except [`log10`] (which is accurate to a few ulps).
//!
//! No operation checks its inputs or reports errors: exceptional conditions (division by zero,
//! overflow, invalid operations) produce infinities or NaN, exactly as an FPU would. Use
//! [`is_nan_or_inf`] after a suspect computation to detect them.
//!
//! # Usage
//!
//! ```
//! use soft_double::{Double, Compare};
//!
//! // Create doubles from native floats, ints, strings, or a raw bit representation.
//! let a = Double::from(2.5);
//! let b = Double::from(4);
//! let c: Double = "0.1".parse().unwrap();
//! let d = Double::from_bits(0x3ff0000000000000);
//!
//! // Perform arithmetic with the usual operators.
//! let mut x = a * b + d;
//! x /= Double::from(2);
//! assert_eq!(x.to_f64(), 5.5);
//!
//! // Compare with the ordering predicates (there is no `==`, see `Double::compare`).
//! assert!(c.is_less(d));
//! assert_eq!(Double::NAN.compare(d), Compare::Unordered);
//!
//! // Convert back to native floats or to text.
//! assert_eq!(f64::from(a), 2.5);
//! assert_eq!(Double::from(3.14159).to_formatted(), "3.14159");
//! ```
//!
//! # Backends
//!
//! Code that should run both on targets with and without an FPU can be written against the
//! [`Real`] trait, which is implemented for [`Double`] and for the native [`f64`]. The [`t_double`]
//! alias is [`Double`] by default, and [`f64`] with the `hard-float` feature.
//!
//! # Features
//!
//!   - `hard-float`: make [`t_double`] an alias of [`f64`] instead of [`Double`].
//!   - `tracing`: emit [`tracing`](https://docs.rs/tracing) events from [`Polynomial::eval`].
//!   - `bench`: expose internals to the benchmarks; run them with `cargo bench -F bench`.

mod double;
mod poly;
mod real;
mod underlying;

pub use double::Double;
pub use double::cmp::Compare;
pub use double::fmt::Formatted;
pub use double::math::{is_nan_or_inf, log10};
pub use double::parse::ParseDoubleError;
pub use double::convert::{RoundFrom, RoundInto};
pub use double::convert::int::TryFromDoubleError;
pub use poly::Polynomial;
pub use real::Real;

/// Mathematical constants, as [`Double`]s.
pub mod consts {
  pub use crate::double::consts::math::*;
}

/// The double type used by application code: [`Double`], or the native [`f64`] if the
/// `hard-float` feature is enabled.
#[cfg(not(feature = "hard-float"))]
#[allow(non_camel_case_types)]
pub type t_double = Double;

/// The double type used by application code: [`Double`], or the native [`f64`] if the
/// `hard-float` feature is enabled.
#[cfg(feature = "hard-float")]
#[allow(non_camel_case_types)]
pub type t_double = f64;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

/// Number of cases for each property test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x1000 } else { 0x4_0000 };
