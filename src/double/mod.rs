//! This module and its submodules contain a software implementation of IEEE 754 binary64 floating
//! point arithmetic, using only integer instructions.
//!
//! The structure is that of any software float: values are *decoded* into a sign, an exponent,
//! and a fixed-point fraction (an [`Unpacked`]); an arithmetic *kernel* operates on these,
//! producing an exact or nearly-exact result plus a *sticky* bit; and the result is *encoded*
//! back, rounding to nearest, ties to even. Special values (zeros, infinities, NaNs) never reach
//! the kernels; they are dealt with up front.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit 63**: numbered least significant to most significant, starts at 0.
//!   - **Fields**: a binary64 is, from msb to lsb, 1 sign bit, 11 exponent bits, and 52 mantissa
//!     bits.

/// A double precision (IEEE 754 binary64) floating point number, with all arithmetic implemented
/// in software.
///
/// `Double` holds the standard 64-bit encoding, so conversion to and from [`f64`] is exact and
/// free. Arithmetic goes through the usual operators (`+`, `-`, `*`, `/` and their compound
/// assignment forms), each correctly rounded.
///
/// `Double` does not implement [`PartialEq`] or [`PartialOrd`]: the only comparisons offered are
/// [`Double::is_less`] and [`Double::is_greater`], plus the full [`Double::compare`].
///
/// ```
/// # use soft_double::Double;
/// let x = Double::from(0.1) + Double::from(0.2);
/// assert_eq!(x.to_f64(), 0.1 + 0.2);
/// assert_eq!(Double::default().to_f64(), 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct Double(u64);

/// A finite, non-zero double, decoded into its sign, exponent and fraction.
///
/// The value represented is `(-1)^sign × frac / 2^FRAC_WIDTH × 2^exp`, where
/// [`FRAC_WIDTH`](Unpacked::FRAC_WIDTH) is 62. In other words, `frac` is an unsigned fixed-point
/// number with the binary point between bits 62 and 61:
///
/// ```text
///   frac = 0b0_1_xxxxx…xxxxx
///            ^ ^ ^^^^^^^^^^^ fraction bits
///            | hidden bit (1.)
///            headroom for a carry
/// ```
///
/// An `Unpacked` is *normalised* if bit 62 is set and bit 63 is clear, i.e. if the fraction
/// represents a number in `[1, 2[`. Decoding always produces normalised values, subnormals
/// included (their `exp` simply goes below the minimum exponent of a binary64). Every kernel
/// returns a normalised value.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Unpacked {
  /// `true` if negative.
  pub(crate) sign: bool,
  /// Unbiased exponent.
  pub(crate) exp: i32,
  /// Fixed-point fraction, with [`Unpacked::FRAC_WIDTH`] bits after the point.
  pub(crate) frac: u64,
}

/// Basics
mod basics;

/// Constants (zero, one, infinity, max, etc)
pub(crate) mod consts;

/// Trait implementations
mod traits;

/// Debug and Display, and formatting to a fixed-width string
pub(crate) mod fmt;

/// Parsing from decimal text
pub(crate) mod parse;

/// Decoding a double into its parts
mod decode;

/// Rounding and encoding the parts back into a double
pub(crate) mod encode;

/// Comparisons
pub(crate) mod cmp;

/// Sign manipulation
mod unary;

/// Rounding to integral values
mod round_int;

/// Arithmetic operators
mod ops;

/// Square root and logarithm
pub(crate) mod math;

/// Conversions to and from other types
pub(crate) mod convert;


/// Exact rational values of doubles, as an oracle for tests
#[cfg(test)]
mod rational;
