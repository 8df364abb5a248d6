use super::*;

/// Used to do value-to-value conversions that may *round* the input to the nearest representable
/// value. It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_: they round to nearest, ties to even, exactly like a
/// hardware `as` cast between float types would.
///
/// Many of the usage guidelines for [`From`] also apply to [`RoundFrom`]: if you do implement it
/// for your types, prefer implementing [`RoundFrom`] over [`RoundInto`] because implementing
/// [`RoundFrom`] automatically provides one with an implementation of [`RoundInto`], and prefer
/// using [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function.
/// There's also a blanket implementation of `RoundFrom<T> for T`, and `RoundFrom<T> for U`
/// implies `RoundInto<U> for T`.
///
/// # Examples
///
/// ```
/// # use soft_double::*;
/// let third = Double::ONE / Double::from(3);
/// assert_eq!(f32::round_from(third), 1.0_f32 / 3.0);
/// assert_eq!(Double::round_from(i64::MAX).to_f64(), 9223372036854775807_i64 as f64);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding to nearest if the value is not exactly
  /// representable.
  ///
  /// If you're looking for the usual Rust-y conversions ([`From`] if exact, [`TryFrom`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input to the nearest representable
/// value. It is the reciprocal of [`RoundFrom`].
///
/// The interface is identical to the standard [`Into`], but these conversions are _not
/// necessarily lossless_. See [`RoundFrom`] for details.
///
/// # Examples
///
/// ```
/// # use soft_double::*;
/// let x: f32 = Double::from(0.1).round_into();
/// assert_eq!(x, 0.1_f32);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding to nearest if the value
  /// is not exactly representable.
  ///
  /// If you're looking for the usual Rust-y conversions ([`Into`] if exact, [`TryInto`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// Conversions to and from native floats.
mod float;

/// Conversions to and from integers.
pub(crate) mod int;
