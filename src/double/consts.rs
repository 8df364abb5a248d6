use super::*;

impl Double {
  /// Zero (`+0.0`), the additive identity element.
  pub const ZERO: Self = Self(0);

  /// Negative zero (`-0.0`).
  pub const NEG_ZERO: Self = Self(Self::SIGN_MASK);

  /// One (`1.0`), the multiplicative identity element.
  //
  // Exponent field equal to the bias, mantissa 0.
  pub const ONE: Self = Self((Self::BIAS as u64) << Self::MANTISSA_BITS);

  /// Negative one (`-1.0`).
  pub const MINUS_ONE: Self = Self(Self::SIGN_MASK | Self::ONE.0);

  /// Positive infinity (`+∞`).
  pub const INFINITY: Self = Self(Self::EXPONENT_MASK);

  /// Negative infinity (`-∞`).
  pub const NEG_INFINITY: Self = Self(Self::SIGN_MASK | Self::EXPONENT_MASK);

  /// Not a number. This is the NaN produced by invalid operations, such as `0 / 0` or `∞ - ∞`.
  //
  // Positive quiet NaN with no payload, same as `f64::NAN`.
  pub const NAN: Self = Self(Self::EXPONENT_MASK | Self::QUIET_BIT);

  /// Largest finite value, equal to `-MIN`.
  pub const MAX: Self = Self(Self::EXPONENT_MASK - 1);

  /// Smallest finite value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  pub const MIN: Self = Self(Self::SIGN_MASK | Self::MAX.0);

  /// Smallest positive *normal* value.
  pub const MIN_POSITIVE: Self = Self(1 << Self::MANTISSA_BITS);

  /// The difference between `1.0` and the next larger representable number.
  pub const EPSILON: Self = Self((Self::BIAS as u64 - Self::MANTISSA_BITS as u64) << Self::MANTISSA_BITS);
}

/// Mathematical constants, rounded to the nearest double.
pub mod math {
  use crate::Double;

  /// ln(2)
  pub const LN_2: Double = Double::from_f64(core::f64::consts::LN_2);

  /// ln(10)
  pub const LN_10: Double = Double::from_f64(core::f64::consts::LN_10);

  /// log₁₀(e)
  pub const LOG10_E: Double = Double::from_f64(core::f64::consts::LOG10_E);

  /// log₁₀(2)
  pub const LOG10_2: Double = Double::from_f64(core::f64::consts::LOG10_2);

  /// √2
  pub const SQRT_2: Double = Double::from_f64(core::f64::consts::SQRT_2);
}
