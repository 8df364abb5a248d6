use super::*;
use crate::underlying::Frac;

/// The error type returned when a [`Double`] cannot be converted to an integer.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum TryFromDoubleError {
  /// The double is NaN.
  Nan,
  /// The double, once truncated toward zero, is out of the range of the integer type (this
  /// includes infinities).
  OutOfRange,
}

impl core::fmt::Display for TryFromDoubleError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Nan => f.write_str("cannot convert NaN to integer"),
      Self::OutOfRange => f.write_str("double out of range of integer type"),
    }
  }
}

impl core::error::Error for TryFromDoubleError {}

impl Double {
  /// Convert an integer, given as sign and magnitude, into a double, rounding if it has more
  /// significant bits than fit in the mantissa.
  fn from_sign_magnitude(sign: bool, magnitude: u64) -> Self {
    if magnitude == 0 {
      return Self::ZERO
    }
    // To turn the integer into a `frac`, shift its leading 1 to bit 62. The `exp` compensates for
    // the shift: the integer is `frac / 2^62 × 2^(62 - shift)`.
    //
    // Example:
    //
    //   magnitude: 0b0…0010011 (= 19)
    //        frac: 0b01_0011…0
    //         exp: +4 (= 63 - 59 leading zeros)
    //
    // If the leading 1 is on bit 63 (only for magnitudes ≥ 2^63), shift right instead, and keep
    // the lost bit as the sticky bit.
    let leading_zeros = magnitude.leading_zeros();
    let exp = (u64::BITS - 1) as i32 - leading_zeros as i32;
    let (frac, sticky) =
      if leading_zeros >= 1 {
        (magnitude << (leading_zeros - 1), 0)
      } else {
        (magnitude >> 1, magnitude.mask_lsb(1))
      };
    Unpacked { sign, exp, frac }.encode_round(sticky)
  }
}

impl From<i32> for Double {
  /// Convert an `i32` into a `Double`. This is always exact.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(-42).to_f64(), -42.0);
  /// assert_eq!(Double::from(i32::MIN).to_f64(), -2147483648.0);
  /// ```
  fn from(value: i32) -> Self {
    Self::from_sign_magnitude(value < 0, u64::from(value.unsigned_abs()))
  }
}

impl RoundFrom<i64> for Double {
  /// Convert an `i64` into a `Double`, rounding to nearest, ties to even, if it has more than 53
  /// significant bits.
  ///
  /// ```
  /// # use soft_double::*;
  /// assert_eq!(Double::round_from(1_i64 << 60).to_f64(), 2_f64.powi(60));
  /// assert_eq!(Double::round_from((1_i64 << 53) + 1).to_f64(), 2_f64.powi(53));
  /// ```
  fn round_from(value: i64) -> Self {
    Self::from_sign_magnitude(value < 0, value.unsigned_abs())
  }
}

impl TryFrom<Double> for i64 {
  type Error = TryFromDoubleError;

  /// Convert a `Double` into an `i64`, truncating any fractional part (rounding toward zero).
  /// Fails if the double is NaN, or if the truncated value doesn't fit in an `i64`.
  ///
  /// ```
  /// # use soft_double::{Double, TryFromDoubleError};
  /// assert_eq!(i64::try_from(Double::from(-2.9)), Ok(-2));
  /// assert_eq!(i64::try_from(Double::from(1e19)), Err(TryFromDoubleError::OutOfRange));
  /// assert_eq!(i64::try_from(Double::NAN), Err(TryFromDoubleError::Nan));
  /// ```
  fn try_from(value: Double) -> Result<Self, Self::Error> {
    if value.is_nan() {
      return Err(TryFromDoubleError::Nan)
    }
    if !value.is_finite() {
      return Err(TryFromDoubleError::OutOfRange)
    }
    let value = value.trunc();
    if value.is_zero() {
      return Ok(0)
    }

    // Now `value` is an integer ≥ 1 in magnitude, so `exp ≥ 0`, and it fits if it's < 2^63 in
    // magnitude, or if it's exactly -2^63.
    let x = value.decode_regular();
    let bits = i64::BITS as i32 - 1;
    if x.exp > bits || (x.exp == bits && !(x.sign && x.frac == Unpacked::HIDDEN_BIT)) {
      return Err(TryFromDoubleError::OutOfRange)
    }
    // For exp = 63 this is a left shift by 1, giving 2^63, whose negation wraps to itself.
    let magnitude =
      if x.exp == bits {
        x.frac << 1
      } else {
        x.frac >> (Unpacked::FRAC_WIDTH as i32 - x.exp)
      };
    Ok(if x.sign { (magnitude as i64).wrapping_neg() } else { magnitude as i64 })
  }
}
