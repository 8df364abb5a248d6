use super::*;
use crate::double::decode::TryUnpacked;
use crate::double::encode::round_pack;

impl From<f64> for Double {
  /// Convert an `f64` into a `Double`. Same as [`Double::from_f64`].
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_f64(value)
  }
}

impl From<Double> for f64 {
  /// Convert a `Double` into an `f64`. Same as [`Double::to_f64`].
  #[inline]
  fn from(value: Double) -> Self {
    value.to_f64()
  }
}

/// Fields of an IEEE 754 binary32.
const F32_MANTISSA_BITS: u32 = f32::MANTISSA_DIGITS - 1;
const F32_EXPONENT_BITS: u32 = u32::BITS - 1 - F32_MANTISSA_BITS;
const F32_MANTISSA_MASK: u32 = (1 << F32_MANTISSA_BITS) - 1;
const F32_EXPONENT_MAX: u32 = (1 << F32_EXPONENT_BITS) - 1;
const F32_BIAS: i32 = (1 << (F32_EXPONENT_BITS - 1)) - 1;

impl From<f32> for Double {
  /// Convert an `f32` into a `Double`. This is always exact, and is done entirely with integer
  /// instructions.
  ///
  /// NaNs are quietened, and keep their sign and payload.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(0.1_f32).to_f64(), 0.1_f32 as f64);
  /// ```
  fn from(value: f32) -> Self {
    let bits = value.to_bits();
    let sign = bits >> (u32::BITS - 1) != 0;
    let field = (bits >> F32_MANTISSA_BITS) & F32_EXPONENT_MAX;
    let mantissa = bits & F32_MANTISSA_MASK;
    let sign_bit = if sign { Self::SIGN_MASK } else { 0 };

    // The mantissa field of a binary32 holds the first 23 bits after the point, that of a
    // `Unpacked` the first 62.
    const SHIFT: u32 = Unpacked::FRAC_WIDTH - F32_MANTISSA_BITS;
    match (field, mantissa) {
      (0, 0) => Self::from_bits(sign_bit),
      (F32_EXPONENT_MAX, 0) => Self::from_bits(sign_bit | Self::EXPONENT_MASK),
      (F32_EXPONENT_MAX, _) => {
        let payload = u64::from(mantissa) << (Self::MANTISSA_BITS - F32_MANTISSA_BITS);
        Self::from_bits(sign_bit | Self::EXPONENT_MASK | Self::QUIET_BIT | payload)
      }
      (0, _) => {
        // Subnormal: normalise, same as in `decode_regular`.
        let frac = u64::from(mantissa) << SHIFT;
        let underflow = frac.leading_zeros() - 1;
        let exp = (1 - F32_BIAS) - underflow as i32;
        Unpacked { sign, exp, frac: frac << underflow }.encode_round(0)
      }
      (_, _) => {
        let frac = (u64::from(mantissa) << SHIFT) | Unpacked::HIDDEN_BIT;
        let exp = field as i32 - F32_BIAS;
        Unpacked { sign, exp, frac }.encode_round(0)
      }
    }
  }
}

impl RoundFrom<Double> for f32 {
  /// Convert a `Double` into an `f32`, rounding to nearest, ties to even. Numbers too large in
  /// magnitude become infinities, and too small become subnormals or zero.
  ///
  /// NaNs stay NaN, and keep their sign.
  ///
  /// ```
  /// # use soft_double::*;
  /// assert_eq!(f32::round_from(Double::from(1e300)), f32::INFINITY);
  /// assert_eq!(f32::round_from(Double::from(-1e-300)).to_bits(), (-0.0_f32).to_bits());
  /// ```
  fn round_from(value: Double) -> Self {
    let sign_bit = if value.is_sign_negative() { 1 << (u32::BITS - 1) } else { 0 };
    let infinity = F32_EXPONENT_MAX << F32_MANTISSA_BITS;
    match value.try_decode() {
      TryUnpacked::Nan => f32::from_bits(sign_bit | infinity | 1 << (F32_MANTISSA_BITS - 1)),
      TryUnpacked::Infinite(_) => f32::from_bits(sign_bit | infinity),
      TryUnpacked::Zero(_) => f32::from_bits(sign_bit),
      TryUnpacked::Finite(x) =>
        f32::from_bits(round_pack(x, 0, F32_MANTISSA_BITS, F32_EXPONENT_BITS) as u32),
    }
  }
}
