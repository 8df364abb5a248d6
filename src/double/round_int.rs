use super::*;
use crate::underlying::Frac;

impl Double {
  /// The number of mantissa bits below the binary point, for a finite `self` with magnitude at
  /// least 1 and less than 2^52; `None` if `|self| < 1`, and `Some(0)` if `self` is already
  /// integral because of its magnitude (including infinities and NaN).
  #[inline]
  fn fraction_bits(self) -> Option<u32> {
    let exp = self.exponent_field() - Self::BIAS;
    if exp < 0 {
      None
    } else if exp >= Self::MANTISSA_BITS as i32 {
      Some(0)
    } else {
      Some(Self::MANTISSA_BITS - exp as u32)
    }
  }

  /// Round toward zero, to an integral value.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(-2.7).trunc().to_f64(), -2.0);
  /// ```
  pub fn trunc(self) -> Self {
    match self.fraction_bits() {
      _ if self.is_nan() => self.quiet(),
      None => Double(self.0 & Self::SIGN_MASK),
      Some(bits) => Double(self.0 & !self.0.mask_lsb(bits)),
    }
  }

  /// Round toward negative infinity, to an integral value.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(-2.1).floor().to_f64(), -3.0);
  /// assert_eq!(Double::from(2.9).floor().to_f64(), 2.0);
  /// ```
  pub fn floor(self) -> Self {
    let trunc = self.trunc();
    if self.is_sign_negative() && trunc.0 != self.0 && !self.is_nan() {
      trunc - Self::ONE
    } else {
      trunc
    }
  }

  /// Round toward positive infinity, to an integral value.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(2.1).ceil().to_f64(), 3.0);
  /// assert_eq!(Double::from(-0.5).ceil().to_bits(), (-0.0_f64).to_bits());
  /// ```
  pub fn ceil(self) -> Self {
    let trunc = self.trunc();
    if !self.is_sign_negative() && trunc.0 != self.0 && !self.is_nan() {
      trunc + Self::ONE
    } else {
      trunc
    }
  }

  /// Round to the nearest integral value, ties away from zero.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(2.5).round().to_f64(), 3.0);
  /// assert_eq!(Double::from(-2.5).round().to_f64(), -3.0);
  /// assert_eq!(Double::from(2.4999).round().to_f64(), 2.0);
  /// ```
  pub fn round(self) -> Self {
    let exp = self.exponent_field() - Self::BIAS;
    if self.is_nan() {
      self.quiet()
    } else if exp < -1 {
      // |self| < 0.5
      Double(self.0 & Self::SIGN_MASK)
    } else if exp == -1 {
      // 0.5 ≤ |self| < 1
      Self::ONE.copysign(self)
    } else {
      match self.fraction_bits() {
        Some(bits) if bits > 0 => {
          // Add half a unit to the magnitude, then truncate. A carry out of the mantissa bumps the
          // exponent field, which is exactly right (e.g. 1.5 → 2.0).
          let half = 1 << (bits - 1);
          let sum = self.0 + half;
          Double(sum & !sum.mask_lsb(bits))
        }
        _ => self,
      }
    }
  }
}
