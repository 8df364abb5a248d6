use super::*;

impl core::ops::Neg for Double {
  type Output = Double;

  /// Flip the sign bit. This is exact, and applies to zeros, infinities and NaNs alike.
  #[inline]
  fn neg(self) -> Self::Output {
    Double(self.0 ^ Double::SIGN_MASK)
  }
}

impl core::ops::Neg for &Double {
  type Output = Double;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl Double {
  /// Return the absolute value of `self`, by clearing the sign bit.
  #[inline]
  pub const fn abs(self) -> Self {
    Double(self.0 & !Self::SIGN_MASK)
  }

  /// Return a double with the magnitude of `self` and the sign of `sign`.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(3.5).copysign(Double::NEG_ZERO).to_f64(), -3.5);
  /// ```
  #[inline]
  pub const fn copysign(self, sign: Self) -> Self {
    Double((self.0 & !Self::SIGN_MASK) | (sign.0 & Self::SIGN_MASK))
  }
}
