use super::*;

impl Double {
  /// The size of this type in bits.
  pub const BITS: u32 = 64;

  /// The number of explicit mantissa (a.k.a. significand, a.k.a. fraction) bits.
  pub const MANTISSA_BITS: u32 = 52;

  /// The number of exponent bits.
  pub const EXPONENT_BITS: u32 = 11;

  /// The exponent bias: an exponent field `e` stands for `2^(e - BIAS)`.
  pub(crate) const BIAS: i32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;

  /// The smallest exponent of a normal number; below it, numbers are subnormal.
  pub(crate) const MIN_NORMAL_EXP: i32 = 1 - Self::BIAS;

  /// The biggest exponent of a finite number; above it, numbers overflow to infinity.
  #[cfg(test)]
  pub(crate) const MAX_EXP: i32 = Self::BIAS;

  pub(crate) const SIGN_MASK: u64 = 1 << (Self::BITS - 1);
  pub(crate) const EXPONENT_MASK: u64 = ((1 << Self::EXPONENT_BITS) - 1) << Self::MANTISSA_BITS;
  pub(crate) const MANTISSA_MASK: u64 = (1 << Self::MANTISSA_BITS) - 1;

  /// The msb of the mantissa field, which distinguishes quiet NaNs (set) from signalling NaNs.
  pub(crate) const QUIET_BIT: u64 = 1 << (Self::MANTISSA_BITS - 1);

  /// Construct a double from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: u64) -> Self {
    Self(bits)
  }

  /// Return the underlying bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> u64 {
    self.0
  }

  /// Convert a native [`f64`] into a `Double`. This is exact: both hold the same encoding, so
  /// NaNs and infinities carry over unchanged.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from_f64(1.5).to_bits(), 1.5_f64.to_bits());
  /// ```
  #[inline]
  pub const fn from_f64(value: f64) -> Self {
    Self(value.to_bits())
  }

  /// Convert `self` into a native [`f64`]. This is exact, see [`Double::from_f64`].
  #[inline]
  pub const fn to_f64(self) -> f64 {
    f64::from_bits(self.0)
  }

  /// The biased exponent field.
  #[inline]
  pub(crate) const fn exponent_field(self) -> i32 {
    ((self.0 & Self::EXPONENT_MASK) >> Self::MANTISSA_BITS) as i32
  }

  /// Returns `true` if `self` is NaN (of any sign, quiet or signalling).
  #[inline]
  pub const fn is_nan(self) -> bool {
    self.0 & !Self::SIGN_MASK > Self::EXPONENT_MASK
  }

  /// Returns `true` if `self` is positive or negative infinity.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    self.0 & !Self::SIGN_MASK == Self::EXPONENT_MASK
  }

  /// Returns `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.0 & Self::EXPONENT_MASK != Self::EXPONENT_MASK
  }

  /// Returns `true` if `self` is NaN *or* infinite. Note that this does not tell the two apart; for
  /// that, use [`Double::is_nan`] and [`Double::is_infinite`].
  ///
  /// This is the check to make after a suspect computation (say, a division whose divisor might be
  /// 0), since arithmetic never reports errors by itself.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert!((Double::ONE / Double::ZERO).is_nan_or_inf());
  /// assert!((Double::ZERO / Double::ZERO).is_nan_or_inf());
  /// assert!(!Double::MAX.is_nan_or_inf());
  /// ```
  #[inline]
  pub const fn is_nan_or_inf(self) -> bool {
    self.is_nan() || self.is_infinite()
  }

  /// Returns `true` if the sign bit of `self` is set, including for `-0.0` and NaNs with the sign
  /// bit set.
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  /// Returns `true` if `self` is `+0.0` or `-0.0`.
  #[inline]
  pub(crate) const fn is_zero(self) -> bool {
    self.0 & !Self::SIGN_MASK == 0
  }

  /// Checks whether `self` is an exception (zero, infinity or NaN), that is, the same as
  /// `self.is_zero() || !self.is_finite()`.
  #[inline]
  pub(crate) const fn is_special(self) -> bool {
    self.is_zero() || !self.is_finite()
  }

  /// Returns the floating point category of `self`.
  ///
  /// ```
  /// # use soft_double::Double;
  /// use core::num::FpCategory;
  /// assert_eq!(Double::MIN_POSITIVE.classify(), FpCategory::Normal);
  /// assert_eq!(Double::from_bits(1).classify(), FpCategory::Subnormal);
  /// ```
  pub const fn classify(self) -> core::num::FpCategory {
    use core::num::FpCategory;
    let mantissa = self.0 & Self::MANTISSA_MASK;
    match (self.exponent_field(), mantissa) {
      (0, 0) => FpCategory::Zero,
      (0, _) => FpCategory::Subnormal,
      (0x7ff, 0) => FpCategory::Infinite,
      (0x7ff, _) => FpCategory::Nan,
      _ => FpCategory::Normal,
    }
  }

  /// Return `self` with the quiet bit set, if `self` is a NaN.
  #[inline]
  pub(crate) const fn quiet(self) -> Self {
    if self.is_nan() { Self(self.0 | Self::QUIET_BIT) } else { self }
  }

  /// The result of an operation with a NaN operand: the first NaN, quietened.
  #[inline]
  pub(crate) const fn propagate_nan(self, other: Self) -> Self {
    if self.is_nan() { self.quiet() } else { other.quiet() }
  }
}

impl Unpacked {
  /// The [`Unpacked::frac`] field has the binary point [`Unpacked::FRAC_WIDTH`] bits from the
  /// right.
  pub(crate) const FRAC_WIDTH: u32 = 62;

  /// The implicit `1.` of a normalised fraction.
  pub(crate) const HIDDEN_BIT: u64 = 1 << Self::FRAC_WIDTH;

  /// Checks whether `self` is "normalised", i.e. whether `self.frac` starts with `0b01`.
  pub(crate) const fn is_normalised(self) -> bool {
    self.frac >> Self::FRAC_WIDTH == 1
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::num::FpCategory;

  #[test]
  fn masks() {
    assert_eq!(Double::SIGN_MASK, 0x8000_0000_0000_0000);
    assert_eq!(Double::EXPONENT_MASK, 0x7ff0_0000_0000_0000);
    assert_eq!(Double::MANTISSA_MASK, 0x000f_ffff_ffff_ffff);
    assert_eq!(Double::QUIET_BIT, 0x0008_0000_0000_0000);
    assert_eq!(Double::BIAS, 1023);
    assert_eq!(Double::MIN_NORMAL_EXP, -1022);
    assert_eq!(Double::MAX_EXP, 1023);
  }

  #[test]
  fn f64_roundtrip() {
    for x in [0.0, -0.0, 1.0, -2.5, f64::MAX, f64::MIN_POSITIVE, 5e-324, f64::INFINITY] {
      assert_eq!(Double::from_f64(x).to_f64().to_bits(), x.to_bits());
    }
    assert!(Double::from_f64(f64::NAN).to_f64().is_nan());
  }

  #[test]
  fn predicates() {
    assert!(Double::NAN.is_nan());
    assert!(!Double::NAN.is_infinite());
    assert!(!Double::NAN.is_finite());
    assert!(Double::INFINITY.is_infinite());
    assert!(Double::NEG_INFINITY.is_infinite());
    assert!(!Double::INFINITY.is_nan());
    assert!(Double::MAX.is_finite());
    assert!(Double::NEG_ZERO.is_zero());
    assert!(Double::NEG_ZERO.is_sign_negative());
    assert!(!Double::ZERO.is_sign_negative());
  }

  #[test]
  fn is_nan_or_inf() {
    assert!(Double::NAN.is_nan_or_inf());
    assert!(Double::INFINITY.is_nan_or_inf());
    assert!(Double::NEG_INFINITY.is_nan_or_inf());
    assert!(Double::from_bits(0x7ff0_0000_0000_0001).is_nan_or_inf());
    assert!(!Double::ZERO.is_nan_or_inf());
    assert!(!Double::MIN.is_nan_or_inf());
    assert!(!Double::from_bits(1).is_nan_or_inf());
  }

  #[test]
  fn is_special() {
    assert!(Double::ZERO.is_special());
    assert!(Double::NEG_ZERO.is_special());
    assert!(Double::INFINITY.is_special());
    assert!(Double::NAN.is_special());
    assert!(!Double::ONE.is_special());
    assert!(!Double::from_bits(1).is_special());
  }

  #[test]
  fn classify() {
    assert_eq!(Double::ZERO.classify(), FpCategory::Zero);
    assert_eq!(Double::NEG_ZERO.classify(), FpCategory::Zero);
    assert_eq!(Double::from_bits(0x000f_ffff_ffff_ffff).classify(), FpCategory::Subnormal);
    assert_eq!(Double::ONE.classify(), FpCategory::Normal);
    assert_eq!(Double::NEG_INFINITY.classify(), FpCategory::Infinite);
    assert_eq!(Double::NAN.classify(), FpCategory::Nan);
  }

  #[test]
  fn propagate_nan() {
    let signalling = Double::from_bits(0x7ff0_0000_0000_0001);
    assert_eq!(signalling.quiet().to_bits(), 0x7ff8_0000_0000_0001);
    assert_eq!(Double::ONE.propagate_nan(signalling).to_bits(), 0x7ff8_0000_0000_0001);
    assert_eq!(Double::NAN.propagate_nan(signalling).to_bits(), Double::NAN.to_bits());
    assert_eq!(Double::ONE.quiet().to_bits(), Double::ONE.to_bits());
  }
}
