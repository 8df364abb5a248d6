use super::*;

/// The outcome of comparing two doubles with [`Double::compare`].
///
/// Each variant has a fixed numeric code (`as u8`): bit 0 is set if the operands are ordered,
/// bit 1 if the first is less, bit 2 if the first is greater.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Compare {
  /// At least one operand is NaN.
  Unordered = 0b000,
  /// The operands are equal (this includes `+0` and `-0`).
  Equal = 0b001,
  /// The first operand is less than the second.
  Less = 0b011,
  /// The first operand is greater than the second.
  Greater = 0b101,
}

impl From<Compare> for Option<core::cmp::Ordering> {
  /// Same as [`PartialOrd::partial_cmp`] would give.
  fn from(value: Compare) -> Self {
    use core::cmp::Ordering;
    match value {
      Compare::Unordered => None,
      Compare::Equal => Some(Ordering::Equal),
      Compare::Less => Some(Ordering::Less),
      Compare::Greater => Some(Ordering::Greater),
    }
  }
}

impl Double {
  /// Map a non-NaN double to an `i64` whose order is the same as the double's numerical order:
  /// the sign-magnitude encoding, converted to two's complement. Both zeros map to 0.
  #[inline]
  pub(crate) fn ordinal(self) -> i64 {
    let magnitude = (self.0 & !Self::SIGN_MASK) as i64;
    if self.is_sign_negative() { -magnitude } else { magnitude }
  }

  /// Compare `self` with `other`.
  ///
  /// Unlike [`PartialOrd`], this tells apart all four possible outcomes; in particular, it is
  /// [`Compare::Unordered`] if either operand is NaN, which means that "neither less nor greater"
  /// does *not* imply equal.
  ///
  /// ```
  /// # use soft_double::{Double, Compare};
  /// assert_eq!(Double::ONE.compare(Double::MAX), Compare::Less);
  /// assert_eq!(Double::ZERO.compare(Double::NEG_ZERO), Compare::Equal);
  /// assert_eq!(Double::ONE.compare(Double::NAN), Compare::Unordered);
  /// ```
  pub fn compare(self, other: Self) -> Compare {
    use core::cmp::Ordering;
    if self.is_nan() || other.is_nan() {
      return Compare::Unordered
    }
    match self.ordinal().cmp(&other.ordinal()) {
      Ordering::Less => Compare::Less,
      Ordering::Equal => Compare::Equal,
      Ordering::Greater => Compare::Greater,
    }
  }

  /// Returns `true` if `self < other`. False if either is NaN.
  #[inline]
  pub fn is_less(self, other: Self) -> bool {
    self.compare(other) == Compare::Less
  }

  /// Returns `true` if `self > other`. False if either is NaN.
  #[inline]
  pub fn is_greater(self, other: Self) -> bool {
    self.compare(other) == Compare::Greater
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn codes() {
    assert_eq!(Compare::Unordered as u8, 0);
    assert_eq!(Compare::Equal as u8, 1);
    assert_eq!(Compare::Less as u8, 3);
    assert_eq!(Compare::Greater as u8, 5);
  }

  #[test]
  fn zeros() {
    assert_eq!(Double::ZERO.compare(Double::NEG_ZERO), Compare::Equal);
    assert_eq!(Double::NEG_ZERO.compare(Double::ZERO), Compare::Equal);
    assert!(!Double::NEG_ZERO.is_less(Double::ZERO));
  }

  #[test]
  fn infinities() {
    assert!(Double::NEG_INFINITY.is_less(Double::MIN));
    assert!(Double::INFINITY.is_greater(Double::MAX));
    assert_eq!(Double::INFINITY.compare(Double::INFINITY), Compare::Equal);
  }

  #[test]
  fn nan() {
    for x in [Double::ZERO, Double::ONE, Double::INFINITY, Double::NAN] {
      assert_eq!(Double::NAN.compare(x), Compare::Unordered);
      assert_eq!(x.compare(Double::NAN), Compare::Unordered);
      assert!(!Double::NAN.is_less(x) && !Double::NAN.is_greater(x));
    }
  }

  #[test]
  fn subnormals() {
    let tiny = Double::from_bits(1);
    assert!(Double::ZERO.is_less(tiny));
    assert!(tiny.is_less(Double::MIN_POSITIVE));
    assert!((-tiny).is_less(Double::NEG_ZERO));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn same_as_f64(a in Double::cases_proptest(), b in Double::cases_proptest()) {
      let expected: Option<core::cmp::Ordering> = a.compare(b).into();
      assert_eq!(expected, a.to_f64().partial_cmp(&b.to_f64()), "{a:?} {b:?}");
    }

    #[test]
    fn irreflexive(a in Double::cases_proptest()) {
      assert!(!a.is_less(a));
      assert!(!a.is_greater(a));
    }

    #[test]
    fn asymmetric(a in Double::cases_proptest(), b in Double::cases_proptest()) {
      assert!(!(a.is_less(b) && b.is_less(a)));
      assert_eq!(a.is_less(b), b.is_greater(a));
    }
  }
}
