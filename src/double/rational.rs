use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs};

/// The error type returned when a [Double] cannot be converted to a [Rational] because it is
/// infinite or NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

impl Double {
  /// Convert a finite double into a [Rational] value.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the algorithm for decoding a
  /// double, since this is what we will check our optimised implementations against!
  fn into_rational_finite(self) -> Rational {
    let sign = self.is_sign_negative();
    let field = self.exponent_field();
    let mantissa = self.to_bits() & Self::MANTISSA_MASK;

    // Normal numbers have an implicit 1 before the mantissa and a biased exponent; subnormals
    // have an implicit 0, and the same exponent as the smallest normal number.
    let (significand, exponent) =
      if field == 0 {
        (mantissa, Self::MIN_NORMAL_EXP)
      } else {
        (mantissa | (1 << Self::MANTISSA_BITS), field - Self::BIAS)
      };

    // The value is significand / 2^52 × 2^exponent.
    let magnitude = Rational::from(significand)
      * Rational::power_of_2(i64::from(exponent) - i64::from(Self::MANTISSA_BITS));
    if sign { -magnitude } else { magnitude }
  }

  /// Same as [`Self::into_rational_finite`], but infinities count as ±2^1024 (that is, where the
  /// next binade above [`Double::MAX`] would start).
  fn into_rational_extended(self) -> Rational {
    if self.is_infinite() {
      let magnitude = Rational::power_of_2(i64::from(Self::MAX_EXP) + 1);
      if self.is_sign_negative() { -magnitude } else { magnitude }
    } else {
      self.into_rational_finite()
    }
  }

  /// The double immediately below (`up == false`) or above (`up == true`) `self`, which must not
  /// be NaN or an infinity in the direction of `up`.
  fn step(self, up: bool) -> Self {
    let ordinal = self.ordinal() + if up { 1 } else { -1 };
    if ordinal >= 0 {
      Self::from_bits(ordinal as u64)
    } else {
      Self::from_bits(Self::SIGN_MASK | ordinal.unsigned_abs())
    }
  }
}

impl TryFrom<Double> for Rational {
  type Error = NotFinite;

  fn try_from(value: Double) -> Result<Self, Self::Error> {
    if value.is_finite() {
      Ok(value.into_rational_finite())
    } else {
      Err(NotFinite)
    }
  }
}

impl From<Unpacked> for Rational {
  fn from(value: Unpacked) -> Self {
    let magnitude = Rational::from(value.frac)
      * Rational::power_of_2(i64::from(value.exp) - i64::from(Unpacked::FRAC_WIDTH));
    if value.sign { -magnitude } else { magnitude }
  }
}

/// Check whether the rational number `exact` should be rounded to `result`, under round to
/// nearest, ties to even.
///
/// The sign of a zero `result` is not checked, since `exact` has no sign when it is 0.
pub fn is_correct_rounded(exact: Rational, result: Double) -> bool {
  // No number is rounded to NaN.
  if result.is_nan() { return false }

  // Overflow: anything at or beyond 2^1024 rounds to infinity (anything between `MAX` and 2^1024
  // is handled by the general case below, since infinity is even and `MAX` is odd).
  let curr = result.into_rational_extended();
  let zero = Rational::from(0);
  if result.is_infinite() && (&exact).abs() >= (&curr).abs() {
    return (exact > zero) == (curr > zero)
  }

  // `result` represents exactly the number `curr`, while the immediately previous and next doubles
  // represent exactly the numbers `prev` and `next` (if they exist).
  let prev = (result.to_bits() != Double::NEG_INFINITY.to_bits())
    .then(|| result.step(false).into_rational_extended());
  let next = (result.to_bits() != Double::INFINITY.to_bits())
    .then(|| result.step(true).into_rational_extended());
  let result_is_even = result.to_bits() & 1 == 0;

  if exact == curr {
    // `exact` is exactly represented by `result`
    true
  } else if let Some(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]prev, result[`: needs to be closer to `result` than to `prev`,
    // or same distance if `result` is even.
    let distance_curr = &curr - &exact;
    let distance_prev = &exact - &prev;
    distance_curr < distance_prev || distance_curr == distance_prev && result_is_even
  } else if let Some(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]result, next[`: needs to be closer to `result` than to `next`,
    // or same distance if `result` is even.
    let distance_curr = &exact - &curr;
    let distance_next = &next - &exact;
    distance_curr < distance_next || distance_curr == distance_next && result_is_even
  } else {
    // Not in interval
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    assert_eq!(Rational::try_from(Double::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Double::NEG_ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Double::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(Double::from_f64(-6.5)), Ok(Rational::from_signeds(-13, 2)));
    assert_eq!(Rational::try_from(Double::from_f64(0.375)), Ok(Rational::from_signeds(3, 8)));
    assert_eq!(Rational::try_from(Double::from_bits(1)), Ok(Rational::power_of_2(-1074_i64)));
    assert_eq!(Rational::try_from(Double::MIN_POSITIVE), Ok(Rational::power_of_2(-1022_i64)));
    assert_eq!(
      Rational::try_from(Double::MAX),
      Ok(Rational::power_of_2(1024_i64) - Rational::power_of_2(971_i64)),
    );
    assert_eq!(Rational::try_from(Double::INFINITY), Err(NotFinite));
    assert_eq!(Rational::try_from(Double::NAN), Err(NotFinite));
  }

  #[test]
  fn unpacked() {
    for x in [1.0, -6.5, 0.1, 1e300, 5e-324] {
      let x = Double::from_f64(x);
      assert_eq!(Rational::from(x.decode_regular()), Rational::try_from(x).unwrap(), "{x:?}");
    }
  }

  #[test]
  fn step() {
    assert_eq!(Double::ZERO.step(true).to_bits(), 1);
    assert_eq!(Double::ZERO.step(false).to_bits(), (-Double::from_bits(1)).to_bits());
    assert_eq!(Double::ONE.step(false).to_f64(), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(Double::MAX.step(true).to_bits(), Double::INFINITY.to_bits());
  }

  #[test]
  fn oracle() {
    let one = Rational::from(1);
    let ulp = Rational::power_of_2(-52_i64);
    assert!(is_correct_rounded(one.clone(), Double::ONE));
    assert!(!is_correct_rounded(one.clone(), Double::ONE.step(true)));
    // Ties go to the even neighbour: 1 (even) rather than 1 + ulp (odd)
    assert!(is_correct_rounded(&one + &ulp / Rational::from(2), Double::ONE));
    assert!(!is_correct_rounded(&one + &ulp / Rational::from(2), Double::ONE.step(true)));
    // Overflow
    assert!(is_correct_rounded(Rational::power_of_2(2000_i64), Double::INFINITY));
    assert!(!is_correct_rounded(Rational::power_of_2(2000_i64), Double::MAX));
    assert!(is_correct_rounded(-Rational::power_of_2(1024_i64), Double::NEG_INFINITY));
    // Underflow
    assert!(is_correct_rounded(Rational::power_of_2(-1076_i64), Double::ZERO));
    assert!(is_correct_rounded(Rational::power_of_2(-1075_i64), Double::ZERO));
    assert!(!is_correct_rounded(Rational::power_of_2(-1074_i64), Double::ZERO));
    // Never NaN
    assert!(!is_correct_rounded(one, Double::NAN));
  }
}
