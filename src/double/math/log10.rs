use super::*;
use crate::double::decode::TryUnpacked;

/// `2 / (2k + 1)`, for `k = 1, 2, …, 12`: the coefficients of the series
/// `2·atanh(s) - 2s = Σ 2·s^(2k+1) / (2k + 1)`, divided by `s`.
const ATANH_COEFFS: [Double; 12] = [
  Double::from_f64(2. / 3.),
  Double::from_f64(2. / 5.),
  Double::from_f64(2. / 7.),
  Double::from_f64(2. / 9.),
  Double::from_f64(2. / 11.),
  Double::from_f64(2. / 13.),
  Double::from_f64(2. / 15.),
  Double::from_f64(2. / 17.),
  Double::from_f64(2. / 19.),
  Double::from_f64(2. / 21.),
  Double::from_f64(2. / 23.),
  Double::from_f64(2. / 25.),
];

/// log₁₀(2), split in two: the high part has its 20 lowest bits clear, so that multiplying it by
/// any exponent is exact.
const LOG10_2_HI: Double = Double::from_bits(0x3fd3_4413_509f_6000);
const LOG10_2_LO: Double = Double::from_f64(3.69423907715893078616e-13);

/// 1 / ln(10)
const INV_LN_10: Double = Double::from_f64(4.34294481903251816668e-01);

impl Double {
  /// Returns ln(1 + f), for `f` in `[√½ - 1, √2 - 1]`.
  fn ln_1p_reduced(f: Self) -> Self {
    // With s = f / (2 + f), we have ln(1 + f) = 2·atanh(s) = 2s + s·R, where
    //
    //   R = 2s²/3 + 2s⁴/5 + 2s⁶/7 + …
    //
    // Since |s| < 0.172, s² < 0.03, and 12 terms of R are more than enough. Further, because
    // 2s = f - s·f, the result can be written as f - s·(f - R), where `f` is exact and the rest is
    // a small correction, which keeps the rounding error below 1 ulp.
    let s = f / (Self::from(2) + f);
    let z = s * s;
    let series = ATANH_COEFFS.iter().rev().fold(Self::ZERO, |acc, &c| acc * z + c);
    let r = z * series;
    f - s * (f - r)
  }

  /// Returns the decimal logarithm of `self`.
  ///
  /// This is not correctly rounded, but it's accurate to within a couple ulps. Special cases are
  /// as for [`f64::log10`]: the logarithm of `±0` is `-∞`, of a negative number is NaN, and of
  /// `+∞` is `+∞`.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(100).log10().to_f64(), 2.0);
  /// assert_eq!(Double::ONE.log10().to_bits(), 0);
  /// assert_eq!(Double::ZERO.log10().to_f64(), f64::NEG_INFINITY);
  /// assert!(Double::MINUS_ONE.log10().is_nan());
  /// ```
  pub fn log10(self) -> Self {
    match self.try_decode() {
      TryUnpacked::Nan => self.quiet(),
      TryUnpacked::Zero(_) => Self::NEG_INFINITY,
      TryUnpacked::Infinite(false) => self,
      TryUnpacked::Infinite(true) => Self::NAN,
      TryUnpacked::Finite(x) if x.sign => Self::NAN,
      TryUnpacked::Finite(x) => {
        // Write x = m × 2^e, with m in [√½, √2[ rather than [1, 2[, so that ln(m) is centered
        // around 0. Then
        //
        //   log₁₀(x) = e·log₁₀(2) + ln(m) / ln(10)
        //
        // and `e·log₁₀(2)` is computed as `e·LOG10_2_HI` (exact) plus `e·LOG10_2_LO` (tiny).
        let mut m = Unpacked { sign: false, exp: 0, frac: x.frac }.encode_round(0);
        let mut e = x.exp;
        if m.is_greater(crate::consts::SQRT_2) {
          m = Unpacked { sign: false, exp: -1, frac: x.frac }.encode_round(0);
          e += 1;
        }
        let ln_m = Self::ln_1p_reduced(m - Self::ONE);
        let e = Self::from(e);
        e * LOG10_2_HI + (e * LOG10_2_LO + ln_m * INV_LN_10)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn is_close(x: Double) -> bool {
    let result = x.log10();
    let native = x.to_f64().log10();
    if native.is_nan() {
      result.is_nan()
    } else if native.is_infinite() || native == 0. {
      result.to_bits() == native.to_bits()
    } else {
      ((result.to_f64() - native) / native).abs() < 1e-15
    }
  }

  #[test]
  fn special() {
    for x in Double::cases_special() {
      assert!(is_close(x), "{x:?}")
    }
    assert_eq!(Double::NEG_ZERO.log10().to_bits(), Double::NEG_INFINITY.to_bits());
    assert_eq!(Double::INFINITY.log10().to_bits(), Double::INFINITY.to_bits());
    assert!(Double::NEG_INFINITY.log10().is_nan());
  }

  #[test]
  fn powers_of_ten() {
    let mut x = Double::ONE;
    for i in 0 ..= 22 {
      // Powers of ten up to 1e22 are exact.
      assert!((x.log10().to_f64() - f64::from(i)).abs() <= 4. * f64::from(i) * f64::EPSILON, "{i}");
      x *= Double::from(10);
    }
  }

  #[test]
  fn near_one() {
    for x in [1.0 + f64::EPSILON, 1.0 - f64::EPSILON / 2.0, 0.99, 1.01, 1.4142135, 1.4142136, 0.7071] {
      assert!(is_close(Double::from_f64(x)), "{x}")
    }
  }

  #[test]
  fn subnormal() {
    assert!(is_close(Double::from_bits(1)));
    assert!(is_close(Double::from_bits(0x000f_ffff_ffff_ffff)));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn close_to_f64(x in Double::cases_proptest()) {
      assert!(is_close(x), "{x:?}")
    }
  }
}
