use super::*;
use crate::double::decode::TryUnpacked;
use crate::underlying::Frac;

impl Double {
  /// Return a [normalised](Unpacked::is_normalised) `Unpacked` that is the result of √x, plus the
  /// sticky bit.
  ///
  /// `x` must be [normalised](Unpacked::is_normalised) and positive.
  #[inline]
  pub(crate) fn sqrt_kernel(x: Unpacked) -> (Unpacked, u64) {
    debug_assert!(
      x.is_normalised() && !x.sign,
      "Precondition violated: {x:?} must be normalised and positive",
    );

    // Taking the square root of a number in the form `frac × 2^exp` has two steps.
    //
    // First, ensure that `exp` is an even number. If it's odd, subtract 1 from exp and compensate
    // `frac` accordingly. That is:
    //
    //   frac', exp' = frac     , exp        if exp is even
    //               = frac << 1, exp - 1    if exp is odd
    //
    // This is fine: bit 63 of `frac` is always clear, so there's room for the shift.
    //
    // Then, the square root is easy.
    //
    //   √(frac' / 2^62 × 2^exp')
    //   = √(frac') / 2^31 × 2^(exp' / 2)
    //   = √(frac' × 2^62) / 2^62 × 2^(exp' / 2)
    //
    // In other words: the resulting `exp` is `exp' / 2`, and the `frac` is the integer square root
    // of `frac' << 62`, which lies in `[2^62, 2^63[`, i.e. it's already normalised. The square root
    // of a double is never exactly halfway between two doubles, so the sticky bit only needs to
    // say whether the integer square root was inexact.
    let exp_odd = x.exp & 1;
    let frac_adjusted = x.frac << exp_odd;
    let exp_adjusted = x.exp - exp_odd;

    let (frac, inexact) = frac_adjusted.shift_sqrt(Unpacked::FRAC_WIDTH);
    let exp = exp_adjusted >> 1;

    (Unpacked { sign: false, exp, frac }, u64::from(inexact))
  }

  /// Returns the square root of `self`, correctly rounded. If `self` is negative (other than
  /// `-0.0`) or NaN, returns NaN.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(2.25).sqrt().to_f64(), 1.5);
  /// assert_eq!(Double::from(2).sqrt().to_f64(), core::f64::consts::SQRT_2);
  /// assert!(Double::MINUS_ONE.sqrt().is_nan());
  /// ```
  pub fn sqrt(self) -> Self {
    match self.try_decode() {
      TryUnpacked::Nan => self.quiet(),
      // √-0 = -0
      TryUnpacked::Zero(_) => self,
      TryUnpacked::Infinite(false) => self,
      TryUnpacked::Infinite(true) => Self::NAN,
      TryUnpacked::Finite(x) if x.sign => Self::NAN,
      TryUnpacked::Finite(x) => {
        let (result, sticky) = Self::sqrt_kernel(x);
        result.encode_round(sticky)
      }
    }
  }
}
