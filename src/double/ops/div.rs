use super::*;
use crate::double::decode::TryUnpacked;
use crate::underlying::Frac;

impl Double {
  /// Return a [normalised](Unpacked::is_normalised) `Unpacked` that's the result of dividing `x`
  /// by `y`, plus the sticky bit.
  ///
  /// `x` and `y` must be [normalised](Unpacked::is_normalised).
  #[inline]
  pub(crate) fn div_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
    debug_assert!(
      x.is_normalised() && y.is_normalised(),
      "Precondition violated: {x:?} and {y:?} must be normalised",
    );

    // Let's use ÷ to denote true mathematical division, and / denote integer division *that rounds
    // down* (i.e. towards negative infinity, not towards zero). To divide two numbers in the form
    // `frac × 2^exp`, we have
    //
    //   (x.frac ÷ 2^62 × 2^x.exp) ÷ (y.frac ÷ 2^62 × 2^y.exp)
    //   = (x.frac ÷ y.frac) × 2^(x.exp - y.exp)
    //   = ((x.frac << 62) ÷ y.frac) ÷ 2^62 × 2^(x.exp - y.exp)
    //
    // So the new `frac` is the quotient `(x.frac << 62) / y.frac`, and the remainder goes to the
    // sticky bit, since it tells whether the division was exact.
    //
    // Both fractions are in `[1, 2[`, so their quotient is in `]0.5, 2[`. If it's < 1 (that is, if
    // `x.frac < y.frac`), we shift the dividend one more place left, to keep the quotient
    // normalised, and subtract 1 from the exponent to compensate.
    let underflow = u32::from(x.frac < y.frac);
    let (frac, sticky) = x.frac.shift_div_rem(y.frac, Unpacked::FRAC_WIDTH + underflow);
    let exp = x.exp - y.exp - underflow as i32;

    (Unpacked { sign: x.sign ^ y.sign, exp, frac }, sticky)
  }

  pub(crate) fn div(self, other: Self) -> Self {
    let sign = Self::from_bits((self.to_bits() ^ other.to_bits()) & Self::SIGN_MASK);
    match (self.try_decode(), other.try_decode()) {
      (TryUnpacked::Nan, _) | (_, TryUnpacked::Nan) => self.propagate_nan(other),
      // ∞ ÷ ∞ and 0 ÷ 0 are invalid.
      (TryUnpacked::Infinite(_), TryUnpacked::Infinite(_))
      | (TryUnpacked::Zero(_), TryUnpacked::Zero(_)) => Self::NAN,
      // Anything else divided by 0 is ∞, never an error.
      (TryUnpacked::Infinite(_), _) | (_, TryUnpacked::Zero(_)) => Self::INFINITY.copysign(sign),
      (TryUnpacked::Zero(_), _) | (_, TryUnpacked::Infinite(_)) => Self::ZERO.copysign(sign),
      (TryUnpacked::Finite(a), TryUnpacked::Finite(b)) => {
        let (result, sticky) = Self::div_kernel(a, b);
        result.encode_round(sticky)
      }
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
