use super::*;
use crate::double::decode::TryUnpacked;
use crate::underlying::{Frac, Wide};

impl Double {
  /// Return a [normalised](Unpacked::is_normalised) `Unpacked` that's the result of multiplying
  /// `x` and `y`, plus the sticky bit.
  ///
  /// `x` and `y` must be [normalised](Unpacked::is_normalised).
  #[inline]
  pub(crate) fn mul_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
    debug_assert!(
      x.is_normalised() && y.is_normalised(),
      "Precondition violated: {x:?} and {y:?} must be normalised",
    );

    // Multiplying two numbers in the form `frac × 2^exp` is much easier than adding them. We have
    //
    //   (x.frac / 2^62 × 2^x.exp) × (y.frac / 2^62 × 2^y.exp)
    //   = (x.frac × y.frac) / 2^124 × 2^(x.exp + y.exp)
    //
    // The product of the `frac`s is computed exactly in a `u128`. Since both are in `[2^62, 2^63[`,
    // the product is in `[2^124, 2^126[`; that is, its leading 1 is on bit 124 (if the product of
    // the fractions is in `[1, 2[`) or 125 (if it's in `[2, 4[`, e.g. 1.5 × 1.5 = 2.25).
    //
    // To normalise, we shift the product left so that its leading 1 lands on bit 126, and take the
    // top 64 bits as the new `frac` (leading 1 on bit 62). The bottom 64 bits are accumulated to
    // the sticky bit. If the leading 1 was on bit 125, the product of the fractions was ≥ 2 and we
    // need to add 1 to the exponent.
    let product = x.frac.doubling_mul(y.frac);
    let overflow = (product >> 125) as u32;
    let (frac, sticky) = (product << (2 - overflow)).components_hi_lo();
    let exp = x.exp + y.exp + overflow as i32;

    (Unpacked { sign: x.sign ^ y.sign, exp, frac }, sticky)
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    let sign = Self::from_bits((self.to_bits() ^ other.to_bits()) & Self::SIGN_MASK);
    match (self.try_decode(), other.try_decode()) {
      (TryUnpacked::Nan, _) | (_, TryUnpacked::Nan) => self.propagate_nan(other),
      // ∞ × 0 is invalid.
      (TryUnpacked::Infinite(_), TryUnpacked::Zero(_))
      | (TryUnpacked::Zero(_), TryUnpacked::Infinite(_)) => Self::NAN,
      (TryUnpacked::Infinite(_), _) | (_, TryUnpacked::Infinite(_)) => Self::INFINITY.copysign(sign),
      (TryUnpacked::Zero(_), _) | (_, TryUnpacked::Zero(_)) => Self::ZERO.copysign(sign),
      (TryUnpacked::Finite(a), TryUnpacked::Finite(b)) => {
        let (result, sticky) = Self::mul_kernel(a, b);
        result.encode_round(sticky)
      }
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
