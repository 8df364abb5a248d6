use super::*;
use crate::double::decode::TryUnpacked;
use crate::underlying::Frac;

impl Double {
  /// Return a [normalised](Unpacked::is_normalised) `Unpacked` that's the result of adding `x`
  /// and `y`, plus the sticky bit.
  ///
  /// `x` and `y` must be [normalised](Unpacked::is_normalised), and must not be exact opposites
  /// (`x == -y`), since then the result is 0, which has no `Unpacked` representation.
  #[inline]
  pub(crate) fn add_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
    debug_assert!(
      x.is_normalised() && y.is_normalised(),
      "Precondition violated: {x:?} and {y:?} must be normalised",
    );
    debug_assert!(
      x.sign == y.sign || x.exp != y.exp || x.frac != y.frac,
      "Precondition violated: {x:?} and {y:?} cannot cancel out exactly",
    );

    // Adding two numbers in the form `frac × 2^exp` is only easy if they have the same `exp`: then
    // the result is just `(frac_x ± frac_y) × 2^exp`. So the first step is to shift the fraction of
    // the number with the smaller magnitude (call it `y`) right, by the difference in exponents,
    // so that both have the exponent of `x`.
    //
    // Bits shifted out of `y.frac` are "jammed" into its lsb: if any of them is 1, the lsb is set.
    // Since `frac` has 10 bits below the lsb of the final mantissa, this lsb never affects which
    // number we round to, except in telling an exact tie from something above or below it. So
    // the sticky bit is always 0: it already lives in the lsb of the result.
    let (x, y) = if (x.exp, x.frac) >= (y.exp, y.frac) { (x, y) } else { (y, x) };
    let shift = (x.exp - y.exp) as u32;
    let y_frac = y.frac.shr_jam(shift);

    if x.sign == y.sign {
      // Addition of the magnitudes. Both are in `[1, 2[`, so the sum is in `[1, 4[`: it may carry
      // into bit 63, in which case we need to shift right by 1 (jamming the lost bit) to normalise.
      //
      // Example:
      //
      //   x.frac: 0b01_1000…
      //   y.frac: 0b01_1000…
      //      sum: 0b11_0000…  becomes 0b01_1000… and adjust exponent by +1
      let sum = x.frac + y_frac;
      let carry = (sum >> (u64::BITS - 1)) as u32;
      let frac = sum.shr_jam(carry);
      (Unpacked { sign: x.sign, exp: x.exp + carry as i32, frac }, 0)
    } else {
      // Subtraction of the magnitudes. Since `|x| ≥ |y|`, the difference is ≥ 0, and it's not 0
      // because `x` and `y` don't cancel out. But it may be much smaller than `x`, if they're close:
      // the leading 1 may be anywhere, and we have to shift it up to bit 62, adjusting the exponent.
      //
      // Example:
      //
      //   x.frac: 0b01_1011…
      //   y.frac: 0b01_1000…
      //     diff: 0b00_0011…  becomes 0b01_1…000 and adjust exponent by -3
      //
      // Any bits shifted in from the right are exact zeros: heavy cancellation (by 2 or more places)
      // only happens when `shift ≤ 1`, and in that case `y_frac` has lost nothing.
      let diff = x.frac - y_frac;
      let underflow = diff.leading_zeros() - 1;
      let frac = diff << underflow;
      (Unpacked { sign: x.sign, exp: x.exp - underflow as i32, frac }, 0)
    }
  }

  pub(crate) fn add(self, other: Self) -> Self {
    match (self.try_decode(), other.try_decode()) {
      (TryUnpacked::Nan, _) | (_, TryUnpacked::Nan) => self.propagate_nan(other),
      // ∞ - ∞ is invalid, ∞ + ∞ and ∞ + anything else is ∞.
      (TryUnpacked::Infinite(a), TryUnpacked::Infinite(b)) =>
        if a == b { self } else { Self::NAN },
      (TryUnpacked::Infinite(_), _) => self,
      (_, TryUnpacked::Infinite(_)) => other,
      // The sum of zeros is -0 only if both are -0.
      (TryUnpacked::Zero(a), TryUnpacked::Zero(b)) =>
        if a && b { Self::NEG_ZERO } else { Self::ZERO },
      (TryUnpacked::Zero(_), TryUnpacked::Finite(_)) => other,
      (TryUnpacked::Finite(_), TryUnpacked::Zero(_)) => self,
      (TryUnpacked::Finite(a), TryUnpacked::Finite(b)) => {
        // x + (-x) = +0.
        if a.sign != b.sign && a.exp == b.exp && a.frac == b.frac {
          return Self::ZERO
        }
        let (result, sticky) = Self::add_kernel(a, b);
        result.encode_round(sticky)
      }
    }
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    // A NaN `other` propagates as is, not negated.
    if other.is_nan() { return self.propagate_nan(other) }
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
