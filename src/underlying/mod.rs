//! This module contains the implementations of the underlying integer operations needed for the
//! software implementation of double arithmetic, that aren't available directly on the primitive
//! types. These are hidden from the end-user.
//!
//! Fractions live in a `u64`, and the operations that need more room (products, quotients, square
//! roots) are carried out in a `u128`.

/// Extension methods on the `u64` holding a fraction.
pub trait Frac: Copy {
  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u64.mask_lsb(4), 0x000d)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Shift right by `n`, and if any of the bits shifted out was a 1, set the lsb of the result
  /// (the bits are "jammed" into the lsb). Any `n` is allowed, including `n ≥ 64`.
  fn shr_jam(self, n: u32) -> Self;

  /// Shift right by `n ≥ 1` places, and return the result plus whether it needs to be incremented
  /// by 1 to round to nearest, ties to even. `sticky` is whether there were any non-zero bits
  /// *below* `self`, already lost before this call.
  fn shr_round(self, n: u32, sticky: bool) -> (Self, bool);

  /// Full product of `self` and `other`, in a type twice as wide.
  fn doubling_mul(self, other: Self) -> u128;

  /// Compute `(self << shift) / other`, with the remainder. The quotient must fit in a `u64`.
  fn shift_div_rem(self, other: Self, shift: u32) -> (Self, Self);

  /// Compute the integer square root of `self << shift`, and whether it was inexact. The root
  /// must fit in a `u64`.
  fn shift_sqrt(self, shift: u32) -> (Self, bool);
}

impl Frac for u64 {
  #[inline]
  fn mask_lsb(self, n: u32) -> Self {
    if n >= u64::BITS { self } else { self & ((1 << n) - 1) }
  }

  #[inline]
  fn shr_jam(self, n: u32) -> Self {
    if n == 0 {
      self
    } else if n >= u64::BITS {
      u64::from(self != 0)
    } else {
      (self >> n) | u64::from(self.mask_lsb(n) != 0)
    }
  }

  #[inline]
  fn shr_round(self, n: u32, sticky: bool) -> (Self, bool) {
    debug_assert!(n >= 1, "Cannot round without discarding at least 1 bit");
    // If more than 64 bits are shifted out, the value is < 0.5 and rounds down to 0.
    if n > u64::BITS {
      return (0, false)
    }
    let wide = u128::from(self);
    let quotient = (wide >> n) as u64;
    let remainder = wide & ((1 << n) - 1);
    let half = 1 << (n - 1);
    let round_up =
      remainder > half
      || (remainder == half && (sticky || quotient & 1 == 1));
    (quotient, round_up)
  }

  #[inline]
  fn doubling_mul(self, other: Self) -> u128 {
    u128::from(self) * u128::from(other)
  }

  #[inline]
  fn shift_div_rem(self, other: Self, shift: u32) -> (Self, Self) {
    let dividend = u128::from(self) << shift;
    let divisor = u128::from(other);
    let quotient = dividend / divisor;
    debug_assert!(quotient <= u128::from(u64::MAX));
    (quotient as u64, (dividend % divisor) as u64)
  }

  #[inline]
  fn shift_sqrt(self, shift: u32) -> (Self, bool) {
    let square = u128::from(self) << shift;
    let root = square.isqrt();
    debug_assert!(root <= u128::from(u64::MAX));
    (root as u64, root * root != square)
  }
}

/// Extension methods on the `u128` holding a double-width product.
pub trait Wide: Copy {
  /// Split into the most significant and least significant halves.
  fn components_hi_lo(self) -> (u64, u64);
}

impl Wide for u128 {
  #[inline]
  fn components_hi_lo(self) -> (u64, u64) {
    ((self >> u64::BITS) as u64, self as u64)
  }
}
