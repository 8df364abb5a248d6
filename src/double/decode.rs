use super::*;

/// A double, classified for the purpose of dispatching arithmetic. Only the `Finite` case reaches
/// the kernels.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub(crate) enum TryUnpacked {
  Nan,
  /// Infinity; `true` if negative.
  Infinite(bool),
  /// Zero; `true` if negative.
  Zero(bool),
  Finite(Unpacked),
}

impl Double {
  /// Decode a double. The core logic lives in [`Self::decode_regular`].
  #[inline]
  pub(crate) fn try_decode(self) -> TryUnpacked {
    if self.is_nan() {
      TryUnpacked::Nan
    } else if self.is_infinite() {
      TryUnpacked::Infinite(self.is_sign_negative())
    } else if self.is_zero() {
      TryUnpacked::Zero(self.is_sign_negative())
    } else {
      TryUnpacked::Finite(self.decode_regular())
    }
  }

  /// Decode a double **which is not zero, infinite or NaN** into its sign, exponent, and
  /// [normalised](Unpacked::is_normalised) fraction.
  pub(crate) fn decode_regular(self) -> Unpacked {
    debug_assert!(
      !self.is_special(),
      "Precondition violated: {self:?} cannot be zero, infinite or NaN",
    );

    // The mantissa field holds the 52 bits after the binary point; they need to move 10 places
    // left so that the hidden bit, if any, lands on bit `FRAC_WIDTH`.
    const SHIFT: u32 = Unpacked::FRAC_WIDTH - Double::MANTISSA_BITS;

    let sign = self.is_sign_negative();
    let field = self.exponent_field();
    let mantissa = self.0 & Self::MANTISSA_MASK;

    if field != 0 {
      // Normal number: hidden bit is 1, exponent is biased.
      Unpacked {
        sign,
        exp: field - Self::BIAS,
        frac: (mantissa << SHIFT) | Unpacked::HIDDEN_BIT,
      }
    } else {
      // Subnormal number: hidden bit is 0, exponent is fixed at `MIN_NORMAL_EXP`. To normalise,
      // shift the leading 1 up to the hidden bit position, compensating in the exponent.
      //
      // Example (abridged):
      //
      //   subnormal frac: 0b0_0_00011010…
      //          becomes: 0b0_1_1010…000 and adjust exponent by -4
      let frac = mantissa << SHIFT;
      let underflow = frac.leading_zeros() - 1;
      Unpacked {
        sign,
        exp: Self::MIN_NORMAL_EXP - underflow as i32,
        frac: frac << underflow,
      }
    }
  }
}
