use super::*;
use crate::underlying::Frac;

/// Round a [normalised](Unpacked::is_normalised) value to the nearest number in an IEEE 754
/// binary format with `mantissa_bits` explicit mantissa bits and `exponent_bits` exponent bits,
/// ties to even, and return its bit pattern (sign bit at `mantissa_bits + exponent_bits`).
///
/// `sticky` is the sticky bit: it is non-zero **if and only if** some non-zero bits below
/// `x.frac` have been lost. In other words, accumulate any lost bits to `sticky`, then pass it
/// here to get a correctly rounded result.
///
/// This is shared by binary64 (this crate's [`Double`]) and binary32 (for conversions to
/// [`f32`]).
pub(crate) fn round_pack(x: Unpacked, sticky: u64, mantissa_bits: u32, exponent_bits: u32) -> u64 {
  debug_assert!(
    x.is_normalised(),
    "Precondition violated: {x:?} must be normalised",
  );

  let bias = (1 << (exponent_bits - 1)) - 1;
  let min_normal_exp = 1 - bias;
  let sign = u64::from(x.sign) << (mantissa_bits + exponent_bits);
  let infinity = ((1 << exponent_bits) - 1) << mantissa_bits;

  // Too big even before rounding: overflow to infinity.
  if x.exp > bias {
    return sign | infinity
  }

  // The mantissa we want has its hidden bit on bit `mantissa_bits` instead of `FRAC_WIDTH`, so we
  // need to shift `frac` right by the difference, rounding. If the number is too small to be
  // normal, we shift further right, by as many places as the exponent is below the minimum, and
  // the number becomes subnormal (or 0) with an exponent field of 0.
  //
  // For normal numbers, there's a trick: the exponent field is written as `exponent - 1`, because
  // the hidden bit of the mantissa is still there, and will add the missing 1 to the exponent
  // field when we add them. The same addition takes care of every carry that rounding may cause:
  //
  //   - mantissa 0b1_111…1 + round up = 0b10_000…0: exponent field +1, mantissa 0, which is
  //     exactly the right result (and infinity, if the exponent field was already the maximum);
  //   - subnormal 0b0_111…1 + round up = 0b1_000…0: exponent field 1, i.e. the smallest normal.
  let (field, shift) =
    if x.exp >= min_normal_exp {
      ((x.exp - min_normal_exp) as u64, Unpacked::FRAC_WIDTH - mantissa_bits)
    } else {
      let denormalise = (min_normal_exp - x.exp).min(u64::BITS as i32 + 1) as u32;
      (0, Unpacked::FRAC_WIDTH - mantissa_bits + denormalise)
    };
  let (mantissa, round_up) = x.frac.shr_round(shift, sticky != 0);

  sign | ((field << mantissa_bits) + mantissa + u64::from(round_up))
}

impl Unpacked {
  /// Encode a double, rounding if necessary: round to nearest, ties to even, overflowing to
  /// infinity and underflowing gradually to subnormals and zero.
  ///
  /// See [`round_pack`] for the meaning of `sticky`.
  #[inline]
  pub(crate) fn encode_round(self, sticky: u64) -> Double {
    Double::from_bits(round_pack(self, sticky, Double::MANTISSA_BITS, Double::EXPONENT_BITS))
  }
}
