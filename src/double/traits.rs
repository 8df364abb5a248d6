use super::*;

// No `PartialEq`/`PartialOrd`: comparisons go through `Double::compare`, `is_less` and `is_greater`.

impl Default for Double {
  /// The all-zero encoding, i.e. `+0.0`.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
