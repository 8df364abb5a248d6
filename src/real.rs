//! The [`Real`] trait, for code that should run on both the software [`Double`] and the native
//! [`f64`].

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Compare, Double};

/// The operations available on a double precision number, whether it is implemented in software
/// ([`Double`]) or by the hardware ([`f64`]).
///
/// Write numeric code generic over `T: Real`, and pick the backend at the call site (or through
/// the [`t_double`](crate::t_double) alias).
///
/// ```
/// use soft_double::{Double, Real};
///
/// fn hypot<T: Real>(a: T, b: T) -> T {
///   (a * a + b * b).sqrt()
/// }
///
/// assert_eq!(hypot(Double::from(3), Double::from(4)).to_f64(), 5.0);
/// assert_eq!(hypot(3.0_f64, 4.0), 5.0);
/// ```
pub trait Real:
  Copy + Default + Debug
  + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
  + Neg<Output = Self>
  + AddAssign + SubAssign + MulAssign + DivAssign
{
  /// Convert from a native `f64` (exactly).
  fn from_f64(value: f64) -> Self;

  /// Convert to a native `f64` (exactly).
  fn to_f64(self) -> f64;

  /// Compare `self` with `other`; see [`Double::compare`].
  fn compare(self, other: Self) -> Compare;

  /// Returns `true` if `self < other`. False if either is NaN.
  fn is_less(self, other: Self) -> bool {
    self.compare(other) == Compare::Less
  }

  /// Returns `true` if `self > other`. False if either is NaN.
  fn is_greater(self, other: Self) -> bool {
    self.compare(other) == Compare::Greater
  }

  /// Decimal logarithm.
  fn log10(self) -> Self;

  /// Square root.
  fn sqrt(self) -> Self;

  /// Returns `true` if `self` is NaN or infinite.
  fn is_nan_or_inf(self) -> bool;
}

impl Real for Double {
  #[inline]
  fn from_f64(value: f64) -> Self { Double::from_f64(value) }

  #[inline]
  fn to_f64(self) -> f64 { Double::to_f64(self) }

  #[inline]
  fn compare(self, other: Self) -> Compare { Double::compare(self, other) }

  #[inline]
  fn is_less(self, other: Self) -> bool { Double::is_less(self, other) }

  #[inline]
  fn is_greater(self, other: Self) -> bool { Double::is_greater(self, other) }

  #[inline]
  fn log10(self) -> Self { Double::log10(self) }

  #[inline]
  fn sqrt(self) -> Self { Double::sqrt(self) }

  #[inline]
  fn is_nan_or_inf(self) -> bool { Double::is_nan_or_inf(self) }
}

impl Real for f64 {
  #[inline]
  fn from_f64(value: f64) -> Self { value }

  #[inline]
  fn to_f64(self) -> f64 { self }

  fn compare(self, other: Self) -> Compare {
    use core::cmp::Ordering;
    match self.partial_cmp(&other) {
      None => Compare::Unordered,
      Some(Ordering::Equal) => Compare::Equal,
      Some(Ordering::Less) => Compare::Less,
      Some(Ordering::Greater) => Compare::Greater,
    }
  }

  #[inline]
  fn log10(self) -> Self { libm::log10(self) }

  #[inline]
  fn sqrt(self) -> Self { libm::sqrt(self) }

  #[inline]
  fn is_nan_or_inf(self) -> bool { !self.is_finite() }
}
