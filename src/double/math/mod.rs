use super::*;

/// Square root.
mod sqrt;

/// Decimal logarithm.
mod log10;

/// Returns the decimal logarithm of `x`; same as [`Double::log10`].
///
/// ```
/// # use soft_double::{Double, log10};
/// assert_eq!(log10(Double::from(1000)).to_f64(), 3.0);
/// ```
#[inline]
pub fn log10(x: Double) -> Double {
  x.log10()
}

/// Returns `true` if `x` is NaN *or* infinite; same as [`Double::is_nan_or_inf`].
///
/// ```
/// # use soft_double::{Double, is_nan_or_inf};
/// assert!(is_nan_or_inf(Double::ONE / Double::ZERO));
/// assert!(!is_nan_or_inf(Double::ONE));
/// ```
#[inline]
pub fn is_nan_or_inf(x: Double) -> bool {
  x.is_nan_or_inf()
}
