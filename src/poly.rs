//! Evaluation of polynomials, such as calibration curves, with either backend.

use crate::Real;

/// A polynomial of degree `N - 1` with coefficients of type `T`, stored lowest order first:
/// `coeffs[0] + coeffs[1]·x + coeffs[2]·x² + …`.
///
/// ```
/// use soft_double::{Double, Polynomial};
///
/// // 1 + 2x + 3x²
/// let p = Polynomial::<Double, 3>::from_f64([1., 2., 3.]);
/// assert_eq!(p.eval(Double::from(2)).to_f64(), 17.);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Polynomial<T, const N: usize> {
  coeffs: [T; N],
}

impl<T: Real, const N: usize> Polynomial<T, N> {
  /// Construct a polynomial from its coefficients, lowest order first.
  pub const fn new(coeffs: [T; N]) -> Self {
    Self { coeffs }
  }

  /// Construct a polynomial from native coefficients, lowest order first.
  pub fn from_f64(coeffs: [f64; N]) -> Self {
    Self { coeffs: coeffs.map(T::from_f64) }
  }

  /// The coefficients, lowest order first.
  pub fn coefficients(&self) -> &[T; N] {
    &self.coeffs
  }

  /// Evaluate the polynomial at `x`, with Horner's scheme: `c₀ + x·(c₁ + x·(c₂ + …))`.
  ///
  /// The empty polynomial (`N == 0`) is 0 everywhere. A NaN or infinite result is not an error,
  /// but with the `tracing` feature it is reported as a warning.
  pub fn eval(&self, x: T) -> T {
    let mut coeffs = self.coeffs.iter().rev();
    let Some(&highest) = coeffs.next() else { return T::default() };
    let result = coeffs.fold(highest, |acc, &c| acc * x + c);
    #[cfg(feature = "tracing")]
    if result.is_nan_or_inf() {
      tracing::warn!(x = x.to_f64(), result = result.to_f64(), "polynomial evaluated to a non-finite value");
    }
    result
  }
}
