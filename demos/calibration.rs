//! Convert light intensity readings of a beer colour meter to EBC colour units, with the software
//! double and with the native `f64`, and check that both agree bit for bit.
//!
//! The absorbance of a sample is `log₁₀(reference / sample)`, where `reference` is the intensity
//! measured through clear water. A quadratic calibration polynomial, fitted to reference beers of
//! known colour, maps absorbance to EBC / 25.
//!
//! Run with `cargo run --example calibration -F tracing`; set `RUST_LOG=debug` for more detail.

use soft_double::{Double, Polynomial, Real, t_double};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Calibration coefficients, lowest order first.
const EBC_COEFFS: [f64; 3] = [7.2563e-01, -2.0034e+00, 2.1415e+00];

/// The polynomial gives EBC in units of 25.
const EBC_SCALE: f64 = 25.;

/// Pairs of (reference, sample) intensities, in raw sensor counts. The last one is a broken
/// reading, with the light path fully blocked.
const READINGS: [(f64, f64); 5] = [
  (51234., 31520.),
  (51234., 2630.),
  (50980., 1235.),
  (50980., 50980.),
  (51002., 0.),
];

fn ebc<T: Real>(reference: T, sample: T) -> T {
  let polynomial = Polynomial::<T, 3>::from_f64(EBC_COEFFS);
  let absorbance = (reference / sample).log10();
  debug!(absorbance = absorbance.to_f64(), "computed absorbance");
  T::from_f64(EBC_SCALE) * polynomial.eval(absorbance)
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  for (reference, sample) in READINGS {
    let soft = ebc(<t_double as Real>::from_f64(reference), <t_double as Real>::from_f64(sample));
    let hard = ebc(reference, sample);

    if soft.is_nan_or_inf() {
      warn!(reference, sample, "reading out of range");
      continue
    }
    if soft.to_f64().to_bits() != hard.to_bits() {
      warn!(soft = soft.to_f64(), hard, "software and hardware results differ");
    }
    info!(reference, sample, ebc = %Double::from(soft.to_f64()).to_formatted(), "sample colour");
  }
}
