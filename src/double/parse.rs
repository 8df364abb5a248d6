use super::*;

/// The error type returned when parsing a [`Double`] from a string fails.
#[derive(Debug, Clone)]
#[derive(PartialEq, Eq)]
pub struct ParseDoubleError(core::num::ParseFloatError);

impl core::fmt::Display for ParseDoubleError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "invalid double literal: {}", self.0)
  }
}

impl core::error::Error for ParseDoubleError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    Some(&self.0)
  }
}

impl core::str::FromStr for Double {
  type Err = ParseDoubleError;

  /// Parse a decimal number (same syntax as for [`f64`], including `inf` and `NaN`), rounding to
  /// the nearest double.
  ///
  /// `core`'s decimal-to-float conversion works on integers (with big integer arithmetic for hard
  /// cases), so this is exact and needs no FPU either.
  ///
  /// ```
  /// # use soft_double::Double;
  /// let x: Double = "-1.5e3".parse().unwrap();
  /// assert_eq!(x.to_f64(), -1500.0);
  /// assert!("1.5.3".parse::<Double>().is_err());
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<f64>().map(Self::from_f64).map_err(ParseDoubleError)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid() {
    assert_eq!("0".parse::<Double>().map(Double::to_bits), Ok(0));
    assert_eq!("-0".parse::<Double>().map(Double::to_bits), Ok(Double::NEG_ZERO.to_bits()));
    assert_eq!("0.1".parse::<Double>().map(Double::to_f64), Ok(0.1));
    assert_eq!("1e308".parse::<Double>().map(Double::to_f64), Ok(1e308));
    assert_eq!("inf".parse::<Double>().map(Double::to_bits), Ok(Double::INFINITY.to_bits()));
    assert!("NaN".parse::<Double>().is_ok_and(Double::is_nan));
  }

  #[test]
  fn invalid() {
    assert!("".parse::<Double>().is_err());
    assert!("one".parse::<Double>().is_err());
    assert!("1,5".parse::<Double>().is_err());
  }

  #[test]
  fn error_display() {
    let error = "x".parse::<Double>().unwrap_err();
    assert_eq!(format!("{error}"), "invalid double literal: invalid float literal");
  }

  #[test]
  fn roundtrip_formatted() {
    let x = Double::from_f64(2.0 / 7.0);
    let y: Double = x.to_formatted().parse().unwrap();
    assert!((y.to_f64() - x.to_f64()).abs() < 1e-15);
  }
}
