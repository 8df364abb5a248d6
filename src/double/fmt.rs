use super::*;

use arrayvec::ArrayString;
use core::fmt::{Debug, Display, LowerExp, Write};

impl Debug for Double {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let sign = self.0 >> (Self::BITS - 1);
    let exponent = self.exponent_field();
    let mantissa = self.0 & Self::MANTISSA_MASK;
    f.debug_tuple("Double")
      .field(&format_args!("0b{sign:b}_{exponent:011b}_{mantissa:052b}"))
      .finish()
  }
}

impl Debug for Unpacked {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let frac_hidden = self.frac >> Self::FRAC_WIDTH;
    let frac_explicit = self.frac & (Self::HIDDEN_BIT - 1);
    f.debug_struct("Unpacked")
      .field("sign", &if self.sign { '-' } else { '+' })
      .field("frac", &format_args!("0b{frac_hidden:02b}_{frac_explicit:062b}"))
      .field("exp", &format_args!("{:+}", self.exp))
      .finish()
  }
}

/// Shortest decimal representation that parses back to the same value, as for [`f64`].
impl Display for Double {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.to_f64(), f)
  }
}

impl LowerExp for Double {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    LowerExp::fmt(&self.to_f64(), f)
  }
}

const FORMATTED_CAPACITY: usize = 64;

/// The text of a [`Double`], as produced by [`Double::format`]. This is a fixed-capacity string
/// that lives on the stack, so no allocator is needed.
///
/// Dereferences to [`str`].
#[derive(Clone, Default)]
#[derive(PartialEq, Eq)]
pub struct Formatted(ArrayString<FORMATTED_CAPACITY>);

impl Formatted {
  /// The maximum length of a `Formatted`; bigger `max_chars` passed to [`Double::format`] are
  /// clamped to this.
  pub const CAPACITY: usize = FORMATTED_CAPACITY;

  /// The formatted text.
  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  fn of_str(text: &str) -> Self {
    let mut formatted = Self::default();
    formatted.0.push_str(text);
    formatted
  }
}

impl core::ops::Deref for Formatted {
  type Target = str;

  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<str> for Formatted {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl Display for Formatted {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Debug for Formatted {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(self.as_str(), f)
  }
}

impl PartialEq<str> for Formatted {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for Formatted {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

/// The significant decimal digits of a double, rounded to some number of digits, with trailing
/// zeros removed: the value is `0.d₁d₂d₃… × 10^(exp10 + 1)`, i.e. `d₁.d₂d₃… × 10^exp10`.
struct Decimal {
  digits: ArrayString<24>,
  exp10: i32,
}

impl Decimal {
  /// Round `|value|` to `digits` (between 1 and 17) significant digits.
  ///
  /// The digits are generated by `core`'s float formatting, which works on the integer mantissa
  /// and exponent (using big integer arithmetic where needed), so it is exact and needs no FPU.
  fn of(value: Double, digits: usize) -> Self {
    let mut text = ArrayString::<32>::new();
    // `1.7976931348623157e308` is about the longest output, with 17 digits; it always fits.
    let _ = write!(text, "{:.*e}", digits - 1, value.abs().to_f64());
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));

    let mut digits = ArrayString::new();
    for c in mantissa.chars().filter(char::is_ascii_digit) {
      digits.push(c);
    }
    while digits.len() > 1 && digits.ends_with('0') {
      digits.pop();
    }
    Self { digits, exp10: exponent.parse().unwrap_or(0) }
  }

  /// Length of the fixed notation, without sign: `123.45`, `0.00012`, `1200`.
  fn fixed_len(&self) -> usize {
    let n = self.digits.len();
    if self.exp10 >= 0 {
      let int_digits = self.exp10 as usize + 1;
      if n > int_digits { n + 1 } else { int_digits }
    } else {
      // "0." + leading zeros + digits
      2 + (-self.exp10 - 1) as usize + n
    }
  }

  /// Length of the scientific notation, without sign: `1.2345e-7`, `2e300`.
  fn scientific_len(&self) -> usize {
    let n = self.digits.len();
    let mantissa = if n > 1 { n + 1 } else { 1 };
    let exp10 = self.exp10.unsigned_abs();
    let exponent_digits = if exp10 >= 100 { 3 } else if exp10 >= 10 { 2 } else { 1 };
    mantissa + 1 + usize::from(self.exp10 < 0) + exponent_digits
  }

  fn write_fixed(&self, out: &mut ArrayString<FORMATTED_CAPACITY>) {
    let digits = self.digits.as_str();
    if self.exp10 >= 0 {
      let int_digits = self.exp10 as usize + 1;
      if digits.len() > int_digits {
        out.push_str(&digits[.. int_digits]);
        out.push('.');
        out.push_str(&digits[int_digits ..]);
      } else {
        out.push_str(digits);
        for _ in digits.len() .. int_digits {
          out.push('0');
        }
      }
    } else {
      out.push_str("0.");
      for _ in 0 .. -self.exp10 - 1 {
        out.push('0');
      }
      out.push_str(digits);
    }
  }

  fn write_scientific(&self, out: &mut ArrayString<FORMATTED_CAPACITY>) {
    let (first, rest) = self.digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
      out.push('.');
      out.push_str(rest);
    }
    let _ = write!(out, "e{}", self.exp10);
  }
}

impl Double {
  /// Default `max_chars` for [`Double::to_formatted`].
  pub const DEFAULT_MAX_CHARS: usize = 17;

  /// Default `max_digits` for [`Double::to_formatted`].
  pub const DEFAULT_MAX_DIGITS: usize = 15;

  /// Convert `self` to text of at most `max_chars` characters (sign included), with at most
  /// `max_digits` significant digits.
  ///
  ///   - NaN is `NaN`, infinities are `INF` and `-INF`.
  ///   - `max_digits` is clamped to `1 ..= 17` and `max_chars` to [`Formatted::CAPACITY`].
  ///   - The value is rounded to `max_digits` significant digits, and trailing zeros after the
  ///     decimal point are dropped.
  ///   - Fixed notation (`-123.45`, `0.00012`) is used if it fits in `max_chars`, otherwise
  ///     scientific notation (`1.5e-7`). If neither fits, the number of digits is reduced until
  ///     one does. If not even one digit fits, the one-digit scientific form is returned anyway,
  ///     even if longer than `max_chars`.
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(-2.5).format(17, 15), "-2.5");
  /// assert_eq!(Double::from(1e20).format(17, 15), "1e20");
  /// assert_eq!(Double::from(1.0 / 3.0).format(8, 15), "0.333333");
  /// assert_eq!(Double::from(1234.5678).format(17, 3), "1230");
  /// ```
  pub fn format(self, max_chars: usize, max_digits: usize) -> Formatted {
    if self.is_nan() {
      return Formatted::of_str("NaN")
    }
    if self.is_infinite() {
      return Formatted::of_str(if self.is_sign_negative() { "-INF" } else { "INF" })
    }

    let max_chars = max_chars.min(Formatted::CAPACITY);
    let max_digits = max_digits.clamp(1, 17);
    let sign_len = usize::from(self.is_sign_negative());

    let mut out = ArrayString::new();
    if self.is_sign_negative() {
      out.push('-');
    }
    for digits in (1 ..= max_digits).rev() {
      let decimal = Decimal::of(self, digits);
      if sign_len + decimal.fixed_len() <= max_chars {
        decimal.write_fixed(&mut out);
        return Formatted(out)
      }
      if sign_len + decimal.scientific_len() <= max_chars || digits == 1 {
        decimal.write_scientific(&mut out);
        return Formatted(out)
      }
    }
    Formatted(out)
  }

  /// Convert `self` to text with the default parameters, i.e. at most
  /// [`DEFAULT_MAX_CHARS`](Self::DEFAULT_MAX_CHARS) characters and
  /// [`DEFAULT_MAX_DIGITS`](Self::DEFAULT_MAX_DIGITS) significant digits. See [`Double::format`].
  ///
  /// ```
  /// # use soft_double::Double;
  /// assert_eq!(Double::from(3.14159).to_formatted(), "3.14159");
  /// ```
  pub fn to_formatted(self) -> Formatted {
    self.format(Self::DEFAULT_MAX_CHARS, Self::DEFAULT_MAX_DIGITS)
  }
}
