use super::*;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<Double> for Double {
      type Output = Double;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl $trait<&Double> for Double {
      type Output = Double;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Double> for &Double {
      type Output = Double;

      #[inline]
      fn $name(self, rhs: Double) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Double> for &Double {
      type Output = Double;

      #[inline]
      fn $name(self, rhs: &Double) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Double> for Double {
      #[inline]
      fn $name_assign(&mut self, rhs: Double) { *self = self.$name(rhs) }
    }

    impl $trait_assign<&Double> for Double {
      #[inline]
      fn $name_assign(&mut self, rhs: &Double) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of doubles.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Double;
    use crate::double::rational;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Double::ONE;
      let mut b = Double::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly, and is bit-for-bit the same as
    /// what the FPU computes (except for NaN payloads).
    fn is_correct_rounded(a: Double, b: Double) -> bool {
      let double = a $op b;
      let native = a.to_f64() $op b.to_f64();
      if native.is_nan() {
        return double.is_nan()
      }
      if double.to_bits() != native.to_bits() {
        return false
      }
      match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(_), Ok(b)) if stringify!($op) == "/" && b == Rational::from(0) => double.is_infinite(),
        (Ok(a), Ok(b)) => rational::is_correct_rounded(a $op b, double),
        _ => true,
      }
    }

    #[test]
    fn special() {
      for a in Double::cases_special() {
        for b in Double::cases_special() {
          assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
        }
      }
    }

    #[test]
    fn nan_propagates() {
      // The first NaN operand comes out quietened, sign and payload intact.
      let payload = Double::from_bits(0xfff0_0000_0000_0bad);
      for x in Double::cases_special() {
        assert_eq!((Double::NAN $op x).to_bits(), Double::NAN.to_bits(), "{:?}", x);
        assert_eq!((payload $op x).to_bits(), payload.quiet().to_bits(), "{:?}", x);
        let expected = if x.is_nan() { x.quiet() } else { payload.quiet() };
        assert_eq!((x $op payload).to_bits(), expected.to_bits(), "{:?}", x);
      }
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
      #[test]
      fn any_operands(a in Double::cases_proptest(), b in Double::cases_proptest()) {
        assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
      }

      #[test]
      fn neighbours(a in Double::cases_proptest(), offset in -4_i64 ..= 4) {
        // Operands that are a few ulps apart, for cancellation and ties.
        let b = Double::from_bits(a.to_bits().wrapping_add_signed(offset));
        assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b);
        assert!(is_correct_rounded(a, -b), "{:?} ⋅ {:?}", a, -b)
      }
    }
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
