//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::double::{Double, Unpacked};

impl Double {
  pub fn bench_decode_regular(self) -> Unpacked {
    self.decode_regular()
  }

  pub fn bench_add_kernel(a: Unpacked, b: Unpacked) -> (Unpacked, u64) {
    Self::add_kernel(a, b)
  }

  pub fn bench_mul_kernel(a: Unpacked, b: Unpacked) -> (Unpacked, u64) {
    Self::mul_kernel(a, b)
  }

  pub fn bench_div_kernel(a: Unpacked, b: Unpacked) -> (Unpacked, u64) {
    Self::div_kernel(a, b)
  }

  pub fn bench_sqrt_kernel(a: Unpacked) -> (Unpacked, u64) {
    Self::sqrt_kernel(a)
  }
}

impl Unpacked {
  pub fn bench_encode_round(self, sticky: u64) -> Double {
    self.encode_round(sticky)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn double_decode(arg: Double) -> Unpacked {
  arg.decode_regular()
}

#[unsafe(no_mangle)]
pub fn double_encode(arg: Unpacked, sticky: u64) -> Double {
  arg.encode_round(sticky)
}

//

#[unsafe(no_mangle)]
pub fn double_add_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
  Double::add_kernel(x, y)
}

#[unsafe(no_mangle)]
pub fn double_add(x: Double, y: Double) -> Double {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn double_sub(x: Double, y: Double) -> Double {
  x.sub(y)
}

//

#[unsafe(no_mangle)]
pub fn double_mul_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
  Double::mul_kernel(x, y)
}

#[unsafe(no_mangle)]
pub fn double_mul(x: Double, y: Double) -> Double {
  x.mul(y)
}

//

#[unsafe(no_mangle)]
pub fn double_div_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, u64) {
  Double::div_kernel(x, y)
}

#[unsafe(no_mangle)]
pub fn double_div(x: Double, y: Double) -> Double {
  x.div(y)
}

//

#[unsafe(no_mangle)]
pub fn double_sqrt(x: Double) -> Double {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn double_log10(x: Double) -> Double {
  x.log10()
}

#[unsafe(no_mangle)]
pub fn double_compare(x: Double, y: Double) -> crate::Compare {
  x.compare(y)
}

//

#[unsafe(no_mangle)]
pub fn round_f32_from_double(num: Double) -> f32 {
  crate::RoundInto::round_into(num)
}

#[unsafe(no_mangle)]
pub fn double_from_i64(num: i64) -> Double {
  crate::RoundFrom::round_from(num)
}
