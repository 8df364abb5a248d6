use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use soft_double::Double;

// Establish a baseline by comparing with the same operation on the fpu

fn baseline_fpu(c: &mut Criterion) {
  let mut g = c.benchmark_group("baseline_fpu");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| black_box(3.14_f64) + black_box(69.420)));
  g.bench_function("mul", |b| b.iter(|| black_box(3.14_f64) * black_box(69.420)));
  g.bench_function("div", |b| b.iter(|| black_box(3.14_f64) / black_box(69.420)));
  g.bench_function("sqrt", |b| b.iter(|| black_box(69.420_f64).sqrt()));
  g.bench_function("log10", |b| b.iter(|| black_box(69.420_f64).log10()));
  g.finish();
}

// Time decoding and encoding 1 double

const NUMS: [Double; 4] = [
  Double::from_bits(0x3ff0_0000_0000_0000),  // 1
  Double::from_bits(0x4009_21f9_f01b_866e),  // 3.14159
  Double::from_bits(0xc1c3_b2f1_08c5_a5a0),  // Large negative
  Double::from_bits(0x0000_0000_0123_4567),  // Subnormal
];

fn decode(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode");
  for num in NUMS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{:#018x}", num.to_bits())), &num, |b, &num| {
      b.iter(|| black_box(num).bench_decode_regular());
    });
  }
  g.finish();
}

fn encode(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode");
  for num in NUMS {
    let dec = num.bench_decode_regular();
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{:#018x}", num.to_bits())), &num, |b, _| {
      b.iter(|| black_box(dec).bench_encode_round(black_box(1)));
    });
  }
  g.finish();
}

// Time the kernels alone, and the full operations including the handling of special values

fn kernels(c: &mut Criterion) {
  let x = NUMS[1].bench_decode_regular();
  let y = NUMS[2].bench_decode_regular();
  let mut g = c.benchmark_group("kernel");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| Double::bench_add_kernel(black_box(x), black_box(y))));
  g.bench_function("mul", |b| b.iter(|| Double::bench_mul_kernel(black_box(x), black_box(y))));
  g.bench_function("div", |b| b.iter(|| Double::bench_div_kernel(black_box(x), black_box(y))));
  g.bench_function("sqrt", |b| b.iter(|| Double::bench_sqrt_kernel(black_box(x))));
  g.finish();
}

fn ops(c: &mut Criterion) {
  let mut g = c.benchmark_group("soft");
  for (x, y) in [(NUMS[0], NUMS[1]), (NUMS[1], NUMS[2]), (NUMS[3], NUMS[1])] {
    let id = format!("{x:e},{y:e}");
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("add", &id), &(x, y), |b, &(x, y)| b.iter(|| black_box(x) + black_box(y)));
    g.bench_with_input(BenchmarkId::new("sub", &id), &(x, y), |b, &(x, y)| b.iter(|| black_box(x) - black_box(y)));
    g.bench_with_input(BenchmarkId::new("mul", &id), &(x, y), |b, &(x, y)| b.iter(|| black_box(x) * black_box(y)));
    g.bench_with_input(BenchmarkId::new("div", &id), &(x, y), |b, &(x, y)| b.iter(|| black_box(x) / black_box(y)));
  }
  for x in NUMS {
    let id = format!("{x:e}");
    g.bench_with_input(BenchmarkId::new("sqrt", &id), &x, |b, &x| b.iter(|| black_box(x).sqrt()));
    g.bench_with_input(BenchmarkId::new("log10", &id), &x, |b, &x| b.iter(|| black_box(x).log10()));
    g.bench_with_input(BenchmarkId::new("to_formatted", &id), &x, |b, &x| b.iter(|| black_box(x).to_formatted()));
  }
  g.finish();
}

criterion_group!(benches, baseline_fpu, decode, encode, kernels, ops);
criterion_main!(benches);
