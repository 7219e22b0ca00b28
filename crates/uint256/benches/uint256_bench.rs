//! 256-bit arithmetic benchmarks, with `num-bigint` as a baseline.
//!
//! Run with: cargo bench -p uint256

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigUint, RandomBits};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uint256::U256;

const SAMPLES: usize = 256;

/// Operand pairs with a 256-bit dividend and a divisor of `bits` bits.
fn samples(bits: u64) -> Vec<(U256, U256)> {
    let mut prng = ChaCha20Rng::seed_from_u64(bits);
    (0..SAMPLES)
        .map(|_| {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let b: BigUint = prng.sample(RandomBits::new(bits));
            let a = U256::from_big_uint_wrapping(&a).value;
            let b = U256::from_big_uint_wrapping(&b).value | U256::ONE;
            (a, b)
        })
        .collect()
}

fn to_big(samples: &[(U256, U256)]) -> Vec<(BigUint, BigUint)> {
    samples
        .iter()
        .map(|(a, b)| (BigUint::from(a), BigUint::from(b)))
        .collect()
}

// ---------------------------------------------------------------------------
// Add / Mul
// ---------------------------------------------------------------------------

fn bench_add_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_mul");
    let input = samples(256);
    let big = to_big(&input);

    group.bench_function("uint256/add", |b| {
        b.iter(|| {
            for &(x, y) in &input {
                black_box(x.wrapping_add(y));
            }
        });
    });
    group.bench_function("uint256/mul", |b| {
        b.iter(|| {
            for &(x, y) in &input {
                black_box(x.wrapping_mul(y));
            }
        });
    });
    group.bench_function("uint256/square", |b| {
        b.iter(|| {
            for &(x, _) in &input {
                black_box(x.square());
            }
        });
    });
    group.bench_function("num-bigint/mul", |b| {
        b.iter(|| {
            for (x, y) in &big {
                black_box(x * y);
            }
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Div / Mod by divisor width
// ---------------------------------------------------------------------------

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for bits in [64u64, 128, 192, 256] {
        let input = samples(bits);
        let big = to_big(&input);

        group.bench_with_input(BenchmarkId::new("uint256/div", bits), &bits, |b, _| {
            b.iter(|| {
                for &(x, y) in &input {
                    black_box(x.wrapping_div(y));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("uint256/mod", bits), &bits, |b, _| {
            b.iter(|| {
                for &(x, y) in &input {
                    black_box(x.wrapping_rem(y));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("num-bigint/div", bits), &bits, |b, _| {
            b.iter(|| {
                for (x, y) in &big {
                    black_box(x / y);
                }
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// AddMod / MulMod / Exp
// ---------------------------------------------------------------------------

fn bench_modular(c: &mut Criterion) {
    let mut group = c.benchmark_group("modular");

    for bits in [64u64, 128, 192, 256] {
        let input = samples(bits);
        let big = to_big(&input);

        group.bench_with_input(BenchmarkId::new("uint256/add_mod", bits), &bits, |b, _| {
            b.iter(|| {
                for &(x, m) in &input {
                    black_box(x.add_mod(x, m));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("uint256/mul_mod", bits), &bits, |b, _| {
            b.iter(|| {
                for &(x, m) in &input {
                    black_box(x.mul_mod(x, m));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("num-bigint/mul_mod", bits), &bits, |b, _| {
            b.iter(|| {
                for (x, m) in &big {
                    black_box((x * x) % m);
                }
            });
        });
    }

    let input = samples(256);
    group.bench_function("uint256/exp", |b| {
        b.iter(|| {
            for &(x, e) in input.iter().take(16) {
                black_box(x.wrapping_pow(e));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add_mul, bench_div, bench_modular);
criterion_main!(benches);
