use criterion::{black_box, BenchmarkId, Criterion, criterion_group};

use relp_bigint::{UBI, UnsignedBigInteger};

/// A value of `words` words with all bits set.
fn all_ones(words: usize) -> UnsignedBigInteger {
    UBI!(1).shift_left(32 * words).minus(&UBI!(1))
}

pub fn multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for &words in &[1, 8, 32, 128] {
        let value = all_ones(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &value, |b, value| b.iter(|| {
            black_box(value).multiplied_by(black_box(value))
        }));
    }
    group.finish();
}

pub fn divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");
    for &words in &[2, 8, 32, 128] {
        let dividend = all_ones(2 * words);
        let divisor = all_ones(words).minus(&UBI!(12345));
        group.bench_with_input(BenchmarkId::from_parameter(words), &(dividend, divisor), |b, (dividend, divisor)| b.iter(|| {
            black_box(dividend).divided_by(black_box(divisor))
        }));
    }
    group.finish();
}

pub fn add(c: &mut Criterion) {
    let left = all_ones(64);
    let right = UBI!(1);
    c.bench_function("add with carry through 64 words", |b| b.iter(|| {
        black_box(&left).plus(black_box(&right))
    }));
}

criterion_group!(arithmetic,
    add,
    multiply,
    divide,
);
