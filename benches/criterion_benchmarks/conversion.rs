use criterion::{black_box, Criterion, criterion_group};

use relp_bigint::{SignedBigInteger, UBI};

pub fn to_decimal(c: &mut Criterion) {
    let value = UBI!(3).shift_left(2000).minus(&UBI!(1));
    c.bench_function("write a 2000 bit value in base 10", |b| b.iter(|| {
        black_box(&value).to_base(10)
    }));
}

pub fn from_decimal(c: &mut Criterion) {
    let text = "9".repeat(600);
    c.bench_function("read a 600 digit decimal value", |b| b.iter(|| {
        SignedBigInteger::from_base(10, black_box(&text))
    }));
}

pub fn bytes(c: &mut Criterion) {
    let value = UBI!(7).shift_left(4000);
    c.bench_function("export and import 4000 bits", |b| b.iter(|| {
        let bytes = black_box(&value).export_data(true);
        relp_bigint::UnsignedBigInteger::import_data(&bytes)
    }));
}

criterion_group!(conversion,
    to_decimal,
    from_decimal,
    bytes,
);
