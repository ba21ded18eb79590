use criterion::criterion_main;

mod arithmetic;
mod conversion;

criterion_main!(arithmetic::arithmetic, conversion::conversion);
