//! # Scenarios
//!
//! Small hand-checked computations through the public interface.
use relp_bigint::{BI, CompareResult, SignedBigInteger, UBI, UnsignedBigInteger};

#[test]
fn add_with_different_signs() {
    assert_eq!(BI!(-5).plus(&BI!(3)), BI!(-2));
}

#[test]
fn parse_hexadecimal() {
    assert_eq!(SignedBigInteger::from_base(16, "ff"), BI!(255));
}

#[test]
fn divide_with_remainder() {
    let result = BI!(10).divided_by(&BI!(3));
    assert_eq!(result.quotient(), &BI!(3));
    assert_eq!(result.remainder(), &BI!(1));
}

#[test]
fn multiply_with_different_signs() {
    assert_eq!(BI!(7).multiplied_by(&BI!(-6)), BI!(-42));
}

#[test]
fn invalid_is_contagious() {
    assert!(SignedBigInteger::create_invalid().plus(&BI!(1)).is_invalid());
}

#[test]
fn zero() {
    assert_eq!(BI!(0).to_base(10), "0");
    assert!(!BI!(0).is_negative());
}

#[test]
fn factorial() {
    let mut factorial = UBI!(1);
    for i in 1..=30_u32 {
        factorial = factorial.multiplied_by(&UBI!(i));
    }
    assert_eq!(factorial.to_base(10), "265252859812191058636308480000000");

    // Dividing out the factors one by one leaves no remainder
    let mut value = factorial;
    for i in (1..=30_u32).rev() {
        let (quotient, remainder) = value.divided_by(&UBI!(i)).into_parts();
        assert!(remainder.is_zero());
        value = quotient;
    }
    assert_eq!(value, UBI!(1));
}

#[test]
fn large_power_of_two() {
    let value = UBI!(1).shift_left(1000);
    assert_eq!(value.trimmed_length(), 32);
    assert_eq!(value.bit_length(), 1001);
    // Beyond the inline storage
    let larger = value.multiplied_by(&value);
    assert_eq!(larger, UBI!(1).shift_left(2000));
    assert_eq!(larger.divided_by(&value).quotient(), &value);
    assert_eq!(value.to_double(), f64::INFINITY);
    assert_eq!(UBI!(1).shift_left(1000).compare_to_double(2_f64.powi(1000)), Some(CompareResult::DoubleEqualsBigInt));
}

#[test]
fn mersenne_number() {
    // 2^127 - 1
    let value = UBI!(1).shift_left(127).minus(&UBI!(1));
    assert_eq!(value.to_base(10), "170141183460469231731687303715884105727");
    assert_eq!(value.to_base(16), "7fffffffffffffffffffffffffffffff");
    assert_eq!(value, UnsignedBigInteger::from_base(10, "170141183460469231731687303715884105727"));
    assert_eq!(value.export_data(true), vec![0x7f].into_iter().chain(vec![0xff; 15]).collect::<Vec<_>>());
}

#[test]
fn signed_division_table() {
    // dividend, divisor, quotient, remainder
    let table = [
        (7, 2, 3, 1),
        (-7, 2, -3, -1),
        (7, -2, -3, 1),
        (-7, -2, 3, -1),
        (1, 7, 0, 1),
        (-1, 7, 0, -1),
    ];
    for &(dividend, divisor, quotient, remainder) in &table {
        let (q, r) = BI!(dividend).divided_by(&BI!(divisor)).into_parts();
        assert_eq!((q, r), (BI!(quotient), BI!(remainder)), "{} / {}", dividend, divisor);
    }
}

#[test]
fn subtract_to_zero() {
    let value = SignedBigInteger::from_base(10, "-98765432109876543210");
    let zero = value.minus(&value);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.hash(), BI!(0).hash());
}

#[test]
fn malformed_input() {
    assert!(SignedBigInteger::from_base(10, "12 34").is_invalid());
    assert!(SignedBigInteger::from_base(40, "1").is_invalid());
    assert!(SignedBigInteger::import_data(&[7]).is_invalid());
    assert!("".parse::<SignedBigInteger>().is_err());
}

#[test]
fn display() {
    let value = SignedBigInteger::from_base(16, "-DEADBEEFCAFEBABE");
    assert_eq!(value.to_string(), "-16045690984503098046");
    assert_eq!(format!("{:x}", value), "-deadbeefcafebabe");
}
