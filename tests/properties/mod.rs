//! # Properties
//!
//! Random operands, compared against `num::BigInt` where there is something to compare against.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use num::{BigInt, BigUint, Integer, One};
use proptest::prelude::*;

use relp_bigint::{SignedBigInteger, UnsignedBigInteger};

/// Words of up to five words, with a bias toward zero and all-ones words to hit the carry paths.
fn words() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        prop_oneof![Just(0_u32), Just(u32::MAX), any::<u32>()],
        0..6,
    )
}

fn unsigned() -> impl Strategy<Value = UnsignedBigInteger> {
    words().prop_map(|words| UnsignedBigInteger::from_words(&words))
}

fn signed() -> impl Strategy<Value = SignedBigInteger> {
    (unsigned(), any::<bool>()).prop_map(|(magnitude, negative)| SignedBigInteger::new(magnitude, negative))
}

fn oracle(value: &SignedBigInteger) -> BigInt {
    assert!(!value.is_invalid());
    let magnitude = BigInt::from(BigUint::from_slice(value.words()));
    if value.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn plus_is_commutative(a in signed(), b in signed()) {
        prop_assert_eq!(a.plus(&b), b.plus(&a));
        prop_assert_eq!(oracle(&a.plus(&b)), oracle(&a) + oracle(&b));
    }

    #[test]
    fn plus_is_associative(a in signed(), b in signed(), c in signed()) {
        prop_assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
    }

    #[test]
    fn additive_inverse(a in signed()) {
        let zero = a.plus(&a.negated_value());
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
    }

    #[test]
    fn minus_matches(a in signed(), b in signed()) {
        prop_assert_eq!(oracle(&a.minus(&b)), oracle(&a) - oracle(&b));
    }

    #[test]
    fn unsigned_minus(a in unsigned(), b in unsigned()) {
        let difference = a.minus(&b);
        prop_assert_eq!(difference.is_invalid(), a < b);
        if !difference.is_invalid() {
            prop_assert_eq!(difference.plus(&b), a);
        }
    }

    #[test]
    fn multiplied_by_matches(a in signed(), b in signed()) {
        let product = a.multiplied_by(&b);
        prop_assert_eq!(oracle(&product), oracle(&a) * oracle(&b));
        prop_assert!(product.trimmed_length() <= a.trimmed_length() + b.trimmed_length());
    }

    #[test]
    fn division_identity(a in signed(), b in signed()) {
        prop_assume!(!b.is_zero());
        let (quotient, remainder) = a.divided_by(&b).into_parts();
        prop_assert_eq!(quotient.multiplied_by(&b).plus(&remainder), a.clone());
        prop_assert!(remainder.unsigned_value() < b.unsigned_value());
        prop_assert_eq!(oracle(&quotient), oracle(&a) / oracle(&b));
        prop_assert_eq!(oracle(&remainder), oracle(&a) % oracle(&b));
    }

    #[test]
    fn division_by_zero(a in signed()) {
        let result = a.divided_by(&SignedBigInteger::default());
        prop_assert!(result.quotient().is_invalid());
        prop_assert!(result.remainder().is_invalid());
    }

    #[test]
    fn bitwise_matches_twos_complement(a in signed(), b in signed()) {
        prop_assert_eq!(oracle(&a.bitwise_and(&b)), oracle(&a) & oracle(&b));
        prop_assert_eq!(oracle(&a.bitwise_or(&b)), oracle(&a) | oracle(&b));
        prop_assert_eq!(oracle(&a.bitwise_xor(&b)), oracle(&a) ^ oracle(&b));
        prop_assert_eq!(oracle(&a.bitwise_not()), -oracle(&a) - BigInt::one());
    }

    #[test]
    fn shifts_match(a in signed(), bits in 0_usize..200) {
        let power = BigInt::one() << bits;
        prop_assert_eq!(oracle(&a.shift_left(bits)), oracle(&a) * &power);
        prop_assert_eq!(oracle(&a.shift_right(bits)), oracle(&a).div_floor(&power));
    }

    #[test]
    fn base_round_trip(a in signed(), radix in 2_u32..=36) {
        let text = a.to_base(radix);
        prop_assert_eq!(&text, &oracle(&a).to_str_radix(radix));
        prop_assert_eq!(SignedBigInteger::from_base(radix, &text), a.clone());
        prop_assert_eq!(SignedBigInteger::from_base(radix, &text.to_uppercase()), a);
    }

    #[test]
    fn byte_round_trip(a in signed(), remove_leading_zeros in any::<bool>()) {
        let bytes = a.export_data(remove_leading_zeros);
        prop_assert_eq!(SignedBigInteger::import_data(&bytes), a.clone());
        let magnitude = a.unsigned_value();
        prop_assert_eq!(UnsignedBigInteger::import_data(&magnitude.export_data(remove_leading_zeros)), magnitude.clone());
    }

    #[test]
    fn ordering_matches(a in signed(), b in signed()) {
        prop_assert_eq!(a.cmp(&b), oracle(&a).cmp(&oracle(&b)));
    }

    #[test]
    fn padding_is_invisible(words in words(), padding in 0_usize..4) {
        let mut padded = words.clone();
        padded.extend(std::iter::repeat(0).take(padding));
        let a = UnsignedBigInteger::from_words(&words);
        let b = UnsignedBigInteger::from_words(&padded);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash(), b.hash());
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.export_data(false), b.export_data(false));
        prop_assert_eq!(a.bit_length(), b.bit_length());
    }

    #[test]
    fn invalid_poisons(a in signed()) {
        let invalid = SignedBigInteger::create_invalid();
        prop_assert!(invalid.plus(&a).is_invalid());
        prop_assert!(a.minus(&invalid).is_invalid());
        prop_assert!(a.multiplied_by(&invalid).is_invalid());
        prop_assert!(invalid.divided_by(&a).quotient().is_invalid());
        prop_assert!(a.bitwise_or(&invalid).is_invalid());
        prop_assert!(invalid < a);
    }

    #[test]
    fn compare_to_double_matches(value in any::<i64>(), fraction in prop_oneof![Just(0_f64), Just(0.5), Just(-0.25)]) {
        // Small enough for the sum to be exact, four times the sum is an integer
        let value = value >> 12;
        let double = value as f64 + fraction;
        let expected = (4 * value).cmp(&((4_f64 * double) as i64));
        prop_assert_eq!(SignedBigInteger::create_from(value).partial_cmp(&double), Some(expected));
    }
}
