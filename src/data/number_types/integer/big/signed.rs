//! # Signed integers
//!
//! A sign and a magnitude. All arithmetic is delegated to the magnitude, this module only derives
//! signs. There is no negative zero: every path that can produce a zero magnitude normalizes the
//! sign.
//!
//! Bitwise operators (`bitwise_and`, `bitwise_or`, `bitwise_xor`, `bitwise_not` and
//! `shift_right`) behave as if the value were stored in two's complement with infinite sign
//! extension, like the primitive integers do. `set_bit_inplace` on the other hand works on the
//! magnitude.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::data::number_types::integer::big::{adc, BITS_IN_WORD, CompareResult, Word};
use crate::data::number_types::integer::big::division::{DivisionResult, SignedDivisionResult};
use crate::data::number_types::integer::big::unsigned::UnsignedBigInteger;
use crate::data::number_types::integer::big::words::Words;
use crate::data::number_types::sign::Sign;

/// A big signed integer type.
#[derive(Clone, Debug)]
pub struct SignedBigInteger {
    sign: Sign,
    unsigned: UnsignedBigInteger,
}

impl SignedBigInteger {
    /// Combine a magnitude with a sign.
    ///
    /// A zero magnitude is never negative, `negative` is ignored in that case.
    pub fn new(unsigned: UnsignedBigInteger, negative: bool) -> Self {
        Self::with_sign(unsigned, Sign::from_negative(negative))
    }

    fn with_sign(unsigned: UnsignedBigInteger, sign: Sign) -> Self {
        let mut value = Self { sign, unsigned };
        value.ensure_sign_is_valid();
        value
    }

    /// Create a value from a native integer.
    ///
    /// Works for `i64::MIN`, whose absolute value is not an `i64`.
    pub fn create_from(value: i64) -> Self {
        Self::new(UnsignedBigInteger::create_from(value.unsigned_abs()), value < 0)
    }

    /// The canonical poisoned value.
    pub fn create_invalid() -> Self {
        Self { sign: Sign::Plus, unsigned: UnsignedBigInteger::create_invalid() }
    }

    pub fn invalidate(&mut self) {
        self.unsigned.invalidate();
    }

    pub fn is_invalid(&self) -> bool {
        self.unsigned.is_invalid()
    }

    /// The magnitude.
    pub fn unsigned_value(&self) -> &UnsignedBigInteger {
        &self.unsigned
    }

    /// All stored words of the magnitude, least significant first.
    pub fn words(&self) -> &[Word] {
        self.unsigned.words()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.unsigned.is_zero()
    }

    /// Flip the sign, zero stays as it is.
    pub fn negate(&mut self) {
        if !self.unsigned.is_zero() {
            self.sign = -self.sign;
        }
    }

    pub fn negated_value(&self) -> Self {
        let mut negated = self.clone();
        negated.negate();
        negated
    }

    pub fn abs(&self) -> Self {
        Self::with_sign(self.unsigned.clone(), Sign::Plus)
    }

    /// Set to the (valid) value zero.
    pub fn set_to_zero(&mut self) {
        self.unsigned.set_to_zero();
        self.sign = Sign::Plus;
    }

    /// Take over the value of `other`, including its validity.
    pub fn set_to(&mut self, other: &Self) {
        self.unsigned.set_to(&other.unsigned);
        self.sign = other.sign;
    }

    /// Take over the value of a native integer, sign included. The result is always valid.
    pub fn set_to_primitive(&mut self, value: i64) {
        self.unsigned.set_to(&UnsignedBigInteger::create_from(value.unsigned_abs()));
        self.sign = Sign::from_negative(value < 0);
    }

    /// Stored length in words, plus one for the sign.
    pub fn length(&self) -> usize {
        self.unsigned.length() + 1
    }

    /// Significant length in words, plus one for the sign.
    pub fn trimmed_length(&self) -> usize {
        self.unsigned.trimmed_length() + 1
    }

    /// The lowest 64 bits of the two's complement representation.
    ///
    /// That is, the value modulo `2^64`: `-1` becomes `u64::MAX`. Use `num::ToPrimitive` for
    /// checked conversions.
    pub fn to_u64(&self) -> u64 {
        let magnitude = self.unsigned.to_u64();
        if self.is_negative() {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Closest double, see `UnsignedBigInteger::to_double`.
    pub fn to_double(&self) -> f64 {
        let magnitude = self.unsigned.to_double();
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn plus(&self, other: &Self) -> Self {
        self.add_with_sign(&other.unsigned, other.sign)
    }

    pub fn minus(&self, other: &Self) -> Self {
        self.add_with_sign(&other.unsigned, -other.sign)
    }

    pub fn plus_unsigned(&self, other: &UnsignedBigInteger) -> Self {
        self.add_with_sign(other, Sign::Plus)
    }

    pub fn minus_unsigned(&self, other: &UnsignedBigInteger) -> Self {
        self.add_with_sign(other, Sign::Minus)
    }

    /// Add a magnitude with the given sign.
    ///
    /// Equal signs add the magnitudes. Otherwise the smaller magnitude is subtracted from the
    /// larger one, which also lends its sign to the result.
    fn add_with_sign(&self, other: &UnsignedBigInteger, other_sign: Sign) -> Self {
        if self.is_invalid() || other.is_invalid() {
            return Self::create_invalid();
        }

        if self.sign == other_sign {
            return Self::with_sign(self.unsigned.plus(other), self.sign);
        }

        match self.unsigned.cmp(other) {
            Ordering::Less => Self::with_sign(other.minus(&self.unsigned), other_sign),
            Ordering::Equal | Ordering::Greater => {
                Self::with_sign(self.unsigned.minus(other), self.sign)
            },
        }
    }

    pub fn multiplied_by(&self, other: &Self) -> Self {
        Self::with_sign(self.unsigned.multiplied_by(&other.unsigned), self.sign * other.sign)
    }

    pub fn multiplied_by_unsigned(&self, other: &UnsignedBigInteger) -> Self {
        Self::with_sign(self.unsigned.multiplied_by(other), self.sign)
    }

    /// Truncating division.
    ///
    /// # Return value
    ///
    /// The quotient is rounded toward zero and its sign is the product of the operand signs. The
    /// remainder has the sign of the dividend, so that `quotient * divisor + remainder == self`.
    /// Division by zero gives an invalid quotient and remainder.
    pub fn divided_by(&self, divisor: &Self) -> SignedDivisionResult {
        self.divide_with_sign(&divisor.unsigned, divisor.sign)
    }

    pub fn divided_by_unsigned(&self, divisor: &UnsignedBigInteger) -> SignedDivisionResult {
        self.divide_with_sign(divisor, Sign::Plus)
    }

    fn divide_with_sign(&self, divisor: &UnsignedBigInteger, divisor_sign: Sign) -> SignedDivisionResult {
        let (quotient, remainder) = self.unsigned.divided_by(divisor).into_parts();

        DivisionResult::new(
            Self::with_sign(quotient, self.sign * divisor_sign),
            Self::with_sign(remainder, self.sign),
        )
    }

    pub fn bitwise_and(&self, other: &Self) -> Self {
        self.bitwise(other, |left, right| left & right)
    }

    pub fn bitwise_or(&self, other: &Self) -> Self {
        self.bitwise(other, |left, right| left | right)
    }

    pub fn bitwise_xor(&self, other: &Self) -> Self {
        self.bitwise(other, |left, right| left ^ right)
    }

    /// Two's complement negation of all bits: `!x == -x - 1`.
    pub fn bitwise_not(&self) -> Self {
        self.negated_value().minus_unsigned(&UnsignedBigInteger::create_from(1))
    }

    fn bitwise(&self, other: &Self, operation: impl Fn(Word, Word) -> Word) -> Self {
        if self.is_invalid() || other.is_invalid() {
            return Self::create_invalid();
        }

        // One word more than either magnitude needs, so that the top bit holds the sign
        let len = self.unsigned.trimmed_length().max(other.unsigned.trimmed_length()) + 1;
        let left = self.to_twos_complement(len);
        let right = other.to_twos_complement(len);

        let words = left.iter()
            .zip(right.iter())
            .map(|(&left, &right)| operation(left, right))
            .collect();

        Self::from_twos_complement(words)
    }

    fn to_twos_complement(&self, len: usize) -> Words {
        let mut words = Words::from_slice(self.unsigned.trimmed_words());
        words.resize(len);
        if self.is_negative() {
            negate_words(&mut words);
        }

        words
    }

    fn from_twos_complement(mut words: Words) -> Self {
        let negative = words.as_slice().last()
            .map_or(false, |&top| top >> (BITS_IN_WORD - 1) == 1);
        if negative {
            negate_words(&mut words);
        }

        Self::new(UnsignedBigInteger::from_storage(words), negative)
    }

    /// Multiply by `2^num_bits`.
    pub fn shift_left(&self, num_bits: usize) -> Self {
        Self::with_sign(self.unsigned.shift_left(num_bits), self.sign)
    }

    /// Divide by `2^num_bits`, rounding toward negative infinity.
    pub fn shift_right(&self, num_bits: usize) -> Self {
        if !self.is_negative() {
            return Self::with_sign(self.unsigned.shift_right(num_bits), Sign::Plus);
        }

        // -x >> n == -(((x - 1) >> n) + 1)
        let one = UnsignedBigInteger::create_from(1);
        let magnitude = self.unsigned.minus(&one).shift_right(num_bits).plus(&one);
        Self::with_sign(magnitude, Sign::Minus)
    }

    /// Set bit `bit_index` of the magnitude, keeping the sign.
    pub fn set_bit_inplace(&mut self, bit_index: usize) {
        self.unsigned.set_bit_inplace(bit_index);
    }

    /// Hash of the magnitude, negated for negative values.
    pub fn hash(&self) -> u32 {
        let hash = self.unsigned.hash();
        if self.is_negative() {
            hash.wrapping_neg()
        } else {
            hash
        }
    }

    /// Compare against a double, exactly.
    ///
    /// # Return value
    ///
    /// How the double relates to this value, or `None` when either side is not a number (NaN, or
    /// an invalid integer). Infinities compare beyond every integer and `-0.0` equals zero.
    pub fn compare_to_double(&self, value: f64) -> Option<CompareResult> {
        if self.is_invalid() || value.is_nan() {
            return None;
        }

        let value_is_negative = value < 0_f64;
        if value_is_negative != self.is_negative() {
            return Some(if self.is_negative() {
                CompareResult::DoubleGreaterThanBigInt
            } else {
                CompareResult::DoubleLessThanBigInt
            });
        }

        let magnitudes = self.unsigned.compare_to_double(value.abs())?;
        Some(if value_is_negative { magnitudes.flipped() } else { magnitudes })
    }

    fn ensure_sign_is_valid(&mut self) {
        if self.sign == Sign::Minus && self.unsigned.is_zero() {
            self.sign = Sign::Plus;
        }
    }
}

/// Two's complement negation in place, overflow is dropped.
fn negate_words(words: &mut Words) {
    let mut carry = 1;
    for word in words.as_mut_slice() {
        let (sum, new_carry) = adc(!*word, 0, carry);
        *word = sum;
        carry = new_carry;
    }
}

impl Default for SignedBigInteger {
    fn default() -> Self {
        Self::with_sign(UnsignedBigInteger::new(), Sign::Plus)
    }
}

impl From<UnsignedBigInteger> for SignedBigInteger {
    fn from(unsigned: UnsignedBigInteger) -> Self {
        Self::with_sign(unsigned, Sign::Plus)
    }
}

impl PartialEq for SignedBigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for SignedBigInteger {}

impl PartialOrd for SignedBigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Invalid values are all equal and order below every valid value.
impl Ord for SignedBigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_invalid(), other.is_invalid()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => match (self.sign, other.sign) {
                (Sign::Plus, Sign::Plus) => self.unsigned.cmp(&other.unsigned),
                (Sign::Minus, Sign::Minus) => other.unsigned.cmp(&self.unsigned),
                (left, right) => left.cmp(&right),
            },
        }
    }
}

impl PartialEq<UnsignedBigInteger> for SignedBigInteger {
    fn eq(&self, other: &UnsignedBigInteger) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<UnsignedBigInteger> for SignedBigInteger {
    fn partial_cmp(&self, other: &UnsignedBigInteger) -> Option<Ordering> {
        Some(match (self.is_invalid(), other.is_invalid()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) if self.is_negative() => Ordering::Less,
            (false, false) => self.unsigned.cmp(other),
        })
    }
}

impl PartialEq<SignedBigInteger> for UnsignedBigInteger {
    fn eq(&self, other: &SignedBigInteger) -> bool {
        other == self
    }
}

impl PartialOrd<SignedBigInteger> for UnsignedBigInteger {
    fn partial_cmp(&self, other: &SignedBigInteger) -> Option<Ordering> {
        <SignedBigInteger as PartialOrd<UnsignedBigInteger>>::partial_cmp(other, self).map(Ordering::reverse)
    }
}

impl PartialEq<f64> for SignedBigInteger {
    fn eq(&self, other: &f64) -> bool {
        self.compare_to_double(*other) == Some(CompareResult::DoubleEqualsBigInt)
    }
}

impl PartialOrd<f64> for SignedBigInteger {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.compare_to_double(*other).map(CompareResult::big_int_ordering)
    }
}

impl Hash for SignedBigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if !self.is_invalid() {
            self.sign.hash(state);
        }
        Hash::hash(&self.unsigned, state);
    }
}
