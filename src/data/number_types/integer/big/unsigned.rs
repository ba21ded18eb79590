//! # Unsigned magnitudes
//!
//! Multi-word arithmetic without a sign. Subtraction only supports `minuend >= subtrahend`, the
//! signed wrapper routes around that.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use itertools::{EitherOrBoth, Itertools};

use crate::data::number_types::integer::big::{adc, BITS_IN_WORD, cmp_slice, CompareResult, DoubleWord, mac, MAXIMUM_WORD_SIZE, sbb, Word};
use crate::data::number_types::integer::big::division::{self, UnsignedDivisionResult};
use crate::data::number_types::integer::big::words::Words;

/// A big unsigned integer type.
///
/// Also carries a sticky *invalid* flag. An invalid value is the result of malformed input or of
/// an undefined operation, and every operation with an invalid operand returns an invalid value.
#[derive(Clone, Debug)]
pub struct UnsignedBigInteger {
    words: Words,
    is_invalid: bool,
}

impl UnsignedBigInteger {
    /// The value zero.
    pub fn new() -> Self {
        Self::from_storage(Words::new())
    }

    /// Create a value from a native integer.
    pub fn create_from(value: u64) -> Self {
        Self::from_storage(Words::from_slice(&[value as Word, (value >> BITS_IN_WORD) as Word]))
    }

    /// Create a value from its words, least significant first.
    ///
    /// The words are stored as given: high zero words stay in the storage.
    pub fn from_words(words: &[Word]) -> Self {
        let mut words = Words::from_slice(words);
        if words.is_empty() {
            words.push(0);
        }

        Self { words, is_invalid: false }
    }

    /// Wrap freshly computed words, trimming them to at least one word.
    pub(crate) fn from_storage(mut words: Words) -> Self {
        words.trim();
        if words.is_empty() {
            words.push(0);
        }

        Self { words, is_invalid: false }
    }

    /// The canonical poisoned value.
    pub fn create_invalid() -> Self {
        let mut invalid = Self::new();
        invalid.invalidate();
        invalid
    }

    /// Poison this value.
    pub fn invalidate(&mut self) {
        self.is_invalid = true;
    }

    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// All stored words, least significant first.
    ///
    /// May include high zero words, see `trimmed_length`.
    pub fn words(&self) -> &[Word] {
        self.words.as_slice()
    }

    /// Physical amount of words.
    pub fn length(&self) -> usize {
        self.words.len()
    }

    /// Amount of significant words; zero for the value zero.
    pub fn trimmed_length(&self) -> usize {
        self.words.trimmed_len()
    }

    pub(crate) fn trimmed_words(&self) -> &[Word] {
        self.words.trimmed()
    }

    pub fn is_zero(&self) -> bool {
        self.trimmed_length() == 0
    }

    /// Set to the (valid) value zero.
    pub fn set_to_zero(&mut self) {
        self.words.clear();
        self.words.push(0);
        self.is_invalid = false;
    }

    /// Take over the value of `other`, including its validity.
    pub fn set_to(&mut self, other: &Self) {
        self.words.clear();
        for &word in other.words.iter() {
            self.words.push(word);
        }
        self.is_invalid = other.is_invalid;
    }

    /// The lowest 64 bits.
    ///
    /// Values that don't fit are truncated, that is, reduced modulo `2^64`. Use
    /// `num::ToPrimitive::to_u64` for a checked conversion.
    pub fn to_u64(&self) -> u64 {
        self.words.get(0) as u64 | (self.words.get(1) as u64) << BITS_IN_WORD
    }

    /// Closest double, ties to even.
    ///
    /// Precision beyond the 53 bit mantissa is lost. Too large values become infinity, invalid
    /// values become NaN.
    pub fn to_double(&self) -> f64 {
        if self.is_invalid {
            return f64::NAN;
        }

        let bit_length = self.bit_length();
        if bit_length <= 64 {
            return self.to_u64() as f64;
        }

        let shift = bit_length - 64;
        if shift > 1024 {
            return f64::INFINITY;
        }
        // The lowest bit of `top` is far below the rounding position, folding the discarded bits
        // into it keeps the rounding of the conversion to `f64` correct.
        let top = self.shift_right(shift).to_u64();
        let sticky = self.has_bits_below(shift) as u64;

        (top | sticky) as f64 * 2_f64.powi(shift as i32)
    }

    /// Sum.
    pub fn plus(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        let (longer, shorter) = {
            let (left, right) = (self.trimmed_words(), other.trimmed_words());
            if left.len() >= right.len() { (left, right) } else { (right, left) }
        };

        let mut result = Words::with_len(longer.len() + 1);
        let mut carry = 0;
        for (i, &word) in longer.iter().enumerate() {
            let (sum, new_carry) = adc(word, shorter.get(i).copied().unwrap_or(0), carry);
            result[i] = sum;
            carry = new_carry;
        }
        result[longer.len()] = carry;

        Self::from_storage(result)
    }

    /// Difference.
    ///
    /// When `other` is larger than `self`, the difference is not a magnitude and the result is
    /// invalid.
    pub fn minus(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        let (left, right) = (self.trimmed_words(), other.trimmed_words());
        if cmp_slice(left, right) == Ordering::Less {
            tracing::debug!("unsigned subtraction would go below zero, result is invalid");
            return Self::create_invalid();
        }

        let mut result = Words::with_len(left.len());
        let mut borrow = 0;
        for (i, &word) in left.iter().enumerate() {
            let (difference, new_borrow) = sbb(word, right.get(i).copied().unwrap_or(0), borrow);
            result[i] = difference;
            borrow = new_borrow;
        }
        debug_assert_eq!(borrow, 0);

        Self::from_storage(result)
    }

    /// Product, by schoolbook multiplication.
    pub fn multiplied_by(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        Self::from_storage(multiply_words(self.trimmed_words(), other.trimmed_words()))
    }

    /// Quotient and remainder.
    ///
    /// Division by zero gives an invalid quotient and remainder.
    pub fn divided_by(&self, divisor: &Self) -> UnsignedDivisionResult {
        division::divide(self, divisor)
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

    /// Complement of every stored word.
    ///
    /// This type has no bit width of its own, so the complement reaches exactly as far as the
    /// storage (`length`) does.
    pub fn bitwise_not(&self) -> Self {
        if self.is_invalid {
            return Self::create_invalid();
        }

        Self::from_storage(self.words.iter().map(|&word| !word).collect())
    }

    /// Word-wise operation, the shorter operand is extended with zeros.
    fn bitwise(&self, other: &Self, operation: impl Fn(Word, Word) -> Word) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        let words = self.trimmed_words().iter()
            .zip_longest(other.trimmed_words())
            .map(|pair| match pair {
                EitherOrBoth::Both(&left, &right) => operation(left, right),
                EitherOrBoth::Left(&left) => operation(left, 0),
                EitherOrBoth::Right(&right) => operation(0, right),
            })
            .collect();

        Self::from_storage(words)
    }

    /// Multiply by `2^num_bits`.
    pub fn shift_left(&self, num_bits: usize) -> Self {
        if self.is_invalid {
            return Self::create_invalid();
        }

        let source = self.trimmed_words();
        if source.is_empty() {
            return Self::new();
        }

        let word_shift = num_bits / BITS_IN_WORD;
        let bit_shift = num_bits % BITS_IN_WORD;

        let len = match source.len().checked_add(word_shift + 1) {
            Some(len) if len <= MAXIMUM_WORD_SIZE => len,
            _ => {
                tracing::debug!(num_bits, "shifted value would be too large, result is invalid");
                return Self::create_invalid();
            },
        };

        let mut result = Words::with_len(len);
        for (i, &word) in source.iter().enumerate() {
            if bit_shift == 0 {
                result[i + word_shift] = word;
            } else {
                result[i + word_shift] |= word << bit_shift;
                result[i + word_shift + 1] = word >> (BITS_IN_WORD - bit_shift);
            }
        }

        Self::from_storage(result)
    }

    /// Divide by `2^num_bits`, rounding down.
    pub fn shift_right(&self, num_bits: usize) -> Self {
        if self.is_invalid {
            return Self::create_invalid();
        }

        let source = self.trimmed_words();
        let word_shift = num_bits / BITS_IN_WORD;
        let bit_shift = num_bits % BITS_IN_WORD;
        if word_shift >= source.len() {
            return Self::new();
        }

        let mut result = Words::with_len(source.len() - word_shift);
        for i in 0..result.len() {
            let low = source[i + word_shift] >> bit_shift;
            let high = match source.get(i + word_shift + 1) {
                Some(&next) if bit_shift > 0 => next << (BITS_IN_WORD - bit_shift),
                _ => 0,
            };
            result[i] = low | high;
        }

        Self::from_storage(result)
    }

    /// Set bit `bit_index` to one, growing the storage when needed.
    ///
    /// Invalidates the value when the bit lies beyond `MAXIMUM_WORD_SIZE` words.
    pub fn set_bit_inplace(&mut self, bit_index: usize) {
        if self.is_invalid {
            return;
        }

        let word_index = bit_index / BITS_IN_WORD;
        if word_index >= MAXIMUM_WORD_SIZE {
            tracing::debug!(bit_index, "bit index is too large, value is invalid");
            self.invalidate();
            return;
        }
        if word_index >= self.words.len() {
            self.words.resize(word_index + 1);
        }
        self.words[word_index] |= 1 << (bit_index % BITS_IN_WORD);
    }

    pub fn get_bit(&self, bit_index: usize) -> bool {
        let word = self.words.get(bit_index / BITS_IN_WORD);
        word >> (bit_index % BITS_IN_WORD) & 1 == 1
    }

    /// One-based index of the highest set bit; zero for zero.
    pub fn bit_length(&self) -> usize {
        match self.trimmed_words().split_last() {
            None => 0,
            Some((&top, rest)) => rest.len() * BITS_IN_WORD + (BITS_IN_WORD - top.leading_zeros() as usize),
        }
    }

    /// Whether any of the lowest `num_bits` bits is set.
    pub(crate) fn has_bits_below(&self, num_bits: usize) -> bool {
        let words = self.trimmed_words();
        let whole_words = num_bits / BITS_IN_WORD;
        let remaining_bits = num_bits % BITS_IN_WORD;

        if words.iter().take(whole_words).any(|&word| word != 0) {
            return true;
        }
        remaining_bits > 0 && words.get(whole_words)
            .map_or(false, |&word| word & ((1 << remaining_bits) - 1) != 0)
    }

    /// Hash of the significant words.
    ///
    /// Jenkins' one-at-a-time hash of the little-endian bytes of the trimmed words. Equal values
    /// hash equal, whatever their physical length.
    pub fn hash(&self) -> u32 {
        if self.is_invalid {
            return 0;
        }

        let mut hash: u32 = 0;
        for byte in self.trimmed_words().iter().flat_map(|word| word.to_le_bytes()) {
            hash = hash.wrapping_add(byte as u32);
            hash = hash.wrapping_add(hash << 10);
            hash ^= hash >> 6;
        }
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash.wrapping_add(hash << 15)
    }

    /// Compare against a double, exactly.
    ///
    /// # Return value
    ///
    /// How the double relates to this value, or `None` when either side is not a number (NaN, or
    /// an invalid integer). Infinities compare beyond every integer.
    pub fn compare_to_double(&self, value: f64) -> Option<CompareResult> {
        if self.is_invalid || value.is_nan() {
            return None;
        }
        if value.is_infinite() {
            return Some(if value > 0_f64 {
                CompareResult::DoubleGreaterThanBigInt
            } else {
                CompareResult::DoubleLessThanBigInt
            });
        }
        if value < 0_f64 {
            return Some(CompareResult::DoubleLessThanBigInt);
        }

        // value = mantissa * 2^exponent
        let bits = value.to_bits();
        let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1 << 52) - 1);
        let (mantissa, exponent) = if exponent_bits == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), exponent_bits - 1075)
        };

        let mantissa = Self::create_from(mantissa);
        let ordering = if exponent >= 0 {
            self.cmp(&mantissa.shift_left(exponent as usize))
        } else {
            self.shift_left((-exponent) as usize).cmp(&mantissa)
        };

        Some(CompareResult::from_big_int_ordering(ordering))
    }
}

/// Schoolbook product of two word sequences.
///
/// The result has `left.len() + right.len()` words.
pub(crate) fn multiply_words(left: &[Word], right: &[Word]) -> Words {
    let mut result = Words::with_len(left.len() + right.len());
    for (i, &left_word) in left.iter().enumerate() {
        if left_word == 0 {
            continue;
        }

        let mut carry = 0;
        for (j, &right_word) in right.iter().enumerate() {
            let (low, high) = mac(left_word, right_word, result[i + j], carry);
            result[i + j] = low;
            carry = high;
        }
        result[i + right.len()] = carry;
    }

    result
}

/// Multiply in place by a single word and add another, growing the storage on overflow.
pub(crate) fn multiply_add_word(words: &mut Words, multiplier: Word, addend: Word) {
    let mut carry = addend as DoubleWord;
    for i in 0..words.len() {
        let product = words[i] as DoubleWord * multiplier as DoubleWord + carry;
        words[i] = product as Word;
        carry = product >> BITS_IN_WORD;
    }
    if carry > 0 {
        words.push(carry as Word);
    }
}

impl Default for UnsignedBigInteger {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for UnsignedBigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for UnsignedBigInteger {}

impl PartialOrd for UnsignedBigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Invalid values are all equal and order below every valid value.
impl Ord for UnsignedBigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_invalid, other.is_invalid) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_slice(self.trimmed_words(), other.trimmed_words()),
        }
    }
}

impl Hash for UnsignedBigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_invalid.hash(state);
        if !self.is_invalid {
            self.trimmed_words().hash(state);
        }
    }
}
