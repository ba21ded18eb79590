//! # Arbitrary precision integers
//!
//! Sign-magnitude integers built on a little-endian sequence of machine words.
//!
//! Values are never rejected: malformed input, division by zero and unsigned underflow produce an
//! *invalid* value that poisons every computation it takes part in. Check `is_invalid` before
//! handing a result to anything that trusts it.
use std::cmp::Ordering;

pub use division::{DivisionResult, SignedDivisionResult, UnsignedDivisionResult};
pub use signed::SignedBigInteger;
pub use unsigned::UnsignedBigInteger;
pub use words::Words;

pub mod division;
pub mod signed;
pub mod unsigned;
pub mod words;
mod macros;
mod ops;

/// Storage granule of a magnitude.
pub type Word = u32;
/// Twice as wide as a `Word`, holds any carry, borrow or product of two words.
pub type DoubleWord = u64;
/// Number of bits in a `Word`.
pub const BITS_IN_WORD: usize = Word::BITS as usize;
/// Amount of words stored inline before the storage moves to the heap.
pub const STARTING_WORD_SIZE: usize = 32;
/// Largest amount of words a shift or a bit assignment may grow a magnitude to. Results that would
/// need more words are invalid.
pub const MAXIMUM_WORD_SIZE: usize = 1 << 26;

/// Outcome of comparing a double against a big integer.
///
/// The variant names read from the perspective of the double.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompareResult {
    DoubleEqualsBigInt,
    DoubleLessThanBigInt,
    DoubleGreaterThanBigInt,
}

impl CompareResult {
    /// Translate an ordering of the big integer relative to the double.
    pub(crate) fn from_big_int_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => CompareResult::DoubleGreaterThanBigInt,
            Ordering::Equal => CompareResult::DoubleEqualsBigInt,
            Ordering::Greater => CompareResult::DoubleLessThanBigInt,
        }
    }

    /// How the big integer orders relative to the double.
    pub fn big_int_ordering(self) -> Ordering {
        match self {
            CompareResult::DoubleEqualsBigInt => Ordering::Equal,
            CompareResult::DoubleLessThanBigInt => Ordering::Greater,
            CompareResult::DoubleGreaterThanBigInt => Ordering::Less,
        }
    }

    /// Same comparison, seen from a mirrored (negated) pair.
    pub(crate) fn flipped(self) -> Self {
        match self {
            CompareResult::DoubleEqualsBigInt => CompareResult::DoubleEqualsBigInt,
            CompareResult::DoubleLessThanBigInt => CompareResult::DoubleGreaterThanBigInt,
            CompareResult::DoubleGreaterThanBigInt => CompareResult::DoubleLessThanBigInt,
        }
    }
}

/// Add with carry: `(result, carry) = a + b + carry_in`
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let tmp = a as DoubleWord + b as DoubleWord + carry as DoubleWord;
    (tmp as Word, (tmp >> BITS_IN_WORD) as Word)
}

/// Subtract with borrow: `(result, borrow) = a - b - borrow_in`
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let tmp = (a as DoubleWord)
        .wrapping_sub(b as DoubleWord)
        .wrapping_sub(borrow as DoubleWord);
    (tmp as Word, (tmp >> (2 * BITS_IN_WORD - 1)) as Word)
}

/// Multiply-accumulate: `(low, carry) = a * b + c + carry_in`
///
/// Can't overflow: `(2^w - 1)^2 + 2 (2^w - 1) = 2^2w - 1`.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let tmp = a as DoubleWord * b as DoubleWord + c as DoubleWord + carry as DoubleWord;
    (tmp as Word, (tmp >> BITS_IN_WORD) as Word)
}

/// Compare two trimmed magnitudes.
///
/// Length decides first, then the words from most to least significant.
pub(crate) fn cmp_slice(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}
