//! # Long division
//!
//! Quotient and remainder are always computed together. Single word divisors take a short
//! division, longer divisors use Knuth's algorithm D (The Art of Computer Programming, Vol. 2,
//! section 4.3.1).
use std::cmp::Ordering;

use crate::data::number_types::integer::big::{BITS_IN_WORD, cmp_slice, DoubleWord, Word};
use crate::data::number_types::integer::big::signed::SignedBigInteger;
use crate::data::number_types::integer::big::unsigned::UnsignedBigInteger;
use crate::data::number_types::integer::big::words::Words;

/// Quotient and remainder of a division.
///
/// Produced as a whole by division and not modified afterwards.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct DivisionResult<T> {
    quotient: T,
    remainder: T,
}

pub type UnsignedDivisionResult = DivisionResult<UnsignedBigInteger>;
pub type SignedDivisionResult = DivisionResult<SignedBigInteger>;

impl<T> DivisionResult<T> {
    pub(crate) fn new(quotient: T, remainder: T) -> Self {
        Self { quotient, remainder }
    }

    pub fn quotient(&self) -> &T {
        &self.quotient
    }

    pub fn remainder(&self) -> &T {
        &self.remainder
    }

    /// `(quotient, remainder)`
    pub fn into_parts(self) -> (T, T) {
        (self.quotient, self.remainder)
    }
}

/// Divide two magnitudes.
///
/// # Return value
///
/// `(q, r)` with `q * divisor + r == dividend` and `0 <= r < divisor`. When an operand is invalid
/// or the divisor is zero, both parts are invalid.
pub(crate) fn divide(
    dividend: &UnsignedBigInteger,
    divisor: &UnsignedBigInteger,
) -> DivisionResult<UnsignedBigInteger> {
    if dividend.is_invalid() || divisor.is_invalid() {
        return invalid();
    }

    let (u, v) = (dividend.trimmed_words(), divisor.trimmed_words());
    if v.is_empty() {
        tracing::debug!("division by zero, result is invalid");
        return invalid();
    }

    if cmp_slice(u, v) == Ordering::Less {
        return DivisionResult::new(
            UnsignedBigInteger::new(),
            UnsignedBigInteger::from_storage(Words::from_slice(u)),
        );
    }

    let (quotient, remainder) = match v {
        &[single] => {
            let (quotient, remainder) = divide_by_word(u, single);
            (quotient, Words::from_slice(&[remainder]))
        },
        _ => divide_words(u, v),
    };

    DivisionResult::new(
        UnsignedBigInteger::from_storage(quotient),
        UnsignedBigInteger::from_storage(remainder),
    )
}

fn invalid() -> DivisionResult<UnsignedBigInteger> {
    DivisionResult::new(UnsignedBigInteger::create_invalid(), UnsignedBigInteger::create_invalid())
}

/// Short division by a single nonzero word.
pub(crate) fn divide_by_word(dividend: &[Word], divisor: Word) -> (Words, Word) {
    debug_assert_ne!(divisor, 0);

    let divisor = divisor as DoubleWord;
    let mut quotient = Words::with_len(dividend.len());
    let mut remainder: DoubleWord = 0;
    for i in (0..dividend.len()).rev() {
        let current = (remainder << BITS_IN_WORD) | dividend[i] as DoubleWord;
        quotient[i] = (current / divisor) as Word;
        remainder = current % divisor;
    }

    (quotient, remainder as Word)
}

/// Knuth's algorithm D.
///
/// Requires trimmed operands with `v.len() >= 2` and `u >= v`.
fn divide_words(u: &[Word], v: &[Word]) -> (Words, Words) {
    debug_assert!(v.len() >= 2 && u.len() >= v.len());

    let n = v.len();
    let m = u.len() - n;
    let base: DoubleWord = 1 << BITS_IN_WORD;

    // D1: normalize so that the top word of the divisor has its high bit set
    let shift = v[n - 1].leading_zeros() as usize;
    let vn = normalize(v, shift, false);
    let mut un = normalize(u, shift, true);

    let v_top = vn[n - 1] as DoubleWord;
    let v_next = vn[n - 2] as DoubleWord;

    let mut quotient = Words::with_len(m + 1);
    for j in (0..=m).rev() {
        // D3: estimate the quotient word, it's at most two too large after this
        let numerator = ((un[j + n] as DoubleWord) << BITS_IN_WORD) | un[j + n - 1] as DoubleWord;
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;
        while q_hat >= base || q_hat * v_next > ((r_hat << BITS_IN_WORD) | un[j + n - 2] as DoubleWord) {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= base {
                break;
            }
        }

        // D4: multiply and subtract
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = q_hat * vn[i] as DoubleWord;
            let t = un[i + j] as i64 - borrow - (product & (base - 1)) as i64;
            un[i + j] = t as Word;
            borrow = (product >> BITS_IN_WORD) as i64 - (t >> BITS_IN_WORD);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as Word;

        // D5, D6: the estimate was one too large, add the divisor back
        if t < 0 {
            q_hat -= 1;
            let mut carry: DoubleWord = 0;
            for i in 0..n {
                let sum = un[i + j] as DoubleWord + vn[i] as DoubleWord + carry;
                un[i + j] = sum as Word;
                carry = sum >> BITS_IN_WORD;
            }
            un[j + n] = un[j + n].wrapping_add(carry as Word);
        }

        quotient[j] = q_hat as Word;
    }

    // D8: unnormalize the remainder
    let mut remainder = Words::with_len(n);
    for i in 0..n {
        remainder[i] = if shift == 0 {
            un[i]
        } else {
            (un[i] >> shift) | (un[i + 1] << (BITS_IN_WORD - shift))
        };
    }

    (quotient, remainder)
}

/// Shift left by less than a word, optionally keeping an extra word for the overflow.
fn normalize(words: &[Word], shift: usize, extra_word: bool) -> Words {
    let len = words.len();
    let mut result = Words::with_len(len + extra_word as usize);
    if shift == 0 {
        result.as_mut_slice()[..len].copy_from_slice(words);
        return result;
    }

    for i in (1..len).rev() {
        result[i] = (words[i] << shift) | (words[i - 1] >> (BITS_IN_WORD - shift));
    }
    result[0] = words[0] << shift;
    if extra_word {
        result[len] = words[len - 1] >> (BITS_IN_WORD - shift);
    }

    result
}
