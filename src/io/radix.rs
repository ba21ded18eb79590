//! # Base conversion
//!
//! Digit strings in radix 2 up to 36, with digits `0-9` followed by `a-z`. Parsing accepts both
//! cases, output is lowercase.
//!
//! Digits are processed in chunks: as many digits as fit in a single word are combined first, so
//! that the big integer is only touched once per chunk.
use std::fmt;
use std::str::FromStr;

use crate::data::number_types::integer::big::{SignedBigInteger, UnsignedBigInteger, Word};
use crate::data::number_types::integer::big::division::divide_by_word;
use crate::data::number_types::integer::big::unsigned::multiply_add_word;
use crate::data::number_types::integer::big::words::Words;
use crate::io::error::{Parse, ParseResult};

pub const MINIMUM_RADIX: u32 = 2;
pub const MAXIMUM_RADIX: u32 = 36;

const DIGITS: &[u8; MAXIMUM_RADIX as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Text used for values that can't be written down.
const INVALID: &str = "invalid";

fn check_radix(radix: u32) -> ParseResult<()> {
    if (MINIMUM_RADIX..=MAXIMUM_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Parse::InvalidRadix(radix))
    }
}

/// How many digits fit in a word, and the radix raised to that number.
fn chunk(radix: u32) -> (usize, Word) {
    let mut length = 0;
    let mut power: Word = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        length += 1;
    }

    (length, power)
}

/// Parse digits without a sign.
///
/// # Arguments
///
/// * `radix`: Base of the digits.
/// * `digits`: Text containing nothing but digits.
/// * `offset`: Position of the first digit in the text the user provided, used in errors.
fn parse_digits(radix: u32, digits: &str, offset: usize) -> ParseResult<UnsignedBigInteger> {
    check_radix(radix)?;
    if digits.is_empty() {
        return Err(Parse::Empty);
    }

    let (chunk_length, _) = chunk(radix);
    let mut words = Words::new();
    let (mut value, mut multiplier, mut count): (Word, Word, usize) = (0, 1, 0);
    for (position, character) in digits.chars().enumerate() {
        let digit = character.to_digit(radix)
            .ok_or(Parse::InvalidDigit { character, position: offset + position, radix })?;
        value = value * radix + digit;
        multiplier *= radix;
        count += 1;

        if count == chunk_length {
            multiply_add_word(&mut words, multiplier, value);
            value = 0;
            multiplier = 1;
            count = 0;
        }
    }
    if count > 0 {
        multiply_add_word(&mut words, multiplier, value);
    }

    Ok(UnsignedBigInteger::from_storage(words))
}

/// Parse a magnitude.
///
/// # Errors
///
/// When the radix is not supported, the text is empty or contains a character that is not a
/// digit.
pub fn parse_unsigned(radix: u32, text: &str) -> ParseResult<UnsignedBigInteger> {
    parse_digits(radix, text, 0)
}

/// Parse a signed integer: digits, optionally preceded by `-` or `+`.
///
/// # Errors
///
/// See `parse_unsigned`. A sign without digits is empty.
pub fn parse_signed(radix: u32, text: &str) -> ParseResult<SignedBigInteger> {
    let (negative, digits, offset) = if let Some(digits) = text.strip_prefix('-') {
        (true, digits, 1)
    } else if let Some(digits) = text.strip_prefix('+') {
        (false, digits, 1)
    } else {
        (false, text, 0)
    };

    parse_digits(radix, digits, offset)
        .map(|magnitude| SignedBigInteger::new(magnitude, negative))
}

/// Lowercase digits of a valid magnitude, no leading zeros.
fn write_digits(value: &UnsignedBigInteger, radix: u32) -> String {
    debug_assert!(!value.is_invalid());
    debug_assert!(check_radix(radix).is_ok());

    let (chunk_length, divisor) = chunk(radix);
    // Least significant digit first
    let mut digits = Vec::new();
    let mut words = Words::from_slice(value.trimmed_words());
    while words.trimmed_len() > 0 {
        let (quotient, mut remainder) = divide_by_word(words.trimmed(), divisor);
        words = quotient;

        let is_last = words.trimmed_len() == 0;
        for _ in 0..chunk_length {
            if is_last && remainder == 0 {
                break;
            }
            digits.push(DIGITS[(remainder % radix) as usize]);
            remainder /= radix;
        }
    }

    if digits.is_empty() {
        return "0".to_string();
    }
    digits.iter().rev().map(|&digit| digit as char).collect()
}

fn invalid_radix(radix: u32) -> String {
    tracing::debug!(radix, "radix is not supported, writing as invalid");
    INVALID.to_string()
}

impl UnsignedBigInteger {
    /// Read digits in the given radix.
    ///
    /// An unsupported radix, empty text or a character that is not a digit gives an invalid
    /// value. Use `num::Num::from_str_radix` to learn what went wrong.
    pub fn from_base(radix: u32, text: &str) -> Self {
        parse_unsigned(radix, text).unwrap_or_else(|error| {
            tracing::debug!(%error, "could not parse magnitude, result is invalid");
            Self::create_invalid()
        })
    }

    /// Write the digits in the given radix.
    ///
    /// Zero is `"0"`, there are no other leading zeros. Invalid values, and values asked for in an
    /// unsupported radix, are written as `"invalid"`.
    pub fn to_base(&self, radix: u32) -> String {
        if self.is_invalid() {
            return INVALID.to_string();
        }
        if check_radix(radix).is_err() {
            return invalid_radix(radix);
        }

        write_digits(self, radix)
    }
}

impl SignedBigInteger {
    /// Read digits in the given radix, optionally preceded by a sign.
    ///
    /// Malformed text gives an invalid value, see `UnsignedBigInteger::from_base`.
    pub fn from_base(radix: u32, text: &str) -> Self {
        parse_signed(radix, text).unwrap_or_else(|error| {
            tracing::debug!(%error, "could not parse integer, result is invalid");
            Self::create_invalid()
        })
    }

    /// Write the digits in the given radix, preceded by `-` for negative values.
    pub fn to_base(&self, radix: u32) -> String {
        if self.is_invalid() {
            return INVALID.to_string();
        }
        if check_radix(radix).is_err() {
            return invalid_radix(radix);
        }

        let digits = write_digits(self.unsigned_value(), radix);
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

impl FromStr for UnsignedBigInteger {
    type Err = Parse;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_unsigned(10, text)
    }
}

impl FromStr for SignedBigInteger {
    type Err = Parse;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_signed(10, text)
    }
}

/// Format the magnitude through `pad_integral`, so that flags, width and fill work like they do
/// for the primitives.
fn format(
    f: &mut fmt::Formatter<'_>,
    magnitude: &UnsignedBigInteger,
    is_nonnegative: bool,
    radix: u32,
    prefix: &str,
    uppercase: bool,
) -> fmt::Result {
    if magnitude.is_invalid() {
        return f.pad(INVALID);
    }

    let mut digits = write_digits(magnitude, radix);
    if uppercase {
        digits.make_ascii_uppercase();
    }
    f.pad_integral(is_nonnegative, prefix, &digits)
}

macro_rules! format_trait {
    ($format_trait:ident, $radix:expr, $prefix:expr, $uppercase:expr) => {
        impl fmt::$format_trait for UnsignedBigInteger {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format(f, self, true, $radix, $prefix, $uppercase)
            }
        }

        impl fmt::$format_trait for SignedBigInteger {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format(f, self.unsigned_value(), !self.is_negative(), $radix, $prefix, $uppercase)
            }
        }
    };
}

format_trait!(Display, 10, "", false);
format_trait!(LowerHex, 16, "0x", false);
format_trait!(UpperHex, 16, "0x", true);
format_trait!(Octal, 8, "0o", false);
format_trait!(Binary, 2, "0b", false);
