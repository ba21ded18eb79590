//! # Parse errors
//!
//! The arithmetic never fails, it poisons values instead. Only the `Result` based parsing surface
//! (`FromStr`, `num::Num::from_str_radix` and deserialization) reports what went wrong.
use thiserror::Error;

use crate::io::radix::{MAXIMUM_RADIX, MINIMUM_RADIX};

/// Text could not be read as a number.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Parse {
    #[error("radix {0} is not supported, use a radix from {minimum} up to and including {maximum}", minimum = MINIMUM_RADIX, maximum = MAXIMUM_RADIX)]
    InvalidRadix(u32),
    #[error("no digits to parse")]
    Empty,
    #[error("character {character:?} at position {position} is not a digit in radix {radix}")]
    InvalidDigit {
        character: char,
        position: usize,
        radix: u32,
    },
}

pub type ParseResult<T> = Result<T, Parse>;
