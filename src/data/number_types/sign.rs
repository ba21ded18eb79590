//! # Signs
//!
//! Sign of a sign-magnitude number.
use std::cmp::Ordering;
use std::ops::{Mul, Neg};

/// Sign of a value as it would be written down.
///
/// Unlike the sign in `num`, there is no separate variant for zero: zero is written without a
/// minus and has sign `Plus`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    Plus,
    /// `x < 0`
    Minus,
}

impl Sign {
    /// Sign from a "is negative" flag.
    pub fn from_negative(negative: bool) -> Self {
        if negative {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Whether `x < 0`.
    pub fn is_negative(self) -> bool {
        self == Sign::Minus
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::Plus
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus) => Ordering::Equal,
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Plus, Sign::Plus) => Sign::Plus,
            (Sign::Plus, Sign::Minus) => Sign::Minus,
            (Sign::Minus, Sign::Plus) => Sign::Minus,
            (Sign::Minus, Sign::Minus) => Sign::Plus,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::number_types::sign::Sign;

    #[test]
    fn test_mul() {
        assert_eq!(Sign::Plus * Sign::Plus, Sign::Plus);
        assert_eq!(Sign::Plus * Sign::Minus, Sign::Minus);
        assert_eq!(Sign::Minus * Sign::Plus, Sign::Minus);
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
    }

    #[test]
    fn test_neg_and_order() {
        assert_eq!(-Sign::Plus, Sign::Minus);
        assert_eq!(-Sign::Minus, Sign::Plus);
        assert!(Sign::Minus < Sign::Plus);
        assert!(Sign::from_negative(true).is_negative());
        assert!(!Sign::default().is_negative());
    }
}
