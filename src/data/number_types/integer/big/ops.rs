//! # Operators and numeric traits
//!
//! Thin wrappers around the inherent methods, for owned and borrowed operands alike. Like the
//! inherent methods, none of these panic: division by zero gives an invalid value.
use std::convert::TryFrom;
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

use num::{FromPrimitive, Num, One, ToPrimitive, Zero};

use crate::data::number_types::integer::big::{BITS_IN_WORD, Word};
use crate::data::number_types::integer::big::signed::SignedBigInteger;
use crate::data::number_types::integer::big::unsigned::UnsignedBigInteger;
use crate::data::number_types::integer::big::words::Words;
use crate::io::error::Parse;
use crate::io::radix;

impl UnsignedBigInteger {
    fn quotient_by(&self, divisor: &Self) -> Self {
        self.divided_by(divisor).into_parts().0
    }

    fn remainder_by(&self, divisor: &Self) -> Self {
        self.divided_by(divisor).into_parts().1
    }
}

impl SignedBigInteger {
    fn quotient_by(&self, divisor: &Self) -> Self {
        self.divided_by(divisor).into_parts().0
    }

    fn remainder_by(&self, divisor: &Self) -> Self {
        self.divided_by(divisor).into_parts().1
    }

    fn quotient_by_unsigned(&self, divisor: &UnsignedBigInteger) -> Self {
        self.divided_by_unsigned(divisor).into_parts().0
    }

    fn remainder_by_unsigned(&self, divisor: &UnsignedBigInteger) -> Self {
        self.divided_by_unsigned(divisor).into_parts().1
    }
}

/// All owned and borrowed combinations of a binary operator, plus its assigning form.
macro_rules! binary_operator {
    ($target:ident, $rhs:ident, $operator:ident, $method:ident, $assign_operator:ident, $assign_method:ident, $implementation:ident) => {
        impl $operator<&$rhs> for &$target {
            type Output = $target;

            fn $method(self, rhs: &$rhs) -> Self::Output {
                $target::$implementation(self, rhs)
            }
        }

        impl $operator<$rhs> for &$target {
            type Output = $target;

            fn $method(self, rhs: $rhs) -> Self::Output {
                $target::$implementation(self, &rhs)
            }
        }

        impl $operator<&$rhs> for $target {
            type Output = $target;

            fn $method(self, rhs: &$rhs) -> Self::Output {
                $target::$implementation(&self, rhs)
            }
        }

        impl $operator<$rhs> for $target {
            type Output = $target;

            fn $method(self, rhs: $rhs) -> Self::Output {
                $target::$implementation(&self, &rhs)
            }
        }

        impl $assign_operator<&$rhs> for $target {
            fn $assign_method(&mut self, rhs: &$rhs) {
                *self = $target::$implementation(self, rhs);
            }
        }

        impl $assign_operator<$rhs> for $target {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = $target::$implementation(self, &rhs);
            }
        }
    };
}

macro_rules! shift_operator {
    ($target:ident, $operator:ident, $method:ident, $assign_operator:ident, $assign_method:ident, $implementation:ident) => {
        impl $operator<usize> for &$target {
            type Output = $target;

            fn $method(self, rhs: usize) -> Self::Output {
                $target::$implementation(self, rhs)
            }
        }

        impl $operator<usize> for $target {
            type Output = $target;

            fn $method(self, rhs: usize) -> Self::Output {
                $target::$implementation(&self, rhs)
            }
        }

        impl $assign_operator<usize> for $target {
            fn $assign_method(&mut self, rhs: usize) {
                *self = $target::$implementation(self, rhs);
            }
        }
    };
}

macro_rules! all_operators {
    ($target:ident) => {
        binary_operator!($target, $target, Add, add, AddAssign, add_assign, plus);
        binary_operator!($target, $target, Sub, sub, SubAssign, sub_assign, minus);
        binary_operator!($target, $target, Mul, mul, MulAssign, mul_assign, multiplied_by);
        binary_operator!($target, $target, Div, div, DivAssign, div_assign, quotient_by);
        binary_operator!($target, $target, Rem, rem, RemAssign, rem_assign, remainder_by);
        binary_operator!($target, $target, BitAnd, bitand, BitAndAssign, bitand_assign, bitwise_and);
        binary_operator!($target, $target, BitOr, bitor, BitOrAssign, bitor_assign, bitwise_or);
        binary_operator!($target, $target, BitXor, bitxor, BitXorAssign, bitxor_assign, bitwise_xor);
        shift_operator!($target, Shl, shl, ShlAssign, shl_assign, shift_left);
        shift_operator!($target, Shr, shr, ShrAssign, shr_assign, shift_right);

        impl Not for $target {
            type Output = Self;

            fn not(self) -> Self::Output {
                self.bitwise_not()
            }
        }

        impl Not for &$target {
            type Output = $target;

            fn not(self) -> Self::Output {
                self.bitwise_not()
            }
        }
    };
}

all_operators!(UnsignedBigInteger);
all_operators!(SignedBigInteger);

binary_operator!(SignedBigInteger, UnsignedBigInteger, Add, add, AddAssign, add_assign, plus_unsigned);
binary_operator!(SignedBigInteger, UnsignedBigInteger, Sub, sub, SubAssign, sub_assign, minus_unsigned);
binary_operator!(SignedBigInteger, UnsignedBigInteger, Mul, mul, MulAssign, mul_assign, multiplied_by_unsigned);
binary_operator!(SignedBigInteger, UnsignedBigInteger, Div, div, DivAssign, div_assign, quotient_by_unsigned);
binary_operator!(SignedBigInteger, UnsignedBigInteger, Rem, rem, RemAssign, rem_assign, remainder_by_unsigned);

impl Neg for SignedBigInteger {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &SignedBigInteger {
    type Output = SignedBigInteger;

    fn neg(self) -> Self::Output {
        self.negated_value()
    }
}

impl UnsignedBigInteger {
    fn create_from_u128(value: u128) -> Self {
        let words = (0..4)
            .map(|i| (value >> (i * BITS_IN_WORD)) as Word)
            .collect::<Words>();
        Self::from_storage(words)
    }
}

macro_rules! from_unsigned_primitive {
    ($($primitive:ty),*) => {
        $(
            impl From<$primitive> for UnsignedBigInteger {
                fn from(value: $primitive) -> Self {
                    Self::create_from_u128(value as u128)
                }
            }

            impl From<$primitive> for SignedBigInteger {
                fn from(value: $primitive) -> Self {
                    Self::from(UnsignedBigInteger::from(value))
                }
            }
        )*
    };
}
from_unsigned_primitive!(u8, u16, u32, u64, u128, usize);

macro_rules! from_signed_primitive {
    ($($primitive:ty),*) => {
        $(
            /// Negative values have no magnitude, they give an invalid value.
            impl From<$primitive> for UnsignedBigInteger {
                fn from(value: $primitive) -> Self {
                    match u128::try_from(value) {
                        Ok(value) => Self::create_from_u128(value),
                        Err(_) => {
                            tracing::debug!(value = %value, "negative value has no magnitude, result is invalid");
                            Self::create_invalid()
                        },
                    }
                }
            }

            impl From<$primitive> for SignedBigInteger {
                fn from(value: $primitive) -> Self {
                    let value = value as i128;
                    Self::new(UnsignedBigInteger::create_from_u128(value.unsigned_abs()), value < 0)
                }
            }
        )*
    };
}
from_signed_primitive!(i8, i16, i32, i64, i128, isize);

/// Decimal text, see `from_base`.
impl From<&str> for UnsignedBigInteger {
    fn from(text: &str) -> Self {
        Self::from_base(10, text)
    }
}

/// Decimal text with an optional sign, see `from_base`.
impl From<&str> for SignedBigInteger {
    fn from(text: &str) -> Self {
        Self::from_base(10, text)
    }
}

impl Zero for UnsignedBigInteger {
    fn zero() -> Self {
        Self::new()
    }

    fn set_zero(&mut self) {
        self.set_to_zero();
    }

    fn is_zero(&self) -> bool {
        !self.is_invalid() && UnsignedBigInteger::is_zero(self)
    }
}

impl Zero for SignedBigInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn set_zero(&mut self) {
        self.set_to_zero();
    }

    fn is_zero(&self) -> bool {
        !self.is_invalid() && SignedBigInteger::is_zero(self)
    }
}

impl One for UnsignedBigInteger {
    fn one() -> Self {
        Self::create_from(1)
    }
}

impl One for SignedBigInteger {
    fn one() -> Self {
        Self::create_from(1)
    }
}

impl Num for UnsignedBigInteger {
    type FromStrRadixErr = Parse;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        radix::parse_unsigned(radix, text)
    }
}

impl Num for SignedBigInteger {
    type FromStrRadixErr = Parse;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        radix::parse_signed(radix, text)
    }
}

impl num::Unsigned for UnsignedBigInteger {}

impl num::Signed for SignedBigInteger {
    fn abs(&self) -> Self {
        SignedBigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self.is_invalid() || other.is_invalid() {
            Self::create_invalid()
        } else if self <= other {
            Self::zero()
        } else {
            self.minus(other)
        }
    }

    fn signum(&self) -> Self {
        if self.is_invalid() {
            Self::create_invalid()
        } else if SignedBigInteger::is_zero(self) {
            Self::zero()
        } else if SignedBigInteger::is_negative(self) {
            Self::create_from(-1)
        } else {
            Self::one()
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_invalid() && !SignedBigInteger::is_negative(self) && !SignedBigInteger::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        !self.is_invalid() && SignedBigInteger::is_negative(self)
    }
}

impl UnsignedBigInteger {
    /// The value as a `u128`, if valid and small enough.
    fn checked_u128(&self) -> Option<u128> {
        if self.is_invalid() || self.bit_length() > 128 {
            return None;
        }

        Some(self.trimmed_words().iter().rev()
            .fold(0, |value, &word| value << BITS_IN_WORD | word as u128))
    }
}

impl SignedBigInteger {
    fn checked_i128(&self) -> Option<i128> {
        let magnitude = self.unsigned_value().checked_u128()?;
        if SignedBigInteger::is_negative(self) {
            // The magnitude of i128::MIN is not an i128
            if magnitude == 1 << 127 {
                Some(i128::MIN)
            } else {
                i128::try_from(magnitude).ok().map(|value| -value)
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }
}

/// Checked conversions: `None` for invalid values and values out of range.
impl ToPrimitive for UnsignedBigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.checked_u128().and_then(|value| i64::try_from(value).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.checked_u128().and_then(|value| u64::try_from(value).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.checked_u128().and_then(|value| i128::try_from(value).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        self.checked_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_invalid() {
            None
        } else {
            Some(self.to_double())
        }
    }
}

/// Checked conversions: `None` for invalid values and values out of range.
impl ToPrimitive for SignedBigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.checked_i128().and_then(|value| i64::try_from(value).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.checked_i128().and_then(|value| u64::try_from(value).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.checked_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        if SignedBigInteger::is_negative(self) {
            None
        } else {
            self.unsigned_value().checked_u128()
        }
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_invalid() {
            None
        } else {
            Some(self.to_double())
        }
    }
}

impl FromPrimitive for UnsignedBigInteger {
    fn from_i64(value: i64) -> Option<Self> {
        u64::try_from(value).ok().map(Self::create_from)
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(Self::create_from(value))
    }

    fn from_i128(value: i128) -> Option<Self> {
        u128::try_from(value).ok().map(Self::create_from_u128)
    }

    fn from_u128(value: u128) -> Option<Self> {
        Some(Self::create_from_u128(value))
    }
}

impl FromPrimitive for SignedBigInteger {
    fn from_i64(value: i64) -> Option<Self> {
        Some(Self::create_from(value))
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(Self::from(value))
    }

    fn from_i128(value: i128) -> Option<Self> {
        Some(Self::from(value))
    }

    fn from_u128(value: u128) -> Option<Self> {
        Some(Self::from(value))
    }
}
