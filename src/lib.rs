//! # relp-bigint
//!
//! Arbitrary precision signed and unsigned integers.
//!
//! Nothing in this crate panics on bad data. Malformed input, division by zero and unsigned
//! underflow produce *invalid* values, which poison every computation they take part in:
//!
//! ```
//! use relp_bigint::BI;
//!
//! let value = BI!(-5).plus(&BI!(3));
//! assert_eq!(value, BI!(-2));
//! assert_eq!(value.to_base(10), "-2");
//!
//! let poisoned = BI!(1).divided_by(&BI!(0)).into_parts().0;
//! assert!(poisoned.plus(&value).is_invalid());
//! ```
pub use crate::data::number_types::integer::big::{
    CompareResult,
    DivisionResult,
    SignedBigInteger,
    SignedDivisionResult,
    UnsignedBigInteger,
    UnsignedDivisionResult,
};
pub use crate::data::number_types::sign::Sign;
pub use crate::io::error::Parse;

pub mod data;
pub mod io;
