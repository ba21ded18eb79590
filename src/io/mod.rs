//! # Reading and writing integers
//!
//! Conversion from and to digit strings in any radix up to 36 and big-endian bytes, and the
//! standard formatting traits.
pub mod bytes;
pub mod error;
pub mod radix;
#[cfg(feature = "serde")]
mod serde;
