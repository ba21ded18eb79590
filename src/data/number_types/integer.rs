//! # Integers
pub mod big;
