//! # Number types
//!
//! Big integers and the sign they're built from.
pub mod integer;
pub mod sign;
