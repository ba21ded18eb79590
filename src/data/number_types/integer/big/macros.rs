/// Shorthand for creating a signed big integer, mostly in tests.
///
/// Accepts any native integer, or a decimal string (an unparsable string gives an invalid value).
#[macro_export]
macro_rules! BI {
    ($value:expr) => {
        <$crate::SignedBigInteger as ::std::convert::From<_>>::from($value)
    };
}

/// Shorthand for creating an unsigned big integer, mostly in tests.
///
/// Accepts any native integer, or a decimal string. Negative integers and unparsable strings give
/// an invalid value.
#[macro_export]
macro_rules! UBI {
    ($value:expr) => {
        <$crate::UnsignedBigInteger as ::std::convert::From<_>>::from($value)
    };
}
