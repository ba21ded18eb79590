//! # Serde support
//!
//! Values are (de)serialized as decimal strings, which any format can carry without loss.
//! Invalid values serialize as `"invalid"`, which deserializes as an invalid value again.
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, Visitor};

use crate::data::number_types::integer::big::{SignedBigInteger, UnsignedBigInteger};
use crate::io::error::Parse;

const INVALID: &str = "invalid";

struct DecimalVisitor<T>(PhantomData<T>);

impl<'de, T: FromStr<Err = Parse> + Invalid> Visitor<'de> for DecimalVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == INVALID {
            Ok(T::invalid())
        } else {
            value.parse().map_err(E::custom)
        }
    }
}

trait Invalid {
    fn invalid() -> Self;
}

macro_rules! serde_impls {
    ($target:ident) => {
        impl Invalid for $target {
            fn invalid() -> Self {
                Self::create_invalid()
            }
        }

        impl Serialize for $target {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_base(10))
            }
        }

        impl<'de> Deserialize<'de> for $target {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(DecimalVisitor(PhantomData))
            }
        }
    };
}

serde_impls!(UnsignedBigInteger);
serde_impls!(SignedBigInteger);
