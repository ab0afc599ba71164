use crate::error::{ConvertError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 20-byte script hash.
///
/// The bytes are stored little-endian, while the textual form is the
/// big-endian hex of the same value: `Display` reverses the storage and
/// `FromStr` reverses the parsed bytes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint160([u8; Uint160::LEN]);

impl Uint160 {
    pub const LEN: usize = 20;

    pub fn from_le_bytes(bytes: [u8; Uint160::LEN]) -> Uint160 {
        Uint160(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Uint160> {
        if bytes.len() != Self::LEN {
            return Err(ConvertError::InvalidScriptHashLength(bytes.len()));
        }
        let mut storage = [0u8; Uint160::LEN];
        storage.copy_from_slice(bytes);
        Ok(Uint160(storage))
    }

    /// The little-endian storage bytes.
    pub fn as_bytes(&self) -> &[u8; Uint160::LEN] {
        &self.0
    }

    /// Parses 40 big-endian hex characters.
    pub fn parse(s: &str) -> Result<Uint160> {
        if s.len() != 2 * Self::LEN {
            return Err(ConvertError::IllegalScriptHash(s.to_string()));
        }
        let mut bytes = hex::decode(s)?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Uint160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0.iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl FromStr for Uint160 {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Uint160> {
        Uint160::parse(s)
    }
}

impl Serialize for Uint160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Uint160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Uint160, D::Error> {
        struct Uint160Visitor;

        impl<'de> Visitor<'de> for Uint160Visitor {
            type Value = Uint160;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("40 hex characters")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Uint160, E> {
                Uint160::parse(s).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Uint160Visitor)
    }
}
