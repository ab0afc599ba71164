//! Numbers written as little-endian hex, the way VM stack items show them.

use crate::error::Result;
use biginteger::BigInteger;
use std::convert::TryFrom;

pub fn hex_number_to_number(hex: &str) -> Result<BigInteger> {
    let bytes = hex::decode(hex)?;
    Ok(BigInteger::from_bytes_le(&bytes))
}

/// Truncates `num` toward zero and prints its minimal little-endian bytes.
pub fn number_to_hex_number(num: f64) -> Result<String> {
    let value = BigInteger::try_from(num)?;
    Ok(hex::encode(value.to_bytes_le()))
}
