//! Address and script hash conversions on their textual forms.

use crate::error::{ConvertError, Result};
use crate::uint160::Uint160;
use crate::wallet;

const ADDRESS_LEN: usize = 34;
const HASH_HEX_LEN: usize = 2 * Uint160::LEN;

fn reverse_hex(s: &str) -> Result<String> {
    let mut bytes = hex::decode(s)?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}

/// Reverses the byte order of a hex script hash, with or without a `0x` prefix.
pub fn change_endian(script_hash: &str) -> Result<String> {
    let digits = match script_hash.strip_prefix("0x") {
        Some(digits) => digits,
        None => script_hash,
    };
    if digits.len() != HASH_HEX_LEN {
        log::warn!("illegal format script hash {}", script_hash);
        return Err(ConvertError::IllegalScriptHash(script_hash.to_string()));
    }
    reverse_hex(digits)
}

pub fn address_to_script_hash(address: &str, little_endian: bool) -> Result<String> {
    if address.len() != ADDRESS_LEN {
        log::warn!("illegal format address {}", address);
        return Err(ConvertError::IllegalAddress(address.to_string()));
    }
    let big_endian = wallet::to_script_hash(address)?.to_string();
    if little_endian {
        reverse_hex(&big_endian)
    } else {
        Ok(big_endian)
    }
}

pub fn script_hash_to_address(script_hash: &str, little_endian: bool) -> Result<String> {
    if little_endian && script_hash.starts_with("0x") {
        return Err(ConvertError::UnexpectedHexPrefix(script_hash.to_string()));
    }
    if script_hash.len() != HASH_HEX_LEN {
        log::warn!("illegal format script hash {}", script_hash);
        return Err(ConvertError::IllegalScriptHash(script_hash.to_string()));
    }
    let big_endian = if little_endian {
        reverse_hex(script_hash)?
    } else {
        script_hash.to_string()
    };
    wallet::to_address(&Uint160::parse(&big_endian)?)
}
