//! Conversions between script hashes and Base58Check addresses.

use crate::base58;
use crate::error::{ConvertError, Result};
use crate::uint160::Uint160;
use sha2::{Digest, Sha256};

pub const COIN_VERSION: u8 = 0x17;

const CHECKSUM_LEN: usize = 4;
const ADDRESS_DATA_LEN: usize = 1 + Uint160::LEN + CHECKSUM_LEN;

/// First four bytes of the double SHA-256 of `data`.
fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

pub fn to_address(script_hash: &Uint160) -> Result<String> {
    let mut data = Vec::with_capacity(ADDRESS_DATA_LEN);
    data.push(COIN_VERSION);
    data.extend_from_slice(script_hash.as_bytes());
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    base58::encode(&data)
}

pub fn to_script_hash(address: &str) -> Result<Uint160> {
    let data = base58::decode(address)?;
    if data.len() != ADDRESS_DATA_LEN {
        log::debug!("{} decodes to {} bytes", address, data.len());
        return Err(ConvertError::InvalidAddressLength(data.len()));
    }
    if data[0] != COIN_VERSION {
        return Err(ConvertError::InvalidCoinVersion(data[0]));
    }
    let (payload, sum) = data.split_at(1 + Uint160::LEN);
    if checksum(payload) != sum {
        log::debug!("checksum mismatch for {}", address);
        return Err(ConvertError::ChecksumMismatch);
    }
    Uint160::from_slice(&payload[1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "AeV59NyZtgj5AMQ7vY6yhr2MRvcfFeLWSb";
    const SCRIPT_HASH: &str = "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9";

    #[test]
    fn test_to_address() {
        let hash = Uint160::parse(SCRIPT_HASH).unwrap();
        assert_eq!(to_address(&hash).unwrap(), ADDRESS);
    }

    #[test]
    fn test_to_script_hash() {
        assert_eq!(to_script_hash(ADDRESS).unwrap().to_string(), SCRIPT_HASH);
    }

    #[test]
    fn test_checksum_mismatch() {
        // change the last character
        let tampered = format!("{}c", &ADDRESS[..ADDRESS.len() - 1]);
        assert_eq!(to_script_hash(&tampered), Err(ConvertError::ChecksumMismatch));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(to_script_hash("1111"), Err(ConvertError::InvalidAddressLength(4)));
    }
}
