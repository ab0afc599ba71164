use biginteger::BigIntegerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Represents errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    BigInteger(#[from] BigIntegerError),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid base58 character {0:?}")]
    InvalidBase58Character(char),
    #[error("illegal format address {0:?}: length must be 34")]
    IllegalAddress(String),
    #[error("decoded address is {0} bytes, expected 25")]
    InvalidAddressLength(usize),
    #[error("unsupported coin version {0:#04x}")]
    InvalidCoinVersion(u8),
    #[error("address checksum mismatch")]
    ChecksumMismatch,
    #[error("illegal format script hash {0:?}")]
    IllegalScriptHash(String),
    #[error("{0:?} is prefixed with \"0x\" and is not a little-endian script hash")]
    UnexpectedHexPrefix(String),
    #[error("script hash must be 20 bytes, got {0}")]
    InvalidScriptHashLength(usize),
}
