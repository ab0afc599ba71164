//! Base58 addresses, script hashes and hex helpers built on `biginteger`.

pub mod address;
pub mod base58;
pub mod error;
pub mod hex_number;
pub mod string_hex;
pub mod uint160;
pub mod wallet;

pub use self::error::{ConvertError, Result};
pub use self::uint160::Uint160;
