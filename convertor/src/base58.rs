//! Base58 with the Bitcoin alphabet.
//!
//! The input bytes are read as one big-endian number and rewritten in radix
//! 58; every leading zero byte becomes a leading `'1'` and back.

use crate::error::{ConvertError, Result};
use biginteger::{ops, BigInteger, Sign, ZERO};

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;

pub fn encode(input: &[u8]) -> Result<String> {
    let mut value = BigInteger::from_bytes(input, Sign::Positive, false);
    let mut digits = Vec::new();
    while !value.is_zero() {
        let step = ops::div_rem(&value, RADIX)?;
        digits.push(ALPHABET[step.remainder.to_i32() as usize]);
        value = step.quotient;
    }
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    digits.extend(std::iter::repeat(ALPHABET[0]).take(zeros));
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut value = ZERO.clone();
    for (position, c) in input.chars().rev().enumerate() {
        let index = ALPHABET
            .iter()
            .position(|&a| char::from(a) == c)
            .ok_or_else(|| {
                log::debug!("rejecting {:?}: {:?} is not a base58 digit", input, c);
                ConvertError::InvalidBase58Character(c)
            })?;
        let weight = ops::pow(RADIX, position as i64)?;
        value = value.add(&ops::multiply(weight, index as u32));
    }

    let zeros = input.chars().take_while(|&c| c == '1').count();
    let mut bytes = vec![0u8; zeros];
    if !value.is_zero() {
        bytes.extend(value.to_bytes_be());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b"hello world").unwrap(), "StV1DL6CwTryKyV");
        assert_eq!(encode(&[0, 0, 1, 2]).unwrap(), "115T");
        assert_eq!(encode(&[0]).unwrap(), "1");
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world".to_vec());
        assert_eq!(decode("115T").unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(decode("1").unwrap(), vec![0]);
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_excluded_letters() {
        for c in &['0', 'O', 'I', 'l', '+'] {
            let input = format!("2{}", c);
            assert_eq!(decode(&input), Err(ConvertError::InvalidBase58Character(*c)));
        }
    }
}
