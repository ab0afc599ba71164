// Copyright 2018 Chia Network Inc and POA Networks Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::division;
use crate::double;
use crate::error::{BigIntegerError, Result};
use crate::limbs::{self, LIMB_BITS, LIMB_MASK};
use crate::sign::Sign;
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

lazy_static! {
    pub static ref ZERO: BigInteger = BigInteger {
        sign: Sign::Zero,
        limbs: Vec::new(),
    };
    pub static ref ONE: BigInteger = BigInteger {
        sign: Sign::Positive,
        limbs: vec![1],
    };
    pub static ref MINUS_ONE: BigInteger = BigInteger {
        sign: Sign::Negative,
        limbs: vec![1],
    };
}

/// Arbitrary precision signed integer.
///
/// The magnitude is stored as little-endian limbs of radix `2^26`.  Values
/// are always clamped: the most significant limb is nonzero, and zero is the
/// only value with `Sign::Zero` and no limbs.  Two equal values therefore have
/// identical representations, which is what the derived `PartialEq` and
/// `Hash` rely on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInteger {
    sign: Sign,
    limbs: Vec<u32>,
}

/// Truncating quotient and remainder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivRem {
    pub quotient: BigInteger,
    pub remainder: BigInteger,
}

// Constructors
impl BigInteger {
    /// Builds a value from a sign and little-endian radix `2^26` limbs.
    ///
    /// Every limb must fit in 26 bits, and `Sign::Zero` is only accepted with
    /// an all-zero magnitude.  Zero high limbs are dropped.
    pub fn try_from_parts(sign: Sign, limbs: Vec<u32>) -> Result<BigInteger> {
        if let Some(&limb) = limbs.iter().find(|&&l| l > LIMB_MASK) {
            return Err(BigIntegerError::LimbOutOfRange(limb));
        }
        if sign == Sign::Zero && limbs.iter().any(|&l| l != 0) {
            return Err(BigIntegerError::SignMismatch);
        }
        Ok(BigInteger::from_parts(sign, limbs))
    }

    /// Clamps limbs produced by the limb primitives and reconciles the sign
    /// with an empty magnitude.
    pub(crate) fn from_parts(sign: Sign, mut limbs: Vec<u32>) -> BigInteger {
        limbs::clamp(&mut limbs);
        let sign = if limbs.is_empty() { Sign::Zero } else { sign };
        debug_assert!(sign != Sign::Zero || limbs.is_empty());
        debug_assert!(limbs.iter().all(|&l| l <= LIMB_MASK));
        BigInteger { sign, limbs }
    }

    /// Parses an optionally signed string of digits in `radix`.
    ///
    /// Letters are case-insensitive.  An empty digit string is zero.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInteger> {
        if radix < 2 || radix > 36 {
            return Err(BigIntegerError::InvalidRadix(radix));
        }
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &s[1..]),
            Some(b'+') => (Sign::Positive, &s[1..]),
            _ => (Sign::Positive, s),
        };
        let radix_limbs = [radix];
        let mut acc = Vec::new();
        for c in digits.chars() {
            let digit = c
                .to_digit(radix)
                .ok_or(BigIntegerError::InvalidDigit { digit: c, radix })?;
            let scaled = limbs::multiply_to(&acc, &radix_limbs, 0);
            acc = limbs::add_to(&scaled, &[digit]);
        }
        Ok(BigInteger::from_parts(sign, acc))
    }

    /// Reads an unsigned magnitude from `bytes` and applies `sign`.
    ///
    /// A negative sign yields a negative value; any other sign yields a
    /// positive one (or zero, if every byte is zero).
    pub fn from_bytes(bytes: &[u8], sign: Sign, little_endian: bool) -> BigInteger {
        let bytes: Cow<[u8]> = if little_endian {
            Cow::Borrowed(bytes)
        } else {
            Cow::Owned(bytes.iter().rev().copied().collect())
        };
        let bytes = &bytes[..actual_length(&bytes)];
        let units = (bytes.len() * 8 + LIMB_BITS - 1) / LIMB_BITS;
        let byte_at = |k: usize| u32::from(bytes.get(k).copied().unwrap_or(0));

        let mut out = Vec::with_capacity(units);
        for i in 0..units {
            let bit = i * LIMB_BITS;
            let start = bit / 8;
            let word = byte_at(start)
                | byte_at(start + 1) << 8
                | byte_at(start + 2) << 16
                | byte_at(start + 3) << 24;
            out.push((word >> (bit % 8)) & LIMB_MASK);
        }
        let sign = if sign.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        BigInteger::from_parts(sign, out)
    }

    /// Reads a positive little-endian magnitude.
    #[inline]
    pub fn from_bytes_le(bytes: &[u8]) -> BigInteger {
        BigInteger::from_bytes(bytes, Sign::Positive, true)
    }

    /// Reads a positive big-endian magnitude.
    #[inline]
    pub fn from_bytes_be(bytes: &[u8]) -> BigInteger {
        BigInteger::from_bytes(bytes, Sign::Positive, false)
    }

    fn from_u64_with_sign(magnitude: u64, sign: Sign) -> BigInteger {
        BigInteger::from_parts(sign, limbs::from_u64(magnitude))
    }
}

/// Length of `bytes` once trailing zero bytes are dropped.
fn actual_length(bytes: &[u8]) -> usize {
    bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
}

// Accessors
impl BigInteger {
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The little-endian radix `2^26` limbs of the magnitude.
    #[inline]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// `true` for `1` and `-1`.
    #[inline]
    fn is_unit(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => (self.limbs.len() - 1) * LIMB_BITS + limbs::limb_bit_length(top),
        }
    }
}

// Arithmetic methods
impl BigInteger {
    pub fn negate(&self) -> BigInteger {
        BigInteger {
            sign: -self.sign,
            limbs: self.limbs.clone(),
        }
    }

    pub fn abs(&self) -> BigInteger {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    pub fn add(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign != other.sign {
            return self.subtract(&other.negate());
        }
        BigInteger::from_parts(self.sign, limbs::add_to(&self.limbs, &other.limbs))
    }

    pub fn subtract(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() {
            return other.negate();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign != other.sign {
            return self.add(&other.negate());
        }
        match self.compare_abs(other) {
            Ordering::Equal => ZERO.clone(),
            Ordering::Less => other.subtract(self).negate(),
            Ordering::Greater => {
                let (out, _) = limbs::subtract_to(&self.limbs, &other.limbs);
                BigInteger::from_parts(self.sign, out)
            }
        }
    }

    pub fn multiply(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() || other.is_zero() {
            return ZERO.clone();
        }
        if self.is_unit() {
            return if self.is_negative() {
                other.negate()
            } else {
                other.clone()
            };
        }
        if other.is_unit() {
            return if other.is_negative() {
                self.negate()
            } else {
                self.clone()
            };
        }
        BigInteger::from_parts(
            self.sign * other.sign,
            limbs::multiply_to(&self.limbs, &other.limbs, 0),
        )
    }

    /// Truncating division: the quotient rounds towards zero and a nonzero
    /// remainder has the sign of `self`.
    pub fn div_rem(&self, other: &BigInteger) -> Result<DivRem> {
        if other.is_zero() {
            return Err(BigIntegerError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(other))
    }

    fn div_rem_nonzero(&self, other: &BigInteger) -> DivRem {
        if self.is_zero() {
            return DivRem {
                quotient: ZERO.clone(),
                remainder: ZERO.clone(),
            };
        }
        if other.is_unit() {
            let quotient = if other.is_negative() {
                self.negate()
            } else {
                self.clone()
            };
            return DivRem {
                quotient,
                remainder: ZERO.clone(),
            };
        }
        let sign = self.sign * other.sign;
        match self.compare_abs(other) {
            Ordering::Equal => DivRem {
                quotient: if sign == Sign::Positive {
                    ONE.clone()
                } else {
                    MINUS_ONE.clone()
                },
                remainder: ZERO.clone(),
            },
            Ordering::Less => DivRem {
                quotient: ZERO.clone(),
                remainder: self.clone(),
            },
            Ordering::Greater => {
                let (quotient, remainder) = division::long_divide(&self.limbs, &other.limbs);
                DivRem {
                    quotient: BigInteger::from_parts(sign, quotient),
                    remainder: BigInteger::from_parts(self.sign, remainder),
                }
            }
        }
    }

    /// The remainder of [`div_rem`](Self::div_rem).
    pub fn modulo(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|d| d.remainder)
    }

    /// Raises `self` to `exponent` by square-and-multiply.
    ///
    /// The exponent must lie in `0..=i32::MAX`.
    pub fn pow(&self, exponent: i64) -> Result<BigInteger> {
        if exponent < 0 || exponent > i64::from(i32::max_value()) {
            return Err(BigIntegerError::ExponentOutOfRange(exponent));
        }
        let exponent = exponent as u32;
        if exponent == 0 {
            return Ok(ONE.clone());
        }
        if exponent == 1 || self.is_zero() {
            return Ok(self.clone());
        }
        if self.is_unit() {
            return Ok(if self.is_negative() && exponent & 1 == 0 {
                ONE.clone()
            } else {
                self.clone()
            });
        }

        let mut base = self.clone();
        let mut acc = ONE.clone();
        for i in 0..(32 - exponent.leading_zeros()) {
            if i > 0 {
                base = base.multiply(&base);
            }
            if exponent & (1 << i) != 0 {
                acc = base.multiply(&acc);
            }
        }
        Ok(acc)
    }

    pub fn compare_abs(&self, other: &BigInteger) -> Ordering {
        limbs::compare_abs(&self.limbs, &other.limbs)
    }
}

// Serialization
impl BigInteger {
    /// Formats the value in `radix`, with lowercase letters for digits past 9.
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        if radix < 2 || radix > 36 {
            return Err(BigIntegerError::InvalidRadix(radix));
        }
        Ok(self.format_radix(radix))
    }

    fn format_radix(&self, radix: u32) -> String {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&self.magnitude_digits(radix));
        s
    }

    /// Digits of `|self|`, produced least significant first by repeated
    /// division by the radix.
    fn magnitude_digits(&self, radix: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let divisor = BigInteger::from(radix);
        let mut digits = Vec::new();
        let mut value = self.abs();
        while !value.is_zero() {
            let step = value.div_rem_nonzero(&divisor);
            digits.push(DIGITS[step.remainder.to_i32().unsigned_abs() as usize]);
            value = step.quotient;
        }
        digits.iter().rev().map(|&d| char::from(d)).collect()
    }

    /// Packs the magnitude into bytes.
    ///
    /// With a nonzero `length`, exactly the `length` least significant bytes
    /// are produced (zero padded or truncated).  `None` and `Some(0)` give the
    /// minimal number of bytes, which for zero is a single zero byte.  The
    /// sign is not encoded.
    pub fn to_bytes(&self, little_endian: bool, length: Option<usize>) -> Vec<u8> {
        let length = length
            .filter(|&n| n > 0)
            .unwrap_or_else(|| ((self.bit_length() + 7) / 8).max(1));
        let mut out: Vec<u8> = (0..length).map(|i| self.byte_at(i)).collect();
        if !little_endian {
            out.reverse();
        }
        out
    }

    /// Minimal little-endian bytes of the magnitude.
    #[inline]
    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.to_bytes(true, None)
    }

    /// Minimal big-endian bytes of the magnitude.
    #[inline]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.to_bytes(false, None)
    }

    /// The `index`-th byte of the magnitude, which may straddle two limbs.
    fn byte_at(&self, index: usize) -> u8 {
        let bit = index * 8;
        let unit = bit / LIMB_BITS;
        let shift = bit % LIMB_BITS;
        let low = self.limbs.get(unit).copied().unwrap_or(0) >> shift;
        let byte = if LIMB_BITS - shift < 8 {
            let high = self.limbs.get(unit + 1).copied().unwrap_or(0);
            low | high << (LIMB_BITS - shift)
        } else {
            low
        };
        (byte & 0xff) as u8
    }

    /// The low 31 bits of the magnitude, carrying the sign.
    ///
    /// Larger magnitudes are silently truncated.
    pub fn to_i32(&self) -> i32 {
        let low = u64::from(self.limbs.get(0).copied().unwrap_or(0))
            | u64::from(self.limbs.get(1).copied().unwrap_or(0)) << LIMB_BITS;
        let magnitude = (low & 0x7fff_ffff) as i32;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &BigInteger) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal if self.is_negative() => self.compare_abs(other).reverse(),
            Ordering::Equal => self.compare_abs(other),
            unequal => unequal,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10))
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16))
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self> {
        BigInteger::from_str_radix(s, 10)
    }
}

// Conversions from primitive types
impl From<u64> for BigInteger {
    fn from(n: u64) -> Self {
        BigInteger::from_u64_with_sign(n, Sign::Positive)
    }
}

impl From<u32> for BigInteger {
    fn from(n: u32) -> Self {
        BigInteger::from(u64::from(n))
    }
}

impl From<i64> for BigInteger {
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        BigInteger::from_u64_with_sign(n.unsigned_abs(), sign)
    }
}

impl From<i32> for BigInteger {
    fn from(n: i32) -> Self {
        BigInteger::from(i64::from(n))
    }
}

impl From<&BigInteger> for BigInteger {
    fn from(n: &BigInteger) -> Self {
        n.clone()
    }
}

/// Truncates the double towards zero.  NaN and the infinities are rejected.
impl TryFrom<f64> for BigInteger {
    type Error = BigIntegerError;

    fn try_from(value: f64) -> Result<Self> {
        let (sign, out) = double::to_limbs(value)?;
        Ok(BigInteger::from_parts(sign, out))
    }
}

impl serde::Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.sign.as_i8())?;
        tuple.serialize_element(&self.to_bytes_be())?;
        tuple.end()
    }
}

impl<'de> serde::Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> std::result::Result<BigInteger, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct BigIntegerVisitor;

        impl<'de> Visitor<'de> for BigIntegerVisitor {
            type Value = BigInteger;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a tuple of (sign, big-endian bytes)")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<BigInteger, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let sign: i8 = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let bytes: Vec<u8> = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                if sign == 0 {
                    if bytes.iter().any(|&b| b != 0) {
                        return Err(serde::de::Error::invalid_value(
                            serde::de::Unexpected::Bytes(&bytes),
                            &"an all-zero magnitude for sign 0",
                        ));
                    }
                    return Ok(ZERO.clone());
                }
                Ok(BigInteger::from_bytes(&bytes, Sign::from_i8(sign), false))
            }
        }

        deserializer.deserialize_tuple(2, BigIntegerVisitor)
    }
}
