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

//! Free-function forms of the `BigInteger` operations.
//!
//! Every operand accepts anything convertible into a `BigInteger`, so native
//! integers can be mixed with big values: `ops::div_rem(&value, 58)`.  The
//! conversion happens once, before delegating to the method of the same name.

pub use crate::bigint::{BigInteger, DivRem};
use crate::error::Result;
use std::cmp::Ordering;

#[inline]
pub fn add<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> BigInteger {
    let x: BigInteger = x.into();
    x.add(&y.into())
}

#[inline]
pub fn subtract<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> BigInteger {
    let x: BigInteger = x.into();
    x.subtract(&y.into())
}

#[inline]
pub fn multiply<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> BigInteger {
    let x: BigInteger = x.into();
    x.multiply(&y.into())
}

/// Truncating division; fails on a zero divisor.
#[inline]
pub fn div_rem<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> Result<DivRem> {
    let x: BigInteger = x.into();
    x.div_rem(&y.into())
}

#[inline]
pub fn modulo<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> Result<BigInteger> {
    let x: BigInteger = x.into();
    x.modulo(&y.into())
}

#[inline]
pub fn pow<X: Into<BigInteger>>(value: X, exponent: i64) -> Result<BigInteger> {
    let value: BigInteger = value.into();
    value.pow(exponent)
}

#[inline]
pub fn negate<X: Into<BigInteger>>(x: X) -> BigInteger {
    let x: BigInteger = x.into();
    x.negate()
}

/// Signed comparison.
#[inline]
pub fn compare<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> Ordering {
    let x: BigInteger = x.into();
    x.cmp(&y.into())
}

#[inline]
pub fn compare_abs<X: Into<BigInteger>, Y: Into<BigInteger>>(x: X, y: Y) -> Ordering {
    let x: BigInteger = x.into();
    x.compare_abs(&y.into())
}

/// Parses a decimal string.
#[inline]
pub fn parse(s: &str) -> Result<BigInteger> {
    BigInteger::from_str_radix(s, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BigIntegerError;

    #[test]
    fn test_mixed_operands() {
        let big = parse("1000").unwrap();
        let d = div_rem(&big, 58).unwrap();
        assert_eq!(d.quotient, BigInteger::from(17));
        assert_eq!(d.remainder, BigInteger::from(14));
        assert_eq!(add(2, &big), BigInteger::from(1002));
        assert_eq!(subtract(2u64, big.clone()), BigInteger::from(-998));
        assert_eq!(multiply(-3i64, &big), BigInteger::from(-3000));
        assert_eq!(negate(&big), BigInteger::from(-1000));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(-5, 3), Ordering::Less);
        assert_eq!(compare_abs(-5, 3), Ordering::Greater);
        assert_eq!(compare(0, 0), Ordering::Equal);
    }

    #[test]
    fn test_errors() {
        assert_eq!(modulo(5, 0), Err(BigIntegerError::DivisionByZero));
        assert_eq!(pow(2, -1), Err(BigIntegerError::ExponentOutOfRange(-1)));
        assert_eq!(pow(2, 10).unwrap().to_string(), "1024");
    }
}
