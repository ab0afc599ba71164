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

//! Conversion of IEEE-754 doubles into limbs.

use crate::error::{BigIntegerError, Result};
use crate::limbs::{self, LIMB_BITS, LIMB_MASK};
use crate::sign::Sign;

const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const IMPLICIT_BIT: u64 = 1 << 52;
const EXPONENT_BIAS: i32 = 1075;
const SUBNORMAL_EXPONENT: i32 = -1074;

/// A double split into `sign * mantissa * 2^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DoubleParts {
    pub sign: Sign,
    pub mantissa: u64,
    pub exponent: i32,
    pub finite: bool,
}

pub(crate) fn decompose(value: f64) -> DoubleParts {
    let bits = value.to_bits();
    let sign = if bits >> 63 == 1 {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let mut mantissa = bits & MANTISSA_MASK;
    let biased = ((bits >> 52) & 0x7FF) as i32;
    let (exponent, finite) = match biased {
        0 if mantissa != 0 => (SUBNORMAL_EXPONENT, true),
        0 => (0, true),
        0x7FF => (biased, false),
        _ => {
            mantissa |= IMPLICIT_BIT;
            (biased - EXPONENT_BIAS, true)
        }
    };
    DoubleParts {
        sign,
        mantissa,
        exponent,
        finite,
    }
}

/// Truncates `value` towards zero and splits the result into a sign and
/// unclamped limbs.
pub(crate) fn to_limbs(value: f64) -> Result<(Sign, Vec<u32>)> {
    let parts = decompose(value);
    if !parts.finite {
        return Err(BigIntegerError::NonFinite);
    }
    if parts.mantissa == 0 || parts.exponent <= -64 {
        return Ok((Sign::Zero, Vec::new()));
    }
    if parts.exponent <= 0 {
        return Ok((parts.sign, limbs::from_u64(parts.mantissa >> -parts.exponent)));
    }
    if parts.exponent <= 11 {
        return Ok((parts.sign, limbs::from_u64(parts.mantissa << parts.exponent)));
    }

    // Move the leading bit of the mantissa to bit 63, then lay the 64 bits
    // over the limb grid starting at bit position `exponent`.
    let mantissa = parts.mantissa << 11;
    let exponent = (parts.exponent - 11) as usize;
    let units = (exponent + 64 + LIMB_BITS - 1) / LIMB_BITS;
    let first = (exponent + LIMB_BITS - 1) / LIMB_BITS;
    let skipped = (first * LIMB_BITS - exponent) as u32;

    let mut out = vec![0u32; units];
    for (n, limb) in out[first..].iter_mut().enumerate() {
        let shift = skipped + (n * LIMB_BITS) as u32;
        *limb = (mantissa.checked_shr(shift).unwrap_or(0) as u32) & LIMB_MASK;
    }
    if skipped > 0 {
        out[first - 1] = ((mantissa as u32) << (LIMB_BITS as u32 - skipped)) & LIMB_MASK;
    }
    Ok((parts.sign, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_normal() {
        let parts = decompose(1.0);
        assert_eq!(parts.sign, Sign::Positive);
        assert_eq!(parts.mantissa, IMPLICIT_BIT);
        assert_eq!(parts.exponent, -52);
        assert!(parts.finite);

        let parts = decompose(-3.0);
        assert_eq!(parts.sign, Sign::Negative);
        assert_eq!(parts.mantissa, 3 << 51);
        assert_eq!(parts.exponent, -51);
    }

    #[test]
    fn test_decompose_special() {
        assert_eq!(decompose(5e-324).exponent, SUBNORMAL_EXPONENT);
        assert!(!decompose(f64::INFINITY).finite);
        assert!(!decompose(f64::NAN).finite);
        assert_eq!(decompose(0.0).mantissa, 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(to_limbs(f64::NAN), Err(BigIntegerError::NonFinite));
        assert_eq!(to_limbs(f64::NEG_INFINITY), Err(BigIntegerError::NonFinite));
    }

    #[test]
    fn test_small_values() {
        assert_eq!(to_limbs(100000000.0), Ok((Sign::Positive, vec![100000000 & LIMB_MASK, 100000000 >> 26])));
        assert_eq!(to_limbs(-7.9), Ok((Sign::Negative, vec![7])));
        assert_eq!(to_limbs(0.5), Ok((Sign::Positive, vec![])));
    }

    #[test]
    fn test_power_of_two_across_limbs() {
        // 2^100 lives in limb 3 (bits 78..104) at bit 22.
        let (sign, mut out) = to_limbs(2f64.powi(100)).unwrap();
        limbs::clamp(&mut out);
        assert_eq!(sign, Sign::Positive);
        assert_eq!(out, vec![0, 0, 0, 1 << 22]);
    }
}
