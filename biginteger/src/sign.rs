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
use std::ops::{Mul, Neg};

/// The sign of a `BigInteger`.
///
/// `Zero` is used for exactly one value, and a `BigInteger` with this sign
/// never carries limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// `-1`, `0` or `+1`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub fn from_i8(sign: i8) -> Sign {
        match sign {
            s if s < 0 => Sign::Negative,
            0 => Sign::Zero,
            _ => Sign::Positive,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sign;

    #[test]
    fn test_sign_mul() {
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
        assert_eq!(-Sign::Positive, Sign::Negative);
    }

    #[test]
    fn test_sign_i8() {
        for s in [Sign::Negative, Sign::Zero, Sign::Positive].iter() {
            assert_eq!(Sign::from_i8(s.as_i8()), *s);
        }
        assert_eq!(Sign::from_i8(-7), Sign::Negative);
    }
}
