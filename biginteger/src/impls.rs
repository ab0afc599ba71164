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

//! Operator and `num-traits` implementations for `BigInteger`.

use crate::bigint::{BigInteger, DivRem, ONE, ZERO};
use crate::error::BigIntegerError;
use crate::sign::Sign;
use num_traits::{Num, One, Signed, Zero};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

fn checked_div_rem(x: &BigInteger, y: &BigInteger) -> DivRem {
    match x.div_rem(y) {
        Ok(d) => d,
        Err(_) => panic!("divide by zero"),
    }
}

fn quotient(x: &BigInteger, y: &BigInteger) -> BigInteger {
    checked_div_rem(x, y).quotient
}

fn remainder(x: &BigInteger, y: &BigInteger) -> BigInteger {
    checked_div_rem(x, y).remainder
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident, $func:path) => {
        impl $trait<BigInteger> for BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, other: BigInteger) -> BigInteger {
                $func(&self, &other)
            }
        }

        impl<'a> $trait<&'a BigInteger> for BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, other: &BigInteger) -> BigInteger {
                $func(&self, other)
            }
        }

        impl<'a> $trait<BigInteger> for &'a BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, other: BigInteger) -> BigInteger {
                $func(self, &other)
            }
        }

        impl<'a, 'b> $trait<&'b BigInteger> for &'a BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, other: &BigInteger) -> BigInteger {
                $func(self, other)
            }
        }

        impl $trait_assign<BigInteger> for BigInteger {
            #[inline]
            fn $method_assign(&mut self, other: BigInteger) {
                *self = $func(self, &other);
            }
        }

        impl<'a> $trait_assign<&'a BigInteger> for BigInteger {
            #[inline]
            fn $method_assign(&mut self, other: &BigInteger) {
                *self = $func(self, other);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, BigInteger::add);
impl_binop!(Sub, sub, SubAssign, sub_assign, BigInteger::subtract);
impl_binop!(Mul, mul, MulAssign, mul_assign, BigInteger::multiply);
// `/` and `%` panic on a zero divisor, like the primitive integer operators.
impl_binop!(Div, div, DivAssign, div_assign, quotient);
impl_binop!(Rem, rem, RemAssign, rem_assign, remainder);

// Mixed operations with primitive integers
macro_rules! impl_scalar_binop {
    ($scalar:ty, $($trait:ident, $method:ident, $func:path);*) => {
        $(
            impl $trait<$scalar> for BigInteger {
                type Output = BigInteger;
                #[inline]
                fn $method(self, other: $scalar) -> BigInteger {
                    $func(&self, &BigInteger::from(other))
                }
            }

            impl<'a> $trait<$scalar> for &'a BigInteger {
                type Output = BigInteger;
                #[inline]
                fn $method(self, other: $scalar) -> BigInteger {
                    $func(self, &BigInteger::from(other))
                }
            }
        )*
    };
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_binop!($scalar,
                Add, add, BigInteger::add;
                Sub, sub, BigInteger::subtract;
                Mul, mul, BigInteger::multiply;
                Div, div, quotient;
                Rem, rem, remainder);
        )*
    };
}

impl_scalar_ops!(u32, u64, i32, i64);

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        ONE.clone()
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = BigIntegerError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, BigIntegerError> {
        BigInteger::from_str_radix(s, radix)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            ZERO.clone()
        } else {
            self.subtract(other)
        }
    }

    fn signum(&self) -> Self {
        BigInteger::from(i32::from(self.sign().as_i8()))
    }

    fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let x = BigInteger::from(20);
        assert_eq!(&x + 3u32, BigInteger::from(23));
        assert_eq!(&x - 25i64, BigInteger::from(-5));
        assert_eq!(&x * -2i32, BigInteger::from(-40));
        assert_eq!(&x / 6u64, BigInteger::from(3));
        assert_eq!(x % 6, BigInteger::from(2));
    }

    #[test]
    fn test_assign_ops() {
        let mut x = BigInteger::from(7);
        x += BigInteger::from(5);
        x *= &BigInteger::from(3);
        x -= BigInteger::from(1);
        x /= BigInteger::from(4);
        x %= &BigInteger::from(5);
        // ((7 + 5) * 3 - 1) / 4 = 8, 8 % 5 = 3
        assert_eq!(x, BigInteger::from(3));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_div_operator_zero() {
        drop(BigInteger::from(1) / BigInteger::zero())
    }

    #[test]
    fn test_signed() {
        let x = BigInteger::from(-9);
        assert_eq!(Signed::abs(&x), BigInteger::from(9));
        assert_eq!(x.signum(), BigInteger::from(-1));
        assert!(Signed::is_negative(&x));
        assert!(!x.is_positive());
        assert_eq!(BigInteger::from(3).abs_sub(&BigInteger::from(5)), BigInteger::zero());
        assert_eq!(BigInteger::from(5).abs_sub(&BigInteger::from(3)), BigInteger::from(2));
        assert_eq!(BigInteger::zero().signum(), BigInteger::zero());
    }

    #[test]
    fn test_num_from_str_radix() {
        let x = <BigInteger as Num>::from_str_radix("-ff", 16).unwrap();
        assert_eq!(x, BigInteger::from(-255));
        assert!(<BigInteger as Num>::from_str_radix("12", 40).is_err());
    }
}
