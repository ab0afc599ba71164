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
use thiserror::Error;

/// Represents rejected inputs.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BigIntegerError {
    #[error("cannot convert a non-finite double to an integer")]
    NonFinite,
    #[error("radix {0} is outside 2..=36")]
    InvalidRadix(u32),
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("exponent {0} is outside 0..=2147483647")]
    ExponentOutOfRange(i64),
    #[error("divide by zero")]
    DivisionByZero,
    #[error("limb {0:#x} does not fit in 26 bits")]
    LimbOutOfRange(u32),
    #[error("zero sign with a nonzero magnitude")]
    SignMismatch,
}

pub type Result<T> = std::result::Result<T, BigIntegerError>;
