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
#![deny(unsafe_code)]

pub mod bigint;
mod division;
mod double;
pub mod error;
mod impls;
pub mod limbs;
pub mod ops;
pub mod sign;

pub use self::bigint::{BigInteger, DivRem, MINUS_ONE, ONE, ZERO};
pub use self::error::{BigIntegerError, Result};
pub use self::sign::Sign;
