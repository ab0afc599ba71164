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

//! Sign-agnostic arithmetic on raw limb sequences.
//!
//! A limb sequence is a little-endian slice of radix `2^26` digits.  Every
//! primitive here allocates and returns its own output; inputs are only
//! borrowed.  Outputs are clamped (no most-significant zero limbs).

use std::cmp::Ordering;

/// Width of a limb in bits.
pub const LIMB_BITS: usize = 26;

/// Mask selecting the bits of one limb.
pub const LIMB_MASK: u32 = (1 << LIMB_BITS) - 1;

/// The radix of the limb representation, `2^26`.
pub const LIMB_RADIX: u64 = 1 << LIMB_BITS;

/// Strips most-significant zero limbs.
#[inline]
pub fn clamp(limbs: &mut Vec<u32>) {
    while let Some(&0) = limbs.last() {
        limbs.pop();
    }
}

/// Ripple-carry addition of two magnitudes.
pub fn add_to(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };
    let mut r = Vec::with_capacity(x.len() + 1);
    let mut carry = 0u64;
    for (i, &xi) in x.iter().enumerate() {
        carry += u64::from(xi) + u64::from(y.get(i).copied().unwrap_or(0));
        r.push((carry & u64::from(LIMB_MASK)) as u32);
        carry >>= LIMB_BITS;
    }
    if carry > 0 {
        r.push(carry as u32);
    }
    clamp(&mut r);
    r
}

/// Ripple-borrow subtraction `x - y`.
///
/// The second element of the result is `true` when the borrow escaped past
/// the most significant limb, i.e. when `y > x`.  In that case the limbs are
/// the radix complement of the true difference and should be discarded.
pub fn subtract_to(x: &[u32], y: &[u32]) -> (Vec<u32>, bool) {
    let len = x.len().max(y.len());
    let mut r = Vec::with_capacity(len);
    let mut borrow = 0i64;
    for i in 0..len {
        borrow += i64::from(x.get(i).copied().unwrap_or(0)) - i64::from(y.get(i).copied().unwrap_or(0));
        r.push((borrow & i64::from(LIMB_MASK)) as u32);
        borrow >>= LIMB_BITS;
    }
    clamp(&mut r);
    (r, borrow < 0)
}

/// Schoolbook multiplication, with the product shifted up by `offset` limbs.
///
/// The shorter operand drives the outer loop.  Zero limbs of the outer
/// operand are skipped.
pub fn multiply_to(x: &[u32], y: &[u32], offset: usize) -> Vec<u32> {
    let (x, y) = if x.len() > y.len() { (y, x) } else { (x, y) };
    if x.is_empty() {
        return Vec::new();
    }
    let mut r = vec![0u32; offset + x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        for (j, &yj) in y.iter().enumerate() {
            let mut c = u64::from(xi) * u64::from(yj);
            if c == 0 {
                continue;
            }
            let mut k = offset + i + j;
            loop {
                c += u64::from(r[k]);
                r[k] = (c & u64::from(LIMB_MASK)) as u32;
                c /= LIMB_RADIX;
                if c == 0 {
                    break;
                }
                k += 1;
            }
        }
    }
    clamp(&mut r);
    r
}

/// Compares two clamped magnitudes.
pub fn compare_abs(x: &[u32], y: &[u32]) -> Ordering {
    x.len()
        .cmp(&y.len())
        .then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

/// Number of significant bits in a single limb.
#[inline]
pub fn limb_bit_length(limb: u32) -> usize {
    (32 - limb.leading_zeros()) as usize
}

/// Splits a native integer into limbs.
pub fn from_u64(mut value: u64) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(3);
    while value != 0 {
        limbs.push((value & u64::from(LIMB_MASK)) as u32);
        value >>= LIMB_BITS;
    }
    limbs
}
