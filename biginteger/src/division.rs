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

//! Long division of limb sequences.

use crate::limbs::{self, LIMB_MASK, LIMB_RADIX};
use std::cmp::Ordering;

/// Divides the magnitude `x` by the magnitude `y`, returning the quotient and
/// remainder limbs.
///
/// Requires `|x| > |y| > 0`; the trivial cases are handled by the caller.
///
/// Each quotient limb is first estimated from the two leading limbs of the
/// running remainder and the leading limb of `y`.  The estimate is an upper
/// bound, and the exact digit is then found by bisecting `[0, estimate]`,
/// using the borrow of a trial subtraction as the comparison.
pub(crate) fn long_divide(x: &[u32], y: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!y.is_empty());
    debug_assert_eq!(limbs::compare_abs(x, y), Ordering::Greater);
    log::trace!("long division of {} limbs by {} limbs", x.len(), y.len());

    let top = u64::from(y[y.len() - 1]);
    let mut quotient = vec![0u32; x.len() - y.len() + 1];
    let mut remainder = x.to_vec();

    for i in (y.len() - 1..x.len()).rev() {
        let offset = i + 1 - y.len();
        let lookahead = u64::from(remainder.get(i).copied().unwrap_or(0))
            + u64::from(remainder.get(i + 1).copied().unwrap_or(0)) * LIMB_RADIX;
        let mut max = (lookahead / top).min(u64::from(LIMB_MASK)) as u32;
        if max == 0 {
            continue;
        }

        // The estimate is exact whenever `y` has a single limb, and often
        // otherwise, so try it before bisecting.
        let product = limbs::multiply_to(y, &[max], offset);
        let (difference, negative) = limbs::subtract_to(&remainder, &product);
        if !negative {
            quotient[offset] = max;
            remainder = difference;
            continue;
        }
        max -= 1;

        let mut min = 0u32;
        while min != max {
            let candidate = ((u64::from(min) + u64::from(max) + 1) / 2) as u32;
            let product = limbs::multiply_to(y, &[candidate], offset);
            let (_, negative) = limbs::subtract_to(&remainder, &product);
            if negative {
                max = candidate - 1;
            } else {
                min = candidate;
            }
        }
        quotient[offset] = min;
        if min > 0 {
            let product = limbs::multiply_to(y, &[min], offset);
            remainder = limbs::subtract_to(&remainder, &product).0;
        }
    }

    limbs::clamp(&mut quotient);
    limbs::clamp(&mut remainder);
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::long_divide;
    use crate::limbs::LIMB_MASK;

    #[test]
    fn test_single_limb() {
        let (q, r) = long_divide(&[1000], &[58]);
        assert_eq!(q, vec![17]);
        assert_eq!(r, vec![14]);
    }

    #[test]
    fn test_exact_multi_limb() {
        // (2^52 - 1)^2 / (2^52 - 1)
        let (q, r) = long_divide(&[1, 0, LIMB_MASK - 1, LIMB_MASK], &[LIMB_MASK, LIMB_MASK]);
        assert_eq!(q, vec![LIMB_MASK, LIMB_MASK]);
        assert!(r.is_empty());
    }

    #[test]
    fn test_remainder_keeps_low_limbs() {
        // (2^26 * 5 + 3) / 2^26 = 5 remainder 3
        let (q, r) = long_divide(&[3, 5], &[0, 1]);
        assert_eq!(q, vec![5]);
        assert_eq!(r, vec![3]);
    }
}
