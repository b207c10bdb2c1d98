// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unsigned 256-bit integer, only used as a multiplication and division intermediate.

use num_bigint::BigUint;

const N_UDWORD_BITS: u32 = 128;
const HALF_BITS: u32 = N_UDWORD_BITS / 2;
const LOWER_MASK: u128 = u128::MAX >> HALF_BITS;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct U256 {
    high: u128,
    low: u128,
}

impl U256 {
    pub const ZERO: U256 = U256::from_u128(0, 0);

    #[inline(always)]
    pub const fn from_u128(low: u128, high: u128) -> U256 {
        U256 { high, low }
    }

    #[inline(always)]
    pub const fn low(&self) -> u128 {
        self.low
    }

    #[inline(always)]
    pub const fn high(&self) -> u128 {
        self.high
    }

    /// The part of a 128x128 product above bit 127.
    /// Non-zero means the product doesn't fit in 128 bits.
    #[inline(always)]
    pub const fn carry(&self) -> u128 {
        self.high
    }

    #[inline(always)]
    pub const fn to_u128(&self) -> Option<u128> {
        if self.high == 0 {
            Some(self.low)
        } else {
            None
        }
    }

    pub fn to_big(&self) -> BigUint {
        if self.high == 0 {
            return BigUint::from(self.low);
        }
        (BigUint::from(self.high) << N_UDWORD_BITS) | BigUint::from(self.low)
    }

    /// Widening 128x128 multiplication.
    #[inline(always)]
    pub const fn mul128(left: u128, right: u128) -> U256 {
        let mut low = (left & LOWER_MASK) * (right & LOWER_MASK);
        let mut t = low >> HALF_BITS;
        low &= LOWER_MASK;
        t += (left >> HALF_BITS) * (right & LOWER_MASK);
        let mut high = t >> HALF_BITS;
        t &= LOWER_MASK;
        t += (right >> HALF_BITS) * (left & LOWER_MASK);
        low += (t & LOWER_MASK) << HALF_BITS;
        high += t >> HALF_BITS;
        high += (left >> HALF_BITS) * (right >> HALF_BITS);

        U256::from_u128(low, high)
    }

    #[inline]
    pub const fn overflowing_add(self, other: U256) -> (U256, bool) {
        let (low, carry) = self.low.overflowing_add(other.low);
        let (high, c1) = self.high.overflowing_add(carry as u128);
        let (high, c2) = high.overflowing_add(other.high);
        (U256::from_u128(low, high), c1 || c2)
    }

    /// Divides by a non-zero 128-bit divisor, returning the quotient and remainder.
    #[inline]
    pub fn div_rem_u128(&self, divisor: u128) -> (U256, u128) {
        debug_assert!(divisor != 0);

        if self.high == 0 {
            return (U256::from_u128(self.low / divisor, 0), self.low % divisor);
        }

        let mut rem = 0;
        if self.high < divisor {
            let q = udiv256_by_128_to_128(self.high, self.low, divisor, &mut rem);
            (U256::from_u128(q, 0), rem)
        } else {
            let q_high = self.high / divisor;
            let q_low = udiv256_by_128_to_128(self.high % divisor, self.low, divisor, &mut rem);
            (U256::from_u128(q_low, q_high), rem)
        }
    }
}

/// Divides the 256-bit value `(u1, u0)` by `v`, requires `u1 < v`.
/// Knuth's algorithm D on 64-bit digits with a normalized divisor.
#[inline(always)]
fn udiv256_by_128_to_128(u1: u128, u0: u128, mut v: u128, r: &mut u128) -> u128 {
    const B: u128 = 1 << HALF_BITS;
    debug_assert!(u1 < v);

    let s = v.leading_zeros();
    let (un128, un10) = if s > 0 {
        v <<= s;
        ((u1 << s) | (u0 >> (N_UDWORD_BITS - s)), u0 << s)
    } else {
        (u1, u0)
    };

    let vn1 = v >> HALF_BITS;
    let vn0 = v & LOWER_MASK;

    let un1 = un10 >> HALF_BITS;
    let un0 = un10 & LOWER_MASK;

    let mut q1 = un128 / vn1;
    let mut rhat = un128 - q1 * vn1;

    // at most two corrections
    while q1 >= B || q1 * vn0 > B * rhat + un1 {
        q1 -= 1;
        rhat += vn1;
        if rhat >= B {
            break;
        }
    }

    let un21 = un128.wrapping_mul(B).wrapping_add(un1).wrapping_sub(q1.wrapping_mul(v));

    let mut q0 = un21 / vn1;
    rhat = un21 - q0 * vn1;

    while q0 >= B || q0 * vn0 > B * rhat + un0 {
        q0 -= 1;
        rhat += vn1;
        if rhat >= B {
            break;
        }
    }

    *r = (un21.wrapping_mul(B).wrapping_add(un0).wrapping_sub(q0.wrapping_mul(v))) >> s;
    q1 * B + q0
}
