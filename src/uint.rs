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

//! Unsigned 128-bit integer.

use crate::u256::U256;
use std::fmt;

/// Largest power of ten that fits in 128 bits.
pub const MAX_POW10_U128: u32 = 38;

/// `10^0 ..= 10^38`.
pub static POWERS_10: [u128; MAX_POW10_U128 as usize + 1] = build_powers_10();

const fn build_powers_10() -> [u128; MAX_POW10_U128 as usize + 1] {
    let mut table = [1u128; MAX_POW10_U128 as usize + 1];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
}

/// Unsigned 128-bit integer viewed as two 64-bit halves.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U128(u128);

impl U128 {
    pub const ZERO: U128 = U128(0);
    pub const ONE: U128 = U128(1);
    pub const MAX: U128 = U128(u128::MAX);

    #[inline(always)]
    pub const fn new(val: u128) -> U128 {
        U128(val)
    }

    #[inline(always)]
    pub const fn from_hi_lo(hi: u64, lo: u64) -> U128 {
        U128(((hi as u128) << 64) | lo as u128)
    }

    #[inline(always)]
    pub const fn hi(self) -> u64 {
        (self.0 >> 64) as u64
    }

    #[inline(always)]
    pub const fn lo(self) -> u64 {
        self.0 as u64
    }

    #[inline(always)]
    pub const fn get(self) -> u128 {
        self.0
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the sum and whether a carry out of bit 127 occurred.
    #[inline]
    pub const fn overflowing_add(self, other: U128) -> (U128, bool) {
        let (lo, carry) = self.lo().overflowing_add(other.lo());
        let (hi, c1) = self.hi().overflowing_add(other.hi());
        let (hi, c2) = hi.overflowing_add(carry as u64);
        (U128::from_hi_lo(hi, lo), c1 || c2)
    }

    /// Returns the difference and whether a borrow occurred, i.e. `self < other`.
    #[inline]
    pub const fn overflowing_sub(self, other: U128) -> (U128, bool) {
        let (lo, borrow) = self.lo().overflowing_sub(other.lo());
        let (hi, b1) = self.hi().overflowing_sub(other.hi());
        let (hi, b2) = hi.overflowing_sub(borrow as u64);
        (U128::from_hi_lo(hi, lo), b1 || b2)
    }

    /// Widening multiplication. The result's carry is non-zero iff the product
    /// doesn't fit in 128 bits.
    #[inline(always)]
    pub const fn mul(self, other: U128) -> U256 {
        U256::mul128(self.0, other.0)
    }

    #[inline]
    pub const fn checked_mul(self, other: U128) -> Option<U128> {
        let res = self.mul(other);
        if res.carry() != 0 {
            None
        } else {
            Some(U128(res.low()))
        }
    }

    /// Divides `self` by `other`. `other` must not be zero.
    #[inline]
    pub fn div_rem(self, other: U128) -> (U128, U128) {
        debug_assert!(!other.is_zero());
        (U128(self.0 / other.0), U128(self.0 % other.0))
    }

    /// Multiplies by `10^exp`, returning `None` when the result doesn't fit.
    #[inline]
    pub fn checked_mul_pow10(self, exp: u32) -> Option<U128> {
        if exp > MAX_POW10_U128 {
            return if self.is_zero() { Some(U128::ZERO) } else { None };
        }
        self.checked_mul(U128(POWERS_10[exp as usize]))
    }

    /// Number of decimal digits, `0` has one digit.
    #[inline]
    pub fn count_digits(self) -> u32 {
        match POWERS_10.binary_search(&self.0) {
            Ok(pos) => pos as u32 + 1,
            Err(pos) => pos.max(1) as u32,
        }
    }

    #[inline(always)]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }
}

impl From<u128> for U128 {
    #[inline(always)]
    fn from(val: u128) -> U128 {
        U128(val)
    }
}

impl From<u64> for U128 {
    #[inline(always)]
    fn from(val: u64) -> U128 {
        U128(val as u128)
    }
}

impl fmt::Display for U128 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "U128 {{ hi: {:#x}, lo: {:#x} }}", self.hi(), self.lo())
    }
}
