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

//! Decimal coefficient: a 128-bit integer that falls back to an arbitrary-precision
//! integer when a result doesn't fit.
//!
//! A `Big` value is always greater than `u128::MAX`; every constructor goes through
//! [`Bint::from_big`], which demotes values that fit.

use crate::u256::U256;
use crate::uint::{MAX_POW10_U128, POWERS_10, U128};
use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;

/// Unsigned decimal coefficient.
#[derive(Clone)]
pub enum Bint {
    Fast(U128),
    Big(BigUint),
}

/// `10^exp` as a big integer.
#[inline]
pub fn big_pow10(exp: u32) -> BigUint {
    BigUint::from(10u8).pow(exp)
}

impl Bint {
    pub const ZERO: Bint = Bint::Fast(U128::ZERO);
    pub const ONE: Bint = Bint::Fast(U128::ONE);

    #[inline(always)]
    pub const fn from_u128(val: u128) -> Bint {
        Bint::Fast(U128::new(val))
    }

    #[inline]
    pub fn from_big(val: BigUint) -> Bint {
        match val.to_u128() {
            Some(v) => Bint::from_u128(v),
            None => Bint::Big(val),
        }
    }

    #[inline]
    fn from_u256(val: U256) -> Bint {
        match val.to_u128() {
            Some(v) => Bint::from_u128(v),
            None => {
                tracing::trace!("coefficient promoted to big integer");
                Bint::Big(val.to_big())
            }
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Bint::Fast(v) => v.is_zero(),
            Bint::Big(_) => false,
        }
    }

    /// Whether the arbitrary-precision fallback backs this value.
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        matches!(self, Bint::Big(_))
    }

    #[inline]
    pub fn to_u128(&self) -> Option<u128> {
        match self {
            Bint::Fast(v) => Some(v.get()),
            Bint::Big(_) => None,
        }
    }

    #[inline]
    pub fn to_big(&self) -> BigUint {
        match self {
            Bint::Fast(v) => BigUint::from(v.get()),
            Bint::Big(v) => v.clone(),
        }
    }

    /// Returns `true` if the lowest bit is set.
    #[inline]
    pub fn is_odd(&self) -> bool {
        match self {
            Bint::Fast(v) => v.get() & 1 == 1,
            Bint::Big(v) => v.is_odd(),
        }
    }

    pub fn add(&self, other: &Bint) -> Bint {
        if let (Bint::Fast(a), Bint::Fast(b)) = (self, other) {
            let (sum, carry) = a.overflowing_add(*b);
            if !carry {
                return Bint::Fast(sum);
            }
            tracing::trace!("coefficient addition promoted to big integer");
        }
        Bint::from_big(self.to_big() + other.to_big())
    }

    /// Returns `None` if `other > self`.
    pub fn checked_sub(&self, other: &Bint) -> Option<Bint> {
        match (self, other) {
            (Bint::Fast(a), Bint::Fast(b)) => {
                let (diff, borrow) = a.overflowing_sub(*b);
                if borrow {
                    None
                } else {
                    Some(Bint::Fast(diff))
                }
            }
            (Bint::Fast(_), Bint::Big(_)) => None,
            (Bint::Big(a), Bint::Fast(b)) => Some(Bint::from_big(a - b.get())),
            (Bint::Big(a), Bint::Big(b)) => {
                if a < b {
                    None
                } else {
                    Some(Bint::from_big(a - b))
                }
            }
        }
    }

    pub fn mul(&self, other: &Bint) -> Bint {
        match (self, other) {
            (Bint::Fast(a), Bint::Fast(b)) => Bint::from_u256(a.mul(*b)),
            _ => Bint::from_big(self.to_big() * other.to_big()),
        }
    }

    #[inline]
    pub fn mul_u64(&self, other: u64) -> Bint {
        self.mul(&Bint::Fast(U128::from(other)))
    }

    /// Multiplies by `10^exp`.
    pub fn mul_pow10(&self, exp: u32) -> Bint {
        if exp == 0 || self.is_zero() {
            return self.clone();
        }
        match self {
            Bint::Fast(v) if exp <= MAX_POW10_U128 => {
                Bint::from_u256(v.mul(U128::new(POWERS_10[exp as usize])))
            }
            _ => Bint::from_big(self.to_big() * big_pow10(exp)),
        }
    }

    /// Raises to the power `n`, exactly.
    pub fn pow(&self, n: u32) -> Bint {
        match self {
            Bint::Fast(v) => match v.get().checked_pow(n) {
                Some(p) => Bint::from_u128(p),
                None => {
                    tracing::trace!(n, "coefficient power promoted to big integer");
                    Bint::from_big(BigUint::from(v.get()).pow(n))
                }
            },
            Bint::Big(v) => Bint::from_big(v.pow(n)),
        }
    }

    /// Truncating division, `other` must not be zero.
    pub fn quo_rem(&self, other: &Bint) -> (Bint, Bint) {
        debug_assert!(!other.is_zero());
        match (self, other) {
            (Bint::Fast(a), Bint::Fast(b)) => {
                let (q, r) = a.div_rem(*b);
                (Bint::Fast(q), Bint::Fast(r))
            }
            // a big divisor is larger than any fast dividend
            (Bint::Fast(_), Bint::Big(_)) => (Bint::ZERO, self.clone()),
            _ => {
                let (q, r) = self.to_big().div_rem(&other.to_big());
                (Bint::from_big(q), Bint::from_big(r))
            }
        }
    }

    /// Computes `self * 10^exp / divisor`, truncated. `divisor` must not be zero.
    pub fn scaled_quo(&self, exp: u32, divisor: &Bint) -> Bint {
        debug_assert!(!divisor.is_zero());
        if let (Bint::Fast(a), Bint::Fast(b)) = (self, divisor) {
            if exp <= MAX_POW10_U128 {
                let (q, _) = a.mul(U128::new(POWERS_10[exp as usize])).div_rem_u128(b.get());
                return Bint::from_u256(q);
            }
        }
        self.mul_pow10(exp).quo_rem(divisor).0
    }

    /// Divides by `10^exp`, returning the quotient and remainder.
    pub fn quo_rem_pow10(&self, exp: u32) -> (Bint, Bint) {
        if exp == 0 {
            return (self.clone(), Bint::ZERO);
        }
        match self {
            Bint::Fast(v) if exp > MAX_POW10_U128 => (Bint::ZERO, Bint::Fast(*v)),
            Bint::Fast(v) => {
                let (q, r) = v.div_rem(U128::new(POWERS_10[exp as usize]));
                (Bint::Fast(q), Bint::Fast(r))
            }
            Bint::Big(v) => {
                let (q, r) = v.div_rem(&big_pow10(exp));
                (Bint::from_big(q), Bint::from_big(r))
            }
        }
    }

    pub fn shl(&self, bits: u32) -> Bint {
        match self {
            Bint::Fast(v) if v.is_zero() => Bint::ZERO,
            Bint::Fast(v) if bits < 128 && v.leading_zeros() >= bits => Bint::from_u128(v.get() << bits),
            _ => {
                tracing::trace!(bits, "coefficient shift promoted to big integer");
                Bint::from_big(self.to_big() << bits)
            }
        }
    }

    pub fn shr(&self, bits: u32) -> Bint {
        match self {
            Bint::Fast(_) if bits >= 128 => Bint::ZERO,
            Bint::Fast(v) => Bint::from_u128(v.get() >> bits),
            Bint::Big(v) => Bint::from_big(v >> bits),
        }
    }

    /// Integer square root, truncated.
    pub fn sqrt(&self) -> Bint {
        match self {
            Bint::Fast(v) => Bint::from_u128(Roots::sqrt(&v.get())),
            Bint::Big(v) => Bint::from_big(v.sqrt()),
        }
    }

    /// Number of decimal digits, `0` has one digit.
    pub fn count_digits(&self) -> u32 {
        match self {
            Bint::Fast(v) => v.count_digits(),
            Bint::Big(v) => v.to_str_radix(10).len() as u32,
        }
    }

    /// Number of trailing decimal zeros, `0` has none.
    pub fn trailing_zeros(&self) -> u32 {
        if self.is_zero() {
            return 0;
        }
        let mut count = 0;
        let mut val = self.clone();
        loop {
            let (q, r) = val.quo_rem_pow10(1);
            if !r.is_zero() {
                return count;
            }
            val = q;
            count += 1;
        }
    }
}

impl From<u128> for Bint {
    #[inline]
    fn from(val: u128) -> Self {
        Bint::from_u128(val)
    }
}

impl From<u64> for Bint {
    #[inline]
    fn from(val: u64) -> Self {
        Bint::from_u128(val as u128)
    }
}

impl From<BigUint> for Bint {
    #[inline]
    fn from(val: BigUint) -> Self {
        Bint::from_big(val)
    }
}

impl PartialEq for Bint {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bint {}

impl PartialOrd for Bint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bint::Fast(a), Bint::Fast(b)) => a.cmp(b),
            (Bint::Fast(_), Bint::Big(_)) => Ordering::Less,
            (Bint::Big(_), Bint::Fast(_)) => Ordering::Greater,
            (Bint::Big(a), Bint::Big(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Bint {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bint::Fast(v) => fmt::Display::fmt(v, f),
            Bint::Big(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl fmt::Debug for Bint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bint::Fast(v) => write!(f, "Fast({})", v),
            Bint::Big(v) => write!(f, "Big({})", v),
        }
    }
}

impl Default for Bint {
    #[inline]
    fn default() -> Self {
        Bint::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> Bint {
        Bint::from_big(s.parse::<BigUint>().unwrap())
    }

    #[test]
    fn test_from_big_demotes() {
        assert!(!Bint::from_big(BigUint::from(u128::MAX)).is_overflowed());
        assert!(Bint::from_big(BigUint::from(u128::MAX) + 1u8).is_overflowed());
        assert_eq!(Bint::from_big(BigUint::from(42u8)), Bint::from_u128(42));
    }

    #[test]
    fn test_add() {
        let sum = Bint::from_u128(1).add(&Bint::from_u128(2));
        assert_eq!(sum, Bint::from_u128(3));
        assert!(!sum.is_overflowed());

        let sum = Bint::from_u128(u128::MAX).add(&Bint::ONE);
        assert!(sum.is_overflowed());
        assert_eq!(sum.to_string(), "340282366920938463463374607431768211456");

        let sum = big("340282366920938463463374607431768211456").add(&Bint::ONE);
        assert_eq!(sum.to_string(), "340282366920938463463374607431768211457");
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(Bint::from_u128(5).checked_sub(&Bint::from_u128(3)), Some(Bint::from_u128(2)));
        assert_eq!(Bint::from_u128(3).checked_sub(&Bint::from_u128(5)), None);

        let b = big("340282366920938463463374607431768211456");
        assert_eq!(Bint::from_u128(1).checked_sub(&b), None);
        let diff = b.checked_sub(&Bint::ONE).unwrap();
        assert!(!diff.is_overflowed());
        assert_eq!(diff, Bint::from_u128(u128::MAX));
        assert_eq!(b.checked_sub(&b), Some(Bint::ZERO));
    }

    #[test]
    fn test_mul() {
        let p = Bint::from_u128(1 << 64).mul(&Bint::from_u128(1 << 63));
        assert!(!p.is_overflowed());
        assert_eq!(p, Bint::from_u128(1 << 127));

        let p = Bint::from_u128(1 << 64).mul(&Bint::from_u128(1 << 64));
        assert!(p.is_overflowed());
        assert_eq!(p.to_string(), "340282366920938463463374607431768211456");

        let p = Bint::from_u128(u128::MAX).mul_u64(0);
        assert!(p.is_zero());
        assert!(!p.is_overflowed());
    }

    #[test]
    fn test_mul_pow10() {
        assert_eq!(Bint::from_u128(123).mul_pow10(3), Bint::from_u128(123000));
        let p = Bint::from_u128(4).mul_pow10(38);
        assert!(p.is_overflowed());
        assert_eq!(p.to_string(), format!("4{}", "0".repeat(38)));
        assert_eq!(Bint::from_u128(1).mul_pow10(40).to_string(), format!("1{}", "0".repeat(40)));
        assert_eq!(Bint::ZERO.mul_pow10(100), Bint::ZERO);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Bint::from_u128(7).pow(0), Bint::ONE);
        assert_eq!(Bint::ZERO.pow(5), Bint::ZERO);
        assert_eq!(Bint::from_u128(10).pow(38), Bint::from_u128(POWERS_10[38]));

        let p = Bint::from_u128(10).pow(39);
        assert!(p.is_overflowed());
        assert_eq!(p.to_string(), format!("1{}", "0".repeat(39)));

        let p = Bint::from_u128(2).pow(128);
        assert_eq!(p.to_string(), "340282366920938463463374607431768211456");
        let p = p.pow(2);
        assert_eq!(p.to_string(), "115792089237316195423570985008687907853269984665640564039457584007913129639936");
    }

    #[test]
    fn test_quo_rem() {
        let (q, r) = Bint::from_u128(17).quo_rem(&Bint::from_u128(5));
        assert_eq!((q, r), (Bint::from_u128(3), Bint::from_u128(2)));

        let b = big("680564733841876926926749214863536422912");
        let (q, r) = b.quo_rem(&Bint::from_u128(2));
        assert!(q.is_overflowed());
        assert_eq!(q.to_string(), "340282366920938463463374607431768211456");
        assert!(r.is_zero());

        let (q, r) = Bint::from_u128(7).quo_rem(&b);
        assert!(q.is_zero());
        assert_eq!(r, Bint::from_u128(7));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Bint::ZERO.sqrt(), Bint::ZERO);
        assert_eq!(Bint::from_u128(15).sqrt(), Bint::from_u128(3));
        assert_eq!(Bint::from_u128(16).sqrt(), Bint::from_u128(4));
        assert_eq!(Bint::from_u128(u128::MAX).sqrt(), Bint::from_u128(u64::MAX as u128));

        let root = big("100000000000000000000000000000000000000000").sqrt();
        assert!(!root.is_overflowed());
        assert_eq!(root.to_string(), "316227766016837933199");
    }

    #[test]
    fn test_quo_rem_pow10() {
        let (q, r) = Bint::from_u128(123456).quo_rem_pow10(3);
        assert_eq!((q, r), (Bint::from_u128(123), Bint::from_u128(456)));

        let (q, r) = Bint::from_u128(123456).quo_rem_pow10(39);
        assert_eq!((q, r), (Bint::ZERO, Bint::from_u128(123456)));

        let b = big("123456789012345678901234567890123456789012");
        let (q, r) = b.quo_rem_pow10(4);
        assert_eq!(q.to_string(), "12345678901234567890123456789012345678");
        assert!(!q.is_overflowed());
        assert_eq!(r, Bint::from_u128(9012));
    }

    #[test]
    fn test_scaled_quo() {
        assert_eq!(Bint::ONE.scaled_quo(19, &Bint::from_u128(3)), Bint::from_u128(3333333333333333333));
        assert_eq!(Bint::from_u128(7).scaled_quo(0, &Bint::from_u128(2)), Bint::from_u128(3));

        let q = Bint::from_u128(u128::MAX).scaled_quo(38, &Bint::from_u128(3));
        assert!(q.is_overflowed());
        assert_eq!(q.to_string(), format!("113427455640312821154458202477256070485{}", "0".repeat(38)));

        let b = big("340282366920938463463374607431768211456");
        assert_eq!(b.scaled_quo(2, &b), Bint::from_u128(100));
        assert_eq!(Bint::from_u128(5).scaled_quo(40, &Bint::from_u128(5)).to_string(), format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn test_shift() {
        assert_eq!(Bint::from_u128(3).shl(4), Bint::from_u128(48));
        let s = Bint::ONE.shl(128);
        assert!(s.is_overflowed());
        assert_eq!(s.shr(128), Bint::ONE);
        assert!(!s.shr(1).is_overflowed());
        assert_eq!(Bint::from_u128(u128::MAX).shr(200), Bint::ZERO);
        assert_eq!(Bint::ZERO.shl(300), Bint::ZERO);
        assert!(Bint::from_u128(1 << 127).shl(1).is_overflowed());
    }

    #[test]
    fn test_digits() {
        assert_eq!(Bint::ZERO.count_digits(), 1);
        assert_eq!(Bint::from_u128(12345).count_digits(), 5);
        assert_eq!(big("123456789012345678901234567890123456789012").count_digits(), 42);

        assert_eq!(Bint::ZERO.trailing_zeros(), 0);
        assert_eq!(Bint::from_u128(1200).trailing_zeros(), 2);
        assert_eq!(Bint::ONE.mul_pow10(45).trailing_zeros(), 45);
    }

    #[test]
    fn test_cmp() {
        let b = big("340282366920938463463374607431768211456");
        assert!(Bint::from_u128(u128::MAX) < b);
        assert!(b > Bint::ZERO);
        assert_eq!(b.cmp(&b.clone()), Ordering::Equal);
        assert!(Bint::from_u128(2) > Bint::ONE);
    }
}
