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

//! Rounding to a number of fractional digits.

use crate::bint::Bint;
use crate::decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundingMode {
    Truncate,
    Floor,
    Ceil,
    HalfEven,
    HalfAwayFromZero,
    HalfTowardZero,
    AwayFromZero,
}

impl Decimal {
    /// Rounds `self` to `scale` fractional digits.
    ///
    /// The result has exactly `scale` fractional digits unless `self` already had fewer,
    /// in which case `self` is returned unchanged.
    fn round_internal(&self, scale: u8, mode: RoundingMode) -> Decimal {
        if self.scale <= scale {
            return self.clone();
        }

        let shift = (self.scale - scale) as u32;
        let (quotient, rem) = self.coef.quo_rem_pow10(shift);
        let (digit, rest) = rem.quo_rem_pow10(shift - 1);
        let digit = digit.to_u128().unwrap_or_default();
        let inexact = digit != 0 || !rest.is_zero();

        let round_up = match mode {
            RoundingMode::Truncate => false,
            RoundingMode::Floor => self.neg && inexact,
            RoundingMode::Ceil => !self.neg && inexact,
            RoundingMode::AwayFromZero => inexact,
            RoundingMode::HalfAwayFromZero => digit >= 5,
            RoundingMode::HalfTowardZero => digit > 5 || (digit == 5 && !rest.is_zero()),
            RoundingMode::HalfEven => digit > 5 || (digit == 5 && (!rest.is_zero() || quotient.is_odd())),
        };

        let coef = if round_up { quotient.add(&Bint::ONE) } else { quotient };
        Decimal::new(self.neg, coef, scale)
    }

    /// Truncates `self` to `scale` fractional digits, i.e. rounds toward zero.
    #[inline]
    pub fn trunc(&self, scale: u8) -> Decimal {
        self.round_internal(scale, RoundingMode::Truncate)
    }

    /// Returns the largest integer less than or equal to `self`.
    #[inline]
    pub fn floor(&self) -> Decimal {
        self.round_internal(0, RoundingMode::Floor)
    }

    /// Returns the smallest integer greater than or equal to `self`.
    #[inline]
    pub fn ceil(&self) -> Decimal {
        self.round_internal(0, RoundingMode::Ceil)
    }

    /// Rounds half to even (banker's rounding).
    #[inline]
    pub fn round_bank(&self, scale: u8) -> Decimal {
        self.round_internal(scale, RoundingMode::HalfEven)
    }

    /// Rounds away from zero if any discarded digit is non-zero.
    #[inline]
    pub fn round_away_from_zero(&self, scale: u8) -> Decimal {
        self.round_internal(scale, RoundingMode::AwayFromZero)
    }

    /// Rounds half away from zero.
    #[inline]
    pub fn round_haz(&self, scale: u8) -> Decimal {
        self.round_internal(scale, RoundingMode::HalfAwayFromZero)
    }

    /// Rounds half toward zero: the magnitude goes up only when the discarded part
    /// is strictly greater than half a unit.
    #[inline]
    pub fn round_htz(&self, scale: u8) -> Decimal {
        self.round_internal(scale, RoundingMode::HalfTowardZero)
    }

    /// Removes trailing zeros from the fractional part.
    pub fn trim_trailing_zeros(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }

        let mut coef = self.coef.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (q, r) = coef.quo_rem_pow10(1);
            if !r.is_zero() {
                break;
            }
            coef = q;
            scale -= 1;
        }

        if scale == self.scale {
            self.clone()
        } else {
            Decimal::new(self.neg, coef, scale)
        }
    }
}
