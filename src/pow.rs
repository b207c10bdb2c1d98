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

//! Integer powers and square roots.

use crate::bint::Bint;
use crate::decimal::Decimal;
use crate::error::{DecimalError, Result};
use crate::precision::default_precision;
use crate::u256::U256;
use crate::uint::{MAX_POW10_U128, POWERS_10};
use std::cmp::Ordering;
use std::convert::TryFrom;

/// Scale of the `pow_fast_i32` fixed-point values.
const WORK_SCALE: u32 = MAX_POW10_U128;

/// Largest number of coefficient digits an exact power may produce.
const MAX_POW_COEF_DIGITS: u64 = 1 << 17;

/// `pow_fast_i32` accepts exponents with magnitude below `2^19`.
const MAX_FAST_EXP: u32 = 0x80000;

/// `10^38`, the fixed-point one of `pow_fast_i32`.
const FAST_ONE: u128 = 10u128.pow(WORK_SCALE);

/// `a * b / 10^38` on fixed-point values.
#[inline]
fn fast_mul(a: u128, b: u128) -> Result<u128> {
    let (q, _) = U256::mul128(a, b).div_rem_u128(FAST_ONE);
    q.to_u128().ok_or_else(|| {
        tracing::debug!(a, b, "fixed-point product overflowed");
        DecimalError::Overflow
    })
}

impl Decimal {
    /// Approximate `log10(|self|)`, never above the exact value. `self` must not be zero.
    fn log10_abs(&self) -> f64 {
        let int = match &self.coef {
            Bint::Fast(v) => (v.get() as f64).log10(),
            Bint::Big(_) => (self.coef.count_digits() - 1) as f64,
        };
        int - self.scale as f64
    }

    /// Raises `self` to the integer power `exp`, truncated to the default precision.
    ///
    /// The power is computed exactly and truncated once, so every returned digit is
    /// correct. `0^0` is `1`. Returns `Overflow` when the exact power would need more than
    /// `2^17` coefficient digits.
    pub fn pow_i32(&self, exp: i32) -> Result<Decimal> {
        if exp == i32::MIN {
            return Err(DecimalError::ExponentTooLarge);
        }
        if exp == 0 {
            return Ok(Decimal::ONE);
        }
        if self.is_zero() {
            return if exp < 0 {
                Err(DecimalError::ZeroPowNegative)
            } else {
                Ok(Decimal::ZERO)
            };
        }

        let n = exp.unsigned_abs();
        let neg = self.neg && n & 1 == 1;
        if self.cmp_abs(&Decimal::ONE) == Ordering::Equal {
            return Ok(Decimal::new(neg, Bint::ONE, 0));
        }

        let prec = default_precision() as u32;
        if exp as f64 * self.log10_abs() < -(prec as f64 + 1.0) {
            return Ok(Decimal::ZERO);
        }

        let scale = self.scale as u32;
        let digits = self.coef.count_digits().max(scale) as u64 * n as u64 + prec as u64;
        if digits > MAX_POW_COEF_DIGITS {
            tracing::debug!(exp, digits, "power result too large");
            return Err(DecimalError::Overflow);
        }

        // `digits` bounds `scale * n`, so it fits in u32
        let power = self.coef.pow(n);
        let power_scale = scale * n;
        if exp < 0 {
            let coef = Bint::ONE.scaled_quo(prec + power_scale, &power);
            return Ok(Decimal::new(neg, coef, prec as u8));
        }
        if power_scale <= prec {
            Ok(Decimal::new(neg, power, power_scale as u8))
        } else {
            let (coef, _) = power.quo_rem_pow10(power_scale - prec);
            Ok(Decimal::new(neg, coef, prec as u8))
        }
    }

    /// Raises `self` to the integer power `exp`.
    ///
    /// Returns `ExponentTooLarge` if `|exp|` exceeds `i32::MAX`.
    #[inline]
    pub fn pow_int(&self, exp: i64) -> Result<Decimal> {
        if exp.unsigned_abs() > i32::MAX as u64 {
            return Err(DecimalError::ExponentTooLarge);
        }
        self.pow_i32(exp as i32)
    }

    /// Raises `self` to the integer part of `exp`, the fractional part is ignored.
    pub fn pow_to_int_part(&self, exp: &Decimal) -> Result<Decimal> {
        let int = exp.trunc(0);
        let abs = int
            .coef
            .to_u128()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(DecimalError::ExponentTooLarge)?;
        self.pow_i32(if int.neg { -abs } else { abs })
    }

    /// Raises `self` to the integer power `exp` using 128-bit fixed-point arithmetic with
    /// 38 fractional digits.
    ///
    /// Faster than [`pow_i32`](Decimal::pow_i32) but limited: the coefficient must fit in 128
    /// bits, `|exp|` must be below `2^19`, and the last digit may differ from the exact
    /// result. Both limits fail with `Overflow`.
    pub fn pow_fast_i32(&self, exp: i32) -> Result<Decimal> {
        let coef = self.coef.to_u128().ok_or(DecimalError::Overflow)?;
        let n = exp.unsigned_abs();
        if n >= MAX_FAST_EXP {
            tracing::debug!(exp, "fixed-point power exponent out of range");
            return Err(DecimalError::Overflow);
        }
        if exp == 0 {
            return Ok(Decimal::ONE);
        }
        if coef == 0 {
            return if exp < 0 {
                Err(DecimalError::ZeroPowNegative)
            } else {
                Ok(Decimal::ZERO)
            };
        }

        let neg = self.neg && n & 1 == 1;
        let prec = default_precision() as u32;
        let scale = self.scale as u32;

        // base in [0, 1) at scale 38
        let (mut base, invert) = if self.cmp_abs(&Decimal::ONE) == Ordering::Less {
            (coef * POWERS_10[(WORK_SCALE - scale) as usize], exp < 0)
        } else {
            let recip = Bint::ONE.scaled_quo(WORK_SCALE + scale, &self.coef);
            (recip.to_u128().ok_or(DecimalError::Overflow)?, exp > 0)
        };

        let mut result = FAST_ONE;
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                result = fast_mul(result, base)?;
            }
            n >>= 1;
            if n > 0 {
                base = fast_mul(base, base)?;
            }
        }

        let coef = if invert {
            if result == 0 {
                tracing::debug!(exp, "fixed-point power underflowed before reciprocal");
                return Err(DecimalError::Overflow);
            }
            let (q, r) = U256::mul128(FAST_ONE, POWERS_10[prec as usize]).div_rem_u128(result);
            let q = q.to_u128().ok_or(DecimalError::Overflow)?;
            if r >= result - r {
                q.checked_add(1).ok_or(DecimalError::Overflow)?
            } else {
                q
            }
        } else {
            result / POWERS_10[(WORK_SCALE - prec) as usize]
        };

        Ok(Decimal::new(neg, Bint::from_u128(coef), prec as u8))
    }

    /// Square root truncated to the default precision.
    pub fn sqrt(&self) -> Result<Decimal> {
        if self.neg {
            return Err(DecimalError::SqrtNegative);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let prec = default_precision();
        let target = 2 * prec as u32;
        let scale = self.scale as u32;
        let radicand = if target >= scale {
            self.coef.mul_pow10(target - scale)
        } else {
            self.coef.quo_rem_pow10(scale - target).0
        };

        Ok(Decimal::new(false, radicand.sqrt(), prec))
    }
}
