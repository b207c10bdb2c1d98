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

//! Ops implementation.

use crate::bint::Bint;
use crate::decimal::Decimal;
use crate::error::{DecimalError, Result};
use crate::precision::{check_precision, default_precision};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Decimal {
    /// Signed-magnitude addition of `self` and `other` with its sign replaced by `other_neg`.
    fn add_signed(&self, other: &Decimal, other_neg: bool) -> Decimal {
        let scale = self.scale.max(other.scale);
        let a = self.rescaled_coef(scale);
        let b = other.rescaled_coef(scale);

        if self.neg == other_neg {
            return Decimal::new(self.neg, a.add(&b), scale);
        }

        match a.checked_sub(&b) {
            Some(diff) => Decimal::new(self.neg, diff, scale),
            None => Decimal::new(other_neg, b.checked_sub(&a).unwrap_or_default(), scale),
        }
    }

    /// Multiplies coefficients, truncating the result to the default precision when the
    /// combined scale exceeds it.
    fn mul_internal(&self, other: &Decimal) -> Decimal {
        let neg = self.neg ^ other.neg;
        let coef = self.coef.mul(&other.coef);
        let scale = self.scale as u32 + other.scale as u32;
        let prec = default_precision() as u32;

        if scale <= prec {
            Decimal::new(neg, coef, scale as u8)
        } else {
            let (coef, _) = coef.quo_rem_pow10(scale - prec);
            Decimal::new(neg, coef, prec as u8)
        }
    }

    /// Exact quotient truncated to `prec` fractional digits.
    fn div_internal(&self, other: &Decimal, prec: u8) -> Result<Decimal> {
        if other.is_zero() {
            return Err(DecimalError::DivideByZero);
        }

        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        // self.coef * 10^(prec + other.scale - self.scale) / other.coef
        let exp = prec as i32 + other.scale as i32 - self.scale as i32;
        let coef = if exp >= 0 {
            self.coef.scaled_quo(exp as u32, &other.coef)
        } else {
            let divisor = other.coef.mul_pow10(exp.unsigned_abs());
            self.coef.quo_rem(&divisor).0
        };

        Ok(Decimal::new(self.neg ^ other.neg, coef, prec))
    }

    /// Computes `self / other`, truncated to the default precision.
    ///
    /// Returns `DivideByZero` if `other` is zero.
    #[inline]
    pub fn checked_div(&self, other: &Decimal) -> Result<Decimal> {
        self.div_internal(other, default_precision())
    }

    /// Computes `self / other`, truncated to `prec` fractional digits.
    ///
    /// Returns `PrecisionOutOfRange` if `prec` is greater than [`MAX_SCALE`], and
    /// `DivideByZero` if `other` is zero.
    ///
    /// [`MAX_SCALE`]: crate::MAX_SCALE
    #[inline]
    pub fn div_with_precision(&self, other: &Decimal, prec: u8) -> Result<Decimal> {
        self.div_internal(other, check_precision(prec)?)
    }

    /// Computes the integer quotient and the remainder of `self / other`.
    ///
    /// The quotient is truncated toward zero and has scale 0. The remainder takes the sign
    /// of `self` and has the larger scale of the two operands.
    pub fn quo_rem(&self, other: &Decimal) -> Result<(Decimal, Decimal)> {
        if other.is_zero() {
            return Err(DecimalError::DivideByZero);
        }

        let scale = self.scale.max(other.scale);
        let a = self.rescaled_coef(scale);
        let b = other.rescaled_coef(scale);
        let (q, r) = a.quo_rem(&b);

        Ok((Decimal::new(self.neg ^ other.neg, q, 0), Decimal::new(self.neg, r, scale)))
    }

    /// Computes the remainder of `self / other`, see [`Decimal::quo_rem`].
    #[inline]
    pub fn checked_rem(&self, other: &Decimal) -> Result<Decimal> {
        self.quo_rem(other).map(|(_, r)| r)
    }

    /// Adds an unsigned integer.
    #[inline]
    pub fn add64(&self, other: u64) -> Decimal {
        self.add_signed(&Decimal::from(other), false)
    }

    /// Subtracts an unsigned integer.
    #[inline]
    pub fn sub64(&self, other: u64) -> Decimal {
        self.add_signed(&Decimal::from(other), true)
    }

    /// Multiplies by an unsigned integer.
    #[inline]
    pub fn mul64(&self, other: u64) -> Decimal {
        if self.scale <= default_precision() {
            Decimal::new(self.neg, self.coef.mul_u64(other), self.scale)
        } else {
            self.mul_internal(&Decimal::from(other))
        }
    }

    /// Divides by an unsigned integer, see [`Decimal::checked_div`].
    #[inline]
    pub fn div64(&self, other: u64) -> Result<Decimal> {
        self.checked_div(&Decimal::from(other))
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.neg = !self.neg;
        }
        self
    }
}

impl Neg for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::new(!self.neg, self.coef.clone(), self.scale)
    }
}

impl Add<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: &Decimal) -> Self::Output {
        self.add_signed(other, other.neg)
    }
}

impl Sub<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: &Decimal) -> Self::Output {
        self.add_signed(other, !other.neg)
    }
}

impl Mul<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: &Decimal) -> Self::Output {
        self.mul_internal(other)
    }
}

impl Div<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn div(self, other: &Decimal) -> Self::Output {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Division by zero"),
        }
    }
}

impl Rem<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn rem(self, other: &Decimal) -> Self::Output {
        match self.checked_rem(other) {
            Ok(rem) => rem,
            Err(_) => panic!("Division by zero"),
        }
    }
}

impl Sum for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, |acc, d| &acc + &d)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, |acc, d| &acc + d)
    }
}

impl Product for Decimal {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::ONE, |acc, d| &acc * &d)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    #[inline]
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ONE, |acc, d| &acc * d)
    }
}

macro_rules! impl_arith_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                (&self).$method(&Decimal::from(other))
            }
        }

        impl $op<$int> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(&Decimal::from(other))
            }
        }

        impl $op<Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &'_ Decimal) -> Self::Output {
                (&Decimal::from(self)).$method(other)
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($op { $method } $int);)*
    };
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Self) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &Decimal) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$method(&other)
            }
        }

        impl_arith_with_num!($op { $method } u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });
impl_arith!(Mul { mul });
impl_arith!(Div { div });
impl_arith!(Rem { rem });

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident } $arith: ident) => {
        impl $op<Decimal> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: Decimal) {
                *self = (&*self).$arith(&other);
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: &Decimal) {
                *self = (&*self).$arith(other);
            }
        }
    };
}

impl_arith_assign!(AddAssign { add_assign } add);
impl_arith_assign!(SubAssign { sub_assign } sub);
impl_arith_assign!(MulAssign { mul_assign } mul);
impl_arith_assign!(DivAssign { div_assign } div);
impl_arith_assign!(RemAssign { rem_assign } rem);
