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

//! Conversion between `Decimal` and primitive number types.

use crate::bint::Bint;
use crate::decimal::{Buf, Decimal};
use crate::error::{DecimalError, Result};
use crate::parse::{parse_str, Excess};
use crate::precision::default_precision;
use std::convert::TryFrom;
use std::fmt::{self, Write};

macro_rules! impl_from_small_int {
    ($ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Self {
                Decimal::new(false, Bint::from_u128(val as u128), 0)
            }
        }
    };
    (SIGNED $ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Decimal {
                Decimal::new(val < 0, Bint::from_u128(val.unsigned_abs() as u128), 0)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_small_int!($ty);)*
    };
    (SIGNED $($ty: ty), * $(,)?) => {
        $(impl_from_small_int!(SIGNED $ty);)*
    }
}

impl_from_small_int!(u8, u16, u32, u64, u128, usize);
impl_from_small_int!(SIGNED i8, i16, i32, i64, i128, isize);

impl From<bool> for Decimal {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            Decimal::ONE
        } else {
            Decimal::ZERO
        }
    }
}

/// Parses the shortest round-trip text of a float.
fn from_float<F: fmt::Display>(val: F, is_finite: bool) -> Result<Decimal> {
    if !is_finite {
        return Err(DecimalError::invalid_float(val));
    }

    // `Display` for floats never uses exponent notation
    let s = val.to_string();
    parse_str(&s, default_precision(), Excess::Truncate)
}

impl Decimal {
    /// Creates a `Decimal` equal to `val * 10^-scale`.
    ///
    /// Returns `PrecisionOutOfRange` if `scale` is greater than the default precision.
    #[inline]
    pub fn from_i64(val: i64, scale: u8) -> Result<Decimal> {
        if scale > default_precision() {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Decimal::new(val < 0, Bint::from(val.unsigned_abs()), scale))
    }

    /// Creates a `Decimal` equal to `val * 10^-scale`.
    ///
    /// Returns `PrecisionOutOfRange` if `scale` is greater than the default precision.
    #[inline]
    pub fn from_u64(val: u64, scale: u8) -> Result<Decimal> {
        if scale > default_precision() {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Decimal::new(false, Bint::from(val), scale))
    }

    /// Creates a `Decimal` from the shortest decimal representation of `val`.
    ///
    /// Fractional digits beyond the default precision are truncated.
    /// Returns `InvalidFormat` if `val` is NaN or infinite.
    #[inline]
    pub fn from_f64(val: f64) -> Result<Decimal> {
        from_float(val, val.is_finite())
    }

    /// Magnitude of the integer part, `None` if it doesn't fit in 128 bits.
    #[inline]
    fn int_part(&self) -> Option<u128> {
        self.coef.quo_rem_pow10(self.scale as u32).0.to_u128()
    }

    /// Converts to `i64`, truncating the fractional part.
    ///
    /// Returns `IntPartOverflow` if the integer part doesn't fit. `i64::MIN` is rejected too,
    /// so the accepted range is symmetric.
    pub fn to_i64(&self) -> Result<i64> {
        match self.int_part() {
            Some(int) if int <= i64::MAX as u128 => {
                let val = int as i64;
                Ok(if self.neg { -val } else { val })
            }
            _ => Err(DecimalError::IntPartOverflow),
        }
    }

    /// Converts to `u64`, truncating the fractional part.
    ///
    /// Returns `IntPartOverflow` if the integer part doesn't fit, or is negative.
    pub fn to_u64(&self) -> Result<u64> {
        match self.int_part() {
            Some(0) => Ok(0),
            Some(int) if !self.neg && int <= u64::MAX as u128 => Ok(int as u64),
            _ => Err(DecimalError::IntPartOverflow),
        }
    }

    /// Converts to the nearest `f64`. Precision may be lost.
    pub fn to_f64(&self) -> f64 {
        let parsed = if self.is_overflowed() {
            fast_float::parse::<f64, _>(self.to_string())
        } else {
            let mut buf = Buf::new();
            if write!(&mut buf, "{}", self).is_err() {
                return f64::NAN;
            }
            fast_float::parse::<f64, _>(buf.as_slice())
        };
        parsed.unwrap_or(f64::NAN)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    #[inline]
    fn try_from(value: f64) -> Result<Self> {
        Decimal::from_f64(value)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;

    #[inline]
    fn try_from(value: f32) -> Result<Self> {
        from_float(value, value.is_finite())
    }
}

impl From<&Decimal> for f64 {
    #[inline]
    fn from(val: &Decimal) -> Self {
        val.to_f64()
    }
}

impl From<Decimal> for f64 {
    #[inline]
    fn from(val: Decimal) -> Self {
        val.to_f64()
    }
}

macro_rules! impl_into_small_int {
    ($ty: ty) => {
        impl TryFrom<&Decimal> for $ty {
            type Error = DecimalError;

            #[inline]
            fn try_from(value: &Decimal) -> Result<Self> {
                let val = value.to_u64()?;
                <$ty>::try_from(val).map_err(|_| DecimalError::IntPartOverflow)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalError;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self> {
                <$ty>::try_from(&value)
            }
        }
    };
    (SIGNED $ty: ty) => {
        impl TryFrom<&Decimal> for $ty {
            type Error = DecimalError;

            #[inline]
            fn try_from(value: &Decimal) -> Result<Self> {
                let val = value.to_i64()?;
                <$ty>::try_from(val).map_err(|_| DecimalError::IntPartOverflow)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalError;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self> {
                <$ty>::try_from(&value)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_into_small_int!($ty);)*
    };
    (SIGNED $($ty: ty), * $(,)?) => {
        $(impl_into_small_int!(SIGNED $ty);)*
    };
}

impl_into_small_int!(u8, u16, u32, u64, usize);
impl_into_small_int!(SIGNED i8, i16, i32, i64, isize);
