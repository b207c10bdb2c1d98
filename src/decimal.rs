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

//! Decimal implementation.

use crate::bint::Bint;
use crate::error::{DecimalError, Result};
use crate::precision::{default_precision, MAX_SCALE};
use crate::uint::U128;
use num_bigint::BigUint;
use stack_buf::StackVec;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

/// Maximum binary data size of a `Decimal` whose coefficient fits in 128 bits.
pub const MAX_BINARY_SIZE: usize = 18;

const SIGN_MASK: u8 = 0x01;
const HEADER_SIZE: usize = 2;

pub(crate) type Buf = StackVec<u8, 256>;

/// Fixed-point decimal.
///
/// The value is `(-1)^neg * coef * 10^-scale`. The coefficient uses a 128-bit integer
/// and transparently switches to an arbitrary-precision integer when a result doesn't fit,
/// so the integer part is unbounded while the scale is at most [`MAX_SCALE`].
#[derive(Clone)]
pub struct Decimal {
    pub(crate) neg: bool,
    pub(crate) coef: Bint,
    pub(crate) scale: u8,
}

impl Decimal {
    /// Zero value, i.e. `0`.
    pub const ZERO: Decimal = Decimal {
        neg: false,
        coef: Bint::ZERO,
        scale: 0,
    };

    /// i.e. `1`.
    pub const ONE: Decimal = Decimal {
        neg: false,
        coef: Bint::ONE,
        scale: 0,
    };

    /// Creates a `Decimal` from parts, normalizing the sign of zero.
    #[inline]
    pub(crate) fn new(neg: bool, coef: Bint, scale: u8) -> Decimal {
        debug_assert!(scale <= MAX_SCALE);
        let neg = neg && !coef.is_zero();
        Decimal { neg, coef, scale }
    }

    /// Creates a `Decimal` from a coefficient, a scale and a sign.
    ///
    /// Returns `PrecisionOutOfRange` if `scale` is greater than [`MAX_SCALE`].
    #[inline]
    pub fn from_parts(coef: u128, scale: u8, neg: bool) -> Result<Decimal> {
        if scale > MAX_SCALE {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Decimal::new(neg, Bint::from_u128(coef), scale))
    }

    /// Returns the scale, i.e. the count of decimal digits in the fractional part.
    #[inline]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Returns the coefficient if it fits in 128 bits.
    #[inline]
    pub fn coefficient(&self) -> Option<u128> {
        self.coef.to_u128()
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coef.is_zero()
    }

    /// Returns `true` if `self` is less than zero.
    #[inline]
    pub const fn is_neg(&self) -> bool {
        self.neg
    }

    /// Returns `true` if `self` is greater than zero.
    #[inline]
    pub fn is_pos(&self) -> bool {
        !self.neg && !self.coef.is_zero()
    }

    /// Returns `-1`, `0` or `1` depending on the sign of `self`.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.neg {
            -1
        } else {
            1
        }
    }

    /// Returns `true` if the coefficient doesn't fit in 128 bits and the
    /// arbitrary-precision representation is in use.
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.coef.is_overflowed()
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Decimal {
        Decimal {
            neg: false,
            coef: self.coef.clone(),
            scale: self.scale,
        }
    }

    /// Coefficient of `self` expressed at `scale`, which must not be less than `self.scale`.
    #[inline]
    pub(crate) fn rescaled_coef(&self, scale: u8) -> Cow<'_, Bint> {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            Cow::Borrowed(&self.coef)
        } else {
            Cow::Owned(self.coef.mul_pow10((scale - self.scale) as u32))
        }
    }

    /// Compares magnitudes, ignoring signs.
    pub(crate) fn cmp_abs(&self, other: &Decimal) -> Ordering {
        if self.scale == other.scale {
            return self.coef.cmp(&other.coef);
        }

        let scale = self.scale.max(other.scale);
        self.rescaled_coef(scale).as_ref().cmp(other.rescaled_coef(scale).as_ref())
    }

    /// Splits the coefficient into `(neg, hi, lo, scale, ok)`.
    ///
    /// `ok` is `false`, and every other field zero, when the coefficient doesn't fit in 128 bits.
    #[inline]
    pub fn to_hi_lo(&self) -> (bool, u64, u64, u8, bool) {
        match &self.coef {
            Bint::Fast(v) => (self.neg, v.hi(), v.lo(), self.scale, true),
            Bint::Big(_) => (false, 0, 0, 0, false),
        }
    }

    /// Creates a `Decimal` from the halves returned by [`Decimal::to_hi_lo`].
    ///
    /// Returns `PrecisionOutOfRange` if `scale` exceeds the default precision.
    #[inline]
    pub fn from_hi_lo(neg: bool, hi: u64, lo: u64, scale: u8) -> Result<Decimal> {
        if scale > default_precision() {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Decimal::new(neg, Bint::Fast(U128::from_hi_lo(hi, lo)), scale))
    }

    /// Encodes `self` to `writer` as binary bytes: a flags byte, a scale byte and the
    /// little-endian coefficient with high zero bytes trimmed.
    ///
    /// Returns total size on success, which is not larger than [`MAX_BINARY_SIZE`] unless
    /// the coefficient doesn't fit in 128 bits.
    pub fn encode<W: io::Write>(&self, mut writer: W) -> io::Result<usize> {
        let flags = if self.neg { SIGN_MASK } else { 0 };
        writer.write_all(&[flags, self.scale])?;

        let size = match &self.coef {
            Bint::Fast(v) => {
                let int_bytes = v.get().to_le_bytes();
                let len = int_bytes.iter().rposition(|b| *b != 0).map_or(1, |id| id + 1);
                writer.write_all(&int_bytes[..len])?;
                len
            }
            Bint::Big(v) => {
                let int_bytes = v.to_bytes_le();
                writer.write_all(&int_bytes)?;
                int_bytes.len()
            }
        };

        Ok(size + HEADER_SIZE)
    }

    /// Decodes a `Decimal` from bytes produced by [`Decimal::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Decimal> {
        if bytes.len() <= HEADER_SIZE {
            return Err(DecimalError::InvalidFormat(format!(
                "can't decode {} bytes to Decimal",
                bytes.len()
            )));
        }

        let flags = bytes[0];
        if flags & !SIGN_MASK != 0 {
            return Err(DecimalError::InvalidFormat(format!("unknown flags {:#04x}", flags)));
        }

        let scale = bytes[1];
        if scale > MAX_SCALE {
            return Err(DecimalError::PrecisionOutOfRange);
        }

        let int_bytes = &bytes[HEADER_SIZE..];
        let coef = if int_bytes.len() <= 16 {
            let mut buf = [0u8; 16];
            buf[..int_bytes.len()].copy_from_slice(int_bytes);
            Bint::from_u128(u128::from_le_bytes(buf))
        } else {
            Bint::from_big(BigUint::from_bytes_le(int_bytes))
        };

        Ok(Decimal::new(flags & SIGN_MASK != 0, coef, scale))
    }

    /// Shifts the coefficient left by `bits` binary digits, keeping sign and scale.
    #[inline]
    pub fn lsh(&self, bits: u32) -> Decimal {
        Decimal::new(self.neg, self.coef.shl(bits), self.scale)
    }

    /// Shifts the coefficient right by `bits` binary digits, keeping sign and scale.
    /// Discarded bits are truncated.
    #[inline]
    pub fn rsh(&self, bits: u32) -> Decimal {
        Decimal::new(self.neg, self.coef.shr(bits), self.scale)
    }

    /// Moves the decimal point `n` places to the right, i.e. multiplies by `10^n`.
    pub fn shift_point_left(&self, n: u32) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }

        let scale = self.scale as u32;
        if n <= scale {
            Decimal::new(self.neg, self.coef.clone(), (scale - n) as u8)
        } else {
            Decimal::new(self.neg, self.coef.mul_pow10(n - scale), 0)
        }
    }

    /// Moves the decimal point `n` places to the left, i.e. divides by `10^n`.
    ///
    /// The resulting scale is clamped to the default precision, truncating the digits
    /// that don't fit.
    pub fn shift_point_right(&self, n: u32) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }

        let prec = default_precision() as u32;
        let scale = self.scale as u32 + n;
        if scale <= prec {
            Decimal::new(self.neg, self.coef.clone(), scale as u8)
        } else {
            let (coef, _) = self.coef.quo_rem_pow10(scale - prec);
            Decimal::new(self.neg, coef, prec as u8)
        }
    }

    /// Formats the magnitude of `self`, printing exactly `precision` fractional digits
    /// if given, otherwise omitting trailing fractional zeros.
    pub(crate) fn fmt_internal<W: fmt::Write>(&self, precision: Option<usize>, mut w: W) -> fmt::Result {
        use std::fmt::Write;

        let dec = match precision {
            Some(prec) if prec < self.scale as usize => Cow::Owned(self.round_haz(prec as u8)),
            _ => Cow::Borrowed(self),
        };

        match &dec.coef {
            Bint::Fast(v) => {
                let mut buf = StackVec::<u8, 40>::new();
                write!(&mut buf, "{}", v)?;
                write_digits(buf.as_slice(), dec.scale as usize, precision, w)
            }
            Bint::Big(v) => {
                let digits = v.to_str_radix(10);
                write_digits(digits.as_bytes(), dec.scale as usize, precision, w)
            }
        }
    }
}

fn write_digits<W: fmt::Write>(digits: &[u8], scale: usize, precision: Option<usize>, mut w: W) -> fmt::Result {
    let len = digits.len();
    let (int_digits, leading_zeros, frac_digits) = if len <= scale {
        (&b"0"[..], scale - len, digits)
    } else {
        let (int_digits, frac_digits) = digits.split_at(len - scale);
        (int_digits, 0, frac_digits)
    };

    w.write_bytes(int_digits)?;

    match precision {
        Some(0) => {}
        Some(prec) => {
            w.write_byte(b'.')?;
            write_zeros(&mut w, leading_zeros)?;
            w.write_bytes(frac_digits)?;
            write_zeros(&mut w, prec - scale.min(prec))?;
        }
        None => {
            let zero_num = frac_digits.iter().rev().take_while(|ch| **ch == b'0').count();
            if zero_num < frac_digits.len() {
                w.write_byte(b'.')?;
                write_zeros(&mut w, leading_zeros)?;
                w.write_bytes(&frac_digits[..frac_digits.len() - zero_num])?;
            }
        }
    }

    Ok(())
}

#[inline]
fn write_zeros<W: fmt::Write>(w: &mut W, mut n: usize) -> fmt::Result {
    const ZERO_BUF: [u8; 32] = [b'0'; 32];

    while n > 0 {
        let len = n.min(ZERO_BUF.len());
        w.write_bytes(&ZERO_BUF[..len])?;
        n -= len;
    }
    Ok(())
}

trait WriteExt: fmt::Write {
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> fmt::Result {
        self.write_bytes(&[byte])
    }

    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        let s = unsafe { std::str::from_utf8_unchecked(bytes) };
        self.write_str(s)
    }
}

impl<W: fmt::Write> WriteExt for W {}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let small = !self.coef.is_overflowed() && f.precision().map_or(true, |prec| prec <= 128);
        if small {
            let mut buf = Buf::new();
            self.fmt_internal(f.precision(), &mut buf)?;
            let str = unsafe { std::str::from_utf8_unchecked(buf.as_slice()) };
            f.pad_integral(!self.neg, "", str)
        } else {
            let mut s = String::new();
            self.fmt_internal(f.precision(), &mut s)?;
            f.pad_integral(!self.neg, "", &s)
        }
    }
}

impl fmt::Debug for Decimal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialEq<&Decimal> for Decimal {
    #[inline]
    fn eq(&self, other: &&Decimal) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<Decimal> for &Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        (*self).eq(other)
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<&Decimal> for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &&Decimal) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}

impl PartialOrd<Decimal> for &Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        (*self).partial_cmp(other)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // zero is never negative, so a sign difference decides
        if self.neg != other.neg {
            return if self.neg { Ordering::Less } else { Ordering::Greater };
        }

        let ord = self.cmp_abs(other);
        if self.neg {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.trim_trailing_zeros();
        n.neg.hash(state);
        n.scale.hash(state);
        match &n.coef {
            Bint::Fast(v) => v.get().hash(state),
            Bint::Big(v) => v.hash(state),
        }
    }
}
