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

//! Process-wide default precision.

use crate::error::{DecimalError, Result};
use std::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of digits after the decimal point.
pub const MAX_SCALE: u8 = 19;

static DEFAULT_PRECISION: AtomicU8 = AtomicU8::new(MAX_SCALE);

/// Returns the current default precision, i.e. the maximum number of fractional digits
/// accepted by parsing and produced by division, multiplication and exponentiation.
#[inline]
pub fn default_precision() -> u8 {
    DEFAULT_PRECISION.load(Ordering::Relaxed)
}

/// Changes the default precision.
///
/// The setting is global to the process. Changing it while other threads are parsing or
/// dividing is not supported: those operations read it once per call and may observe either
/// value. Use [`Decimal::parse_with_precision`] or [`Decimal::div_with_precision`] when a
/// per-call precision is needed.
///
/// # Panics
///
/// Panics if `prec` is zero or greater than [`MAX_SCALE`].
///
/// [`Decimal::parse_with_precision`]: crate::Decimal::parse_with_precision
/// [`Decimal::div_with_precision`]: crate::Decimal::div_with_precision
pub fn set_default_precision(prec: u8) {
    if prec == 0 {
        panic!("prec must be greater than 0");
    }

    if prec > MAX_SCALE {
        panic!(
            "precision out of range. Only allow maximum {} digits after the decimal points",
            MAX_SCALE
        );
    }

    let old = DEFAULT_PRECISION.swap(prec, Ordering::Relaxed);
    tracing::debug!(old, new = prec, "default precision changed");
}

/// Validates an explicit precision argument.
#[inline]
pub(crate) fn check_precision(prec: u8) -> Result<u8> {
    if prec > MAX_SCALE {
        Err(DecimalError::PrecisionOutOfRange)
    } else {
        Ok(prec)
    }
}
