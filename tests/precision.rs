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

//! Behavior under a changed default precision. The setting is process-wide, so these tests
//! live in their own binary and hold a lock while it is changed.

use std::sync::{Mutex, MutexGuard};
use udecimal::{default_precision, set_default_precision, Decimal, DecimalError, MAX_SCALE};

static LOCK: Mutex<()> = Mutex::new(());

/// Sets the default precision until dropped.
struct PrecisionGuard {
    _lock: MutexGuard<'static, ()>,
}

impl PrecisionGuard {
    fn set(prec: u8) -> PrecisionGuard {
        let lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_default_precision(prec);
        PrecisionGuard { _lock: lock }
    }
}

impl Drop for PrecisionGuard {
    fn drop(&mut self) {
        set_default_precision(MAX_SCALE);
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_parse_with_lower_precision() {
    let _guard = PrecisionGuard::set(14);
    assert_eq!(default_precision(), 14);

    assert_eq!(dec("1.12345678901234").to_string(), "1.12345678901234");
    assert_eq!(
        Decimal::parse("1.123456789012345").unwrap_err(),
        DecimalError::PrecisionOutOfRange
    );
    assert_eq!(
        Decimal::parse_with_precision("1.123456789012345", 19).unwrap().to_string(),
        "1.123456789012345"
    );
}

#[test]
fn test_arithmetic_with_lower_precision() {
    let _guard = PrecisionGuard::set(14);

    let third = Decimal::ONE.checked_div(&Decimal::from(3)).unwrap();
    assert_eq!(third.to_string(), "0.33333333333333");
    assert_eq!(
        Decimal::ONE.div_with_precision(&Decimal::from(3), 19).unwrap().to_string(),
        "0.3333333333333333333"
    );

    assert_eq!((dec("0.0000001") * dec("0.0000001")).to_string(), "0.00000000000001");
    assert_eq!((dec("0.00000001") * dec("0.0000001")).to_string(), "0");

    assert_eq!(Decimal::from(2).sqrt().unwrap().to_string(), "1.41421356237309");
    assert_eq!(dec("1.12345").pow_i32(4).unwrap().to_string(), "1.5929971334827");
    assert_eq!(dec("2").pow_fast_i32(10).unwrap().to_string(), "1024");
}

#[test]
fn test_construct_with_lower_precision() {
    let _guard = PrecisionGuard::set(14);

    assert_eq!(Decimal::from_i64(-12345, 14).unwrap().to_string(), "-0.00000000012345");
    assert_eq!(Decimal::from_i64(1, 15).unwrap_err(), DecimalError::PrecisionOutOfRange);
    assert_eq!(Decimal::from_u64(1, 15).unwrap_err(), DecimalError::PrecisionOutOfRange);
}

#[test]
fn test_precision_restored() {
    drop(PrecisionGuard::set(3));
    let _lock = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(default_precision(), MAX_SCALE);
    assert_eq!(dec("0.1234567890123456789").to_string(), "0.1234567890123456789");
}
