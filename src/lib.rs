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

//! Fixed-point decimal with up to 19 digits after the decimal point.
//!
//! Coefficients live in 128-bit integers and transparently fall back to arbitrary-precision
//! integers when a result doesn't fit, so arithmetic never overflows.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Decimal` implements the `serde::Serialize` and
//! `serde::Deserialize` traits.
//!
//! ## Usage
//!
//! To build a decimal, use [`Decimal`]:
//!
//! ```
//! use udecimal::Decimal;
//!
//! let n1: Decimal = "123".parse().unwrap();
//! let n2: Decimal = "456".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "579");
//! ```
//!
//! To build a decimal from Rust primitive types:
//!
//! ```
//! use udecimal::Decimal;
//!
//! let n1 = Decimal::from(123_i32);
//! let n2 = Decimal::from(456_i32);
//! let result = n1 + n2;
//! assert_eq!(result, Decimal::from(579_i32));
//!
//! let price = Decimal::from_i64(-1234, 2).unwrap();
//! assert_eq!(price.to_string(), "-12.34");
//! ```
//!
//! Multiplication and division keep at most [`default_precision`] fractional digits,
//! truncating the rest.
//!
//! ```
//! use udecimal::Decimal;
//!
//! let n1: Decimal = "123456789.987654321".parse().unwrap();
//! let n2: Decimal = "987654321.123456789".parse().unwrap();
//! assert_eq!((n1 * n2).to_string(), "121932632103337905.662094193112635269");
//!
//! let third = Decimal::ONE.checked_div(&Decimal::from(3)).unwrap();
//! assert_eq!(third.to_string(), "0.3333333333333333333");
//! ```
//!
//! Powers, roots and rounding:
//!
//! ```
//! use udecimal::Decimal;
//!
//! let n = Decimal::must_parse("1.5");
//! assert_eq!(n.pow_i32(3).unwrap().to_string(), "3.375");
//! assert_eq!(Decimal::from(2).sqrt().unwrap().to_string(), "1.4142135623730950488");
//! assert_eq!(Decimal::must_parse("1.2345").round_bank(2).to_string(), "1.23");
//! ```
//!
//! Decimal can be encoded to bytes and decoded from bytes.
//!
//! ```
//! use udecimal::Decimal;
//!
//! let n1 = "123456789.987654321".parse::<Decimal>().unwrap();
//! let mut bytes = Vec::new();
//! n1.encode(&mut bytes).unwrap();
//! let n2 = Decimal::decode(&bytes).unwrap();
//! assert_eq!(n1, n2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bint;
mod convert;
mod decimal;
mod error;
mod ops;
mod parse;
mod pow;
mod precision;
mod round;
mod u256;
mod uint;

#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::{Decimal, MAX_BINARY_SIZE};
pub use crate::error::{DecimalError, Result};
pub use crate::precision::{default_precision, set_default_precision, MAX_SCALE};
