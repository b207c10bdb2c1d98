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

//! Decimal error definitions.

use thiserror::Error;

/// An error which can be returned by fallible decimal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Input string has no content.
    #[error("can't parse empty string")]
    EmptyString,
    /// Malformed numeral, carries a description of the rejected input.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Fractional digits exceed the allowed precision.
    #[error("precision out of range. Only support maximum 19 digits after the decimal point")]
    PrecisionOutOfRange,
    /// Division or modulo by zero.
    #[error("can't divide by zero")]
    DivideByZero,
    /// Zero raised to a negative power.
    #[error("can't raise zero to a negative power")]
    ZeroPowNegative,
    /// Exponent magnitude is out of the supported range.
    #[error("exponent is too large. Must be less than or equal to 2147483647")]
    ExponentTooLarge,
    /// Integer part doesn't fit in the target integer type.
    #[error("integer part of the decimal is too large to fit in the target type")]
    IntPartOverflow,
    /// Square root of a negative value.
    #[error("can't calculate square root of negative number")]
    SqrtNegative,
    /// Result can't be represented within the engine's limits.
    #[error("arithmetic overflow")]
    Overflow,
}

impl DecimalError {
    #[inline]
    pub(crate) fn invalid_input(s: &str) -> DecimalError {
        DecimalError::InvalidFormat(format!("can't parse '{}'", s))
    }

    #[inline]
    pub(crate) fn invalid_float<F: std::fmt::Display>(f: F) -> DecimalError {
        DecimalError::InvalidFormat(format!("can't parse float '{}' to Decimal", f))
    }
}

/// Result type used by fallible decimal operations.
pub type Result<T> = std::result::Result<T, DecimalError>;
