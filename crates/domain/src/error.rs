// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating car park fields.
///
/// Every variant is raised before a `Record` is constructed; invalid raw
/// input is never coerced into a valid-looking value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Car park number is empty or invalid.
    InvalidCarparkNumber(String),
    /// Address is empty or invalid.
    InvalidAddress(String),
    /// Car park type is empty or invalid.
    InvalidCarparkType(String),
    /// Coordinate could not be parsed or is out of range.
    InvalidCoordinate {
        /// The raw coordinate text.
        value: String,
        /// Why the coordinate was rejected.
        reason: &'static str,
    },
    /// Free parking description is empty.
    InvalidFreeParking(String),
    /// A lot count is not a non-negative integer.
    InvalidLotCount {
        /// The name of the field being parsed.
        field: &'static str,
        /// The raw value.
        value: String,
    },
    /// Night parking flag is not `YES` or `NO`.
    InvalidNightParking(String),
    /// Short term parking description is empty.
    InvalidShortTerm(String),
    /// Type of parking system is not recognized.
    InvalidTypeOfParking(String),
    /// Tag is empty or contains non-alphanumeric characters.
    InvalidTag(String),
    /// A raw feed record does not have the fixed number of fields.
    WrongFieldCount {
        /// The number of fields the schema requires.
        expected: usize,
        /// The number of fields received.
        actual: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCarparkNumber(msg) => write!(f, "Invalid car park number: {msg}"),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::InvalidCarparkType(msg) => write!(f, "Invalid car park type: {msg}"),
            Self::InvalidCoordinate { value, reason } => {
                write!(f, "Invalid coordinate '{value}': {reason}")
            }
            Self::InvalidFreeParking(msg) => write!(f, "Invalid free parking: {msg}"),
            Self::InvalidLotCount { field, value } => {
                write!(
                    f,
                    "Invalid {field}: '{value}' is not a non-negative whole number"
                )
            }
            Self::InvalidNightParking(value) => {
                write!(f, "Invalid night parking: '{value}'. Must be YES or NO")
            }
            Self::InvalidShortTerm(msg) => write!(f, "Invalid short term parking: {msg}"),
            Self::InvalidTypeOfParking(value) => {
                write!(
                    f,
                    "Invalid type of parking: '{value}'. Must be ELECTRONIC PARKING or COUPON PARKING"
                )
            }
            Self::InvalidTag(value) => {
                write!(f, "Invalid tag '{value}': tags must be alphanumeric")
            }
            Self::WrongFieldCount { expected, actual } => {
                write!(
                    f,
                    "Expected {expected} fields in feed record, found {actual}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
