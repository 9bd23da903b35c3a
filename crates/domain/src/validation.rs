// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{
    Address, CarparkNumber, CarparkType, Coordinate, FreeParking, LotCount, NightParking, Record,
    ShortTerm, TypeOfParking,
};

/// The number of positional fields in a raw feed record.
///
/// The fields are, in order: address, car park number, car park type,
/// coordinate, free parking, lots available, night parking, short term
/// parking, total lots, type of parking.
pub const FEED_FIELD_COUNT: usize = 10;

/// A data-quality problem with a record's lot counts.
///
/// The source feed is not guaranteed clean, so these are reported rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotInconsistency {
    /// Exactly one of the two counts is the "not available" sentinel.
    PartiallyReported {
        /// The affected car park.
        carpark_number: CarparkNumber,
        /// Lots available.
        lots_available: LotCount,
        /// Total lots.
        total_lots: LotCount,
    },
    /// More lots are available than the car park holds.
    AvailableExceedsTotal {
        /// The affected car park.
        carpark_number: CarparkNumber,
        /// Lots available.
        lots_available: LotCount,
        /// Total lots.
        total_lots: LotCount,
    },
}

impl std::fmt::Display for LotInconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartiallyReported {
                carpark_number,
                lots_available,
                total_lots,
            } => write!(
                f,
                "Car park {carpark_number} reports only one lot count ({lots_available}/{total_lots})"
            ),
            Self::AvailableExceedsTotal {
                carpark_number,
                lots_available,
                total_lots,
            } => write!(
                f,
                "Car park {carpark_number} has more lots available than total ({lots_available}/{total_lots})"
            ),
        }
    }
}

/// Parses one raw feed record into a `Record` with no tags.
///
/// # Arguments
///
/// * `fields` - The positional fields, in the order documented on
///   [`FEED_FIELD_COUNT`]
///
/// # Errors
///
/// Returns an error if:
/// - The record does not have exactly [`FEED_FIELD_COUNT`] fields
/// - Any field fails its value type's validation
pub fn parse_feed_record<S: AsRef<str>>(fields: &[S]) -> Result<Record, DomainError> {
    let [
        address,
        number,
        carpark_type,
        coordinate,
        free_parking,
        lots_available,
        night_parking,
        short_term,
        total_lots,
        type_of_parking,
    ] = fields
    else {
        return Err(DomainError::WrongFieldCount {
            expected: FEED_FIELD_COUNT,
            actual: fields.len(),
        });
    };

    Ok(Record::new(
        Address::new(address.as_ref())?,
        CarparkNumber::new(number.as_ref())?,
        CarparkType::new(carpark_type.as_ref())?,
        Coordinate::parse(coordinate.as_ref())?,
        FreeParking::parse(free_parking.as_ref())?,
        LotCount::parse("lots available", lots_available.as_ref())?,
        NightParking::parse(night_parking.as_ref())?,
        ShortTerm::parse(short_term.as_ref())?,
        LotCount::parse("total lots", total_lots.as_ref())?,
        TypeOfParking::parse(type_of_parking.as_ref())?,
    ))
}

/// Checks that a record's lot counts are either both unreported or both
/// reported with `lots_available <= total_lots`.
///
/// # Errors
///
/// Returns the inconsistency found. Callers treat this as a warning.
pub fn check_lot_consistency(record: &Record) -> Result<(), LotInconsistency> {
    let available: LotCount = record.lots_available;
    let total: LotCount = record.total_lots;

    // Zero available against a reported total is a full car park, which is
    // indistinguishable from the sentinel and therefore accepted.
    if available.is_reported() && !total.is_reported() {
        return Err(LotInconsistency::PartiallyReported {
            carpark_number: record.carpark_number.clone(),
            lots_available: available,
            total_lots: total,
        });
    }

    if available > total {
        return Err(LotInconsistency::AvailableExceedsTotal {
            carpark_number: record.carpark_number.clone(),
            lots_available: available,
            total_lots: total,
        });
    }

    Ok(())
}
