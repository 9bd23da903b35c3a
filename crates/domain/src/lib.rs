// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    Address, CarparkNumber, CarparkType, Coordinate, FreeParking, LotCount, NightParking, Record,
    ShortTerm, Tag, TypeOfParking,
};
pub use validation::{FEED_FIELD_COUNT, LotInconsistency, check_lot_consistency, parse_feed_record};
