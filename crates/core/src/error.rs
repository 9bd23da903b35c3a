// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::feed::FeedError;
use carpark_finder_domain::{CarparkNumber, DomainError};
use thiserror::Error;

/// Identifies the record a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A one-based position in the filtered view.
    Index(usize),
    /// A car park number.
    Identity(CarparkNumber),
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "index {index}"),
            Self::Identity(number) => write!(f, "car park {number}"),
        }
    }
}

/// Why a feed record could not be merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedDefect {
    /// A field failed validation or the record had the wrong shape.
    #[error(transparent)]
    Invalid(#[from] DomainError),
    /// The car park number already appeared earlier in the same batch.
    #[error("car park {0} appears more than once in the feed")]
    DuplicateIdentity(CarparkNumber),
}

/// Errors that can occur while operating on the registry or its history.
///
/// Every failing operation leaves the registry and history unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A record with this car park number is already in the registry.
    #[error("This car park already exists in the car park finder: {0}")]
    DuplicateIdentity(CarparkNumber),
    /// No record matches the lookup.
    #[error("No car park found at {0}")]
    NotFound(Lookup),
    /// A record from the external feed could not be parsed.
    #[error("Feed record at position {position} is malformed: {defect}")]
    MalformedFeedRecord {
        /// The zero-based position of the record in the feed batch.
        position: usize,
        /// What was wrong with it.
        defect: FeedDefect,
    },
    /// The external feed could not be fetched.
    #[error("Unable to fetch car park feed: {0}")]
    FetchFailure(#[from] FeedError),
    /// Undo was requested at the oldest state.
    #[error("No more commands to undo!")]
    NoEarlierState,
    /// Redo was requested at the newest state.
    #[error("No more commands to redo!")]
    NoLaterState,
    /// An edit was requested without any field to change.
    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}
