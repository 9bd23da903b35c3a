// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary to the external car park data feed.

use thiserror::Error;

/// One unparsed feed record: positional string fields in the fixed schema
/// order described by [`carpark_finder_domain::FEED_FIELD_COUNT`].
pub type RawFields = Vec<String>;

/// Errors raised by a feed source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The data source could not be reached or read.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    /// The data source answered with something that is not a feed.
    #[error("invalid feed payload: {0}")]
    InvalidPayload(String),
}

/// A source of raw car park records.
///
/// A fetch is a single blocking call with no retry; a failure is reported
/// once and the caller decides what to do next.
pub trait FeedSource {
    /// Fetches the current batch of raw records.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable or its payload is not
    /// a list of records.
    fn fetch(&mut self) -> Result<Vec<RawFields>, FeedError>;
}

impl<F> FeedSource for F
where
    F: FnMut() -> Result<Vec<RawFields>, FeedError>,
{
    fn fetch(&mut self) -> Result<Vec<RawFields>, FeedError> {
        self()
    }
}
