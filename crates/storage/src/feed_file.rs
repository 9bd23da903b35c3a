// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use carpark_finder::{FeedError, FeedSource, RawFields};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A feed read from a JSON file holding an array of string arrays, one
/// array per car park in the fixed field order.
///
/// The file is re-read on every fetch, so replacing it refreshes the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFeedFile {
    path: PathBuf,
}

impl JsonFeedFile {
    /// Creates a feed backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the feed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedSource for JsonFeedFile {
    fn fetch(&mut self) -> Result<Vec<RawFields>, FeedError> {
        debug!("Reading car park feed from {}", self.path.display());
        let contents: String = fs::read_to_string(&self.path)
            .map_err(|err| FeedError::Unavailable(format!("{}: {err}", self.path.display())))?;
        serde_json::from_str(&contents).map_err(|err| FeedError::InvalidPayload(err.to_string()))
    }
}
