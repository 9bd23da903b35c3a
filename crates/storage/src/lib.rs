// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File-backed collaborators for Car Park Finder.
//!
//! - [`JsonRegistryStore`] saves the registry after every committed change
//!   and loads it on start-up.
//! - [`JsonFeedFile`] serves a feed batch from a JSON file.
//!
//! There is no format versioning; a file that does not parse is an error.

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
mod feed_file;
mod registry_store;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use feed_file::JsonFeedFile;
pub use registry_store::JsonRegistryStore;
