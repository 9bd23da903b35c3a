// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The versioned car park registry.
//!
//! A [`State`] owns the live [`Registry`] and its [`History`]. Commands run
//! through [`apply`] (or [`execute`], which also turns failures into
//! messages); every successful mutation commits a snapshot so that it can
//! be undone and redone. [`merge`] reconciles a fetched feed batch with the
//! registry while keeping user tags.

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

mod apply;
mod command;
mod error;
mod feed;
mod history;
mod reconcile;
mod registry;
mod state;

#[cfg(test)]
mod tests;

pub use apply::{
    MESSAGE_CLEARED, MESSAGE_NOTHING_TO_CLEAR, MESSAGE_REDO_SUCCESS, MESSAGE_UNABLE_TO_LOAD,
    MESSAGE_UNDO_SUCCESS, apply, execute,
};
pub use command::{Command, EditDescriptor};
pub use error::{CoreError, FeedDefect, Lookup};
pub use feed::{FeedError, FeedSource, RawFields};
pub use history::{DEFAULT_HISTORY_CAPACITY, History, Snapshot};
pub use reconcile::{MergeResult, merge};
pub use registry::{KeywordFilter, Predicate, Registry};
pub use state::{CommandResult, Config, State};
