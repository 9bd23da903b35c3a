// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::history::{DEFAULT_HISTORY_CAPACITY, History, Snapshot};
use crate::registry::Registry;
use carpark_finder_domain::Record;
use std::num::NonZeroUsize;

/// Tunables for a `State`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The maximum number of registry states kept for undo/redo.
    pub history_capacity: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// The live registry together with its history.
///
/// A single owner holds the state and passes it by `&mut` to each
/// operation in turn.
#[derive(Debug)]
pub struct State {
    registry: Registry,
    history: History,
}

impl State {
    /// Creates a state with an empty registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            registry: Registry::new(),
            history: History::with_capacity(Snapshot::default(), config.history_capacity),
        }
    }

    /// Creates a state from previously saved records. The loaded records
    /// become the initial history state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` if two records share a car
    /// park number.
    pub fn with_records(records: Vec<Record>, config: Config) -> Result<Self, CoreError> {
        let registry: Registry = Registry::from_records(records)?;
        let history: History = History::with_capacity(registry.snapshot(), config.history_capacity);
        Ok(Self { registry, history })
    }

    /// Returns the live registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the records matching the active filter.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Record> {
        self.registry.filtered_view()
    }

    /// Restores the previous registry state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoEarlierState` if there is nothing to undo.
    pub fn undo(&mut self) -> Result<(), CoreError> {
        let snapshot: &Snapshot = self.history.undo()?;
        self.registry.restore(snapshot);
        Ok(())
    }

    /// Restores the registry state undone most recently.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoLaterState` if there is nothing to redo.
    pub fn redo(&mut self) -> Result<(), CoreError> {
        let snapshot: &Snapshot = self.history.redo()?;
        self.registry.restore(snapshot);
        Ok(())
    }

    pub(crate) const fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Records the live registry as a new history state.
    pub(crate) fn commit(&mut self) {
        self.history.commit(self.registry.snapshot());
    }
}

/// The result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The message shown to the user.
    pub message: String,
    /// The number of changed car parks, for a reconcile.
    pub changed_count: Option<usize>,
    /// Whether a new history state was committed.
    pub committed: bool,
    /// Whether an undo or redo moved the registry to another history state.
    pub restored: bool,
    /// Whether the command succeeded.
    pub success: bool,
}

impl CommandResult {
    /// A successful command that changed the registry.
    #[must_use]
    pub const fn committed(message: String) -> Self {
        Self {
            message,
            changed_count: None,
            committed: true,
            restored: false,
            success: true,
        }
    }

    /// A successful command that left history untouched.
    #[must_use]
    pub const fn uncommitted(message: String) -> Self {
        Self {
            message,
            changed_count: None,
            committed: false,
            restored: false,
            success: true,
        }
    }

    /// A successful undo or redo. Nothing is committed, but the live
    /// registry now matches a different history state.
    #[must_use]
    pub const fn restored(message: String) -> Self {
        Self {
            message,
            changed_count: None,
            committed: false,
            restored: true,
            success: true,
        }
    }

    /// A failed command.
    #[must_use]
    pub const fn failure(message: String) -> Self {
        Self {
            message,
            changed_count: None,
            committed: false,
            restored: false,
            success: false,
        }
    }

    /// Attaches a changed count.
    #[must_use]
    pub const fn with_changed_count(mut self, changed_count: usize) -> Self {
        self.changed_count = Some(changed_count);
        self
    }
}
