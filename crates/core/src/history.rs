// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use carpark_finder_domain::Record;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// The number of states kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// An immutable copy of the registry's records at one point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    records: Vec<Record>,
}

impl Snapshot {
    /// Creates a new `Snapshot` owning its records.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in registry order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the snapshot holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks whether both snapshots hold the same records with the same
    /// tags, in the same order.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(&other.records)
                .all(|(a, b)| a.is_identical(b))
    }
}

/// A linear undo/redo history of registry snapshots.
///
/// The pointer always references a valid snapshot. Committing after an undo
/// discards every state after the pointer. When the history is full the
/// oldest state is evicted.
#[derive(Debug, Clone)]
pub struct History {
    states: VecDeque<Snapshot>,
    pointer: usize,
    capacity: NonZeroUsize,
}

impl History {
    /// Creates a history holding only `initial`, with the default capacity.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a history holding only `initial`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state at pointer 0
    /// * `capacity` - The maximum number of states retained
    #[must_use]
    pub fn with_capacity(initial: Snapshot, capacity: NonZeroUsize) -> Self {
        let mut states: VecDeque<Snapshot> = VecDeque::with_capacity(capacity.get().min(16));
        states.push_back(initial);
        Self {
            states,
            pointer: 0,
            capacity,
        }
    }

    /// Records a new state after the current one.
    ///
    /// Any redoable states are discarded first.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let discarded: usize = self.states.len() - self.pointer - 1;
        if discarded > 0 {
            debug!("Discarding {discarded} redoable states");
        }
        self.states.truncate(self.pointer + 1);
        self.states.push_back(snapshot);
        if self.states.len() > self.capacity.get() {
            self.states.pop_front();
        }
        self.pointer = self.states.len() - 1;
        info!(
            "Committed state {} of {} ({} car parks)",
            self.pointer + 1,
            self.states.len(),
            self.current().len()
        );
    }

    /// Steps back one state and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoEarlierState` if the pointer is at the oldest
    /// state.
    pub fn undo(&mut self) -> Result<&Snapshot, CoreError> {
        if !self.can_undo() {
            return Err(CoreError::NoEarlierState);
        }
        self.pointer -= 1;
        debug!("Undo moved history pointer to {}", self.pointer);
        Ok(self.current())
    }

    /// Steps forward one state and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoLaterState` if the pointer is at the newest
    /// state.
    pub fn redo(&mut self) -> Result<&Snapshot, CoreError> {
        if !self.can_redo() {
            return Err(CoreError::NoLaterState);
        }
        self.pointer += 1;
        debug!("Redo moved history pointer to {}", self.pointer);
        Ok(self.current())
    }

    /// Returns the state at the pointer.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.states[self.pointer]
    }

    /// Returns whether there is an earlier state.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Returns whether there is a later state.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.states.len()
    }

    /// Returns the zero-based pointer.
    #[must_use]
    pub const fn pointer(&self) -> usize {
        self.pointer
    }

    /// Returns the number of retained states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a history holds at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the maximum number of retained states.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}
