// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use carpark_finder_domain::{Address, CarparkType, Record, Tag};
use std::collections::BTreeSet;

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new car park.
    Add {
        /// The record to add.
        record: Record,
    },
    /// Delete the car park at a position in the filtered view.
    Delete {
        /// The one-based position as displayed.
        index: usize,
    },
    /// Remove every car park.
    Clear,
    /// Change user-editable fields of the car park at a position in the
    /// filtered view.
    Edit {
        /// The one-based position as displayed.
        index: usize,
        /// The fields to change.
        descriptor: EditDescriptor,
    },
    /// Fetch the external feed and merge it into the registry.
    Reconcile,
    /// Show only car parks matching any keyword.
    Filter {
        /// The keywords to match.
        keywords: Vec<String>,
    },
    /// Show every car park.
    List,
    /// Restore the previous state.
    Undo,
    /// Restore the state undone most recently.
    Redo,
}

impl Command {
    /// Returns the name of the command kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "Add",
            Self::Delete { .. } => "Delete",
            Self::Clear => "Clear",
            Self::Edit { .. } => "Edit",
            Self::Reconcile => "Reconcile",
            Self::Filter { .. } => "Filter",
            Self::List => "List",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }
}

/// The fields an edit may change. `None` leaves a field as it is.
///
/// The car park number is not editable: it is the record's identity and
/// is owned by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDescriptor {
    /// A new address.
    pub address: Option<Address>,
    /// A new car park type.
    pub carpark_type: Option<CarparkType>,
    /// A new set of tags, replacing the existing ones.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor {
    /// Returns whether no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address.is_none() && self.carpark_type.is_none() && self.tags.is_none()
    }

    /// Builds the edited copy of `record`.
    #[must_use]
    pub fn apply_to(&self, record: &Record) -> Record {
        let mut edited: Record = record.clone();
        if let Some(address) = &self.address {
            edited.address = address.clone();
        }
        if let Some(carpark_type) = &self.carpark_type {
            edited.carpark_type = carpark_type.clone();
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}
