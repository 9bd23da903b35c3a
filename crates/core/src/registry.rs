// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, Lookup};
use crate::history::Snapshot;
use carpark_finder_domain::{CarparkNumber, Record};
use std::collections::HashSet;
use tracing::debug;

/// A filter over registry records.
pub type Predicate = Box<dyn Fn(&Record) -> bool>;

/// Matches records whose address contains any of the keywords as a whole
/// word, ignoring case, or whose car park number equals a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Creates a new `KeywordFilter`. Blank keywords are discarded.
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    /// Returns the keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Checks whether the record matches any keyword.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.keywords.iter().any(|keyword| {
            record.address.contains_word(keyword)
                || record.carpark_number.value().eq_ignore_ascii_case(keyword)
        })
    }
}

/// An ordered collection of records, unique by car park number.
///
/// Mutations never touch history; committing is the caller's job.
#[derive(Default)]
pub struct Registry {
    /// Records in insertion order.
    records: Vec<Record>,
    /// The active filter. `None` matches everything.
    filter: Option<Predicate>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("records", &self.records)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from existing records, e.g. loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` if two records share a car
    /// park number.
    pub fn from_records(records: Vec<Record>) -> Result<Self, CoreError> {
        let mut registry: Self = Self::new();
        registry.replace_all(records)?;
        Ok(registry)
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` if the car park number is
    /// already present. The registry is unchanged.
    pub fn add(&mut self, record: Record) -> Result<(), CoreError> {
        if self.contains(&record.carpark_number) {
            return Err(CoreError::DuplicateIdentity(record.carpark_number));
        }
        debug!("Adding car park {}", record.carpark_number);
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the record with this car park number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this number.
    pub fn remove(&mut self, number: &CarparkNumber) -> Result<Record, CoreError> {
        let position: usize = self.position(number)?;
        debug!("Removing car park {number}");
        Ok(self.records.remove(position))
    }

    /// Replaces the record with this car park number, keeping its position,
    /// and resets the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has this number, or if the replacement
    /// has a different number that already belongs to another record.
    pub fn replace(&mut self, number: &CarparkNumber, record: Record) -> Result<Record, CoreError> {
        let position: usize = self.position(number)?;
        if &record.carpark_number != number && self.contains(&record.carpark_number) {
            return Err(CoreError::DuplicateIdentity(record.carpark_number));
        }
        self.filter = None;
        Ok(std::mem::replace(&mut self.records[position], record))
    }

    /// Swaps in an entirely new set of records and resets the filter.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateIdentity` if two of the new records share
    /// a car park number. Nothing is replaced in that case.
    pub fn replace_all(&mut self, records: Vec<Record>) -> Result<(), CoreError> {
        if let Some(duplicate) = first_duplicate(&records) {
            return Err(CoreError::DuplicateIdentity(duplicate.clone()));
        }
        debug!("Replacing registry contents with {} car parks", records.len());
        self.records = records;
        self.filter = None;
        Ok(())
    }

    /// Restores the registry to a snapshot and resets the filter.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.records = snapshot.records().to_vec();
        self.filter = None;
    }

    /// Returns the record with this car park number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this number.
    pub fn find(&self, number: &CarparkNumber) -> Result<&Record, CoreError> {
        self.records
            .iter()
            .find(|record| &record.carpark_number == number)
            .ok_or_else(|| CoreError::NotFound(Lookup::Identity(number.clone())))
    }

    /// Checks whether a record with this car park number exists.
    #[must_use]
    pub fn contains(&self, number: &CarparkNumber) -> bool {
        self.records
            .iter()
            .any(|record| &record.carpark_number == number)
    }

    /// Sets the active filter.
    pub fn set_filter<P>(&mut self, predicate: P)
    where
        P: Fn(&Record) -> bool + 'static,
    {
        self.filter = Some(Box::new(predicate));
    }

    /// Resets the filter so that every record is shown.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Returns whether a filter other than match-all is active.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    /// Returns the records matching the active filter, in registry order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Record> {
        match &self.filter {
            Some(predicate) => self.records.iter().filter(|r| predicate(r)).collect(),
            None => self.records.iter().collect(),
        }
    }

    /// Returns the record at a one-based position in the filtered view.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the position is zero or past the end
    /// of the filtered view.
    pub fn filtered_get(&self, index: usize) -> Result<&Record, CoreError> {
        index
            .checked_sub(1)
            .and_then(|zero_based| self.filtered_view().get(zero_based).copied())
            .ok_or(CoreError::NotFound(Lookup::Index(index)))
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the registry holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Takes an independent copy of the current records.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.clone())
    }

    fn position(&self, number: &CarparkNumber) -> Result<usize, CoreError> {
        self.records
            .iter()
            .position(|record| &record.carpark_number == number)
            .ok_or_else(|| CoreError::NotFound(Lookup::Identity(number.clone())))
    }
}

fn first_duplicate(records: &[Record]) -> Option<&CarparkNumber> {
    let mut seen: HashSet<&CarparkNumber> = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| &record.carpark_number)
        .find(|number| !seen.insert(*number))
}
