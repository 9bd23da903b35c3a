// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, FeedDefect};
use crate::feed::RawFields;
use crate::registry::Registry;
use carpark_finder_domain::{
    CarparkNumber, LotInconsistency, Record, check_lot_consistency, parse_feed_record,
};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// The outcome of merging a feed batch into a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Records that are new, or whose attributes (excluding tags) differ
    /// from the record they replace.
    pub changed_count: usize,
    /// Records dropped because the feed no longer lists them.
    ///
    /// Removals are not part of `changed_count`.
    pub removed_count: usize,
    /// Lot count problems found in the feed. These do not stop the merge.
    pub warnings: Vec<LotInconsistency>,
}

/// Merges a fetched feed batch into the registry's records.
///
/// The feed is authoritative: the result holds exactly the feed's car parks,
/// in feed order. Tags from existing records with the same car park number
/// are carried over. The registry itself is not modified; the caller applies
/// the returned records.
///
/// # Arguments
///
/// * `existing` - The registry to merge into
/// * `incoming` - The raw feed records
///
/// # Returns
///
/// The replacement record list and a `MergeResult` describing the changes.
///
/// # Errors
///
/// Returns `CoreError::MalformedFeedRecord` if any feed record cannot be
/// parsed or repeats a car park number from earlier in the batch. Nothing is
/// merged in that case.
pub fn merge(
    existing: &Registry,
    incoming: &[RawFields],
) -> Result<(Vec<Record>, MergeResult), CoreError> {
    let prior: HashMap<&CarparkNumber, &Record> = existing
        .records()
        .iter()
        .map(|record| (&record.carpark_number, record))
        .collect();

    let mut merged: Vec<Record> = Vec::with_capacity(incoming.len());
    let mut seen: HashSet<CarparkNumber> = HashSet::with_capacity(incoming.len());
    let mut result: MergeResult = MergeResult::default();

    for (position, fields) in incoming.iter().enumerate() {
        let mut candidate: Record =
            parse_feed_record(fields).map_err(|err| CoreError::MalformedFeedRecord {
                position,
                defect: FeedDefect::Invalid(err),
            })?;

        if !seen.insert(candidate.carpark_number.clone()) {
            return Err(CoreError::MalformedFeedRecord {
                position,
                defect: FeedDefect::DuplicateIdentity(candidate.carpark_number),
            });
        }

        if let Err(inconsistency) = check_lot_consistency(&candidate) {
            warn!("{inconsistency}");
            result.warnings.push(inconsistency);
        }

        match prior.get(&candidate.carpark_number) {
            Some(previous) => {
                candidate.tags = previous.tags.clone();
                if candidate != **previous {
                    result.changed_count += 1;
                }
            }
            None => result.changed_count += 1,
        }

        merged.push(candidate);
    }

    result.removed_count = existing
        .records()
        .iter()
        .filter(|record| !seen.contains(&record.carpark_number))
        .count();

    info!(
        "Merged {} feed records: {} changed, {} removed, {} warnings",
        merged.len(),
        result.changed_count,
        result.removed_count,
        result.warnings.len()
    );

    Ok((merged, result))
}
