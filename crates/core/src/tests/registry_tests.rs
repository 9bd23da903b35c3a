// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_tagged_record, create_test_record};
use crate::{CoreError, KeywordFilter, Lookup, Registry, Snapshot};
use carpark_finder_domain::{Address, CarparkNumber, Record};

fn create_test_registry() -> Registry {
    Registry::from_records(vec![
        create_test_record("A1", "10 Sengkang Ave"),
        create_test_record("B2", "5 Bishan St"),
        create_test_record("C3", "22 Sengkang East Way"),
    ])
    .unwrap()
}

#[test]
fn test_add_appends_in_insertion_order() {
    let mut registry: Registry = Registry::new();
    registry.add(create_test_record("B2", "5 Bishan St")).unwrap();
    registry.add(create_test_record("A1", "10 Sengkang Ave")).unwrap();

    let numbers: Vec<&str> = registry
        .records()
        .iter()
        .map(|record| record.carpark_number.value())
        .collect();
    assert_eq!(numbers, vec!["B2", "A1"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_add_duplicate_identity_fails_and_leaves_registry_unchanged() {
    let mut registry: Registry = create_test_registry();
    let before: Snapshot = registry.snapshot();

    let result: Result<(), CoreError> = registry.add(create_test_record("a1", "Elsewhere"));

    assert_eq!(
        result,
        Err(CoreError::DuplicateIdentity(CarparkNumber::new("A1").unwrap()))
    );
    assert_eq!(registry.len(), 3);
    assert!(registry.snapshot().is_identical(&before));
}

#[test]
fn test_remove_returns_removed_record() {
    let mut registry: Registry = create_test_registry();
    let number: CarparkNumber = CarparkNumber::new("B2").unwrap();

    let removed: Record = registry.remove(&number).unwrap();

    assert_eq!(removed.address.value(), "5 Bishan St");
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains(&number));
}

#[test]
fn test_remove_missing_identity_fails() {
    let mut registry: Registry = create_test_registry();
    let number: CarparkNumber = CarparkNumber::new("Z9").unwrap();

    let result: Result<Record, CoreError> = registry.remove(&number);

    assert_eq!(
        result.unwrap_err(),
        CoreError::NotFound(Lookup::Identity(number))
    );
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_find_returns_record_or_not_found() {
    let registry: Registry = create_test_registry();

    let found: &Record = registry.find(&CarparkNumber::new("C3").unwrap()).unwrap();
    assert_eq!(found.address.value(), "22 Sengkang East Way");

    let missing: Result<&Record, CoreError> = registry.find(&CarparkNumber::new("D4").unwrap());
    assert!(matches!(missing, Err(CoreError::NotFound(Lookup::Identity(_)))));
}

#[test]
fn test_replace_keeps_position() {
    let mut registry: Registry = create_test_registry();
    let number: CarparkNumber = CarparkNumber::new("B2").unwrap();
    let mut edited: Record = create_test_record("B2", "5 Bishan St");
    edited.address = Address::new("7 Bishan Rd").unwrap();

    registry.replace(&number, edited).unwrap();

    assert_eq!(registry.records()[1].address.value(), "7 Bishan Rd");
}

#[test]
fn test_replace_resets_filter() {
    let mut registry: Registry = create_test_registry();
    let filter: KeywordFilter = KeywordFilter::new(["Bishan"]);
    registry.set_filter(move |record| filter.matches(record));
    let number: CarparkNumber = CarparkNumber::new("B2").unwrap();
    let mut edited: Record = create_test_record("B2", "5 Bishan St");
    edited.address = Address::new("7 Toa Payoh Rd").unwrap();

    registry.replace(&number, edited).unwrap();

    assert!(!registry.is_filtered());
    assert_eq!(registry.filtered_view().len(), 3);
}

#[test]
fn test_replace_all_rejects_duplicates_atomically() {
    let mut registry: Registry = create_test_registry();
    let before: Snapshot = registry.snapshot();

    let result: Result<(), CoreError> = registry.replace_all(vec![
        create_test_record("X1", "1 New Rd"),
        create_test_record("X1", "2 New Rd"),
    ]);

    assert!(matches!(result, Err(CoreError::DuplicateIdentity(_))));
    assert!(registry.snapshot().is_identical(&before));
}

#[test]
fn test_replace_all_resets_filter() {
    let mut registry: Registry = create_test_registry();
    registry.set_filter(|_| false);
    assert!(registry.filtered_view().is_empty());

    registry
        .replace_all(vec![create_test_record("X1", "1 New Rd")])
        .unwrap();

    assert!(!registry.is_filtered());
    assert_eq!(registry.filtered_view().len(), 1);
}

#[test]
fn test_keyword_filter_matches_whole_words_in_order() {
    let mut registry: Registry = create_test_registry();
    let filter: KeywordFilter = KeywordFilter::new(["sengkang"]);

    registry.set_filter(move |record| filter.matches(record));

    let view: Vec<&Record> = registry.filtered_view();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].carpark_number.value(), "A1");
    assert_eq!(view[1].carpark_number.value(), "C3");
}

#[test]
fn test_keyword_filter_rejects_partial_words() {
    let filter: KeywordFilter = KeywordFilter::new(["Seng"]);
    assert!(!filter.matches(&create_test_record("A1", "10 Sengkang Ave")));
}

#[test]
fn test_keyword_filter_matches_any_keyword_or_number() {
    let filter: KeywordFilter = KeywordFilter::new(["bishan", "c3", "  "]);

    assert_eq!(filter.keywords().len(), 2);
    assert!(filter.matches(&create_test_record("B2", "5 Bishan St")));
    assert!(filter.matches(&create_test_record("C3", "22 Sengkang East Way")));
    assert!(!filter.matches(&create_test_record("A1", "10 Sengkang Ave")));
}

#[test]
fn test_filtered_get_is_one_based_over_the_view() {
    let mut registry: Registry = create_test_registry();
    let filter: KeywordFilter = KeywordFilter::new(["Sengkang"]);
    registry.set_filter(move |record| filter.matches(record));

    assert_eq!(
        registry.filtered_get(2).unwrap().carpark_number.value(),
        "C3"
    );
    assert_eq!(
        registry.filtered_get(0).unwrap_err(),
        CoreError::NotFound(Lookup::Index(0))
    );
    assert_eq!(
        registry.filtered_get(3).unwrap_err(),
        CoreError::NotFound(Lookup::Index(3))
    );
}

#[test]
fn test_snapshot_is_independent_of_later_mutation() {
    let mut registry: Registry = Registry::from_records(vec![create_tagged_record(
        "A1",
        "10 Sengkang Ave",
        &["home"],
    )])
    .unwrap();
    let snapshot: Snapshot = registry.snapshot();

    registry.add(create_test_record("B2", "5 Bishan St")).unwrap();
    registry
        .remove(&CarparkNumber::new("A1").unwrap())
        .unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.records()[0].carpark_number.value(), "A1");
    assert_eq!(snapshot.records()[0].tags.len(), 1);
}

#[test]
fn test_restore_replaces_records_and_resets_filter() {
    let mut registry: Registry = create_test_registry();
    let snapshot: Snapshot = Snapshot::new(vec![create_test_record("Z9", "9 Last Rd")]);
    registry.set_filter(|_| false);

    registry.restore(&snapshot);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.filtered_view().len(), 1);
}
