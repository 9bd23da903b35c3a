// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_record;
use crate::{CoreError, DEFAULT_HISTORY_CAPACITY, History, Snapshot};
use std::num::NonZeroUsize;

fn snapshot_of(numbers: &[&str]) -> Snapshot {
    Snapshot::new(
        numbers
            .iter()
            .map(|number| create_test_record(number, "1 Test Road"))
            .collect(),
    )
}

#[test]
fn test_new_history_has_single_state_at_pointer_zero() {
    let history: History = History::new(Snapshot::default());

    assert_eq!(history.len(), 1);
    assert_eq!(history.pointer(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn test_undo_at_initial_state_fails() {
    let mut history: History = History::new(Snapshot::default());

    assert_eq!(history.undo().unwrap_err(), CoreError::NoEarlierState);
    assert_eq!(history.pointer(), 0);
}

#[test]
fn test_redo_at_latest_state_fails() {
    let mut history: History = History::new(Snapshot::default());
    history.commit(snapshot_of(&["A1"]));

    assert_eq!(history.redo().unwrap_err(), CoreError::NoLaterState);
    assert_eq!(history.pointer(), 1);
}

#[test]
fn test_commit_advances_pointer_to_last_state() {
    let mut history: History = History::new(Snapshot::default());

    history.commit(snapshot_of(&["A1"]));
    history.commit(snapshot_of(&["A1", "B2"]));

    assert_eq!(history.len(), 3);
    assert_eq!(history.pointer(), 2);
    assert_eq!(history.current().len(), 2);
}

#[test]
fn test_undo_and_redo_walk_the_states() {
    let mut history: History = History::new(Snapshot::default());
    history.commit(snapshot_of(&["A1"]));
    history.commit(snapshot_of(&["A1", "B2"]));

    assert_eq!(history.undo().unwrap().len(), 1);
    assert_eq!(history.undo().unwrap().len(), 0);
    assert!(history.can_redo());
    assert_eq!(history.redo().unwrap().len(), 1);
    assert_eq!(history.redo().unwrap().len(), 2);
    assert!(!history.can_redo());
}

#[test]
fn test_commit_after_undo_discards_redo_states() {
    let mut history: History = History::new(Snapshot::default());
    history.commit(snapshot_of(&["A1"]));
    history.commit(snapshot_of(&["A1", "B2"]));
    history.undo().unwrap();

    history.commit(snapshot_of(&["A1", "C3"]));

    assert_eq!(history.len(), 3);
    assert_eq!(history.redo().unwrap_err(), CoreError::NoLaterState);
    assert_eq!(history.current().records()[1].carpark_number.value(), "C3");
}

#[test]
fn test_capacity_evicts_oldest_state() {
    let capacity: NonZeroUsize = NonZeroUsize::new(3).unwrap();
    let mut history: History = History::with_capacity(Snapshot::default(), capacity);

    history.commit(snapshot_of(&["A1"]));
    history.commit(snapshot_of(&["A1", "B2"]));
    history.commit(snapshot_of(&["A1", "B2", "C3"]));

    assert_eq!(history.len(), 3);
    assert_eq!(history.pointer(), 2);
    assert_eq!(history.undo().unwrap().len(), 2);
    assert_eq!(history.undo().unwrap().len(), 1);
    assert_eq!(history.undo().unwrap_err(), CoreError::NoEarlierState);
}

#[test]
fn test_capacity_of_one_never_allows_undo() {
    let capacity: NonZeroUsize = NonZeroUsize::new(1).unwrap();
    let mut history: History = History::with_capacity(Snapshot::default(), capacity);

    history.commit(snapshot_of(&["A1"]));

    assert_eq!(history.len(), 1);
    assert_eq!(history.pointer(), 0);
    assert_eq!(history.current().len(), 1);
    assert!(!history.can_undo());
}
