// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EditDescriptor};
use crate::error::CoreError;
use crate::feed::{FeedSource, RawFields};
use crate::reconcile::{MergeResult, merge};
use crate::registry::KeywordFilter;
use crate::state::{CommandResult, State};
use carpark_finder_domain::{CarparkNumber, Record, check_lot_consistency};
use std::fmt::Write as _;
use tracing::{info, warn};

/// The message shown for any fetch or feed parse failure.
pub const MESSAGE_UNABLE_TO_LOAD: &str = "Unable to load car park information from database";
/// The message shown when clearing a non-empty registry.
pub const MESSAGE_CLEARED: &str = "All car park information has been cleared!";
/// The message shown when clearing an empty registry.
pub const MESSAGE_NOTHING_TO_CLEAR: &str = "There is nothing to be cleared.";
/// The message shown after a successful undo.
pub const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
/// The message shown after a successful redo.
pub const MESSAGE_REDO_SUCCESS: &str = "Redo success!";

/// Runs a command and turns any failure into a user-facing result.
///
/// This is the boundary at which every `CoreError` is recovered. A failed
/// command never commits and never leaves the registry changed.
///
/// # Arguments
///
/// * `state` - The registry and history to operate on
/// * `command` - The command to run
/// * `feed` - The feed consulted by `Command::Reconcile`
pub fn execute(state: &mut State, command: Command, feed: &mut dyn FeedSource) -> CommandResult {
    let name: &'static str = command.name();
    match apply(state, command, feed) {
        Ok(result) => result,
        Err(err @ (CoreError::FetchFailure(_) | CoreError::MalformedFeedRecord { .. })) => {
            warn!("{name} failed: {err}");
            CommandResult::failure(String::from(MESSAGE_UNABLE_TO_LOAD))
        }
        Err(err) => {
            warn!("{name} failed: {err}");
            CommandResult::failure(err.to_string())
        }
    }
}

/// Applies a command to the state.
///
/// Mutating commands commit a copy of the registry to history on success.
/// `Filter` and `List` only change the view, and `Undo`/`Redo` move the
/// history pointer; none of those commit.
///
/// # Arguments
///
/// * `state` - The registry and history to operate on
/// * `command` - The command to apply
/// * `feed` - The feed consulted by `Command::Reconcile`
///
/// # Returns
///
/// * `Ok(CommandResult)` describing what happened
/// * `Err(CoreError)` if the command is invalid; the state is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - An added car park number already exists
/// - A position does not exist in the filtered view
/// - An edit has no fields
/// - The feed cannot be fetched or contains a malformed record
/// - There is no state to undo or redo
pub fn apply(
    state: &mut State,
    command: Command,
    feed: &mut dyn FeedSource,
) -> Result<CommandResult, CoreError> {
    match command {
        Command::Add { record } => {
            let mut message: String = format!("New car park added: {record}");
            if let Err(inconsistency) = check_lot_consistency(&record) {
                warn!("{inconsistency}");
                let _ = write!(message, "\nWarning: {inconsistency}");
            }
            state.registry_mut().add(record)?;
            state.commit();
            Ok(CommandResult::committed(message))
        }
        Command::Delete { index } => {
            let target: CarparkNumber = state
                .registry()
                .filtered_get(index)?
                .carpark_number
                .clone();
            let removed: Record = state.registry_mut().remove(&target)?;
            state.commit();
            Ok(CommandResult::committed(format!("Deleted Car Park: {removed}")))
        }
        Command::Clear => {
            let was_empty: bool = state.registry().is_empty();
            state.registry_mut().replace_all(Vec::new())?;
            state.commit();
            let message: &str = if was_empty {
                MESSAGE_NOTHING_TO_CLEAR
            } else {
                MESSAGE_CLEARED
            };
            Ok(CommandResult::committed(String::from(message)))
        }
        Command::Edit { index, descriptor } => apply_edit(state, index, &descriptor),
        Command::Reconcile => apply_reconcile(state, feed),
        Command::Filter { keywords } => {
            let filter: KeywordFilter = KeywordFilter::new(keywords);
            state
                .registry_mut()
                .set_filter(move |record| filter.matches(record));
            let shown: usize = state.filtered_view().len();
            Ok(CommandResult::uncommitted(format!("{shown} car parks listed!")))
        }
        Command::List => {
            state.registry_mut().clear_filter();
            Ok(CommandResult::uncommitted(format!(
                "Listed all {} car parks",
                state.registry().len()
            )))
        }
        Command::Undo => {
            state.undo()?;
            Ok(CommandResult::restored(String::from(MESSAGE_UNDO_SUCCESS)))
        }
        Command::Redo => {
            state.redo()?;
            Ok(CommandResult::restored(String::from(MESSAGE_REDO_SUCCESS)))
        }
    }
}

fn apply_edit(
    state: &mut State,
    index: usize,
    descriptor: &EditDescriptor,
) -> Result<CommandResult, CoreError> {
    let original: &Record = state.registry().filtered_get(index)?;
    if descriptor.is_empty() {
        return Err(CoreError::NothingToEdit);
    }

    let target: CarparkNumber = original.carpark_number.clone();
    let edited: Record = descriptor.apply_to(original);
    let message: String = format!("Edited Car Park: {edited}");

    state.registry_mut().replace(&target, edited)?;
    state.commit();
    Ok(CommandResult::committed(message))
}

fn apply_reconcile(
    state: &mut State,
    feed: &mut dyn FeedSource,
) -> Result<CommandResult, CoreError> {
    let incoming: Vec<RawFields> = feed.fetch()?;
    info!("Fetched {} car park records from feed", incoming.len());

    let (records, result): (Vec<Record>, MergeResult) = merge(state.registry(), &incoming)?;
    state.registry_mut().replace_all(records)?;
    state.commit();

    let mut message: String = format!("{} Car parks updated", result.changed_count);
    if !result.warnings.is_empty() {
        let _ = write!(
            message,
            " ({} with inconsistent lot counts)",
            result.warnings.len()
        );
    }

    Ok(CommandResult::committed(message).with_changed_count(result.changed_count))
}
