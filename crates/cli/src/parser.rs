// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns a line of user input into a [`Command`].

use carpark_finder::{Command, EditDescriptor};
use carpark_finder_domain::{
    Address, CarparkType, DomainError, FEED_FIELD_COUNT, Tag, parse_feed_record,
};
use std::collections::BTreeSet;
use thiserror::Error;

pub const USAGE_ADD: &str = "add: Adds a car park. Fields are separated by '|'.\n\
    Parameters: ADDRESS | NUMBER | TYPE | LATITUDE, LONGITUDE | FREE PARKING | LOTS AVAILABLE \
    | NIGHT PARKING | SHORT TERM | TOTAL LOTS | TYPE OF PARKING\n\
    Example: add 10 Sengkang Ave | A1 | SURFACE CAR PARK | 1.39, 103.89 | NO | 40 | YES \
    | WHOLE DAY | 100 | ELECTRONIC PARKING";
pub const USAGE_DELETE: &str = "delete: Deletes the car park identified by the index number \
    used in the displayed car park list.\nParameters: INDEX (must be a positive integer)\n\
    Example: delete 1";
pub const USAGE_EDIT: &str = "edit: Edits the car park identified by the index number used in \
    the displayed car park list. Tags given replace the existing tags; 't/' alone removes them.\n\
    Parameters: INDEX [a/ADDRESS] [ct/CAR PARK TYPE] [t/TAG]...\n\
    Example: edit 1 t/home t/cheap";
pub const USAGE_FIND: &str = "find: Finds all car parks whose address contains any of the \
    keywords (case-insensitive) or whose number matches one.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find Sengkang Punggol";
pub const USAGE_HELP: &str = "Commands: add, delete (d), edit (e), clear (c), find (f), \
    list (l), query (q), undo (u), redo (r), help, exit";

const PREFIX_ADDRESS: &str = "a/";
const PREFIX_CARPARK_TYPE: &str = "ct/";
const PREFIX_TAG: &str = "t/";
const EDIT_PREFIXES: [&str; 3] = [PREFIX_ADDRESS, PREFIX_CARPARK_TYPE, PREFIX_TAG];

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Run a command against the registry.
    Command(Command),
    /// Show the command summary.
    Help,
    /// Leave the program.
    Exit,
}

/// Errors raised while parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The command word is not recognized.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// The command's arguments do not fit its usage.
    #[error("Invalid command format!\n{0}")]
    InvalidFormat(&'static str),
    /// A field value failed validation.
    #[error(transparent)]
    InvalidField(#[from] DomainError),
}

/// Parses one line of user input.
///
/// # Errors
///
/// Returns an error if the command word is unknown, the arguments do not
/// match the command's usage, or a field value is invalid.
pub fn parse(line: &str) -> Result<Input, ParseError> {
    let line: &str = line.trim();
    let (word, args): (&str, &str) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, args)| (word, args.trim()));

    let command: Command = match word.to_lowercase().as_str() {
        "" => return Err(ParseError::InvalidFormat(USAGE_HELP)),
        "help" => return Ok(Input::Help),
        "exit" => return Ok(Input::Exit),
        "add" => parse_add(args)?,
        "delete" | "d" => Command::Delete {
            index: parse_index(args, USAGE_DELETE)?,
        },
        "edit" | "e" => parse_edit(args)?,
        "clear" | "c" => Command::Clear,
        "find" | "f" => parse_find(args)?,
        "list" | "l" => Command::List,
        "query" | "q" => Command::Reconcile,
        "undo" | "u" => Command::Undo,
        "redo" | "r" => Command::Redo,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };
    Ok(Input::Command(command))
}

fn parse_add(args: &str) -> Result<Command, ParseError> {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if fields.len() != FEED_FIELD_COUNT {
        return Err(ParseError::InvalidFormat(USAGE_ADD));
    }
    Ok(Command::Add {
        record: parse_feed_record(&fields)?,
    })
}

fn parse_index(args: &str, usage: &'static str) -> Result<usize, ParseError> {
    match args.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidFormat(usage)),
    }
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(String::from).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(USAGE_FIND));
    }
    Ok(Command::Filter { keywords })
}

fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let (index_text, rest): (&str, &str) = args
        .split_once(char::is_whitespace)
        .unwrap_or((args, ""));
    let index: usize = parse_index(index_text, USAGE_EDIT)?;

    let mut descriptor: EditDescriptor = EditDescriptor::default();
    for (prefix, value) in split_prefixed(rest, USAGE_EDIT)? {
        match prefix {
            PREFIX_ADDRESS => descriptor.address = Some(Address::new(&value)?),
            PREFIX_CARPARK_TYPE => descriptor.carpark_type = Some(CarparkType::new(&value)?),
            _ => {
                let tags: &mut BTreeSet<Tag> = descriptor.tags.get_or_insert_with(BTreeSet::new);
                if !value.is_empty() {
                    tags.insert(Tag::new(&value)?);
                }
            }
        }
    }

    if descriptor.is_empty() {
        return Err(ParseError::InvalidFormat(USAGE_EDIT));
    }
    Ok(Command::Edit { index, descriptor })
}

/// Splits `a/10 Main St t/home` into `[("a/", "10 Main St"), ("t/", "home")]`.
///
/// A word that starts with a known prefix opens a new argument; other words
/// extend the current one. Text before the first prefix is an error.
fn split_prefixed(
    args: &str,
    usage: &'static str,
) -> Result<Vec<(&'static str, String)>, ParseError> {
    let mut arguments: Vec<(&'static str, String)> = Vec::new();
    for word in args.split_whitespace() {
        if let Some(prefix) = EDIT_PREFIXES.iter().find(|p| word.starts_with(**p)) {
            arguments.push((*prefix, word[prefix.len()..].to_string()));
        } else if let Some((_, value)) = arguments.last_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(word);
        } else {
            return Err(ParseError::InvalidFormat(usage));
        }
    }
    Ok(arguments)
}
