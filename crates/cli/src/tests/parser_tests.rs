// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parser::{Input, ParseError, USAGE_ADD, USAGE_DELETE, USAGE_EDIT, USAGE_FIND, parse};
use carpark_finder::{Command, EditDescriptor};
use carpark_finder_domain::{DomainError, Tag};

const ADD_LINE: &str = "add 10 Sengkang Ave | A1 | SURFACE CAR PARK | 1.39, 103.89 | NO | 40 \
    | YES | WHOLE DAY | 100 | ELECTRONIC PARKING";

fn parse_command(line: &str) -> Command {
    match parse(line).unwrap() {
        Input::Command(command) => command,
        other => panic!("expected a command, got {other:?}"),
    }
}

#[test]
fn test_parse_add_builds_record() {
    let Command::Add { record } = parse_command(ADD_LINE) else {
        panic!("expected add");
    };

    assert_eq!(record.carpark_number.value(), "A1");
    assert_eq!(record.address.value(), "10 Sengkang Ave");
    assert_eq!(record.lots_available.value(), 40);
    assert!(record.tags.is_empty());
}

#[test]
fn test_parse_add_with_missing_fields_shows_usage() {
    assert_eq!(
        parse("add 10 Sengkang Ave | A1 | SURFACE CAR PARK"),
        Err(ParseError::InvalidFormat(USAGE_ADD))
    );
}

#[test]
fn test_parse_add_with_bad_field_reports_domain_error() {
    let line: String = ADD_LINE.replace("| YES |", "| MAYBE |");

    assert_eq!(
        parse(&line),
        Err(ParseError::InvalidField(DomainError::InvalidNightParking(
            String::from("MAYBE")
        )))
    );
}

#[test]
fn test_parse_short_and_long_command_words() {
    assert_eq!(parse_command("list"), Command::List);
    assert_eq!(parse_command("l"), Command::List);
    assert_eq!(parse_command("  QUERY "), Command::Reconcile);
    assert_eq!(parse_command("q"), Command::Reconcile);
    assert_eq!(parse_command("c"), Command::Clear);
    assert_eq!(parse_command("u"), Command::Undo);
    assert_eq!(parse_command("redo"), Command::Redo);
    assert_eq!(parse("exit"), Ok(Input::Exit));
    assert_eq!(parse("help"), Ok(Input::Help));
}

#[test]
fn test_parse_delete_requires_positive_index() {
    assert_eq!(parse_command("d 3"), Command::Delete { index: 3 });
    assert_eq!(parse("delete 0"), Err(ParseError::InvalidFormat(USAGE_DELETE)));
    assert_eq!(parse("delete two"), Err(ParseError::InvalidFormat(USAGE_DELETE)));
    assert_eq!(parse("delete"), Err(ParseError::InvalidFormat(USAGE_DELETE)));
}

#[test]
fn test_parse_find_collects_keywords() {
    assert_eq!(
        parse_command("find Sengkang   Punggol"),
        Command::Filter {
            keywords: vec![String::from("Sengkang"), String::from("Punggol")],
        }
    );
    assert_eq!(parse("f   "), Err(ParseError::InvalidFormat(USAGE_FIND)));
}

#[test]
fn test_parse_edit_with_multi_word_address_and_tags() {
    let Command::Edit { index, descriptor } = parse_command("edit 2 a/7 Bishan Rd t/home t/cheap")
    else {
        panic!("expected edit");
    };

    assert_eq!(index, 2);
    assert_eq!(descriptor.address.unwrap().value(), "7 Bishan Rd");
    assert!(descriptor.carpark_type.is_none());
    let tags: Vec<String> = descriptor
        .tags
        .unwrap()
        .iter()
        .map(|tag: &Tag| tag.name().to_string())
        .collect();
    assert_eq!(tags, vec![String::from("cheap"), String::from("home")]);
}

#[test]
fn test_parse_edit_bare_tag_prefix_clears_tags() {
    assert_eq!(
        parse_command("e 1 t/"),
        Command::Edit {
            index: 1,
            descriptor: EditDescriptor {
                tags: Some(std::collections::BTreeSet::new()),
                ..EditDescriptor::default()
            },
        }
    );
}

#[test]
fn test_parse_edit_without_fields_shows_usage() {
    assert_eq!(parse("edit 1"), Err(ParseError::InvalidFormat(USAGE_EDIT)));
    assert_eq!(
        parse("edit 1 stray words"),
        Err(ParseError::InvalidFormat(USAGE_EDIT))
    );
}

#[test]
fn test_parse_edit_rejects_invalid_tag() {
    assert!(matches!(
        parse("edit 1 t/not-valid"),
        Err(ParseError::InvalidField(DomainError::InvalidTag(_)))
    ));
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(
        parse("park A1"),
        Err(ParseError::UnknownCommand(String::from("park")))
    );
}
