// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Config, FeedError, FeedSource, RawFields, State};
use carpark_finder_domain::{Record, Tag, parse_feed_record};
use std::collections::BTreeSet;

/// A feed that returns a fixed batch, or a fixed error.
pub struct StaticFeed {
    pub response: Result<Vec<RawFields>, FeedError>,
    pub fetches: usize,
}

impl StaticFeed {
    pub const fn new(records: Vec<RawFields>) -> Self {
        Self {
            response: Ok(records),
            fetches: 0,
        }
    }

    pub const fn failing(err: FeedError) -> Self {
        Self {
            response: Err(err),
            fetches: 0,
        }
    }
}

impl FeedSource for StaticFeed {
    fn fetch(&mut self) -> Result<Vec<RawFields>, FeedError> {
        self.fetches += 1;
        self.response.clone()
    }
}

pub fn create_test_fields(number: &str, address: &str) -> RawFields {
    create_test_fields_with_lots(number, address, "40", "100")
}

pub fn create_test_fields_with_lots(
    number: &str,
    address: &str,
    lots_available: &str,
    total_lots: &str,
) -> RawFields {
    vec![
        String::from(address),
        String::from(number),
        String::from("SURFACE CAR PARK"),
        String::from("1.37326, 103.897"),
        String::from("NO"),
        String::from(lots_available),
        String::from("YES"),
        String::from("WHOLE DAY"),
        String::from(total_lots),
        String::from("ELECTRONIC PARKING"),
    ]
}

pub fn create_test_record(number: &str, address: &str) -> Record {
    parse_feed_record(&create_test_fields(number, address)).unwrap()
}

pub fn create_tagged_record(number: &str, address: &str, tags: &[&str]) -> Record {
    let tags: BTreeSet<Tag> = tags.iter().map(|tag| Tag::new(tag).unwrap()).collect();
    create_test_record(number, address).with_tags(tags)
}

pub fn create_test_state(records: Vec<Record>) -> State {
    State::with_records(records, Config::default()).unwrap()
}

pub fn addresses(state: &State) -> Vec<String> {
    state
        .filtered_view()
        .iter()
        .map(|record| record.address.value().to_string())
        .collect()
}
