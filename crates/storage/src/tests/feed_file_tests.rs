// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::JsonFeedFile;
use carpark_finder::{FeedError, FeedSource, RawFields};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_fetch_reads_string_arrays() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("feed.json");
    std::fs::write(&path, r#"[["a", "b"], ["c"]]"#).unwrap();
    let mut feed: JsonFeedFile = JsonFeedFile::new(&path);

    let records: Vec<RawFields> = feed.fetch().unwrap();

    assert_eq!(
        records,
        vec![
            vec![String::from("a"), String::from("b")],
            vec![String::from("c")],
        ]
    );
}

#[test]
fn test_fetch_missing_file_is_unavailable() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut feed: JsonFeedFile = JsonFeedFile::new(dir.path().join("absent.json"));

    assert!(matches!(feed.fetch(), Err(FeedError::Unavailable(_))));
}

#[test]
fn test_fetch_rejects_non_array_payload() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("feed.json");
    std::fs::write(&path, r#"{"items": []}"#).unwrap();
    let mut feed: JsonFeedFile = JsonFeedFile::new(&path);

    assert!(matches!(feed.fetch(), Err(FeedError::InvalidPayload(_))));
}
