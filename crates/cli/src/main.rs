// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod parser;
mod session;

#[cfg(test)]
mod tests;

use carpark_finder::{Config, FeedError, FeedSource, RawFields, State};
use carpark_finder_domain::Record;
use carpark_finder_storage::{JsonFeedFile, JsonRegistryStore};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use session::Session;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Car Park Finder - look up car park availability from the command line
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file holding the saved car park registry.
    #[arg(long, default_value = "data/carparkfinder.json")]
    data_file: PathBuf,

    /// Path to a JSON feed file used by the `query` command.
    #[arg(long)]
    feed_file: Option<PathBuf>,

    /// Number of registry states kept for undo and redo.
    #[arg(long, default_value_t = carpark_finder::DEFAULT_HISTORY_CAPACITY)]
    history_capacity: NonZeroUsize,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    info!("Starting Car Park Finder");

    let config: Config = Config {
        history_capacity: args.history_capacity,
    };
    let store: JsonRegistryStore = JsonRegistryStore::new(&args.data_file);
    let state: State = load_state(&store, config)?;
    let feed: Box<dyn FeedSource> = open_feed(args.feed_file);

    let mut session: Session = Session::new(state, feed, store);
    let stdin = io::stdin();
    session
        .run(stdin.lock(), &mut io::stdout())
        .context("Failed to run interactive session")?;

    info!("Exiting Car Park Finder");
    Ok(())
}

/// Loads the saved registry, starting empty when the file does not exist.
fn load_state(store: &JsonRegistryStore, config: Config) -> Result<State> {
    let records: Option<Vec<Record>> = store
        .load()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    match records {
        Some(records) => {
            info!(count = records.len(), "Loaded saved registry");
            State::with_records(records, config)
                .with_context(|| format!("Saved registry {} is invalid", store.path().display()))
        }
        None => {
            info!(path = %store.path().display(), "No saved registry, starting empty");
            Ok(State::new(config))
        }
    }
}

fn open_feed(feed_file: Option<PathBuf>) -> Box<dyn FeedSource> {
    if let Some(path) = feed_file {
        return Box::new(JsonFeedFile::new(path));
    }
    warn!("No feed file configured, query will fail until one is given");
    Box::new(|| -> Result<Vec<RawFields>, FeedError> {
        Err(FeedError::Unavailable("no feed file configured".to_string()))
    })
}
