// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::parser::{Input, USAGE_HELP, parse};
use carpark_finder::{CommandResult, FeedSource, State, execute};
use carpark_finder_domain::Record;
use carpark_finder_storage::JsonRegistryStore;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

/// What the session wants the caller to do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the text and keep reading.
    Continue(String),
    /// Stop reading input.
    Exit,
}

/// An interactive session: the registry state, its feed and its store.
pub struct Session {
    state: State,
    feed: Box<dyn FeedSource>,
    store: JsonRegistryStore,
}

impl Session {
    pub const fn new(state: State, feed: Box<dyn FeedSource>, store: JsonRegistryStore) -> Self {
        Self { state, feed, store }
    }

    /// Handles one line of input.
    ///
    /// Committed results and successful undo or redo results are written to
    /// the store. A failed save is reported alongside the command's own
    /// message; the in-memory state keeps the change.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let command = match parse(line) {
            Ok(Input::Command(command)) => command,
            Ok(Input::Help) => return Outcome::Continue(USAGE_HELP.to_string()),
            Ok(Input::Exit) => return Outcome::Exit,
            Err(err) => {
                debug!(input = line, error = %err, "Rejected input");
                return Outcome::Continue(err.to_string());
            }
        };

        let result: CommandResult = execute(&mut self.state, command, self.feed.as_mut());
        let mut text: String = result.message.clone();

        if (result.committed || result.restored)
            && let Err(err) = self.store.save(self.state.history().current())
        {
            error!(path = %self.store.path().display(), error = %err, "Failed to save registry");
            let _ = write!(text, "\nCould not save data to file: {err}");
        }

        if result.success {
            text.push_str(&render_view(&self.state.filtered_view()));
        }
        Outcome::Continue(text)
    }

    /// Reads commands line by line until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            match self.handle(&line?) {
                Outcome::Continue(text) => writeln!(output, "{text}")?,
                Outcome::Exit => break,
            }
            output.flush()?;
        }
        Ok(())
    }
}

fn render_view(view: &[&Record]) -> String {
    let mut text: String = String::new();
    for (position, record) in view.iter().enumerate() {
        let _ = write!(text, "\n{}. {record}", position + 1);
    }
    text
}
