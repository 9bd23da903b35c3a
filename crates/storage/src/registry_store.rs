// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use carpark_finder::Snapshot;
use carpark_finder_domain::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The on-disk layout of the registry file.
#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile<R> {
    carparks: Vec<R>,
}

/// Stores the registry as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRegistryStore {
    path: PathBuf,
}

impl JsonRegistryStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved records.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(records))` if the file exists
    /// * `Ok(None)` if there is no file yet
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any record in it fails
    /// validation.
    pub fn load(&self) -> Result<Option<Vec<Record>>, StorageError> {
        let contents: String = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No registry file at {}, starting empty", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let file: RegistryFile<Record> = serde_json::from_str(&contents)?;
        info!(
            "Loaded {} car parks from {}",
            file.carparks.len(),
            self.path.display()
        );
        Ok(Some(file.carparks))
    }

    /// Saves a snapshot, replacing the file.
    ///
    /// The snapshot is written to a sibling temporary file first and then
    /// renamed over the target, so a failed write leaves the old file intact.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file: RegistryFile<&Record> = RegistryFile {
            carparks: snapshot.records().iter().collect(),
        };
        let json: String = serde_json::to_string_pretty(&file)?;

        let staging: PathBuf = self.path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;

        debug!(
            "Saved {} car parks to {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(())
    }
}
