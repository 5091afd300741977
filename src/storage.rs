//! Flat-file persistence for the task list.
//!
//! One task per line, UTF-8, in the task's canonical display form: a
//! 7-character `[type][status] ` prefix followed by the description and an
//! optional date suffix. Loading strips the prefix, reads the done flag
//! from the status character, and routes the payload by its date marker.
//! Saving is a truncating whole-file overwrite.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::store::TaskStore;

/// Default tasks file, resolved against the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

/// Width of the `[T][X] ` line prefix.
const PREFIX_LEN: usize = 7;

/// Byte position of the status character inside the prefix.
const STATUS_POS: usize = 4;

/// What a load produced: the count of restored tasks and the 1-based
/// numbers of lines that could not be decoded (reported, then skipped).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub undecodable: Vec<usize>,
}

/// Persistence bound to a single backing file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into the store.
    ///
    /// A missing (or unopenable) file is a [`Error::FileOpen`]; the caller
    /// reports it once and continues with an empty store. Lines too short
    /// to strip, or empty after stripping, are skipped silently. Lines that
    /// strip but fail to decode are recorded in the summary and skipped;
    /// the load continues.
    pub fn load(&self, store: &mut TaskStore) -> Result<LoadSummary> {
        let file = File::open(&self.path).map_err(|source| Error::FileOpen {
            path: self.path.clone(),
            source,
        })?;

        let mut summary = LoadSummary::default();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let Some(info) = line.get(PREFIX_LEN..) else {
                continue;
            };
            if info.is_empty() {
                continue;
            }
            let done = line.as_bytes()[STATUS_POS] == b'X';

            let decoded = if info.contains("(at:") {
                store.restore_event(info, done)
            } else if info.contains("(by:") {
                store.restore_deadline(info, done)
            } else {
                store.restore_todo(info, done);
                Ok(())
            };

            match decoded {
                Ok(()) => summary.loaded += 1,
                Err(_) => {
                    warn!(line = number + 1, "skipping undecodable task line");
                    summary.undecodable.push(number + 1);
                }
            }
        }

        debug!(loaded = summary.loaded, path = %self.path.display(), "loaded tasks");
        Ok(summary)
    }

    /// Overwrite the backing file with every task in collection order.
    ///
    /// Failing to create the file and failing to write it are distinct
    /// errors; either aborts the save. A truncated file after a mid-write
    /// failure is accepted, not remediated.
    pub fn save(&self, store: &TaskStore) -> Result<usize> {
        let file = File::create(&self.path).map_err(|source| Error::FileOpen {
            path: self.path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        for task in store.tasks() {
            writeln!(writer, "{task}").map_err(|source| Error::FileWrite {
                path: self.path.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(saved = store.len(), path = %self.path.display(), "saved tasks");
        Ok(store.len())
    }
}
