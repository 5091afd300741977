//! Command-line interface for taskline
//!
//! The binary takes no subcommands: it resolves the tasks file from flags,
//! environment and config, then hands stdin/stdout to the interactive
//! session.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config;
use crate::error::Result;
use crate::session::Session;
use crate::storage::Storage;
use crate::store::TaskStore;

/// taskline - interactive task tracking
///
/// A line-oriented session for todos, deadlines and events, persisted to a
/// flat text file. Type `bye` to leave, `save` to persist.
#[derive(Parser, Debug)]
#[command(name = "taskline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tasks file to load and save (overrides taskline.toml)
    #[arg(long, env = "TASKLINE_FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Resolve configuration and run a session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let config = config::load(Path::new("."))?;
        let file = self.file.unwrap_or(config.storage.file);

        let storage = Storage::new(file);
        let mut store = TaskStore::new();

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(&mut store, &storage, stdin.lock(), stdout.lock());
        session.run()
    }
}
