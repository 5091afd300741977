//! The interactive session loop.
//!
//! Reads one command per line, dispatches it, renders the outcome, and
//! repeats until `bye` or the input ends. Generic over its reader and
//! writer so tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::{self, Command};
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::ui;

/// One interactive session over a task store and its backing file.
pub struct Session<'a, R, W> {
    store: &'a mut TaskStore,
    storage: &'a Storage,
    reader: R,
    writer: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, storage: &'a Storage, reader: R, writer: W) -> Self {
        Self {
            store,
            storage,
            reader,
            writer,
        }
    }

    /// Run the full session: banner, startup load, command loop, farewell.
    ///
    /// Command failures are rendered and the loop continues; only faults on
    /// the session's own streams propagate. Exhausted input is an implicit
    /// exit, equivalent to `bye` without a save.
    pub fn run(&mut self) -> Result<()> {
        ui::banner(&mut self.writer)?;
        self.load()?;

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            if self.dispatch(line.trim())? {
                break;
            }
        }

        ui::farewell(&mut self.writer)?;
        Ok(())
    }

    /// Startup load. A missing file is reported once and the store stays
    /// empty; undecodable lines are reported individually.
    fn load(&mut self) -> Result<()> {
        match self.storage.load(self.store) {
            Ok(summary) => {
                for line in summary.undecodable {
                    ui::undecodable_line(&mut self.writer, line)?;
                }
                Ok(())
            }
            Err(Error::FileOpen { .. }) => {
                ui::load_failed(&mut self.writer)?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Execute one trimmed input line. Returns `true` when the session
    /// should end.
    fn dispatch(&mut self, input: &str) -> Result<bool> {
        let (keyword, payload) = parser::split(input);
        let Some(command) = Command::lookup(keyword) else {
            debug!(keyword, "unknown command");
            ui::notify_error(&mut self.writer, &Error::UnknownCommand(keyword.to_string()))?;
            return Ok(false);
        };

        match command {
            Command::Todo => match self.store.add_todo(payload) {
                Ok(task) => ui::task_added(&mut self.writer, &task)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Deadline => match self.store.add_deadline(payload) {
                Ok(task) => ui::task_added(&mut self.writer, &task)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Event => match self.store.add_event(payload) {
                Ok(task) => ui::task_added(&mut self.writer, &task)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Mark => match self.store.mark(payload) {
                Ok(task) => ui::task_marked(&mut self.writer, &task)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Unmark => match self.store.unmark(payload) {
                Ok(task) => ui::task_unmarked(&mut self.writer, &task)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Delete => match self.store.delete(payload) {
                Ok((task, remaining)) => ui::task_deleted(&mut self.writer, &task, remaining)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Find => match self.store.find(payload) {
                Ok(matches) => ui::matching_tasks(&mut self.writer, &matches)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::List => ui::all_tasks(&mut self.writer, self.store.tasks())?,
            Command::Save => match self.storage.save(self.store) {
                Ok(count) => ui::saved(&mut self.writer, count)?,
                Err(err) => ui::notify_error(&mut self.writer, &err)?,
            },
            Command::Bye => return Ok(true),
        }

        Ok(false)
    }
}
