use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use taskline::session::Session;
use taskline::storage::{Storage, DEFAULT_TASKS_FILE};
use taskline::store::TaskStore;
use tempfile::TempDir;

/// A temporary working directory with a tasks file, plus a driver that runs
/// a whole session against in-memory input and captures its output.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    fn tasks_file(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_TASKS_FILE)
    }

    fn storage(&self) -> Storage {
        Storage::new(self.tasks_file())
    }

    pub fn write_tasks_file(&self, contents: &str) {
        fs::write(self.tasks_file(), contents).expect("write tasks file");
    }

    pub fn read_tasks_file(&self) -> String {
        fs::read_to_string(self.tasks_file()).expect("read tasks file")
    }

    /// Run a full session over the given input, returning the store as it
    /// stood at exit and everything the session wrote.
    pub fn run_session(&self, input: &str) -> (TaskStore, String) {
        let storage = self.storage();
        let mut store = TaskStore::new();
        let mut output = Vec::new();

        let reader = Cursor::new(input.as_bytes().to_vec());
        let mut session = Session::new(&mut store, &storage, reader, &mut output);
        session.run().expect("session run");

        (store, String::from_utf8(output).expect("utf8 output"))
    }
}
