//! The task store: an insertion-ordered collection with position-addressed
//! operations.
//!
//! All business-rule branching lives here. Operations return structured
//! outcomes (`Result` with the affected task) and never render anything;
//! the presentation layer decides what the user sees. Positions at the
//! public boundary are 1-based and converted internally, with out-of-range
//! positions reported distinctly from malformed input.

use crate::error::{Error, Result};
use crate::task::{Schedule, Task};

/// Marker token separating description from date text in `deadline` payloads.
const DEADLINE_MARKER: &str = "/by";

/// Marker token separating description from date text in `event` payloads.
const EVENT_MARKER: &str = "/at";

/// Markers locating the date suffix in persisted deadline/event payloads.
const RESTORED_DEADLINE_MARKER: &str = "(by:";
const RESTORED_EVENT_MARKER: &str = "(at:";

/// Offset between displayed positions and internal indices.
const DISPLAYED_INDEX_OFFSET: i64 = 1;

/// Owner of the ordered task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain todo. The payload is the description.
    pub fn add_todo(&mut self, payload: Option<&str>) -> Result<Task> {
        let description =
            payload.ok_or_else(|| Error::InvalidFormat("missing task description".to_string()))?;
        let task = Task::todo(description);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Append a deadline. The payload is `<description> /by <date>`, split at
    /// the first `/by`.
    pub fn add_deadline(&mut self, payload: Option<&str>) -> Result<Task> {
        let (description, date) = split_marker(payload, DEADLINE_MARKER)?;
        let task = Task::deadline(description, Schedule::from_input(date));
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Append an event. The payload is `<description> /at <date>`, split at
    /// the first `/at`.
    pub fn add_event(&mut self, payload: Option<&str>) -> Result<Task> {
        let (description, date) = split_marker(payload, EVENT_MARKER)?;
        let task = Task::event(description, Schedule::from_input(date));
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Mark the task at the given 1-based position as done.
    pub fn mark(&mut self, payload: Option<&str>) -> Result<Task> {
        let index = self.position(payload)?;
        self.tasks[index].set_done(true);
        Ok(self.tasks[index].clone())
    }

    /// Mark the task at the given 1-based position as not done.
    pub fn unmark(&mut self, payload: Option<&str>) -> Result<Task> {
        let index = self.position(payload)?;
        self.tasks[index].set_done(false);
        Ok(self.tasks[index].clone())
    }

    /// Remove the task at the given 1-based position. Returns the removed
    /// task and the new collection size.
    pub fn delete(&mut self, payload: Option<&str>) -> Result<(Task, usize)> {
        let index = self.position(payload)?;
        let removed = self.tasks.remove(index);
        Ok((removed, self.tasks.len()))
    }

    /// All tasks whose description contains the query as a literal,
    /// case-sensitive substring, with their original 1-based positions, in
    /// collection order. No match is an empty result, not an error.
    pub fn find(&self, payload: Option<&str>) -> Result<Vec<(usize, &Task)>> {
        let query =
            payload.ok_or_else(|| Error::InvalidFormat("missing search text".to_string()))?;
        Ok(self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().contains(query))
            .map(|(index, task)| (index + 1, task))
            .collect())
    }

    /// Append a todo decoded from a persisted payload. Used only during
    /// bulk load; emits no success outcome.
    pub fn restore_todo(&mut self, info: &str, done: bool) {
        let mut task = Task::todo(info);
        task.set_done(done);
        self.tasks.push(task);
    }

    /// Append a deadline decoded from a persisted payload.
    pub fn restore_deadline(&mut self, info: &str, done: bool) -> Result<()> {
        let (description, date) = split_restored(info, RESTORED_DEADLINE_MARKER)
            .ok_or_else(|| Error::Decode(info.to_string()))?;
        let mut task = Task::deadline(description, Schedule::from_display(date));
        task.set_done(done);
        self.tasks.push(task);
        Ok(())
    }

    /// Append an event decoded from a persisted payload.
    pub fn restore_event(&mut self, info: &str, done: bool) -> Result<()> {
        let (description, date) = split_restored(info, RESTORED_EVENT_MARKER)
            .ok_or_else(|| Error::Decode(info.to_string()))?;
        let mut task = Task::event(description, Schedule::from_display(date));
        task.set_done(done);
        self.tasks.push(task);
        Ok(())
    }

    /// Read view of the live collection, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Convert a payload into an internal index.
    ///
    /// Non-integer payloads (including absent ones) are format errors and
    /// take precedence over bounds checks, so `mark abc` reports the same
    /// way on an empty and a full list.
    fn position(&self, payload: Option<&str>) -> Result<usize> {
        let text =
            payload.ok_or_else(|| Error::InvalidFormat("missing task position".to_string()))?;
        let position: i64 = text
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("not a task position: {text}")))?;
        let index = position - DISPLAYED_INDEX_OFFSET;
        if index < 0 || index as usize >= self.tasks.len() {
            return Err(Error::TaskNotFound(text.to_string()));
        }
        Ok(index as usize)
    }
}

/// Split an add-command payload at the first marker occurrence.
///
/// The description is everything before the marker minus one separating
/// character; the date text is everything after the marker skipping one
/// separating character. A payload where either slice falls out of bounds
/// (marker at the start, or nothing after it) is malformed.
fn split_marker<'a>(payload: Option<&'a str>, marker: &str) -> Result<(&'a str, &'a str)> {
    let info = payload.ok_or_else(|| missing_marker(marker))?;
    let start = info.find(marker).ok_or_else(|| missing_marker(marker))?;
    let description = start
        .checked_sub(1)
        .and_then(|end| info.get(..end))
        .ok_or_else(|| missing_marker(marker))?;
    let date = info
        .get(start + marker.len() + 1..)
        .ok_or_else(|| missing_marker(marker))?;
    Ok((description, date))
}

fn missing_marker(marker: &str) -> Error {
    Error::InvalidFormat(format!("expected `<description> {marker} <date>`"))
}

/// Split a persisted deadline/event payload into description and date text.
///
/// The date runs from the marker end plus one character to the end of the
/// payload minus the closing parenthesis. Returns `None` when a slice falls
/// out of bounds or the date text is empty; the caller skips the line.
fn split_restored<'a>(info: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let start = info.find(marker)?;
    let description = info.get(..start.checked_sub(1)?)?;
    let date = info.get(start + marker.len() + 1..info.len().checked_sub(1)?)?;
    if date.is_empty() {
        return None;
    }
    Some((description, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    fn store_with(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for description in descriptions {
            store.add_todo(Some(description)).expect("add");
        }
        store
    }

    #[test]
    fn add_todo_appends_in_order() {
        let store = store_with(&["first", "second"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].description(), "first");
        assert_eq!(store.tasks()[1].description(), "second");
    }

    #[test]
    fn add_todo_without_payload_is_format_error() {
        let mut store = TaskStore::new();
        let err = store.add_todo(None).expect_err("no payload");
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_deadline_splits_at_first_marker() {
        let mut store = TaskStore::new();
        let task = store
            .add_deadline(Some("submit report /by 02/12/2023 1800"))
            .expect("add");
        assert_eq!(task.description(), "submit report");
        match task.kind() {
            TaskKind::Deadline(due) => {
                assert_eq!(due.raw, "02/12/2023 1800");
                assert!(due.parsed.is_some());
            }
            other => panic!("expected deadline, got {other:?}"),
        }
    }

    #[test]
    fn add_deadline_without_marker_does_not_mutate() {
        let mut store = TaskStore::new();
        let err = store
            .add_deadline(Some("submit report by friday"))
            .expect_err("no marker");
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_deadline_with_nothing_after_marker_is_format_error() {
        let mut store = TaskStore::new();
        let err = store.add_deadline(Some("report /by")).expect_err("no date");
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_deadline_keeps_unparseable_date_raw() {
        let mut store = TaskStore::new();
        let task = store
            .add_deadline(Some("call mum /by whenever"))
            .expect("lenient add");
        match task.kind() {
            TaskKind::Deadline(due) => {
                assert_eq!(due.raw, "whenever");
                assert_eq!(due.parsed, None);
            }
            other => panic!("expected deadline, got {other:?}"),
        }
    }

    #[test]
    fn add_event_uses_at_marker() {
        let mut store = TaskStore::new();
        let task = store
            .add_event(Some("team lunch /at 05/06/2024 1230"))
            .expect("add");
        assert_eq!(task.description(), "team lunch");
        assert!(matches!(task.kind(), TaskKind::Event(_)));
    }

    #[test]
    fn mark_uses_one_based_positions() {
        let mut store = store_with(&["a", "b", "c"]);
        let task = store.mark(Some("1")).expect("mark");
        assert!(task.is_done());
        assert!(store.tasks()[0].is_done());
        assert!(!store.tasks()[1].is_done());
    }

    #[test]
    fn mark_out_of_bounds_is_not_found() {
        let mut store = store_with(&["a", "b", "c"]);
        assert!(matches!(
            store.mark(Some("0")),
            Err(Error::TaskNotFound(_))
        ));
        assert!(matches!(
            store.mark(Some("4")),
            Err(Error::TaskNotFound(_))
        ));
        assert!(matches!(
            store.mark(Some("-1")),
            Err(Error::TaskNotFound(_))
        ));
    }

    #[test]
    fn format_error_precedes_not_found() {
        let mut empty = TaskStore::new();
        assert!(matches!(
            empty.mark(Some("abc")),
            Err(Error::InvalidFormat(_))
        ));

        let mut full = store_with(&["a"]);
        assert!(matches!(
            full.mark(Some("abc")),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(full.mark(None), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn unmark_clears_done_flag() {
        let mut store = store_with(&["a"]);
        store.mark(Some("1")).expect("mark");
        let task = store.unmark(Some("1")).expect("unmark");
        assert!(!task.is_done());
    }

    #[test]
    fn delete_returns_removed_task_and_new_size() {
        let mut store = store_with(&["a", "b"]);
        let (removed, remaining) = store.delete(Some("1")).expect("delete");
        assert_eq!(removed.description(), "a");
        assert_eq!(remaining, 1);
        assert_eq!(store.tasks()[0].description(), "b");
    }

    #[test]
    fn find_is_case_sensitive_and_keeps_positions() {
        let store = store_with(&["read Book", "buy book", "Book club"]);
        let matches = store.find(Some("Book")).expect("find");
        let positions: Vec<usize> = matches.iter().map(|(position, _)| *position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn find_without_match_returns_empty() {
        let store = store_with(&["a"]);
        assert!(store.find(Some("zzz")).expect("find").is_empty());
        let empty = TaskStore::new();
        assert!(empty.find(Some("a")).expect("find").is_empty());
    }

    #[test]
    fn find_without_payload_is_format_error() {
        let store = TaskStore::new();
        assert!(matches!(store.find(None), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn restore_deadline_decodes_persisted_payload() {
        let mut store = TaskStore::new();
        store
            .restore_deadline("submit report (by: Dec 02 2023, 06:00 pm)", true)
            .expect("restore");
        let task = &store.tasks()[0];
        assert_eq!(task.description(), "submit report");
        assert!(task.is_done());
        match task.kind() {
            TaskKind::Deadline(due) => {
                assert_eq!(due.raw, "Dec 02 2023, 06:00 pm");
                assert!(due.parsed.is_some());
            }
            other => panic!("expected deadline, got {other:?}"),
        }
    }

    #[test]
    fn restore_with_empty_date_is_decode_error() {
        let mut store = TaskStore::new();
        let err = store
            .restore_event("standup (at:)", false)
            .expect_err("empty date");
        assert!(matches!(err, Error::Decode(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn restore_keeps_unparseable_date_raw() {
        let mut store = TaskStore::new();
        store
            .restore_event("standup (at: the usual time)", false)
            .expect("restore");
        match store.tasks()[0].kind() {
            TaskKind::Event(at) => {
                assert_eq!(at.raw, "the usual time");
                assert_eq!(at.parsed, None);
            }
            other => panic!("expected event, got {other:?}"),
        }
    }
}
