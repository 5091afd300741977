//! Task model for taskline.
//!
//! A task is a description plus a done flag, optionally carrying a date
//! (deadlines and events). The `Display` impl is canonical: it is both the
//! human rendering and the persisted file line, so what `storage` writes is
//! exactly what it can classify and decode on the next load.

use std::fmt;

use chrono::NaiveDateTime;

/// Pattern for dates typed at the command line, e.g. `02/12/2023 1800`.
pub const DATE_INPUT_PATTERN: &str = "%d/%m/%Y %H%M";

/// Pattern for dates in display and persisted form, e.g. `Dec 02 2023, 06:00 pm`.
pub const DATE_DISPLAY_PATTERN: &str = "%b %d %Y, %I:%M %P";

/// A date as the user wrote it, with the parsed instant when the text
/// matched the expected pattern.
///
/// Parsing is lenient: text that does not match is kept raw and shown
/// verbatim, and the task is created anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub raw: String,
    pub parsed: Option<NaiveDateTime>,
}

impl Schedule {
    /// Build from command-line date text (`dd/MM/yyyy HHmm`).
    pub fn from_input(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            parsed: NaiveDateTime::parse_from_str(raw, DATE_INPUT_PATTERN).ok(),
        }
    }

    /// Build from persisted date text (`MMM dd yyyy, hh:mm am/pm`).
    pub fn from_display(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            parsed: NaiveDateTime::parse_from_str(raw, DATE_DISPLAY_PATTERN).ok(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parsed {
            Some(when) => write!(f, "{}", when.format(DATE_DISPLAY_PATTERN)),
            None => f.write_str(&self.raw),
        }
    }
}

/// The three task variants. Behavior differs only in the date suffix and
/// the decode route, so a discriminant with optional schedule data is all
/// the variance there is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline(Schedule),
    Event(Schedule),
}

impl TaskKind {
    /// Single-letter tag used in the display prefix: `T`, `D` or `E`.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }
}

/// One entry in the task list.
///
/// The description is set at construction and never changes; only the done
/// flag is mutable, via [`Task::set_done`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due: Schedule) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline(due),
        }
    }

    pub fn event(description: impl Into<String>, at: Schedule) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event(at),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }
}

impl fmt::Display for Task {
    /// Canonical form: `[T][X] description`, with a ` (by: ...)` or
    /// ` (at: ...)` suffix for deadlines and events. The prefix is exactly
    /// 7 characters wide, which the persistence codec relies on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), status, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline(due) => write!(f, " (by: {due})"),
            TaskKind::Event(at) => write!(f, " (at: {at})"),
        }
    }
}
