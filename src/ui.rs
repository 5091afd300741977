//! Rendering of session output.
//!
//! The store and codec return structured outcomes; this module is the only
//! place those become text. Every notification is written to the session's
//! writer, one line per message, so the whole surface is capturable in
//! tests.

use std::io::{self, Write};

use crate::error::Error;
use crate::task::Task;

pub fn banner<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Hello! This is taskline.")?;
    writeln!(writer, "What can I do for you?")
}

pub fn farewell<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Bye! See you soon.")
}

pub fn task_added<W: Write>(writer: &mut W, task: &Task) -> io::Result<()> {
    writeln!(writer, "Got it. I've added this task:")?;
    writeln!(writer, "  {task}")
}

pub fn task_marked<W: Write>(writer: &mut W, task: &Task) -> io::Result<()> {
    writeln!(writer, "Marked as done: {task}")
}

pub fn task_unmarked<W: Write>(writer: &mut W, task: &Task) -> io::Result<()> {
    writeln!(writer, "Marked as not done: {task}")
}

pub fn task_deleted<W: Write>(writer: &mut W, task: &Task, remaining: usize) -> io::Result<()> {
    writeln!(writer, "Deleted this task:")?;
    writeln!(writer, "  {task}")?;
    writeln!(writer, "Now you have {remaining} tasks in the list.")
}

pub fn all_tasks<W: Write>(writer: &mut W, tasks: &[Task]) -> io::Result<()> {
    writeln!(writer, "Here are the tasks in your list:")?;
    for (index, task) in tasks.iter().enumerate() {
        writeln!(writer, "{}. {task}", index + 1)?;
    }
    Ok(())
}

/// Matches keep their original positions so a follow-up `mark`/`delete`
/// addresses the right task.
pub fn matching_tasks<W: Write>(writer: &mut W, matches: &[(usize, &Task)]) -> io::Result<()> {
    writeln!(writer, "Here are the matching tasks:")?;
    for (position, task) in matches {
        writeln!(writer, "{position}. {task}")?;
    }
    Ok(())
}

pub fn saved<W: Write>(writer: &mut W, count: usize) -> io::Result<()> {
    writeln!(writer, "Saved {count} tasks.")
}

pub fn load_failed<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "warning: could not open the tasks file, starting with an empty list"
    )
}

pub fn undecodable_line<W: Write>(writer: &mut W, line: usize) -> io::Result<()> {
    writeln!(writer, "warning: skipped line {line}, it could not be decoded")
}

/// One line per failed command; none of these end the session.
pub fn notify_error<W: Write>(writer: &mut W, error: &Error) -> io::Result<()> {
    match error {
        Error::InvalidFormat(_) => writeln!(writer, "Incorrect formatting. Please try again."),
        Error::TaskNotFound(_) => {
            writeln!(writer, "There is no task at that position. Please try again.")
        }
        Error::UnknownCommand(_) => writeln!(writer, "That is not a valid command."),
        Error::FileOpen { .. } => {
            writeln!(writer, "warning: could not open the tasks file, nothing was saved")
        }
        Error::FileWrite { .. } => {
            writeln!(writer, "warning: could not write the tasks file, save aborted")
        }
        other => writeln!(writer, "error: {other}"),
    }
}
