//! Command interpretation for the interactive session.
//!
//! Raw input splits at the first space: the text before is the command
//! keyword, the text after (if any) is the payload, passed through
//! untouched. Keywords match the fixed vocabulary exactly and
//! case-sensitively.

/// The fixed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Todo,
    Deadline,
    Event,
    Mark,
    Unmark,
    List,
    Delete,
    Find,
    Save,
    Bye,
}

impl Command {
    /// Resolve a keyword, or `None` for anything outside the vocabulary.
    pub fn lookup(keyword: &str) -> Option<Command> {
        match keyword {
            "todo" => Some(Command::Todo),
            "deadline" => Some(Command::Deadline),
            "event" => Some(Command::Event),
            "mark" => Some(Command::Mark),
            "unmark" => Some(Command::Unmark),
            "list" => Some(Command::List),
            "delete" => Some(Command::Delete),
            "find" => Some(Command::Find),
            "save" => Some(Command::Save),
            "bye" => Some(Command::Bye),
            _ => None,
        }
    }
}

/// Split raw input into keyword and payload at the first space.
///
/// No space means no payload, which is distinct from an empty one.
pub fn split(input: &str) -> (&str, Option<&str>) {
    match input.find(' ') {
        Some(space) => (&input[..space], Some(&input[space + 1..])),
        None => (input, None),
    }
}
