//! Command-line tokenizer and argument checks.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USAGE_ADD: &str = "Usage: add [name] [phone]";
pub const USAGE_ADD_BIRTHDAY: &str = "Usage: add-birthday [name] [birthday in DD.MM.YYYY]";
pub const USAGE_PHONE: &str = "Usage: phone [name]";
pub const USAGE_SHOW_BIRTHDAY: &str = "Usage: show-birthday [name]";
pub const USAGE_EDIT: &str = "Usage: edit [name] phone [new phone]";
pub const USAGE_REMOVE_PHONE: &str = "Usage: remove-phone [name] [phone]";

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    AddBirthday { name: String, birthday: String },
    Phone { name: String },
    ShowBirthday { name: String },
    /// Replaces the first stored phone.
    Edit { name: String, new_phone: String },
    RemovePhone { name: String, phone: String },
    All,
    Birthdays,
    Exit,
}

impl Command {
    /// Canonical command keyword, used in diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add { .. } => "add",
            Self::AddBirthday { .. } => "add-birthday",
            Self::Phone { .. } => "phone",
            Self::ShowBirthday { .. } => "show-birthday",
            Self::Edit { .. } => "edit",
            Self::RemovePhone { .. } => "remove-phone",
            Self::All => "all",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

/// Parse failure for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First token names no known command.
    Unknown(String),
    /// Known command with the wrong arguments; carries the usage string.
    Usage(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(_) => write!(f, "Invalid command."),
            Self::Usage(usage) => write!(f, "{usage}"),
        }
    }
}

impl Error for CommandError {}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
/// - `CommandError::Unknown` for an unrecognized first token.
/// - `CommandError::Usage` when a known command gets the wrong arguments.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match keyword.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => match args.as_slice() {
            [name, phone, ..] => Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_ADD)),
        },
        "add-birthday" => match args.as_slice() {
            [name, birthday] => Command::AddBirthday {
                name: name.to_string(),
                birthday: birthday.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_ADD_BIRTHDAY)),
        },
        "phone" => match args.as_slice() {
            [name] => Command::Phone {
                name: name.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_PHONE)),
        },
        "show-birthday" => match args.as_slice() {
            [name] => Command::ShowBirthday {
                name: name.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_SHOW_BIRTHDAY)),
        },
        "edit" => match args.as_slice() {
            [name, field, new_phone] if field.eq_ignore_ascii_case("phone") => Command::Edit {
                name: name.to_string(),
                new_phone: new_phone.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_EDIT)),
        },
        "remove-phone" => match args.as_slice() {
            [name, phone] => Command::RemovePhone {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => return Err(CommandError::Usage(USAGE_REMOVE_PHONE)),
        },
        "all" => Command::All,
        "birthdays" => Command::Birthdays,
        "exit" | "close" => Command::Exit,
        _ => return Err(CommandError::Unknown(keyword.to_string())),
    };

    Ok(Some(command))
}
