//! Command execution against an address book.
//!
//! # Invariants
//! - Every command yields exactly one `Reply`; domain errors are rendered
//!   with their `Display` message.
//! - `today` is supplied by the caller, so replies are deterministic.

use crate::command::parse::{parse_line, Command};
use crate::query::upcoming::BirthdayGroup;
use crate::repo::contact_repo::{ContactRepository, StoreError};
use crate::service::contact_service::{AddOutcome, ContactService, NO_PHONE_PLACEHOLDER};
use chrono::NaiveDate;
use log::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

const CONTACT_ADDED: &str = "Contact added.";
const PHONE_APPENDED: &str = "Phone number added to the existing contact.";
const CONTACT_EXISTS: &str = "Contact already exists.";
const BIRTHDAY_ADDED: &str = "Birthday added.";
const BIRTHDAY_NOT_SET: &str = "Birthday not set for this contact.";
const PHONE_UPDATED: &str = "Phone number updated.";
const PHONE_REMOVED: &str = "Phone number removed.";
const PHONE_NOT_FOUND: &str = "Phone not found.";
const NO_CONTACTS: &str = "No contacts saved.";
const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

/// Result of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; the session continues.
    Message(String),
    /// Text to print; the session ends.
    Exit(String),
    /// Nothing to print (blank input).
    Silent,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// Parses and executes one input line.
pub fn process_line<R: ContactRepository>(
    line: &str,
    book: &mut ContactService<R>,
    today: NaiveDate,
) -> Reply {
    match parse_line(line) {
        Ok(Some(command)) => execute(command, book, today),
        Ok(None) => Reply::Silent,
        Err(err) => {
            debug!("event=command_parse module=command status=rejected");
            Reply::message(err.to_string())
        }
    }
}

/// Executes one parsed command.
pub fn execute<R: ContactRepository>(
    command: Command,
    book: &mut ContactService<R>,
    today: NaiveDate,
) -> Reply {
    debug!(
        "event=command_dispatch module=command status=ok command={}",
        command.keyword()
    );

    match command {
        Command::Hello => Reply::message(GREETING),
        Command::Add { name, phone } => match book.add_record(&name, Some(&phone)) {
            Ok(AddOutcome::Created) => Reply::message(CONTACT_ADDED),
            Ok(AddOutcome::PhoneAppended) => Reply::message(PHONE_APPENDED),
            Ok(AddOutcome::Unchanged) => Reply::message(CONTACT_EXISTS),
            Err(err) => error_reply(err),
        },
        Command::AddBirthday { name, birthday } => match book.add_birthday(&name, &birthday) {
            Ok(()) => Reply::message(BIRTHDAY_ADDED),
            Err(err) => error_reply(err),
        },
        Command::Phone { name } => match book.get_record(&name) {
            Some(contact) => Reply::message(
                contact
                    .first_phone()
                    .map(|phone| phone.as_str())
                    .unwrap_or(NO_PHONE_PLACEHOLDER),
            ),
            None => error_reply(StoreError::ContactNotFound(name)),
        },
        Command::ShowBirthday { name } => match book.get_record(&name) {
            Some(contact) => match contact.birthday() {
                Some(birthday) => Reply::message(birthday.to_string()),
                None => Reply::message(BIRTHDAY_NOT_SET),
            },
            None => error_reply(StoreError::ContactNotFound(name)),
        },
        Command::Edit { name, new_phone } => match book.replace_first_phone(&name, &new_phone) {
            Ok(true) => Reply::message(PHONE_UPDATED),
            Ok(false) => Reply::message(PHONE_NOT_FOUND),
            Err(err) => error_reply(err),
        },
        Command::RemovePhone { name, phone } => match book.remove_phone(&name, &phone) {
            Ok(0) => Reply::message(PHONE_NOT_FOUND),
            Ok(_) => Reply::message(PHONE_REMOVED),
            Err(err) => error_reply(err),
        },
        Command::All => {
            let lines = book.all_contacts_summary();
            if lines.is_empty() {
                Reply::message(NO_CONTACTS)
            } else {
                Reply::message(lines.join("\n"))
            }
        }
        Command::Birthdays => {
            let groups = book.upcoming_birthdays(today);
            if groups.is_empty() {
                Reply::message(NO_UPCOMING_BIRTHDAYS)
            } else {
                Reply::message(render_birthday_groups(&groups))
            }
        }
        Command::Exit => Reply::Exit(FAREWELL.to_string()),
    }
}

/// Renders one `Weekday: name, name` line per group.
pub fn render_birthday_groups(groups: &[BirthdayGroup]) -> String {
    groups
        .iter()
        .map(|group| format!("{}: {}", group.weekday_name(), group.names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn error_reply(err: StoreError) -> Reply {
    Reply::message(err.to_string())
}
