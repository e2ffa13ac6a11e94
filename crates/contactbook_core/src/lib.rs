//! Core domain logic for the contactbook assistant.
//! This crate is the single source of truth for record invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use command::{execute, parse_line, process_line, Command, CommandError, Reply};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::birthday::Birthday;
pub use model::contact::{Contact, ContactError};
pub use model::phone::Phone;
pub use query::upcoming::{upcoming_birthdays, BirthdayGroup, BIRTHDAY_WINDOW_DAYS};
pub use repo::contact_repo::{ContactRepository, InMemoryContactRepository, StoreError, StoreResult};
pub use service::contact_service::{AddOutcome, AddressBook, ContactService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
