//! Address book use-case service.
//!
//! # Responsibility
//! - Implement create-or-append, phone edits, birthday updates and listings
//!   on top of a `ContactRepository`.
//! - Emit metadata-only diagnostics for each mutation.
//!
//! # Invariants
//! - A failed call leaves the store exactly as it was.
//! - Log events never carry names, phones or dates.

use crate::model::contact::{Contact, ContactError};
use crate::query::upcoming::{upcoming_birthdays, BirthdayGroup};
use crate::repo::contact_repo::{
    ContactRepository, InMemoryContactRepository, StoreError, StoreResult,
};
use chrono::NaiveDate;
use log::{debug, warn};

/// Placeholder shown for a record with no phones.
pub const NO_PHONE_PLACEHOLDER: &str = "No phone number.";

/// What `add_record` did with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created.
    Created,
    /// The phone was appended to an existing record.
    PhoneAppended,
    /// The record already existed and no phone was given.
    Unchanged,
}

/// Address book facade over a repository implementation.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

/// Address book backed by the in-memory repository.
pub type AddressBook = ContactService<InMemoryContactRepository>;

impl ContactService<InMemoryContactRepository> {
    /// Creates an empty in-memory address book.
    pub fn in_memory() -> Self {
        Self::new(InMemoryContactRepository::new())
    }
}

impl Default for ContactService<InMemoryContactRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a record, or appends `phone` to the existing one.
    ///
    /// # Contract
    /// - Absent name: creates the record, with `phone` as its first entry
    ///   when given.
    /// - Present name: appends `phone`; `None` leaves the record untouched
    ///   and returns `AddOutcome::Unchanged`.
    ///
    /// # Errors
    /// - `InvalidPhoneFormat` before any mutation.
    /// - `DuplicatePhone` when the record already stores `phone`.
    pub fn add_record(&mut self, name: &str, phone: Option<&str>) -> StoreResult<AddOutcome> {
        if let Some(contact) = self.repo.get_contact_mut(name) {
            let Some(phone) = phone else {
                debug!("event=contact_add module=service status=ok outcome=unchanged");
                return Ok(AddOutcome::Unchanged);
            };
            contact
                .add_phone(phone)
                .map_err(|err| rejected("contact_add", err))?;
            debug!("event=contact_add module=service status=ok outcome=phone_appended");
            return Ok(AddOutcome::PhoneAppended);
        }

        let contact = match phone {
            Some(phone) => {
                Contact::with_phone(name, phone).map_err(|err| rejected("contact_add", err))?
            }
            None => Contact::new(name),
        };
        self.repo.insert_contact(contact)?;
        debug!(
            "event=contact_add module=service status=ok outcome=created total={}",
            self.repo.contact_count()
        );
        Ok(AddOutcome::Created)
    }

    /// Gets one record by exact name.
    pub fn get_record(&self, name: &str) -> Option<&Contact> {
        self.repo.get_contact(name)
    }

    /// Removes every entry equal to `phone`; returns how many were removed.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> StoreResult<usize> {
        let contact = self.contact_mut(name)?;
        let removed = contact.remove_phone(phone);
        debug!("event=phone_remove module=service status=ok removed={removed}");
        Ok(removed)
    }

    /// Replaces the first entry equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not stored on the record.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> StoreResult<bool> {
        let contact = self.contact_mut(name)?;
        let found = contact
            .edit_phone(old, new)
            .map_err(|err| rejected("phone_edit", err))?;
        debug!("event=phone_edit module=service status=ok found={found}");
        Ok(found)
    }

    /// Replaces the record's first phone with `new`.
    ///
    /// Returns `Ok(false)` when the record has no phones.
    pub fn replace_first_phone(&mut self, name: &str, new: &str) -> StoreResult<bool> {
        let first = self
            .get_record(name)
            .ok_or_else(|| StoreError::ContactNotFound(name.to_string()))?
            .first_phone()
            .map(|phone| phone.as_str().to_string());

        match first {
            Some(old) => self.edit_phone(name, &old, new),
            None => Ok(false),
        }
    }

    /// Parses `DD.MM.YYYY` and stores it, overwriting any previous birthday.
    pub fn add_birthday(&mut self, name: &str, raw: &str) -> StoreResult<()> {
        let contact = self.contact_mut(name)?;
        contact
            .set_birthday(raw)
            .map_err(|err| rejected("birthday_set", err))?;
        debug!("event=birthday_set module=service status=ok");
        Ok(())
    }

    /// Returns one `name: first phone` line per record, in insertion order.
    pub fn all_contacts_summary(&self) -> Vec<String> {
        self.repo
            .list_contacts()
            .into_iter()
            .map(|contact| {
                let phone = contact
                    .first_phone()
                    .map(|phone| phone.as_str())
                    .unwrap_or(NO_PHONE_PLACEHOLDER);
                format!("{}: {}", contact.name(), phone)
            })
            .collect()
    }

    /// Returns birthdays inside the upcoming window starting at `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<BirthdayGroup> {
        let groups = upcoming_birthdays(self.repo.list_contacts(), today);
        debug!(
            "event=birthdays_query module=service status=ok groups={}",
            groups.len()
        );
        groups
    }

    pub fn contact_count(&self) -> usize {
        self.repo.contact_count()
    }

    fn contact_mut(&mut self, name: &str) -> StoreResult<&mut Contact> {
        self.repo
            .get_contact_mut(name)
            .ok_or_else(|| StoreError::ContactNotFound(name.to_string()))
    }
}

fn rejected(event: &str, err: ContactError) -> ContactError {
    warn!(
        "event={event} module=service status=rejected reason={}",
        err.code()
    );
    err
}
