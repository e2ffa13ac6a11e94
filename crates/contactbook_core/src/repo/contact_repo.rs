//! Contact repository contract and in-memory implementation.
//!
//! # Invariants
//! - `insert_contact` never duplicates a name; it rejects an existing key.
//! - Data lives only as long as the repository value.

use crate::model::contact::{Contact, ContactError};
use indexmap::IndexMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for record lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Record-level validation failure.
    Contact(ContactError),
    /// No record stored under this name.
    ContactNotFound(String),
    /// A record with this name already exists.
    DuplicateName(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contact(err) => write!(f, "{err}"),
            Self::ContactNotFound(_) => write!(f, "Contact not found."),
            Self::DuplicateName(_) => write!(f, "Contact already exists."),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Contact(err) => Some(err),
            Self::ContactNotFound(_) => None,
            Self::DuplicateName(_) => None,
        }
    }
}

impl From<ContactError> for StoreError {
    fn from(value: ContactError) -> Self {
        Self::Contact(value)
    }
}

/// Storage interface for contact records.
pub trait ContactRepository {
    /// Stores a new record under its name.
    fn insert_contact(&mut self, contact: Contact) -> StoreResult<()>;
    fn get_contact(&self, name: &str) -> Option<&Contact>;
    fn get_contact_mut(&mut self, name: &str) -> Option<&mut Contact>;
    /// Returns all records in insertion order.
    fn list_contacts(&self) -> Vec<&Contact>;
    fn contact_count(&self) -> usize;
}

/// Insertion-ordered in-memory repository.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: IndexMap<String, Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn insert_contact(&mut self, contact: Contact) -> StoreResult<()> {
        if self.contacts.contains_key(contact.name()) {
            return Err(StoreError::DuplicateName(contact.name().to_string()));
        }
        self.contacts.insert(contact.name().to_string(), contact);
        Ok(())
    }

    fn get_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    fn get_contact_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    fn list_contacts(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}
