//! Contact record.
//!
//! # Responsibility
//! - Hold one person's name, phone list and optional birthday.
//! - Enforce per-record invariants on every mutation path.
//!
//! # Invariants
//! - `phones` keeps insertion order and never contains duplicates.
//! - A failed mutation leaves the record unchanged.

use crate::model::birthday::Birthday;
use crate::model::phone::Phone;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record-level validation error.
///
/// `Display` renders the message shown to the person at the prompt; the
/// offending input is kept in the variant for callers that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Phone is not exactly 10 ASCII digits.
    InvalidPhoneFormat(String),
    /// Phone is already stored on the same record.
    DuplicatePhone(String),
    /// Birthday text is not a real `DD.MM.YYYY` date.
    InvalidDateFormat(String),
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhoneFormat(_) => write!(f, "Phone number must consist of 10 digits."),
            Self::DuplicatePhone(_) => {
                write!(f, "Phone number already exists for this contact.")
            }
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY."),
        }
    }
}

impl ContactError {
    /// Stable snake_case code for diagnostics; carries no user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPhoneFormat(_) => "invalid_phone_format",
            Self::DuplicatePhone(_) => "duplicate_phone",
            Self::InvalidDateFormat(_) => "invalid_date_format",
        }
    }
}

impl Error for ContactError {}

/// One address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactWire")]
pub struct Contact {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Unchecked wire shape; converted through `Contact::try_from`.
#[derive(Deserialize)]
struct ContactWire {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<ContactWire> for Contact {
    type Error = ContactError;

    fn try_from(value: ContactWire) -> Result<Self, Self::Error> {
        let mut contact = Contact::new(value.name);
        for phone in value.phones {
            contact.push_phone(phone)?;
        }
        contact.birthday = value.birthday;
        Ok(contact)
    }
}

impl Contact {
    /// Creates a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Creates a record with one validated phone.
    pub fn with_phone(name: impl Into<String>, phone: &str) -> Result<Self, ContactError> {
        let mut contact = Self::new(name);
        contact.add_phone(phone)?;
        Ok(contact)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|stored| stored == phone)
    }

    /// Appends one phone.
    ///
    /// # Errors
    /// - `InvalidPhoneFormat` is checked before `DuplicatePhone`.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ContactError> {
        let phone = Phone::parse(phone)?;
        self.push_phone(phone)
    }

    /// Removes every entry equal to `phone` and returns how many were removed.
    ///
    /// Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|stored| stored != phone);
        before - self.phones.len()
    }

    /// Replaces the first entry equal to `old` with `new`, in place.
    ///
    /// Returns `Ok(false)` without mutating when `old` is not stored.
    ///
    /// # Errors
    /// - `InvalidPhoneFormat` when `new` is not 10 digits.
    /// - `DuplicatePhone` when `new` is already stored under another entry.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ContactError> {
        let replacement = Phone::parse(new)?;
        let Some(index) = self.phones.iter().position(|stored| stored == old) else {
            return Ok(false);
        };
        if old != new && self.has_phone(new) {
            return Err(ContactError::DuplicatePhone(new.to_string()));
        }
        self.phones[index] = replacement;
        Ok(true)
    }

    /// Parses and stores a birthday, overwriting any previous value.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ContactError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    fn push_phone(&mut self, phone: Phone) -> Result<(), ContactError> {
        if self.phones.contains(&phone) {
            return Err(ContactError::DuplicatePhone(phone.into()));
        }
        self.phones.push(phone);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactError};

    #[test]
    fn edit_keeps_position_of_replaced_phone() {
        let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
        contact.add_phone("0501112233").unwrap();

        assert!(contact.edit_phone("0991234567", "0677654321").unwrap());
        let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["0677654321", "0501112233"]);
    }

    #[test]
    fn edit_to_same_value_is_a_successful_no_op() {
        let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
        assert!(contact.edit_phone("0991234567", "0991234567").unwrap());
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn edit_rejects_collision_with_other_entry() {
        let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
        contact.add_phone("0501112233").unwrap();

        let err = contact.edit_phone("0991234567", "0501112233").unwrap_err();
        assert_eq!(err, ContactError::DuplicatePhone("0501112233".to_string()));
        assert_eq!(contact.first_phone().unwrap().as_str(), "0991234567");
    }

    #[test]
    fn failed_birthday_parse_keeps_previous_value() {
        let mut contact = Contact::new("Bob");
        contact.set_birthday("01.01.2000").unwrap();

        let err = contact.set_birthday("2000-01-01").unwrap_err();
        assert!(matches!(err, ContactError::InvalidDateFormat(_)));
        assert_eq!(contact.birthday().unwrap().to_string(), "01.01.2000");
    }

    #[test]
    fn error_messages_are_user_facing_sentences() {
        assert_eq!(
            ContactError::InvalidPhoneFormat("1".into()).to_string(),
            "Phone number must consist of 10 digits."
        );
        assert_eq!(
            ContactError::DuplicatePhone("0991234567".into()).to_string(),
            "Phone number already exists for this contact."
        );
        assert_eq!(
            ContactError::InvalidDateFormat("x".into()).to_string(),
            "Invalid date format. Use DD.MM.YYYY."
        );
    }
}
