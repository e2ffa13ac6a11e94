//! Phone number value type.
//!
//! # Invariants
//! - Construction is the only validation point.
//! - Stored value is exactly 10 ASCII digits; no normalization is applied.

use crate::model::contact::ContactError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of digits every stored phone must have.
pub const PHONE_DIGITS: usize = 10;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// Validated phone number.
///
/// Serialized as a plain string; deserialization re-runs validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parses one phone number.
    ///
    /// # Errors
    /// - `ContactError::InvalidPhoneFormat` unless `raw` is exactly 10 digits.
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        if !is_valid_phone(raw) {
            return Err(ContactError::InvalidPhoneFormat(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Returns whether `raw` satisfies the stored phone format.
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_phone(&value) {
            return Err(ContactError::InvalidPhoneFormat(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
