//! Birthday value type.
//!
//! # Responsibility
//! - Parse and render the fixed `DD.MM.YYYY` text form.
//! - Project a stored birthday onto an arbitrary calendar year.
//!
//! # Invariants
//! - Only real calendar dates are accepted (`31.02.2000` is rejected).
//! - `Display` output parses back to the same date.

use crate::model::contact::ContactError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const BIRTHDAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("valid birthday regex")
});

/// Calendar date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY`.
    ///
    /// # Errors
    /// - `ContactError::InvalidDateFormat` when the shape does not match or the
    ///   fields do not form a real date.
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        let invalid = || ContactError::InvalidDateFormat(raw.to_string());
        let captures = BIRTHDAY_RE.captures(raw).ok_or_else(invalid)?;

        // The regex pins every group to ASCII digits, so these parses only
        // fail on overflow, which the group widths rule out.
        let day: u32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;
        let year: i32 = captures[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns this birthday's day and month placed in `year`.
    ///
    /// Feb 29 falls back to Feb 28 when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_DISPLAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::model::contact::ContactError;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn parses_and_renders_fixed_format() {
        let birthday = Birthday::parse("07.03.1991").expect("valid birthday");
        assert_eq!(birthday.date(), ymd(1991, 3, 7));
        assert_eq!(birthday.to_string(), "07.03.1991");
    }

    #[test]
    fn rejects_malformed_and_impossible_dates() {
        for raw in [
            "",
            "7.3.1991",
            "1991-03-07",
            "07/03/1991",
            "07.03.91",
            "31.02.2000",
            "00.01.2000",
            "07.13.1991",
            "07.03.1991 ",
        ] {
            assert_eq!(
                Birthday::parse(raw).unwrap_err(),
                ContactError::InvalidDateFormat(raw.to_string()),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn leap_day_is_accepted_only_in_leap_years() {
        assert!(Birthday::parse("29.02.2000").is_ok());
        assert!(Birthday::parse("29.02.1999").is_err());
    }

    #[test]
    fn anniversary_keeps_day_and_month() {
        let birthday = Birthday::parse("12.06.1990").expect("valid birthday");
        assert_eq!(birthday.anniversary_in(2024), ymd(2024, 6, 12));
    }

    #[test]
    fn leap_day_anniversary_falls_back_to_feb_28() {
        let birthday = Birthday::parse("29.02.2000").expect("valid birthday");
        assert_eq!(birthday.anniversary_in(2023), ymd(2023, 2, 28));
        assert_eq!(birthday.anniversary_in(2024), ymd(2024, 2, 29));
    }
}
