//! Upcoming-birthday window query.
//!
//! # Responsibility
//! - Select records whose next birthday falls inside the window.
//! - Group selected names by weekday of that birthday.
//!
//! # Invariants
//! - Window is inclusive on both ends: `today..=today + 7 days`.
//! - A birthday already passed this year counts as next year's date.
//! - Group order is the order groups are first hit while scanning records;
//!   names inside a group keep record order.

use crate::model::birthday::Birthday;
use crate::model::contact::Contact;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;

/// Days after `today` still counted as upcoming.
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// Names sharing one weekday inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub weekday: Weekday,
    /// Date of the first birthday that opened this group.
    pub first_date: NaiveDate,
    pub names: Vec<String>,
}

impl BirthdayGroup {
    /// English weekday name, e.g. `Wednesday`.
    pub fn weekday_name(&self) -> String {
        self.first_date.format("%A").to_string()
    }
}

/// Returns the first date on or after `today` that celebrates `birthday`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.anniversary_in(today.year());
    if this_year >= today {
        this_year
    } else {
        birthday.anniversary_in(today.year() + 1)
    }
}

/// Collects birthdays inside the upcoming window, grouped by weekday.
pub fn upcoming_birthdays<'a, I>(contacts: I, today: NaiveDate) -> Vec<BirthdayGroup>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let window_end = today
        .checked_add_days(Days::new(BIRTHDAY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let mut groups: IndexMap<Weekday, BirthdayGroup> = IndexMap::new();

    for contact in contacts {
        let Some(birthday) = contact.birthday() else {
            continue;
        };
        let occurrence = next_occurrence(birthday, today);
        if occurrence < today || occurrence > window_end {
            continue;
        }
        groups
            .entry(occurrence.weekday())
            .or_insert_with(|| BirthdayGroup {
                weekday: occurrence.weekday(),
                first_date: occurrence,
                names: Vec::new(),
            })
            .names
            .push(contact.name().to_string());
    }

    groups.into_values().collect()
}
