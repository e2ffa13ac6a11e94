//! Contact domain model.
//!
//! # Responsibility
//! - Define the record shape stored by the address book.
//! - Own every format check (`Phone`, `Birthday`) so callers cannot build
//!   invalid values.
//!
//! # Invariants
//! - A `Phone` is always exactly 10 ASCII digits.
//! - A `Contact` never holds the same phone twice.
//! - `Contact::name` never changes after construction.

pub mod birthday;
pub mod contact;
pub mod phone;
