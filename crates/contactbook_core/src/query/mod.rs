//! Read-only queries computed over all stored records.

pub mod upcoming;
