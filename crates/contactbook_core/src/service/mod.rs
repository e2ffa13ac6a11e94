//! Core use-case services.
//!
//! # Responsibility
//! - Expose the address book operations callers use.
//! - Keep the command layer independent of storage details.

pub mod contact_service;
