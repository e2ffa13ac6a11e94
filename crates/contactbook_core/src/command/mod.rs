//! Line-oriented command layer.
//!
//! # Responsibility
//! - Turn one input line into a typed `Command`.
//! - Execute commands against an address book and produce a `Reply`.
//!
//! # Invariants
//! - Command names are case-insensitive; arguments keep their case.
//! - No error escapes this layer; every failure becomes a reply message.

pub mod dispatch;
pub mod parse;

pub use dispatch::{execute, process_line, Reply};
pub use parse::{parse_line, Command, CommandError};
