//! Record storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the storage contract the contact service is written against.
//! - Keep key ordering and lookup details out of the service layer.
//!
//! # Invariants
//! - One record per name; names are compared case-sensitively.
//! - Iteration order is insertion order of names.

pub mod contact_repo;
