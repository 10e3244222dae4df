//! Domain types shared across the Themery backend.
//!
//! Contains the error taxonomy, database id/timestamp aliases, role name
//! constants, and the pure authorization predicate used by every
//! user-scoped endpoint.

pub mod access;
pub mod error;
pub mod roles;
pub mod types;
