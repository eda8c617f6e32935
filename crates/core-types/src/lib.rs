//! # Roster Core Types Crate
//!
//! This crate defines the canonical shape of a Student record and the
//! validation layer that stands between untrusted client input and the
//! persistence layer.
//!
//! ## Architectural Principles
//!
//! - **Single Schema Version:** There is exactly one Student shape (the
//!   five-field version). Every API response and every repository operation
//!   speaks this shape and nothing else.
//! - **Validate Before Persist:** Raw JSON never crosses into the database
//!   crate. Handlers call `StudentDraft::validate` first, and only a
//!   successfully validated draft can reach a repository operation.
//! - **Field-Level Error Reporting:** Validation failures are reported as a
//!   map of field name to error messages, so a client sees every problem with
//!   its submission at once.
//!
//! ## Public API
//!
//! - `Student`: a persisted, schema-conformant record (server-assigned id).
//! - `StudentDraft`: a validated, not-yet-persisted set of student fields.
//! - `ValidationErrors`: the field -> messages map returned on rejection.

// Declare the modules that constitute this crate.
pub mod student;
pub mod validate;

// Re-export the core types to provide a clean public API.
pub use student::{Student, StudentDraft};
pub use validate::ValidationErrors;
