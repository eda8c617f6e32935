//! # Roster Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! MySQL database. It owns the connection lifecycle and every SQL statement
//! in the system.
//!
//! ## Architectural Principles
//!
//! - **Adapter Layer:** This crate encapsulates all database-specific logic.
//!   It provides a clean, abstract API to the rest of the application, hiding
//!   the underlying SQL and database implementation details.
//! - **Pooled & Bounded:** All operations are asynchronous and draw from a
//!   shared connection pool with a bounded size and a bounded acquire
//!   timeout. No operation opens a physical connection of its own.
//! - **Atomic Conditional Writes:** Update and delete are single conditional
//!   statements checked by affected-row count, so there is no
//!   check-then-act window between an existence probe and the write.
//!
//! ## Public API
//!
//! - `connect` / `connect_lazy`: establish the database connection pool.
//! - `run_migrations`: a utility to apply database migrations, ensuring the
//!   schema is up-to-date.
//! - `StudentRepository`: the struct that holds the connection pool and
//!   provides the CRUD operations for the students table.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_lazy, run_migrations};
pub use error::DbError;
pub use repository::StudentRepository;
