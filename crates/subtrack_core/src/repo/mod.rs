//! Snapshot store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract for the previous-generation snapshot.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Writes enforce `Subscriber::validate()` before persistence.
//! - Snapshot replacement is atomic; a failed replace leaves the stored
//!   generation untouched.

pub mod subscriber_repo;
