//! Domain model for the subscriber snapshot tracker.
//!
//! # Responsibility
//! - Define the canonical subscriber record shared by feed, store and diff.
//!
//! # Invariants
//! - Every subscriber is identified by a stable, non-empty `id`.
//! - The model carries no lifecycle state; the store holds exactly one
//!   generation at a time.

pub mod subscriber;
