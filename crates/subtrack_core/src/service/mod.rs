//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the per-launch reconcile sequence over the snapshot store.
//! - Keep the display surface decoupled from storage details.

pub mod sync_service;
