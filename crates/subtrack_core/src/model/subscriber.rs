//! Subscriber domain model.
//!
//! # Responsibility
//! - Define the canonical record exchanged between feed, diff and store.
//! - Provide the canonical display row format.
//!
//! # Invariants
//! - `id` is non-empty after trimming and is the sole identity of a record.
//! - Two records with equal `id` denote the same subscriber regardless of
//!   `name`/`gender` content.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for subscriber records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriberValidationError {
    /// `id` is empty or whitespace-only.
    EmptyId,
}

impl Display for SubscriberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "subscriber id must be non-empty"),
        }
    }
}

impl Error for SubscriberValidationError {}

/// Canonical subscriber record.
///
/// One generation of subscribers is read fresh from the feed each launch;
/// the previous generation comes back from the snapshot store. Both sides
/// use this one shape, so no dynamic field lookup is ever needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Stable external identity. Unique within one generation.
    pub id: String,
    pub name: String,
    pub gender: String,
}

impl Subscriber {
    /// Creates a subscriber record without validating it.
    ///
    /// Write paths validate via [`Subscriber::validate`] before persisting,
    /// so feed records with bad ids can still be represented (and then
    /// skipped with a log line) instead of failing wholesale.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender: gender.into(),
        }
    }

    /// Checks the identity invariant.
    ///
    /// # Errors
    /// - [`SubscriberValidationError::EmptyId`] when `id` trims to empty.
    pub fn validate(&self) -> Result<(), SubscriberValidationError> {
        if self.id.trim().is_empty() {
            return Err(SubscriberValidationError::EmptyId);
        }
        Ok(())
    }

    /// Renders the canonical display row: `<name> | ID: <id> | Gender: <gender>`.
    pub fn display_line(&self) -> String {
        format!("{} | ID: {} | Gender: {}", self.name, self.id, self.gender)
    }
}
