//! Generation diff engine.
//!
//! # Responsibility
//! - Classify the current generation against the previous snapshot into
//!   "new" and "unsubscribed" sets.
//!
//! # Invariants
//! - Pure function over two finite lists; no storage access.
//! - Output preserves input order: `new` keeps `current`'s order,
//!   `unsubscribed` keeps `previous`'s order.
//! - An id present in both generations appears in neither output.
//! - Duplicate ids within one list pass through; every occurrence is
//!   classified by its id's membership in the other list.

use crate::model::subscriber::Subscriber;
use std::collections::HashSet;

/// Result of comparing the current generation against the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberDiff {
    /// Present in current, absent from previous. Current's order.
    pub new: Vec<Subscriber>,
    /// Present in previous, absent from current. Previous's order.
    pub unsubscribed: Vec<Subscriber>,
}

impl SubscriberDiff {
    /// Returns whether the two generations cover the same id set.
    pub fn is_unchanged(&self) -> bool {
        self.new.is_empty() && self.unsubscribed.is_empty()
    }
}

/// Computes the new/unsubscribed split between two subscriber generations.
///
/// # Contract
/// - `new` = every element of `current` whose id is not in `previous`.
/// - `unsubscribed` = every element of `previous` whose id is not in
///   `current`.
/// - Empty `previous` makes all of `current` new; empty `current` makes all
///   of `previous` unsubscribed.
pub fn diff_subscribers(current: &[Subscriber], previous: &[Subscriber]) -> SubscriberDiff {
    let previous_ids: HashSet<&str> = previous.iter().map(|s| s.id.as_str()).collect();
    let current_ids: HashSet<&str> = current.iter().map(|s| s.id.as_str()).collect();

    let new = current
        .iter()
        .filter(|subscriber| !previous_ids.contains(subscriber.id.as_str()))
        .cloned()
        .collect();

    let unsubscribed = previous
        .iter()
        .filter(|subscriber| !current_ids.contains(subscriber.id.as_str()))
        .cloned()
        .collect();

    SubscriberDiff { new, unsubscribed }
}
