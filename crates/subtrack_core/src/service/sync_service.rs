//! Launch reconcile service.
//!
//! # Responsibility
//! - Run the one linear pass of a launch: load previous snapshot, diff
//!   against the current generation, overwrite the snapshot.
//!
//! # Invariants
//! - Store failures never propagate: a failed fetch is treated as an empty
//!   previous generation, a failed save leaves the in-memory outcome
//!   intact with `persisted = false`.
//! - The snapshot is overwritten unconditionally, changes or not.

use crate::diff::diff_subscribers;
use crate::model::subscriber::Subscriber;
use crate::repo::subscriber_repo::SubscriberRepository;
use log::{error, info};

/// Everything the display surface needs after one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// The generation loaded this launch, unmodified.
    pub current: Vec<Subscriber>,
    /// Present in current, absent from the previous snapshot.
    pub new: Vec<Subscriber>,
    /// Present in the previous snapshot, absent from current.
    pub unsubscribed: Vec<Subscriber>,
    /// Size of the previous snapshot as loaded (zero after a fetch failure).
    pub previous_count: usize,
    /// Whether the snapshot overwrite reached storage. When `false` the
    /// next launch will diff against a stale previous generation.
    pub persisted: bool,
}

/// Use-case service for the launch reconcile sequence.
pub struct SyncService<R: SubscriberRepository> {
    repo: R,
}

impl<R: SubscriberRepository> SyncService<R> {
    /// Creates a service using the provided snapshot repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Reconciles the current generation against the stored snapshot.
    ///
    /// # Contract
    /// - Fetch failure → previous treated as empty (everything is new).
    /// - Save failure → outcome unchanged, `persisted = false`.
    /// - The stored snapshot afterwards is exactly `current` (on success).
    pub fn reconcile(&self, current: Vec<Subscriber>) -> LaunchOutcome {
        let previous = match self.repo.load_all() {
            Ok(previous) => previous,
            Err(err) => {
                error!(
                    "event=snapshot_fetch module=service status=error error={err}; \
                     treating previous generation as empty"
                );
                Vec::new()
            }
        };

        let diff = diff_subscribers(&current, &previous);

        let persisted = match self.repo.replace_all(&current) {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "event=snapshot_replace module=service status=error error={err}; \
                     display state kept, stored snapshot is stale"
                );
                false
            }
        };

        info!(
            "event=reconcile module=service status=ok current={} previous={} new={} unsubscribed={} persisted={}",
            current.len(),
            previous.len(),
            diff.new.len(),
            diff.unsubscribed.len(),
            persisted
        );

        LaunchOutcome {
            current,
            new: diff.new,
            unsubscribed: diff.unsubscribed,
            previous_count: previous.len(),
            persisted,
        }
    }
}
