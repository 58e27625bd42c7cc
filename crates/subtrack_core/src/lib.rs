//! Core logic for the subtrack subscriber snapshot tracker.
//! This crate owns the feed/diff/persist launch sequence end to end.

pub mod db;
pub mod diff;
pub mod feed;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use diff::{diff_subscribers, SubscriberDiff};
pub use feed::{load_feed, load_feed_or_empty, DecodeCategory, FeedError, FeedResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::subscriber::{Subscriber, SubscriberValidationError};
pub use repo::subscriber_repo::{
    RepoError, RepoResult, SqliteSubscriberRepository, SubscriberRepository,
};
pub use service::sync_service::{LaunchOutcome, SyncService};
