//! JSON feed loader for the current subscriber generation.
//!
//! # Responsibility
//! - Decode the feed file (a JSON array of `{id, name, gender}` objects).
//! - Provide the lenient launch-path variant that degrades to an empty or
//!   partial list with a categorized log line.
//!
//! # Invariants
//! - `load_feed` never touches storage; the feed is read once per launch.
//! - `load_feed_or_empty` never fails; every failure mode maps to a log
//!   line plus an empty (or partial) list.

use crate::model::subscriber::Subscriber;
use log::{error, info, warn};
use serde_json::error::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type FeedResult<T> = Result<T, FeedError>;

/// Feed loading error, split by degradation category.
#[derive(Debug)]
pub enum FeedError {
    /// File could not be read (missing file included).
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File was read but is not a well-formed subscriber array.
    Decode {
        path: PathBuf,
        category: DecodeCategory,
        source: serde_json::Error,
    },
}

/// Decode failure categories, mirrored into log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeCategory {
    /// Well-formed JSON with the wrong shape: missing key or type mismatch.
    Shape,
    /// Not valid JSON at all.
    Syntax,
    /// Input ended mid-document.
    Truncated,
}

impl DecodeCategory {
    fn from_serde(err: &serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Shape,
            Category::Eof => Self::Truncated,
            Category::Io | Category::Syntax => Self::Syntax,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Syntax => "syntax",
            Self::Truncated => "truncated",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "cannot read feed `{}`: {source}", path.display())
            }
            Self::Decode {
                path,
                category,
                source,
            } => write!(
                f,
                "cannot decode feed `{}` ({}): {source}",
                path.display(),
                category.as_str()
            ),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Decodes the feed file strictly.
///
/// Records are returned exactly as decoded; identity validation is the
/// caller's concern (the lenient launch path skips invalid records, write
/// paths re-validate before persisting).
///
/// # Errors
/// - [`FeedError::Unreadable`] when the file cannot be read.
/// - [`FeedError::Decode`] when the content is not a subscriber array.
pub fn load_feed(path: impl AsRef<Path>) -> FeedResult<Vec<Subscriber>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| FeedError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| FeedError::Decode {
        path: path.to_path_buf(),
        category: DecodeCategory::from_serde(&source),
        source,
    })
}

/// Launch-path feed loader: never fails.
///
/// Degradation policy:
/// - unreadable file → log, empty list;
/// - malformed content → categorized log, empty list;
/// - records with an invalid id → skipped with a warning (partial list).
pub fn load_feed_or_empty(path: impl AsRef<Path>) -> Vec<Subscriber> {
    let path = path.as_ref();
    let decoded = match load_feed(path) {
        Ok(decoded) => decoded,
        Err(err) => {
            let code = match &err {
                FeedError::Unreadable { .. } => "feed_unreadable".to_string(),
                FeedError::Decode { category, .. } => {
                    format!("feed_decode_{}", category.as_str())
                }
            };
            error!(
                "event=feed_load module=feed status=error error_code={code} path={} error={err}",
                path.display()
            );
            return Vec::new();
        }
    };

    let total = decoded.len();
    let subscribers: Vec<Subscriber> = decoded
        .into_iter()
        .filter(|subscriber| match subscriber.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=feed_record_skipped module=feed status=warn name={} error={err}",
                    subscriber.name
                );
                false
            }
        })
        .collect();

    info!(
        "event=feed_load module=feed status=ok path={} count={} skipped={}",
        path.display(),
        subscribers.len(),
        total - subscribers.len()
    );

    subscribers
}
