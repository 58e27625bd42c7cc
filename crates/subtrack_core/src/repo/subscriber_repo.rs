//! Subscriber snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide fetch-all and replace-all APIs over the `subscribers` snapshot.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `replace_all` runs delete-all plus insert-all in one transaction, so a
//!   failure never exposes a half-replaced snapshot.
//! - `load_all` returns records in stored `position` order.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::subscriber::{Subscriber, SubscriberValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "gender", "position"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SubscriberValidationError),
    Db(DbError),
    InvalidData(String),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted subscriber data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SubscriberValidationError> for RepoError {
    fn from(value: SubscriberValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the previous-generation snapshot.
pub trait SubscriberRepository {
    /// Returns the stored generation in its original feed order.
    fn load_all(&self) -> RepoResult<Vec<Subscriber>>;

    /// Atomically replaces the stored generation with `subscribers`.
    ///
    /// Runs unconditionally every launch; an unchanged generation is
    /// rewritten rather than diffed against storage.
    fn replace_all(&self, subscribers: &[Subscriber]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSubscriberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSubscriberRepository<'conn> {
    /// Wraps a connection after verifying it carries the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known to this binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   `subscribers` shape is incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = crate::db::migrations::latest_version();
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'subscribers'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("subscribers"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('subscribers');")?;
        let mut present = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>(0)?);
        }
        for &column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name.as_str() == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "subscribers",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl SubscriberRepository for SqliteSubscriberRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Subscriber>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, gender
             FROM subscribers
             ORDER BY position ASC, id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut subscribers = Vec::new();
        while let Some(row) = rows.next()? {
            subscribers.push(parse_subscriber_row(row)?);
        }

        Ok(subscribers)
    }

    fn replace_all(&self, subscribers: &[Subscriber]) -> RepoResult<()> {
        for subscriber in subscribers {
            subscriber.validate()?;
        }

        // The repository holds a shared borrow, so the rollback-on-drop
        // transaction must go through unchecked_transaction.
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM subscribers;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT OR REPLACE INTO subscribers (id, name, gender, position)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for (position, subscriber) in subscribers.iter().enumerate() {
                insert.execute(params![
                    subscriber.id.as_str(),
                    subscriber.name.as_str(),
                    subscriber.gender.as_str(),
                    position as i64,
                ])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}

fn parse_subscriber_row(row: &Row<'_>) -> RepoResult<Subscriber> {
    let subscriber = Subscriber {
        id: row.get("id")?,
        name: row.get("name")?,
        gender: row.get("gender")?,
    };
    subscriber
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} (subscribers.id)")))?;
    Ok(subscriber)
}
