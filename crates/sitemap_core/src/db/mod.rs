//! SQLite storage bootstrap for sitemap persistence.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the sitemap store.
//! - Bring the sitemap schema to the latest version and verify it before
//!   any repository touches it.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Sitemap rows are never read or written on a connection that failed
//!   `ensure_sitemap_schema`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use migrations::{ensure_sitemap_schema, SITEMAP_TABLES};
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Connection bootstrap and sitemap schema failures.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// One migration step failed and was rolled back.
    MigrationFailed {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// Connection is not at the sitemap schema version this build expects.
    SchemaNotReady {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema version matches but a sitemap table is absent.
    MissingTable(&'static str),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "sitemap schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::MigrationFailed {
                version,
                name,
                source,
            } => write!(f, "sitemap migration {version} ({name}) failed: {source}"),
            Self::SchemaNotReady {
                expected_version,
                actual_version,
            } => write!(
                f,
                "sitemap store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingTable(table) => write!(f, "sitemap store requires table `{table}`"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MigrationFailed { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. }
            | Self::SchemaNotReady { .. }
            | Self::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
