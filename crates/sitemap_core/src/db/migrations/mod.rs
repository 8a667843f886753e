//! Sitemap schema migrations and readiness check.
//!
//! # Responsibility
//! - Register sitemap schema migrations in strictly increasing order.
//! - Apply pending migrations in one transaction.
//! - Confirm a connection carries every sitemap table at the latest version.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - A failed step rolls back every step of the same run.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

/// Tables every sitemap connection must carry, parents first.
pub const SITEMAP_TABLES: [&str; 4] = ["sitemaps", "pages", "sections", "edges"];

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "sitemap_init",
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest sitemap schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the database is ahead of this build.
/// - `MigrationFailed` naming the step that broke; nothing from the run is
///   kept.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }
    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current_version)
    {
        tx.execute_batch(migration.sql)
            .and_then(|()| {
                tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))
            })
            .map_err(|source| DbError::MigrationFailed {
                version: migration.version,
                name: migration.name,
                source,
            })?;
        debug!(
            "event=db_migrate_step module=db status=ok version={} name={}",
            migration.version, migration.name
        );
    }
    tx.commit()?;
    info!("event=db_migrate module=db status=ok from_version={current_version} to_version={latest}");

    Ok(())
}

/// Verifies `conn` is at the latest sitemap schema with every table present.
///
/// # Errors
/// - `SchemaNotReady` when the version differs from `latest_version()`.
/// - `MissingTable` for the first absent table in `SITEMAP_TABLES`.
pub fn ensure_sitemap_schema(conn: &Connection) -> DbResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(DbError::SchemaNotReady {
            expected_version,
            actual_version,
        });
    }

    for table in SITEMAP_TABLES {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingTable(table));
        }
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, ensure_sitemap_schema, latest_version};
    use crate::db::DbError;
    use rusqlite::Connection;

    #[test]
    fn migrations_are_idempotent_and_leave_schema_ready() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        apply_migrations(&mut conn).unwrap();
        assert_eq!(current_user_version(&conn).unwrap(), latest_version());
        ensure_sitemap_schema(&conn).unwrap();
    }

    #[test]
    fn newer_schema_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        assert!(matches!(
            apply_migrations(&mut conn),
            Err(DbError::UnsupportedSchemaVersion { db_version: 99, .. })
        ));
    }

    #[test]
    fn conflicting_table_fails_the_init_step_and_rolls_back() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE edges (legacy TEXT);").unwrap();

        let err = apply_migrations(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            DbError::MigrationFailed {
                version: 1,
                name: "sitemap_init",
                ..
            }
        ));
        assert_eq!(current_user_version(&conn).unwrap(), 0);
        assert!(matches!(
            ensure_sitemap_schema(&conn),
            Err(DbError::SchemaNotReady {
                expected_version: 1,
                actual_version: 0
            })
        ));
    }

    #[test]
    fn version_without_tables_reports_first_missing_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
            .unwrap();
        assert!(matches!(
            ensure_sitemap_schema(&conn),
            Err(DbError::MissingTable("sitemaps"))
        ));
    }
}
