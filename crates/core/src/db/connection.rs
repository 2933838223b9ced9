use std::path::{Path, PathBuf};

use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use crate::Result;
use crate::db::migrations::run_migrations;

/// Handle to the stats database file.
///
/// Holds no open connection: every call to [`Database::with_connection`]
/// opens its own connection and drops it before returning, on success and on
/// error alike.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Self::create_connection(&path)?;

        // WAL is persisted in the file, so it only needs setting once
        conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get::<_, String>(0))?;

        Ok(Self { path })
    }

    /// Create the database if needed and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::new(path)?;
        db.with_connection(run_migrations)?;

        tracing::debug!(path = ?db.path, "database ready");

        Ok(db)
    }

    fn create_connection(path: &Path) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Per-connection settings
        conn.execute_batch(
            r#"
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA cache_size = -20000;
            "#,
        )?;
        register_functions(&conn)?;

        Ok(conn)
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = Self::create_connection(&self.path)?;
        f(&mut conn)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Replace SQLite's ASCII-only `lower()` with full Unicode lower-casing, so
/// filters fold case the same way as the patterns built in Rust.
pub(crate) fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lowered = match ctx.get_raw(0) {
                ValueRef::Null => None,
                ValueRef::Integer(i) => Some(i.to_string()),
                ValueRef::Real(f) => Some(f.to_string()),
                ValueRef::Text(text) | ValueRef::Blob(text) => {
                    Some(String::from_utf8_lossy(text).to_lowercase())
                }
            };
            Ok(lowered)
        },
    )
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_database() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("test_stats_{}.db", uuid::Uuid::new_v4()));

        let _db = Database::new(&db_path).unwrap();
        assert!(db_path.exists());

        std::fs::remove_file(db_path).ok();
    }

    #[test]
    fn test_open_runs_migrations() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("test_stats_{}.db", uuid::Uuid::new_v4()));

        let db = Database::open(&db_path).unwrap();
        let tables: i64 = db
            .with_connection(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master
                     WHERE type = 'table' AND name = 'player_stats_ext'",
                    [],
                    |row| row.get(0),
                )?)
            })
            .unwrap();
        assert_eq!(tables, 1);

        std::fs::remove_file(db_path).ok();
    }

    #[test]
    fn test_lower_folds_unicode() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("test_stats_{}.db", uuid::Uuid::new_v4()));
        let db = Database::new(&db_path).unwrap();

        let (lowered, null): (String, Option<String>) = db
            .with_connection(|conn| {
                Ok(conn.query_row("SELECT lower('ÖMER ÉLAN'), lower(NULL)", [], |row| {
                    Ok((row.get(0)?, row.get(1)?))
                })?)
            })
            .unwrap();
        assert_eq!(lowered, "ömer élan");
        assert_eq!(null, None);

        std::fs::remove_file(db_path).ok();
    }

    #[test]
    fn test_each_call_gets_its_own_connection() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("test_stats_{}.db", uuid::Uuid::new_v4()));
        let db = Database::new(&db_path).unwrap();

        // A temp table lives only as long as the connection that created it
        db.with_connection(|conn| {
            conn.execute_batch("CREATE TEMP TABLE scratch (id INTEGER);")?;
            Ok(())
        })
        .unwrap();

        let visible: i64 = db
            .with_connection(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_temp_master WHERE name = 'scratch'",
                    [],
                    |row| row.get(0),
                )?)
            })
            .unwrap();
        assert_eq!(visible, 0);

        std::fs::remove_file(db_path).ok();
    }
}
