use std::fs;
use std::path::Path;

use rusqlite::Connection;

use super::schema::SCHEMA;
use crate::config::DatabaseConfig;
use crate::error::{Error, Result};

/// Owns the single connection every repository runs its statements on.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::configure(conn, false)
    }

    /// Open the database described by `config`, creating its parent
    /// directory if needed.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&config.path)?;
        tracing::debug!(path = %config.path.display(), "opened database");
        Self::configure(conn, config.foreign_keys)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, false)
    }

    fn configure(conn: Connection, foreign_keys: bool) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", if foreign_keys { "ON" } else { "OFF" })?;
        Ok(Self { conn })
    }

    /// Create the tables if they do not exist yet.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Returns the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection. Consumes the store, so it runs at most once.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::from(e))
    }
}

/// Log a failed statement with its context and hand the driver error back
/// to the caller untouched.
pub(super) fn query_failed(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Error {
    move |e| {
        tracing::error!(error = %e, "{context}");
        Error::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_tables() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();

        let tables: Vec<String> = store
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"department".to_string()));
        assert!(tables.contains(&"role".to_string()));
        assert!(tables.contains(&"employee".to_string()));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store.initialize().unwrap();
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: temp.path().join("nested").join("roster.db"),
            foreign_keys: false,
        };

        let store = SqliteStore::open(&config).unwrap();
        store.initialize().unwrap();
        store.close().unwrap();

        assert!(config.path.exists());
    }

    #[test]
    fn test_foreign_keys_follow_config() {
        let temp = TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: temp.path().join("fk.db"),
            foreign_keys: true,
        };
        let store = SqliteStore::open(&config).unwrap();
        let enabled: i64 = store
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);

        let store = SqliteStore::open_in_memory().unwrap();
        let enabled: i64 = store
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.db");

        let store = SqliteStore::new(&path).unwrap();
        store.initialize().unwrap();
        store
            .connection()
            .execute("INSERT INTO department (name) VALUES ('Sales')", [])
            .unwrap();
        store.close().unwrap();

        let store = SqliteStore::new(&path).unwrap();
        let name: String = store
            .connection()
            .query_row("SELECT name FROM department WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "Sales");
    }
}
