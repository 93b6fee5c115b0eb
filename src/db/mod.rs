use rusqlite::{Connection, OptionalExtension};
use std::path::PathBuf;

use crate::error::StoreError;

mod schema;
mod settings;

pub use schema::SCHEMA_VERSION;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `path`, creating it and its parent directories if needed
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        log::debug!("opened database at {}", path.display());

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self, StoreError> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.migrate()?;
        Ok(db)
    }

    pub fn default_path() -> Result<PathBuf, StoreError> {
        let config_dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(config_dir.join("notecmd").join("notes.db"))
    }

    /// Apply every schema step above the stored version, one transaction per step
    fn migrate(&self) -> Result<(), StoreError> {
        let current = self.get_schema_version()?;
        if current > SCHEMA_VERSION {
            return Err(StoreError::NewerSchema {
                found: current,
                supported: SCHEMA_VERSION,
            });
        }

        for (idx, step) in schema::MIGRATIONS.iter().enumerate().skip(current.max(0) as usize) {
            let version = idx as i32 + 1;
            let tx = self.conn.unchecked_transaction()?;
            tx.execute_batch(step)?;
            tx.execute(
                "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
                [version],
            )?;
            tx.commit()?;
            log::info!("migrated database schema to v{}", version);
        }

        Ok(())
    }

    /// Stored schema version, 0 for a database that has never been migrated
    fn get_schema_version(&self) -> Result<i32, StoreError> {
        let has_table = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
                [],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !has_table {
            return Ok(0);
        }

        let version = self
            .conn
            .query_row("SELECT version FROM schema_version WHERE id = 1", [], |row| row.get(0))
            .optional()?;
        Ok(version.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_version_follows_migrations() {
        assert_eq!(SCHEMA_VERSION as usize, schema::MIGRATIONS.len());
    }

    #[test]
    fn test_tables_exist() {
        let db = Database::open_memory().unwrap();

        let tables: Vec<String> = db
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"schema_version".to_string()));
        assert!(tables.contains(&"app_settings".to_string()));
    }

    #[test]
    fn test_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.db");

        let db = Database::open_at(path.clone()).unwrap();
        assert!(path.exists());

        // Reopening must not re-run the migration
        drop(db);
        let db = Database::open_at(path).unwrap();
        assert_eq!(db.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_newer_schema_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");

        let db = Database::open_at(path.clone()).unwrap();
        db.conn
            .execute("UPDATE schema_version SET version = ?", [SCHEMA_VERSION + 1])
            .unwrap();
        drop(db);

        match Database::open_at(path) {
            Err(StoreError::NewerSchema { found, supported }) => {
                assert_eq!(found, SCHEMA_VERSION + 1);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected newer schema to be refused"),
        }
    }
}
