use rusqlite::params;

use super::Database;
use crate::error::StoreError;
use crate::store::KeyValueStore;

impl Database {
    // ==================== SETTINGS ====================

    pub fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        let result = self.conn.query_row(
            "SELECT value FROM app_settings WHERE key = ?",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_settings (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete_setting(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM app_settings WHERE key = ?", [key])?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.get_setting(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_setting(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.delete_setting(key)
    }
}
