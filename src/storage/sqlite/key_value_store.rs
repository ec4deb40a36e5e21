use rusqlite::OptionalExtension;

use crate::errors::BlogrollResult;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::KeyValueStore;

pub struct SqliteKeyValueStore {
    storage: SqliteStorage,
}

impl SqliteKeyValueStore {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> BlogrollResult<Option<String>> {
        let conn = self.storage.connection()?;
        let value = conn
            .query_row(
                "SELECT value FROM cache_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> BlogrollResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT INTO cache_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            (key, value),
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BlogrollResult<()> {
        let conn = self.storage.connection()?;
        conn.execute("DELETE FROM cache_entries WHERE key = ?1", [key])?;
        Ok(())
    }

    fn clear(&self) -> BlogrollResult<()> {
        let conn = self.storage.connection()?;
        conn.execute("DELETE FROM cache_entries", [])?;
        Ok(())
    }
}
