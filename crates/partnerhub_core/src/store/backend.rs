//! Backends the snapshot document can live in.

use crate::db::{open_db, open_db_in_memory};
use crate::store::{SnapshotBackend, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

/// Process-local backend for tests and ephemeral sessions.
///
/// Clones share the same storage, which lets tests model two contexts
/// looking at one persisted document. The change marker counts writes to a
/// single key from every handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    shared: Rc<RefCell<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    writes: HashMap<String, u64>,
}

impl MemoryState {
    fn bump(&mut self, key: &str) {
        *self.writes.entry(key.to_string()).or_insert(0) += 1;
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw document without going through a store.
    ///
    /// Used to plant legacy or corrupt documents.
    pub fn put_raw(&self, key: &str, document: &str) {
        let mut state = self.shared.borrow_mut();
        state.entries.insert(key.to_string(), document.to_string());
        state.bump(key);
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.shared.borrow().entries.get(key).cloned())
    }

    fn write(&self, key: &str, document: &str) -> StoreResult<()> {
        self.put_raw(key, document);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut state = self.shared.borrow_mut();
        if state.entries.remove(key).is_some() {
            state.bump(key);
        }
        Ok(())
    }

    fn change_marker(&self, key: &str) -> StoreResult<u64> {
        Ok(self.shared.borrow().writes.get(key).copied().unwrap_or(0))
    }
}

/// SQLite-backed persistence using the `kv_store` table.
///
/// `change_marker` reads `PRAGMA data_version`, which only moves when a
/// different connection commits to the same database file. It is
/// database-wide, so the key is ignored.
#[derive(Debug)]
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens (or creates) the database file with migrations applied.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps a connection obtained from [`crate::db::open_db`].
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SnapshotBackend for SqliteBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, document: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, document],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn change_marker(&self, _key: &str) -> StoreResult<u64> {
        let version = self
            .conn
            .query_row("PRAGMA data_version;", [], |row| row.get::<_, i64>(0))?;
        Ok(version.unsigned_abs())
    }
}
