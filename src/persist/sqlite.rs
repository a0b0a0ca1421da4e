//! SQLite-backed item table.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, params};
use tracing::debug;

use crate::{
    item::{ItemDraft, ItemRecord},
    types::ItemId,
};

use super::{PersistError, PersistResult, RecordStore, StoreConfig};

const UNIQUE_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS items_name_unique ON items(name);";

/// SQLite implementation of [`crate::persist::RecordStore`].
pub struct SqliteRecordStore {
    conn: Connection,
    path: Option<PathBuf>,
    config: StoreConfig,
}

impl SqliteRecordStore {
    /// Opens or creates a SQLite-backed store at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> PersistResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(journal_mode = %mode, "journal mode set");
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        let mut store = Self {
            conn,
            path: Some(path.to_path_buf()),
            config,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Opens an in-memory SQLite store.
    pub fn open_in_memory(config: StoreConfig) -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self {
            conn,
            path: None,
            config,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Ensures the item table exists. Existing rows are never touched.
    pub fn initialize(&mut self) -> PersistResult<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        if self.config.unique_names {
            self.conn.execute_batch(UNIQUE_NAME_INDEX)?;
        }
        debug!(path = ?self.path, unique_names = self.config.unique_names, "item table ready");
        Ok(())
    }

    /// Backing file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Releases the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> PersistResult<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| PersistError::from(err))?;
        debug!(?path, "store closed");
        Ok(())
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert(&mut self, draft: ItemDraft) -> PersistResult<ItemId> {
        let res = self.conn.execute(
            "INSERT INTO items(name, quantity) VALUES (?1, ?2)",
            params![draft.name, draft.quantity],
        );
        match res {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(PersistError::DuplicateName(draft.name));
            }
            Err(err) => return Err(err.into()),
        }

        let id = self.conn.last_insert_rowid();
        debug!(id, name = %draft.name, quantity = draft.quantity, "item inserted");
        Ok(id)
    }

    fn delete_by_name(&mut self, name: &str) -> PersistResult<usize> {
        let count = self
            .conn
            .execute("DELETE FROM items WHERE name = ?1", params![name])?;
        debug!(name, count, "items deleted by name");
        Ok(count)
    }

    fn clear(&mut self) -> PersistResult<usize> {
        let count = self.conn.execute("DELETE FROM items", [])?;
        debug!(count, "items cleared");
        Ok(count)
    }

    fn list_all(&self) -> PersistResult<Vec<ItemRecord>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, quantity FROM items ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(ItemRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                quantity: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => {
            inner.code == ErrorCode::ConstraintViolation
                && inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
