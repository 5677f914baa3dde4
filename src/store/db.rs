// Token Updater: State Database Connection
//
// Opens the desktop application's key/value state database. The application
// may hold the file open while we write, so every connection waits on the
// lock instead of failing straight away.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use super::StoreError;

/// How long a write waits for the application to release its lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Wrapper around a connection to the `state.vscdb` key/value database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a state database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open a state database that must already exist. Never creates the file.
    pub fn open_existing(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::init(conn)
    }

    /// Open an in-memory database (for testing only).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    /// Get a reference to the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Make sure the key/value table exists. Matches the layout the
    /// application itself creates, so an existing table is left untouched.
    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ItemTable (
                key     TEXT UNIQUE ON CONFLICT REPLACE,
                value   BLOB
            );",
        )?;

        tracing::debug!("ItemTable ready");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
