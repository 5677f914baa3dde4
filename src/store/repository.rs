// Token Updater: Credential Store Repository
//
// Mirrors an account's login state into the application's ItemTable. The
// four auth keys are written in a single transaction so the application
// never observes a half-updated account.

use std::path::{Path, PathBuf};

use rusqlite::{params, OptionalExtension};

use super::db::Database;
use super::models::CredentialRecord;
use super::StoreError;

const KEY_EMAIL: &str = "cursorAuth/cachedEmail";
const KEY_ACCESS_TOKEN: &str = "cursorAuth/accessToken";
const KEY_REFRESH_TOKEN: &str = "cursorAuth/refreshToken";
const KEY_SIGN_UP_TYPE: &str = "cursorAuth/cachedSignUpType";

/// Sign-up type the application expects for token-based logins.
const SIGN_UP_TYPE: &str = "Auth_0";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the local credential database.
pub trait CredentialStore {
    /// Write email, access token and refresh token as one record.
    /// Returns `Ok(false)` if the store declined the write.
    fn set_credentials(
        &self,
        email: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, StoreError>;

    /// Read back the stored record, if all of its fields are present.
    fn get_credentials(&self) -> Result<Option<CredentialRecord>, StoreError>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    fn set_credentials(
        &self,
        email: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, StoreError> {
        (**self).set_credentials(email, access_token, refresh_token)
    }

    fn get_credentials(&self) -> Result<Option<CredentialRecord>, StoreError> {
        (**self).get_credentials()
    }
}

// ─── SQLite Implementation ──────────────────────────────────────────────────

/// Store backed by the application's `state.vscdb`. A connection is opened
/// for each call and dropped before returning.
pub struct SqliteCredentialStore {
    path: PathBuf,
}

impl SqliteCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_value(db: &Database, key: &str) -> Result<Option<String>, StoreError> {
        let value = db
            .conn()
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn set_credentials(
        &self,
        email: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, StoreError> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "Credential database not found");
            return Ok(false);
        }

        let db = Database::open_existing(&self.path)?;
        let tx = db.conn().unchecked_transaction()?;

        let updates = [
            (KEY_EMAIL, email),
            (KEY_ACCESS_TOKEN, access_token),
            (KEY_REFRESH_TOKEN, refresh_token),
            (KEY_SIGN_UP_TYPE, SIGN_UP_TYPE),
        ];

        for (key, value) in updates {
            tx.execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
            tracing::debug!(key = %key, "ItemTable entry written");
        }

        // Dropping an uncommitted transaction rolls it back, so any error
        // above leaves the previous record intact.
        tx.commit()?;

        tracing::info!(
            email = %email,
            path = %self.path.display(),
            "Credentials stored successfully"
        );

        Ok(true)
    }

    fn get_credentials(&self) -> Result<Option<CredentialRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let db = Database::open_existing(&self.path)?;
        let email = Self::read_value(&db, KEY_EMAIL)?;
        let access_token = Self::read_value(&db, KEY_ACCESS_TOKEN)?;
        let refresh_token = Self::read_value(&db, KEY_REFRESH_TOKEN)?;

        match (email, access_token, refresh_token) {
            (Some(email), Some(access), Some(refresh)) => {
                Ok(Some(CredentialRecord::new(email, access, refresh)))
            }
            _ => Ok(None),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "user@example.com";
    const TOKEN: &str = "abcdefghijklmnopqrst";

    fn setup_store() -> (tempfile::TempDir, SqliteCredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.vscdb");
        Database::open(&path).unwrap();
        (dir, SqliteCredentialStore::new(path))
    }

    fn auth_rows(store: &SqliteCredentialStore) -> Vec<(String, String)> {
        let db = Database::open_existing(store.path()).unwrap();
        let mut stmt = db
            .conn()
            .prepare("SELECT key, value FROM ItemTable WHERE key LIKE 'cursorAuth/%' ORDER BY key")
            .unwrap();
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        rows.map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_set_credentials_writes_all_keys() {
        let (_dir, store) = setup_store();

        let stored = store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();
        assert!(stored, "Write to an existing database should succeed");

        let rows = auth_rows(&store);
        assert_eq!(
            rows,
            vec![
                (KEY_ACCESS_TOKEN.to_string(), TOKEN.to_string()),
                (KEY_EMAIL.to_string(), EMAIL.to_string()),
                (KEY_SIGN_UP_TYPE.to_string(), SIGN_UP_TYPE.to_string()),
                (KEY_REFRESH_TOKEN.to_string(), TOKEN.to_string()),
            ]
        );
    }

    #[test]
    fn test_set_credentials_is_idempotent() {
        let (_dir, store) = setup_store();

        store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();
        let first = auth_rows(&store);
        store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();
        let second = auth_rows(&store);

        assert_eq!(first, second, "Repeating a write must not change the record");
        assert_eq!(second.len(), 4, "Upserts must not duplicate keys");
    }

    #[test]
    fn test_set_credentials_overwrites_previous_account() {
        let (_dir, store) = setup_store();

        store.set_credentials("old@example.com", "old-token-000000000000", "old-token-000000000000").unwrap();
        store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();

        let record = store.get_credentials().unwrap().expect("Record should exist");
        assert_eq!(record.email, EMAIL);
        assert_eq!(record.access_token(), TOKEN);
        assert_eq!(record.refresh_token(), TOKEN);
    }

    #[test]
    fn test_set_credentials_preserves_unrelated_keys() {
        let (_dir, store) = setup_store();
        {
            let db = Database::open_existing(store.path()).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO ItemTable (key, value) VALUES ('colorThemeData', '{}')",
                    [],
                )
                .unwrap();
        }

        store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();

        let db = Database::open_existing(store.path()).unwrap();
        let count: i64 = db
            .conn()
            .query_row(
                "SELECT count(*) FROM ItemTable WHERE key = 'colorThemeData'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_set_credentials_missing_database_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.vscdb");
        let store = SqliteCredentialStore::new(&path);

        let stored = store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap();
        assert!(!stored, "A missing database must be reported as a declined write");
        assert!(!path.exists(), "The store must not create the database");
    }

    #[test]
    fn test_set_credentials_corrupt_database_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.vscdb");
        std::fs::write(&path, b"this is not a sqlite database, just some bytes padding it out").unwrap();
        let store = SqliteCredentialStore::new(&path);

        let result = store.set_credentials(EMAIL, TOKEN, TOKEN);
        assert!(result.is_err(), "A corrupt database must surface an error");
    }

    #[test]
    fn test_get_credentials_empty_database_returns_none() {
        let (_dir, store) = setup_store();
        assert!(store.get_credentials().unwrap().is_none());
    }

    #[test]
    fn test_get_credentials_partial_record_returns_none() {
        let (_dir, store) = setup_store();
        {
            let db = Database::open_existing(store.path()).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                    params![KEY_EMAIL, EMAIL],
                )
                .unwrap();
        }

        assert!(
            store.get_credentials().unwrap().is_none(),
            "A record without tokens is not a complete record"
        );
    }

    #[test]
    fn test_store_usable_through_reference() {
        fn write_with<S: CredentialStore>(store: S) -> bool {
            store.set_credentials(EMAIL, TOKEN, TOKEN).unwrap()
        }

        let (_dir, store) = setup_store();
        assert!(write_with(&store));
        assert!(store.get_credentials().unwrap().is_some());
    }
}
