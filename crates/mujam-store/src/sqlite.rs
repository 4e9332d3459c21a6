use std::path::Path;

use mujam_core::{Entry, KeywordStore, NewEntry, StoreError};
use rusqlite::{Connection, OptionalExtension, params};

const ENTRY_COLUMNS: &str = "id, keyword, meaning, example, note";

/// SQLite-backed keyword store owning a single scoped connection for its
/// lifetime. Inject it where a [`KeywordStore`] is expected; dropping the
/// store closes the connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref()).map_err(db_err)?;
        tracing::debug!(path = %path.as_ref().display(), "opened keyword database");
        Self::with_connection(conn)
    }

    /// In-memory database, for tests and ephemeral runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory().map_err(db_err)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS keywords (
                id INTEGER PRIMARY KEY,
                keyword TEXT UNIQUE,
                meaning TEXT NOT NULL,
                example TEXT NOT NULL,
                note TEXT
            )",
        )
        .map_err(db_err)?;
        Ok(Self { conn })
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        keyword: row.get(1)?,
        meaning: row.get(2)?,
        example: row.get(3)?,
        note: row.get(4)?,
    })
}

impl KeywordStore for SqliteStore {
    fn exists(&self, keyword: &str) -> Result<bool, StoreError> {
        self.conn
            .query_row(
                "SELECT 1 FROM keywords WHERE keyword = ?1",
                params![keyword],
                |row| row.get::<_, i64>(0),
            )
            .optional()
            .map(|found| found.is_some())
            .map_err(db_err)
    }

    fn get(&self, keyword: &str) -> Result<Option<Entry>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM keywords WHERE keyword = ?1"),
                params![keyword],
                row_to_entry,
            )
            .optional()
            .map_err(db_err)
    }

    fn insert_if_absent(&mut self, entry: NewEntry) -> Result<Entry, StoreError> {
        // the UNIQUE constraint arbitrates, so a racing duplicate submission
        // cannot produce two rows for one keyword
        let result = self.conn.execute(
            "INSERT INTO keywords (keyword, meaning, example, note) VALUES (?1, ?2, ?3, ?4)",
            params![entry.keyword, entry.meaning, entry.example, entry.note],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                tracing::debug!(keyword = %entry.keyword, id, "inserted entry");
                Ok(Entry {
                    id,
                    keyword: entry.keyword,
                    meaning: entry.meaning,
                    example: entry.example,
                    note: entry.note,
                })
            }
            Err(e) if is_unique_violation(&e) => {
                Err(StoreError::DuplicateKeyword(entry.keyword))
            }
            Err(e) => Err(db_err(e)),
        }
    }

    fn fetch_by_prefix(&self, letter: &str) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM keywords WHERE keyword LIKE ?1 ORDER BY id"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![format!("{letter}%")], row_to_entry)
            .map_err(db_err)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)
    }

    fn all_entries(&self) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ENTRY_COLUMNS} FROM keywords ORDER BY id"))
            .map_err(db_err)?;
        let rows = stmt.query_map([], row_to_entry).map_err(db_err)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)
    }

    fn len(&self) -> Result<usize, StoreError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM keywords", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|n| n as usize)
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(keyword: &str) -> NewEntry {
        NewEntry {
            keyword: keyword.to_string(),
            meaning: "m".to_string(),
            example: "e".to_string(),
            note: None,
        }
    }

    #[test]
    fn lookup_then_insert_then_lookup() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        assert!(!store.exists("اريد").unwrap());
        store.insert_if_absent(new_entry("اريد")).unwrap();
        assert!(store.exists("اريد").unwrap());
    }

    #[test]
    fn duplicate_insert_fails_and_count_is_unchanged() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert_if_absent(new_entry("باب")).unwrap();

        let err = store.insert_if_absent(new_entry("باب")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKeyword(k) if k == "باب"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn fetch_by_prefix_partitions_entries() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for k in ["باب", "بيت", "تفاح"] {
            store.insert_if_absent(new_entry(k)).unwrap();
        }

        let ba: Vec<_> = store
            .fetch_by_prefix("ب")
            .unwrap()
            .into_iter()
            .map(|e| e.keyword)
            .collect();
        assert_eq!(ba.len(), 2);
        assert!(ba.contains(&"باب".to_string()));
        assert!(ba.contains(&"بيت".to_string()));

        let ta: Vec<_> = store
            .fetch_by_prefix("ت")
            .unwrap()
            .into_iter()
            .map(|e| e.keyword)
            .collect();
        assert_eq!(ta, vec!["تفاح".to_string()]);
    }

    #[test]
    fn note_and_ids_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut entry = new_entry("باب");
        entry.note = Some("ملاحظة".to_string());

        let inserted = store.insert_if_absent(entry).unwrap();
        let fetched = store.get("باب").unwrap().expect("entry should exist");
        assert_eq!(fetched, inserted);
        assert_eq!(fetched.note.as_deref(), Some("ملاحظة"));
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.insert_if_absent(new_entry("بيت")).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert!(store.exists("بيت").unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }
}
