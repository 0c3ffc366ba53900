use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::RecordResult;

/// A record scanned from the row store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Stable record identifier.
    pub id: i64,
    /// The serialized metadata tree, or `None` when absent.
    pub metadata: Option<String>,
}

/// The relational row store inside an unpacked archive.
///
/// Wraps a SQLite connection to the `records` table: one row per logical
/// record, with an `id` and a single `metadata` text column.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open the row store file.
    pub fn open(db_path: &Path) -> RecordResult<Self> {
        let conn = Connection::open(db_path)?;
        Ok(Self { conn })
    }

    /// Create the record table. Intended for tests and fixtures.
    pub fn create_schema(&self) -> RecordResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY,
                metadata TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert a record. Intended for tests and fixtures.
    pub fn insert(&self, id: i64, metadata: Option<&str>) -> RecordResult<()> {
        self.conn.execute(
            "INSERT INTO records (id, metadata) VALUES (?1, ?2)",
            params![id, metadata],
        )?;
        Ok(())
    }

    /// Scan every record in id order.
    pub fn scan(&self) -> RecordResult<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, metadata FROM records ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Record {
                id: row.get(0)?,
                metadata: row.get(1)?,
            })
        })?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    /// Overwrite one record's metadata blob.
    pub fn update_metadata(&self, id: i64, metadata: &str) -> RecordResult<()> {
        self.conn.execute(
            "UPDATE records SET metadata = ?1 WHERE id = ?2",
            params![metadata, id],
        )?;
        Ok(())
    }

    /// Number of records in the store.
    pub fn count(&self) -> RecordResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
