//! SQLite-backed key/value store of query records.
//!
//! One row per query id, value the JSON-serialised [`QueryRecord`]. Writing
//! a key that already exists replaces it, so when a query id reappears later
//! in a report only its last record is kept.

use crate::error::Result;
use crate::record::QueryRecord;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

/// Log a heartbeat every this many records
pub const PROGRESS_INTERVAL: usize = 100;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS records (
    query_id TEXT PRIMARY KEY NOT NULL,
    record   TEXT NOT NULL
)";

/// Persistent record store
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) a store file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(RecordStore { conn })
    }

    /// Insert or replace the record under its query id
    pub fn put(&mut self, record: &QueryRecord) -> Result<()> {
        put_in(&self.conn, record)
    }

    pub fn get(&self, query_id: &str) -> Result<Option<QueryRecord>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT record FROM records WHERE query_id = ?1",
                [query_id],
                |row| row.get(0),
            )
            .optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn contains(&self, query_id: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM records WHERE query_id = ?1",
                [query_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Stored query ids in ascending order
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT query_id FROM records ORDER BY query_id")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// All records in ascending key order
    pub fn iter(&self) -> Result<std::vec::IntoIter<QueryRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT record FROM records ORDER BY query_id")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        let records = rows
            .iter()
            .map(|json| serde_json::from_str(json))
            .collect::<std::result::Result<Vec<QueryRecord>, _>>()?;
        Ok(records.into_iter())
    }
}

fn put_in(conn: &Connection, record: &QueryRecord) -> Result<()> {
    let json = serde_json::to_string(record)?;
    conn.execute(
        "INSERT OR REPLACE INTO records (query_id, record) VALUES (?1, ?2)",
        params![record.query_id(), json],
    )?;
    Ok(())
}

/// Persist a record stream inside one transaction; returns how many records
/// were written.
///
/// With `ignore_empty` set, records without hit groups are skipped. When the
/// stream fails, the records written before the failure are committed and
/// the error is returned.
pub fn store_records<I>(records: I, store: &mut RecordStore, ignore_empty: bool) -> Result<usize>
where
    I: IntoIterator<Item = Result<QueryRecord>>,
{
    let tx = store.conn.transaction()?;
    let mut stored = 0;
    let mut failure = None;

    for (n, record) in records.into_iter().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                failure = Some(e);
                break;
            }
        };
        if n % PROGRESS_INTERVAL == 0 {
            debug!(n, query = %record.label(), "storing records");
        }
        if ignore_empty && record.is_empty() {
            continue;
        }
        put_in(&tx, &record)?;
        stored += 1;
    }

    tx.commit()?;
    match failure {
        Some(e) => Err(e),
        None => {
            info!(stored, "stored query records");
            Ok(stored)
        }
    }
}
