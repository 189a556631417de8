//! SQLite record store for companies and attached files.
//!
//! The connection is explicitly constructed and owned by the caller; there is
//! no process-global handle. Callers that share a `Store` across tasks wrap
//! it themselves.

mod companies;
mod files;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::Connection;

use crate::error::StoreError;

/// Handle over the SQLite database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &std::path::Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory database, used by tests.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS companies (
                id                    TEXT PRIMARY KEY,
                company_name          TEXT NOT NULL,
                business_number       TEXT NOT NULL,
                representative_name   TEXT NOT NULL,
                address               TEXT NOT NULL,
                business_type         TEXT NOT NULL,
                business_item         TEXT NOT NULL,
                credit_rating         TEXT NOT NULL,
                risk_rating           TEXT NOT NULL,
                memo                  TEXT NOT NULL,
                established_at        TEXT,
                loan_status           TEXT NOT NULL,
                business_license_path TEXT,
                created_at            TEXT NOT NULL,
                updated_at            TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS files (
                id             INTEGER PRIMARY KEY,
                company_id     TEXT NOT NULL REFERENCES companies(id),
                file_type      TEXT NOT NULL,
                original_name  TEXT NOT NULL,
                stored_name    TEXT NOT NULL,
                path           TEXT NOT NULL,
                extracted_text TEXT,
                status         TEXT,
                created_at     TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_files_company ON files(company_id);
            ",
        )?;
        Ok(())
    }
}

fn datetime_to_sql(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

fn datetime_from_sql(index: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn date_from_sql(index: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
