//! Row-oriented record tables.
//!
//! [`RecordStore`] is the minimal contract the record service needs from a
//! backing table: read every row, append one, and replace or delete the first
//! row whose ID cell reads as the requested ID (see [`matches_id`]). Stores
//! never enforce ID uniqueness; when a table holds duplicate IDs only the
//! first matching row (top to bottom) is touched.
//!
//! Implementations:
//! - [`MemoryStore`]: rows in a `Vec`, used by tests and dry runs
//! - [`SqliteStore`]: local table in the application data directory
//! - [`SheetsStore`]: a Google Sheets worksheet
//!
//! [`Backend`] picks one of the persistent stores from the configuration.

use super::config::{Config, StoreBackend};
use super::error::RecordResult;
use super::record::{parse_id, RecordId, Row};
use crate::api::sheets::SheetsStore;
use crate::db::sheet::SqliteStore;

#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Returns all data rows in table order.
    async fn fetch_all(&self) -> RecordResult<Vec<Row>>;

    /// Adds one row after the last one.
    async fn append(&mut self, row: Row) -> RecordResult<()>;

    /// Replaces the first row whose ID cell equals `id`. Returns whether a row
    /// matched.
    async fn replace_by_id(&mut self, id: RecordId, row: Row) -> RecordResult<bool>;

    /// Removes the first row whose ID cell equals `id`. Returns whether a row
    /// matched.
    async fn delete_by_id(&mut self, id: RecordId) -> RecordResult<bool>;
}

/// Whether the ID cell of `row` reads as `id`. Uses the same reading as
/// record decoding, so any row `list` shows can be updated and deleted.
pub fn matches_id(row: &[String], id: RecordId) -> bool {
    row.first().and_then(|cell| parse_id(cell)) == Some(id)
}

/// Position of the first row carrying `id`.
pub fn position_of(rows: &[Row], id: RecordId) -> Option<usize> {
    rows.iter().position(|row| matches_id(row, id))
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rows: Vec<Row>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl RecordStore for MemoryStore {
    async fn fetch_all(&self) -> RecordResult<Vec<Row>> {
        Ok(self.rows.clone())
    }

    async fn append(&mut self, row: Row) -> RecordResult<()> {
        self.rows.push(row);
        Ok(())
    }

    async fn replace_by_id(&mut self, id: RecordId, row: Row) -> RecordResult<bool> {
        match position_of(&self.rows, id) {
            Some(index) => {
                self.rows[index] = row;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&mut self, id: RecordId) -> RecordResult<bool> {
        match position_of(&self.rows, id) {
            Some(index) => {
                self.rows.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// The persistent store selected by the configuration.
pub enum Backend {
    Local(SqliteStore),
    Sheets(SheetsStore),
}

impl Backend {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.backend {
            StoreBackend::Local => Ok(Backend::Local(SqliteStore::new()?)),
            StoreBackend::Sheets => Ok(Backend::Sheets(SheetsStore::from_config(config)?)),
        }
    }
}

impl RecordStore for Backend {
    async fn fetch_all(&self) -> RecordResult<Vec<Row>> {
        match self {
            Backend::Local(store) => store.fetch_all().await,
            Backend::Sheets(store) => store.fetch_all().await,
        }
    }

    async fn append(&mut self, row: Row) -> RecordResult<()> {
        match self {
            Backend::Local(store) => store.append(row).await,
            Backend::Sheets(store) => store.append(row).await,
        }
    }

    async fn replace_by_id(&mut self, id: RecordId, row: Row) -> RecordResult<bool> {
        match self {
            Backend::Local(store) => store.replace_by_id(id, row).await,
            Backend::Sheets(store) => store.replace_by_id(id, row).await,
        }
    }

    async fn delete_by_id(&mut self, id: RecordId) -> RecordResult<bool> {
        match self {
            Backend::Local(store) => store.delete_by_id(id).await,
            Backend::Sheets(store) => store.delete_by_id(id).await,
        }
    }
}
