//! Local record table backed by SQLite.
//!
//! Mirrors a spreadsheet: every record is one row of six text cells and rows
//! keep the order they were appended in (`position`). Lookups by ID follow the
//! same top-to-bottom, first-match rule as the remote sheet, and IDs are not
//! constrained to be unique.

use super::db::Db;
use crate::libs::error::RecordResult;
use crate::libs::record::{parse_id, RecordId, Row, COLUMN_COUNT};
use crate::libs::store::RecordStore;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

const SCHEMA_SHEET_ROWS: &str = "CREATE TABLE IF NOT EXISTS sheet_rows (
    position INTEGER NOT NULL PRIMARY KEY,
    id_cell TEXT NOT NULL,
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    duration TEXT NOT NULL,
    subject TEXT NOT NULL,
    context TEXT NOT NULL
);";
const INSERT_ROW: &str = "INSERT INTO sheet_rows (id_cell, name, date, duration, subject, context) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_ROWS: &str = "SELECT id_cell, name, date, duration, subject, context FROM sheet_rows ORDER BY position";
const SELECT_ID_CELLS: &str = "SELECT position, id_cell FROM sheet_rows ORDER BY position";
const UPDATE_ROW: &str = "UPDATE sheet_rows SET id_cell = ?2, name = ?3, date = ?4, duration = ?5, subject = ?6, context = ?7 WHERE position = ?1";
const DELETE_ROW: &str = "DELETE FROM sheet_rows WHERE position = ?1";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::from_db(Db::open(path)?)
    }

    fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_SHEET_ROWS, [])?;
        Ok(SqliteStore { conn: db.conn })
    }

    pub fn rows(&self) -> RecordResult<Vec<Row>> {
        let mut stmt = self.conn.prepare(SELECT_ROWS)?;
        let row_iter = stmt.query_map([], |r| {
            let mut cells = Vec::with_capacity(COLUMN_COUNT);
            for i in 0..COLUMN_COUNT {
                cells.push(r.get::<_, String>(i)?);
            }
            Ok(cells)
        })?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    pub fn push(&mut self, row: &[String]) -> RecordResult<()> {
        let c = cells(row);
        self.conn.execute(INSERT_ROW, params![c[0], c[1], c[2], c[3], c[4], c[5]])?;
        Ok(())
    }

    pub fn replace(&mut self, id: RecordId, row: &[String]) -> RecordResult<bool> {
        let Some(position) = self.first_position(id)? else {
            return Ok(false);
        };
        let c = cells(row);
        self.conn.execute(UPDATE_ROW, params![position, c[0], c[1], c[2], c[3], c[4], c[5]])?;
        Ok(true)
    }

    pub fn remove(&mut self, id: RecordId) -> RecordResult<bool> {
        let Some(position) = self.first_position(id)? else {
            return Ok(false);
        };
        self.conn.execute(DELETE_ROW, params![position])?;
        Ok(true)
    }

    // ID cells are matched after decoding, not by SQL text equality.
    fn first_position(&self, id: RecordId) -> RecordResult<Option<i64>> {
        let mut stmt = self.conn.prepare(SELECT_ID_CELLS)?;
        let mut rows = stmt.query([])?;
        while let Some(r) = rows.next()? {
            let cell: String = r.get(1)?;
            if parse_id(&cell) == Some(id) {
                return Ok(Some(r.get(0)?));
            }
        }
        Ok(None)
    }
}

// Pads or truncates a row to exactly six cells.
fn cells(row: &[String]) -> Vec<String> {
    (0..COLUMN_COUNT).map(|i| row.get(i).cloned().unwrap_or_default()).collect()
}

impl RecordStore for SqliteStore {
    async fn fetch_all(&self) -> RecordResult<Vec<Row>> {
        let rows = self.rows()?;
        debug!(rows = rows.len(), "read local sheet");
        Ok(rows)
    }

    async fn append(&mut self, row: Row) -> RecordResult<()> {
        self.push(&row)
    }

    async fn replace_by_id(&mut self, id: RecordId, row: Row) -> RecordResult<bool> {
        self.replace(id, &row)
    }

    async fn delete_by_id(&mut self, id: RecordId) -> RecordResult<bool> {
        self.remove(id)
    }
}
