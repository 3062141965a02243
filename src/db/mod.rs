//! Local SQLite persistence.

/// Connection management for the database file in the data directory.
pub mod db;

/// Spreadsheet-shaped record table used when no remote sheet is configured.
pub mod sheet;
