//! # Studylog - study habit records
//!
//! A command-line dashboard for study sessions kept in a spreadsheet: add,
//! edit and delete records, list them, chart where the time goes, and export
//! everything to CSV, JSON or Excel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studylog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
