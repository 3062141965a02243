//! Remote record tables.

pub mod sheets;

pub use sheets::SheetsStore;
