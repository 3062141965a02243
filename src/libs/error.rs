//! Errors of the record layer.
//!
//! [`RecordError`] is what the record service and every [`RecordStore`]
//! return. The CLI treats each variant differently:
//!
//! - **Validation**: printed as a warning, nothing was written, exit status 0
//! - **NotFound**: printed as an error, nothing changed
//! - **IdsExhausted**: no larger ID can be assigned; the record is not added
//! - **StoreUnavailable**: the table could not be reached; the command fails
//!
//! Driver errors from rusqlite and reqwest convert into `StoreUnavailable`, so
//! stores can use `?` on them directly.
//!
//! [`RecordStore`]: super::store::RecordStore

use super::record::RecordId;
use thiserror::Error;

/// Failures surfaced by the record service and the stores behind it.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field is missing or out of range. Shown to the user as a
    /// warning; nothing was written.
    #[error("{0}")]
    Validation(String),

    #[error("record with ID {0} not found")]
    NotFound(RecordId),

    /// The table already holds the largest representable ID.
    #[error("no record ID left after {0}")]
    IdsExhausted(RecordId),

    /// The backing table could not be read or written.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RecordError {
    pub fn validation(reason: &str) -> Self {
        RecordError::Validation(reason.to_string())
    }
}

impl From<rusqlite::Error> for RecordError {
    fn from(error: rusqlite::Error) -> Self {
        RecordError::StoreUnavailable(error.to_string())
    }
}

impl From<reqwest::Error> for RecordError {
    fn from(error: reqwest::Error) -> Self {
        RecordError::StoreUnavailable(error.to_string())
    }
}

impl From<std::io::Error> for RecordError {
    fn from(error: std::io::Error) -> Self {
        RecordError::StoreUnavailable(error.to_string())
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
