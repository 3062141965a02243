//! Record service: validation, ID assignment and CRUD over a [`RecordStore`].
//!
//! Every operation re-reads the backing table; nothing is cached between
//! calls. Writes are not transactional, so a store failure halfway through an
//! operation is reported but not rolled back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studylog::libs::record::{RecordDraft, SocialContext, Subject};
//! use studylog::libs::service::RecordService;
//! use studylog::libs::store::MemoryStore;
//! use chrono::NaiveDate;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut service = RecordService::new(MemoryStore::new());
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let draft = RecordDraft::new("Ana", date, 1, 0, Subject::Mathematics, SocialContext::Solo);
//! let record = service.create(draft).await?;
//! assert_eq!(record.id, 1);
//! # Ok(())
//! # }
//! ```

use super::error::{RecordError, RecordResult};
use super::record::{parse_id, RecordDraft, RecordId, Row, StudyRecord};
use super::store::RecordStore;
use tracing::{debug, warn};

pub const NAME_REQUIRED: &str = "name required";
pub const DURATION_REQUIRED: &str = "duration required";
pub const DURATION_OUT_OF_RANGE: &str = "duration out of range";

pub struct RecordService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads every row and decodes it. Rows that do not decode are skipped
    /// with a warning.
    pub async fn list(&self) -> RecordResult<Vec<StudyRecord>> {
        let rows = self.store.fetch_all().await?;
        debug!(rows = rows.len(), "fetched record rows");

        let records = rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| match StudyRecord::from_row(row) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(row = index + 1, %error, "skipping malformed record row");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    pub async fn get(&self, id: RecordId) -> RecordResult<Option<StudyRecord>> {
        Ok(self.list().await?.into_iter().find(|record| record.id == id))
    }

    pub async fn create(&mut self, draft: RecordDraft) -> RecordResult<StudyRecord> {
        validate(&draft)?;

        let rows = self.store.fetch_all().await?;
        let id = next_id(&rows)?;
        let record = draft.into_record(id);

        self.store.append(record.to_row()).await?;
        debug!(id, "record created");

        Ok(record)
    }

    pub async fn update(&mut self, id: RecordId, draft: RecordDraft) -> RecordResult<StudyRecord> {
        validate(&draft)?;

        let record = draft.into_record(id);
        if !self.store.replace_by_id(id, record.to_row()).await? {
            return Err(RecordError::NotFound(id));
        }
        debug!(id, "record updated");

        Ok(record)
    }

    pub async fn delete(&mut self, id: RecordId) -> RecordResult<()> {
        if !self.store.delete_by_id(id).await? {
            return Err(RecordError::NotFound(id));
        }
        debug!(id, "record deleted");

        Ok(())
    }
}

fn validate(draft: &RecordDraft) -> RecordResult<()> {
    if draft.student_name.trim().is_empty() {
        return Err(RecordError::validation(NAME_REQUIRED));
    }

    let duration = draft.duration();
    if duration.is_zero() {
        return Err(RecordError::validation(DURATION_REQUIRED));
    }
    if !duration.in_range() {
        return Err(RecordError::validation(DURATION_OUT_OF_RANGE));
    }

    Ok(())
}

/// One past the largest numeric ID in the table. IDs that do not parse are
/// left out; when none parse the next ID is 1. Fails with
/// [`RecordError::IdsExhausted`] when the largest ID is already `u64::MAX`.
pub fn next_id(rows: &[Row]) -> RecordResult<RecordId> {
    match rows.iter().filter_map(|row| row.first()).filter_map(|cell| parse_id(cell)).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(RecordError::IdsExhausted(max)),
    }
}
