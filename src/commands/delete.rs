//! Record deletion. The target must be in the current listing before the
//! confirmation prompt is shown.

use super::{edit::select_record, list, open_service, store_error};
use crate::{
    libs::{
        error::RecordError,
        messages::Message,
        record::{RecordId, StudyRecord},
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the record to delete; omit to pick from a list
    id: Option<RecordId>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut service = open_service()?;
    let records = service.list().await.map_err(store_error)?;

    let id = match args.id {
        Some(id) => id,
        None if records.is_empty() => {
            msg_info!(Message::NoRecords);
            return Ok(());
        }
        None => select_record(&records, Message::SelectRecordToDelete)?,
    };

    let Some(record) = target(&records, id) else {
        msg_error!(Message::RecordNotFound(id));
        return Ok(());
    };

    if !args.yes {
        let name = record.student_name.clone();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteRecord(id, name).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match service.delete(id).await {
        Ok(()) => {
            msg_success!(Message::RecordDeleted(id));
            list::show(&service).await
        }
        Err(RecordError::NotFound(id)) => {
            msg_error!(Message::RecordNotFound(id));
            Ok(())
        }
        Err(error) => Err(store_error(error)),
    }
}

// First listed record with `id`, matching what the store will remove.
fn target(records: &[StudyRecord], id: RecordId) -> Option<&StudyRecord> {
    records.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::record::{RecordDraft, SocialContext, Subject};
    use chrono::NaiveDate;

    #[test]
    fn test_target_requires_listed_id() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            RecordDraft::new("Ana", date, 1, 0, Subject::Physics, SocialContext::Solo).into_record(2),
            RecordDraft::new("Budi", date, 1, 0, Subject::Physics, SocialContext::Solo).into_record(2),
        ];

        assert_eq!(target(&records, 2).map(|r| r.student_name.as_str()), Some("Ana"));
        assert!(target(&records, 5).is_none());
        assert!(target(&[], 1).is_none());
    }
}
