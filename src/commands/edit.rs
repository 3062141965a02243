use super::{form, list, open_service, store_error};
use crate::{
    libs::{error::RecordError, messages::Message, record::{RecordId, StudyRecord}},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the record to edit; omit to pick from a list
    id: Option<RecordId>,

    #[command(flatten)]
    form: form::FormArgs,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut service = open_service()?;

    let id = match args.id {
        Some(id) => id,
        None => {
            let records = service.list().await.map_err(store_error)?;
            if records.is_empty() {
                msg_info!(Message::NoRecords);
                return Ok(());
            }
            select_record(&records, Message::SelectRecordToEdit)?
        }
    };

    let Some(current) = service.get(id).await.map_err(store_error)? else {
        msg_error!(Message::RecordNotFound(id));
        return Ok(());
    };

    msg_print!(Message::EditingRecord(current.id, current.student_name.clone()), true);
    let draft = form::collect(args.form, Some(&current))?;

    match service.update(id, draft).await {
        Ok(record) => {
            msg_success!(Message::RecordUpdated(record.id));
            list::show(&service).await
        }
        Err(RecordError::Validation(reason)) => {
            msg_warning!(Message::ValidationFailed(reason));
            Ok(())
        }
        Err(RecordError::NotFound(id)) => {
            msg_error!(Message::RecordNotFound(id));
            Ok(())
        }
        Err(error) => Err(store_error(error)),
    }
}

/// Lets the user pick one record; returns its ID.
pub fn select_record(records: &[StudyRecord], prompt: Message) -> Result<RecordId> {
    let items: Vec<String> = records
        .iter()
        .map(|r| Message::RecordSummary(r.id, r.student_name.clone(), r.date.to_string(), r.duration.to_string()).to_string())
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(records[selection].id)
}
