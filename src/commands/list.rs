use super::{open_service, store_error};
use crate::{
    libs::{messages::Message, service::RecordService, store::RecordStore, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let service = open_service()?;
    show(&service).await
}

/// Re-reads the table and prints every record.
pub async fn show<S: RecordStore>(service: &RecordService<S>) -> Result<()> {
    let records = service.list().await.map_err(store_error)?;

    if records.is_empty() {
        msg_info!(Message::NoRecords);
        return Ok(());
    }

    msg_print!(Message::RecordsHeader(records.len()), true);
    View::records(&records)
}
