use super::{form, list, open_service, store_error};
use crate::{
    libs::{error::RecordError, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    form: form::FormArgs,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut service = open_service()?;
    let draft = form::collect(args.form, None)?;

    match service.create(draft).await {
        Ok(record) => {
            msg_success!(Message::RecordCreated(record.id));
            list::show(&service).await
        }
        Err(RecordError::Validation(reason)) => {
            msg_warning!(Message::ValidationFailed(reason));
            Ok(())
        }
        Err(error) => Err(store_error(error)),
    }
}
