//! Record export command.
//!
//! - **CSV**: for spreadsheet applications
//! - **JSON**: for scripts
//! - **Excel**: a single formatted worksheet

use super::{open_service, store_error};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let service = open_service()?;
    let records = service.list().await.map_err(store_error)?;

    msg_info!(Message::ExportingData(format!("{:?}", args.format), records.len()));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&records)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
