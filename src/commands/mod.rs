pub mod add;
pub mod chart;
pub mod delete;
pub mod edit;
pub mod export;
pub mod form;
pub mod init;
pub mod list;

use crate::libs::{config::Config, error::RecordError, messages::Message, service::RecordService, store::Backend};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure where records are stored")]
    Init(init::InitArgs),
    #[command(about = "Show all study records", visible_alias = "ls")]
    List,
    #[command(about = "Add a study record")]
    Add(add::AddArgs),
    #[command(about = "Edit a study record")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a study record", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Chart study hours, subjects and group work")]
    Chart,
    #[command(about = "Export records to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List => list::cmd().await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Chart => chart::cmd().await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Record service over the store selected in the configuration.
pub(crate) fn open_service() -> Result<RecordService<Backend>> {
    let config = Config::read()?;
    msg_debug!("opening {:?} record store", config.backend);
    Ok(RecordService::new(Backend::from_config(&config)?))
}

/// Turns a store failure into the error shown to the user.
pub(crate) fn store_error(error: RecordError) -> anyhow::Error {
    match error {
        RecordError::StoreUnavailable(reason) => msg_error_anyhow!(Message::StoreUnavailable(reason)),
        other => other.into(),
    }
}
