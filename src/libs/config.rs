//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the data directory.
//! A missing file means defaults: records live in the local SQLite table.
//!
//! ```json
//! {
//!   "backend": "sheets",
//!   "sheets": {
//!     "spreadsheet_id": "1pr8y98ZEeA3...",
//!     "sheet_name": "Sheet1",
//!     "sheet_gid": 0,
//!     "api_url": "https://sheets.googleapis.com"
//!   }
//! }
//! ```
//!
//! The Sheets access token may be kept in the file or supplied through the
//! `STUDYLOG_SHEETS_TOKEN` environment variable (a `.env` file works too).

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const SHEETS_TOKEN_ENV: &str = "STUDYLOG_SHEETS_TOKEN";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Local,
    Sheets,
}

impl StoreBackend {
    const ALL: [StoreBackend; 2] = [StoreBackend::Local, StoreBackend::Sheets];

    fn title(&self) -> Message {
        match self {
            StoreBackend::Local => Message::BackendLocal,
            StoreBackend::Sheets => Message::BackendSheets,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,

    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Numeric worksheet ID (`gid` in the sheet URL), needed to delete rows.
    #[serde(default)]
    pub sheet_gid: i64,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_api_url() -> String {
    DEFAULT_SHEETS_API_URL.to_string()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        SheetsConfig {
            spreadsheet_id: String::new(),
            sheet_name: default_sheet_name(),
            sheet_gid: 0,
            api_url: default_api_url(),
            access_token: None,
        }
    }
}

impl SheetsConfig {
    /// Token from the config file, falling back to the environment.
    pub fn token(&self) -> Result<String> {
        if let Some(token) = self.access_token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(token.clone());
        }
        match env::var(SHEETS_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => msg_bail_anyhow!(Message::SheetsTokenMissing(SHEETS_TOKEN_ENV.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Walks the user through backend selection and, for Sheets, the sheet
    /// coordinates. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let titles: Vec<String> = StoreBackend::ALL.iter().map(|b| b.title().to_string()).collect();
        let current = StoreBackend::ALL.iter().position(|b| *b == config.backend).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectBackend.to_string())
            .items(&titles)
            .default(current)
            .interact()?;
        config.backend = StoreBackend::ALL[selection];

        if config.backend == StoreBackend::Sheets {
            let default = config.sheets.clone().unwrap_or_default();
            msg_print!(Message::ConfigModuleSheets);
            config.sheets = Some(SheetsConfig {
                spreadsheet_id: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSpreadsheetId.to_string())
                    .default(default.spreadsheet_id)
                    .interact_text()?,

                sheet_name: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSheetName.to_string())
                    .default(default.sheet_name)
                    .interact_text()?,

                sheet_gid: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSheetGid.to_string())
                    .default(default.sheet_gid)
                    .interact_text()?,

                api_url: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSheetsApiUrl.to_string())
                    .default(default.api_url)
                    .interact_text()?,

                access_token: Some(
                    Input::<String>::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSheetsToken.to_string())
                        .default(default.access_token.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?,
                )
                .filter(|token| !token.is_empty()),
            });
        }

        Ok(config)
    }
}
