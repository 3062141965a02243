//! Text for every [`Message`] variant.
//!
//! All user-facing wording lives here so commands only ever pick a variant
//! and pass its parameters. Labels stored in the sheet (subject, context,
//! duration) are shown as they are stored.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === RECORD MESSAGES ===
            Message::RecordCreated(id) => format!("Record {} added", id),
            Message::RecordUpdated(id) => format!("Record {} updated", id),
            Message::RecordDeleted(id) => format!("Record {} deleted", id),
            Message::RecordNotFound(id) => format!("Record with ID {} not found", id),
            Message::NoRecords => "No records yet. Add one with `studylog add`.".to_string(),
            Message::RecordsHeader(count) => format!("Study records ({})", count),
            Message::ValidationFailed(reason) => format!("Record not saved: {}", reason),
            Message::SelectRecordToEdit => "Select the record to edit".to_string(),
            Message::SelectRecordToDelete => "Select the record to delete".to_string(),
            Message::EditingRecord(id, name) => format!("Editing record {} ({})", id, name),
            Message::ConfirmDeleteRecord(id, name) => format!("Delete record {} ({})?", id, name),
            Message::RecordSummary(id, name, date, duration) => format!("{} - {} - {} - {}", id, name, date, duration),

            // === FORM PROMPTS ===
            Message::PromptStudentName => "Name".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptHours => "Hours".to_string(),
            Message::PromptMinutes => "Minutes".to_string(),
            Message::PromptSubject => "Subject".to_string(),
            Message::PromptContext => "Studied".to_string(),
            Message::HoursRange(max) => format!("Hours must be between 0 and {}", max),
            Message::MinutesRange(max) => format!("Minutes must be between 0 and {}", max),
            Message::InvalidDate(input) => format!("'{}' is not a date, use YYYY-MM-DD or 'today'", input),

            // === CHART MESSAGES ===
            Message::ChartHoursByDate => "Total study hours per date".to_string(),
            Message::ChartSubjects => "Records per subject".to_string(),
            Message::ChartContexts => "Solo or group".to_string(),
            Message::NoDataForCharts => "No records to chart yet.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format, count) => format!("Exporting {} record(s) as {}...", count, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSheets => "Google Sheets settings".to_string(),
            Message::BackendLocal => "Local table (SQLite)".to_string(),
            Message::BackendSheets => "Google Sheets".to_string(),
            Message::PromptSelectBackend => "Where should records be stored?".to_string(),
            Message::PromptSpreadsheetId => "Spreadsheet ID".to_string(),
            Message::PromptSheetName => "Worksheet name".to_string(),
            Message::PromptSheetGid => "Worksheet gid (from the sheet URL)".to_string(),
            Message::PromptSheetsApiUrl => "Sheets API URL".to_string(),
            Message::PromptSheetsToken => "Access token (leave empty to use the environment)".to_string(),

            // === STORE MESSAGES ===
            Message::SheetsNotConfigured => "Google Sheets is selected but not configured. Run `studylog init`.".to_string(),
            Message::SheetsTokenMissing(var) => format!("No Sheets access token. Set one with `studylog init` or the {} variable.", var),
            Message::SheetsInvalidApiUrl(url) => format!("Invalid Sheets API URL: {}", url),
            Message::SheetsRequestFailed(status, body) => {
                if body.is_empty() {
                    format!("Sheets API request failed with status {}", status)
                } else {
                    format!("Sheets API request failed with status {}: {}", status, body)
                }
            }
            Message::StoreUnavailable(error) => format!("Could not reach the record table: {}", error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DurationPatternInvalid(pattern) => format!("Duration pattern '{}' does not compile", pattern),
        };
        write!(f, "{}", s)
    }
}
