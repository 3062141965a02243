use crate::libs::record::RecordId;

/// Every piece of user-facing text, rendered through `Display` in
/// `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === RECORD MESSAGES ===
    RecordCreated(RecordId),
    RecordUpdated(RecordId),
    RecordDeleted(RecordId),
    RecordNotFound(RecordId),
    NoRecords,
    RecordsHeader(usize),
    ValidationFailed(String),
    SelectRecordToEdit,
    SelectRecordToDelete,
    EditingRecord(RecordId, String),
    ConfirmDeleteRecord(RecordId, String),
    RecordSummary(RecordId, String, String, String),

    // === FORM PROMPTS ===
    PromptStudentName,
    PromptDate,
    PromptHours,
    PromptMinutes,
    PromptSubject,
    PromptContext,
    HoursRange(u32),
    MinutesRange(u32),
    InvalidDate(String),

    // === CHART MESSAGES ===
    ChartHoursByDate,
    ChartSubjects,
    ChartContexts,
    NoDataForCharts,

    // === EXPORT MESSAGES ===
    ExportingData(String, usize), // format, record count
    ExportCompleted(String),      // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSheets,
    BackendLocal,
    BackendSheets,
    PromptSelectBackend,
    PromptSpreadsheetId,
    PromptSheetName,
    PromptSheetGid,
    PromptSheetsApiUrl,
    PromptSheetsToken,

    // === STORE MESSAGES ===
    SheetsNotConfigured,
    SheetsTokenMissing(String),     // env var name
    SheetsInvalidApiUrl(String),    // url
    SheetsRequestFailed(String, String), // status, body
    StoreUnavailable(String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
    DurationPatternInvalid(&'static str),
}
