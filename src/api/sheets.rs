//! Google Sheets worksheet as a record table.
//!
//! Talks to the Sheets v4 values API. Row 1 of the worksheet is the header
//! (`ID, Nama, Tanggal, ...`) and is never returned as data; the first append
//! to an empty worksheet writes it. Cells are written
//! with `valueInputOption=RAW` so they read back exactly as written.
//!
//! Every mutation re-reads the whole worksheet to locate the target row; row
//! positions are never cached, so concurrent edits from another client are not
//! detected.

use crate::libs::config::{Config, SheetsConfig};
use crate::libs::error::{RecordError, RecordResult};
use crate::libs::messages::Message;
use crate::libs::record::{RecordId, Row, COLUMN_COUNT, HEADER};
use crate::libs::store::{position_of, RecordStore};
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

const FIRST_COLUMN: &str = "A";
const LAST_COLUMN: &str = "F";
const HEADER_ROWS: usize = 1;

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

pub struct SheetsStore {
    client: Client,
    config: SheetsConfig,
    token: String,
}

impl SheetsStore {
    pub fn new(config: SheetsConfig, token: String) -> Self {
        Self {
            client: Client::new(),
            config,
            token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let sheets = config
            .sheets
            .clone()
            .filter(|s| !s.spreadsheet_id.is_empty())
            .ok_or_else(|| msg_error_anyhow!(Message::SheetsNotConfigured))?;
        let token = sheets.token()?;
        Ok(Self::new(sheets, token))
    }

    /// All worksheet rows including the header, padded to six cells.
    async fn all_values(&self) -> RecordResult<Vec<Row>> {
        let url = self.values_url(&whole_range(&self.config.sheet_name))?;
        let res = self.client.get(url).bearer_auth(&self.token).send().await?;
        let body = ensure_success(res).await?.json::<ValueRange>().await?;
        Ok(decode_rows(body))
    }

    fn values_url(&self, range: &str) -> RecordResult<Url> {
        self.url(&["values", range])
    }

    fn url(&self, tail: &[&str]) -> RecordResult<Url> {
        let mut url = Url::parse(&self.config.api_url).map_err(|e| RecordError::StoreUnavailable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RecordError::StoreUnavailable(Message::SheetsInvalidApiUrl(self.config.api_url.clone()).to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.config.spreadsheet_id.as_str()])
            .extend(tail);
        Ok(url)
    }

    fn batch_update_url(&self) -> RecordResult<Url> {
        let mut url = self.url(&[])?;
        let last = format!("{}:batchUpdate", self.config.spreadsheet_id);
        url.path_segments_mut()
            .map_err(|_| RecordError::StoreUnavailable(Message::SheetsInvalidApiUrl(self.config.api_url.clone()).to_string()))?
            .pop()
            .push(&last);
        Ok(url)
    }

    // Index of the first data row carrying `id`, counted from the top of the
    // worksheet (0 is the header).
    async fn locate(&self, id: RecordId) -> RecordResult<Option<usize>> {
        let rows = self.all_values().await?;
        let data = rows.get(HEADER_ROWS..).unwrap_or_default();
        Ok(position_of(data, id).map(|index| index + HEADER_ROWS))
    }
}

impl RecordStore for SheetsStore {
    async fn fetch_all(&self) -> RecordResult<Vec<Row>> {
        let rows: Vec<Row> = self.all_values().await?.into_iter().skip(HEADER_ROWS).collect();
        debug!(rows = rows.len(), sheet = %self.config.sheet_name, "read worksheet");
        Ok(rows)
    }

    async fn append(&mut self, row: Row) -> RecordResult<()> {
        let existing = self.all_values().await?;
        let values = append_values(&existing, row);
        let range = whole_range(&self.config.sheet_name);
        let mut url = self.url(&["values", &format!("{}:append", range)])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let body = json!({ "majorDimension": "ROWS", "values": values });
        let res = self.client.post(url).bearer_auth(&self.token).json(&body).send().await?;
        ensure_success(res).await?;
        debug!(sheet = %self.config.sheet_name, rows = values.len(), "appended rows");
        Ok(())
    }

    async fn replace_by_id(&mut self, id: RecordId, row: Row) -> RecordResult<bool> {
        let Some(index) = self.locate(id).await? else {
            return Ok(false);
        };

        let range = row_range(&self.config.sheet_name, index);
        let mut url = self.values_url(&range)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = json!({ "range": range, "majorDimension": "ROWS", "values": [row] });
        let res = self.client.put(url).bearer_auth(&self.token).json(&body).send().await?;
        ensure_success(res).await?;
        debug!(id, row = index + 1, "replaced worksheet row");
        Ok(true)
    }

    async fn delete_by_id(&mut self, id: RecordId) -> RecordResult<bool> {
        let Some(index) = self.locate(id).await? else {
            return Ok(false);
        };

        let body = delete_request(self.config.sheet_gid, index);
        let res = self.client.post(self.batch_update_url()?).bearer_auth(&self.token).json(&body).send().await?;
        ensure_success(res).await?;
        debug!(id, row = index + 1, "deleted worksheet row");
        Ok(true)
    }
}

async fn ensure_success(res: Response) -> RecordResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let detail = res.text().await.unwrap_or_default();
    Err(RecordError::StoreUnavailable(
        Message::SheetsRequestFailed(status.to_string(), detail.trim().to_string()).to_string(),
    ))
}

fn quoted(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}

fn whole_range(sheet_name: &str) -> String {
    format!("{}!{}:{}", quoted(sheet_name), FIRST_COLUMN, LAST_COLUMN)
}

/// A1 range of the worksheet row at zero-based `index`.
fn row_range(sheet_name: &str, index: usize) -> String {
    let n = index + 1;
    format!("{}!{}{}:{}{}", quoted(sheet_name), FIRST_COLUMN, n, LAST_COLUMN, n)
}

/// Rows to append after `existing`. An empty worksheet gets the header row
/// first, so the record never lands in the header position.
fn append_values(existing: &[Row], row: Row) -> Vec<Row> {
    if existing.is_empty() {
        vec![HEADER.iter().map(|cell| cell.to_string()).collect(), row]
    } else {
        vec![row]
    }
}

fn delete_request(sheet_gid: i64, index: usize) -> serde_json::Value {
    json!({
        "requests": [{
            "deleteDimension": {
                "range": {
                    "sheetId": sheet_gid,
                    "dimension": "ROWS",
                    "startIndex": index,
                    "endIndex": index + 1,
                }
            }
        }]
    })
}

// The API omits trailing empty cells and returns numbers as JSON numbers when
// the sheet was edited by hand.
fn decode_rows(body: ValueRange) -> Vec<Row> {
    body.values
        .into_iter()
        .map(|cells| {
            let mut row: Row = cells
                .into_iter()
                .map(|cell| match cell {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect();
            if row.len() < COLUMN_COUNT {
                row.resize(COLUMN_COUNT, String::new());
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(api_url: &str) -> SheetsStore {
        let config = SheetsConfig {
            spreadsheet_id: "abc123".to_string(),
            api_url: api_url.to_string(),
            ..SheetsConfig::default()
        };
        SheetsStore::new(config, "token".to_string())
    }

    #[test]
    fn test_ranges() {
        assert_eq!(whole_range("Sheet1"), "'Sheet1'!A:F");
        assert_eq!(row_range("Data Belajar", 0), "'Data Belajar'!A1:F1");
        assert_eq!(row_range("Sheet1", 4), "'Sheet1'!A5:F5");
        assert_eq!(whole_range("Ana's"), "'Ana''s'!A:F");
    }

    #[test]
    fn test_urls() {
        let store = store("https://sheets.googleapis.com");
        let url = store.values_url("'Sheet1'!A:F").unwrap();
        assert!(url.as_str().starts_with("https://sheets.googleapis.com/v4/spreadsheets/abc123/values/"));

        let url = store.batch_update_url().unwrap();
        assert_eq!(url.as_str(), "https://sheets.googleapis.com/v4/spreadsheets/abc123:batchUpdate");
    }

    #[test]
    fn test_urls_with_trailing_slash() {
        let store = store("http://localhost:8080/");
        let url = store.batch_update_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v4/spreadsheets/abc123:batchUpdate");
    }

    #[test]
    fn test_decode_rows_pads_and_stringifies() {
        let body: ValueRange = serde_json::from_str(
            r#"{
                "range": "Sheet1!A1:F3",
                "majorDimension": "ROWS",
                "values": [
                    ["ID", "Nama", "Tanggal", "Durasi", "Materi", "Suasana"],
                    [1, "Ana", "2024-01-01", "1 jam", "Matematika", "Sendiri"],
                    ["2", "Budi"]
                ]
            }"#,
        )
        .unwrap();

        let rows = decode_rows(body);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[2], vec!["2", "Budi", "", "", "", ""]);
    }

    #[test]
    fn test_decode_empty_sheet() {
        let body: ValueRange = serde_json::from_str(r#"{"range": "Sheet1!A1:F1000"}"#).unwrap();
        assert!(decode_rows(body).is_empty());
    }

    #[test]
    fn test_append_to_empty_sheet_writes_header_first() {
        let row: Row = vec!["1", "Ana", "2024-01-01", "1 jam", "Matematika", "Sendiri"]
            .into_iter()
            .map(String::from)
            .collect();

        let values = append_values(&[], row.clone());
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], HEADER.to_vec());
        assert_eq!(values[1], row);

        let existing = vec![HEADER.iter().map(|c| c.to_string()).collect::<Row>()];
        assert_eq!(append_values(&existing, row.clone()), vec![row]);
    }

    #[test]
    fn test_delete_request_targets_one_row() {
        let body = delete_request(7, 3);
        let range = &body["requests"][0]["deleteDimension"]["range"];
        assert_eq!(range["sheetId"], 7);
        assert_eq!(range["startIndex"], 3);
        assert_eq!(range["endIndex"], 4);
    }
}
