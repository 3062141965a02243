//! Record export to CSV, JSON and Excel.
//!
//! Writes the current record list, one row per record, with the fractional
//! hour count alongside the stored duration text so the file can be charted
//! elsewhere.
//!
//! ```rust,no_run
//! use studylog::libs::export::{ExportFormat, Exporter};
//!
//! # fn demo(records: &[studylog::libs::record::StudyRecord]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(records)?;
//! # Ok(())
//! # }
//! ```

use super::record::{RecordId, StudyRecord, DATE_FORMAT};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const COLUMNS: [&str; 7] = ["ID", "Name", "Date", "Duration", "Hours", "Subject", "Context"];

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,

    Json,

    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: RecordId,
    pub name: String,
    pub date: String,
    pub duration: String,
    pub hours: f64,
    pub subject: String,
    pub context: String,
}

impl From<&StudyRecord> for ExportRecord {
    fn from(record: &StudyRecord) -> Self {
        ExportRecord {
            id: record.id,
            name: record.student_name.clone(),
            date: record.date.format(DATE_FORMAT).to_string(),
            duration: record.duration.to_string(),
            // Two decimals keep 20 minutes readable as 0.33
            hours: (record.hours() * 100.0).round() / 100.0,
            subject: record.subject.label().to_string(),
            context: record.context.label().to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("studylog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, records: &[StudyRecord]) -> Result<()> {
        let rows: Vec<ExportRecord> = records.iter().map(ExportRecord::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows),
            ExportFormat::Json => self.export_json(&rows),
            ExportFormat::Excel => self.export_excel(&rows),
        }
    }

    fn export_csv(&self, rows: &[ExportRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(COLUMNS)?;

        for row in rows {
            wtr.write_record(&[
                row.id.to_string(),
                row.name.clone(),
                row.date.clone(),
                row.duration.clone(),
                format!("{:.2}", row.hours),
                row.subject.clone(),
                row.context.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportRecord]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_number(r, 0, row.id as f64)?;
            worksheet.write_string(r, 1, &row.name)?;
            worksheet.write_string(r, 2, &row.date)?;
            worksheet.write_string(r, 3, &row.duration)?;
            worksheet.write_number(r, 4, row.hours)?;
            worksheet.write_string(r, 5, &row.subject)?;
            worksheet.write_string(r, 6, &row.context)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
