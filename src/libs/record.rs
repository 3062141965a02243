//! Study record model and its sheet row encoding.
//!
//! A record occupies one row of six cells, always in this order:
//!
//! | ID | Name | Date       | Duration       | Subject    | Context |
//! |----|------|------------|----------------|------------|---------|
//! | 1  | Ana  | 2024-01-01 | 1 jam 30 menit | Matematika | Sendiri |
//!
//! Subject and context cells hold the labels the sheet was created with.
//! Reading also accepts the English variant names.

use super::duration::{self, StudyDuration};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const COLUMN_COUNT: usize = 6;
pub const HEADER: [&str; COLUMN_COUNT] = ["ID", "Nama", "Tanggal", "Durasi", "Materi", "Suasana"];

/// Record IDs as stored in the first cell of a row.
pub type RecordId = u64;

/// One sheet row: ordered cell values, the first cell is the record ID.
pub type Row = Vec<String>;

#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("row has {0} cells, expected 6")]
    Short(usize),
    #[error("invalid ID '{0}'")]
    Id(String),
    #[error("invalid date '{0}'")]
    Date(String),
    #[error("unknown subject '{0}'")]
    Subject(String),
    #[error("unknown context '{0}'")]
    Context(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    English,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::English,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Matematika",
            Subject::Physics => "Fisika",
            Subject::Chemistry => "Kimia",
            Subject::Biology => "Biologi",
            Subject::English => "Bahasa Inggris",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::English => "English",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(s) || subject.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RowError::Subject(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SocialContext {
    Solo,
    Group,
}

impl SocialContext {
    pub const ALL: [SocialContext; 2] = [SocialContext::Solo, SocialContext::Group];

    pub fn label(&self) -> &'static str {
        match self {
            SocialContext::Solo => "Sendiri",
            SocialContext::Group => "Berkelompok",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SocialContext::Solo => "Solo",
            SocialContext::Group => "Group",
        }
    }
}

impl fmt::Display for SocialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SocialContext {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SocialContext::ALL
            .into_iter()
            .find(|context| context.label().eq_ignore_ascii_case(s) || context.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RowError::Context(s.to_string()))
    }
}

/// Field values collected by a form before validation and ID assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub student_name: String,
    pub date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
    pub subject: Subject,
    pub context: SocialContext,
}

impl RecordDraft {
    pub fn new(student_name: &str, date: NaiveDate, hours: u32, minutes: u32, subject: Subject, context: SocialContext) -> Self {
        RecordDraft {
            student_name: student_name.to_string(),
            date,
            hours,
            minutes,
            subject,
            context,
        }
    }

    pub fn duration(&self) -> StudyDuration {
        StudyDuration::new(self.hours, self.minutes)
    }

    pub fn into_record(self, id: RecordId) -> StudyRecord {
        StudyRecord {
            id,
            duration: self.duration(),
            student_name: self.student_name,
            date: self.date,
            subject: self.subject,
            context: self.context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub id: RecordId,
    pub student_name: String,
    pub date: NaiveDate,
    pub duration: StudyDuration,
    pub subject: Subject,
    pub context: SocialContext,
}

impl StudyRecord {
    pub fn to_row(&self) -> Row {
        vec![
            self.id.to_string(),
            self.student_name.clone(),
            self.date.format(DATE_FORMAT).to_string(),
            duration::format(self.duration.hours, self.duration.minutes),
            self.subject.label().to_string(),
            self.context.label().to_string(),
        ]
    }

    pub fn from_row(row: &[String]) -> Result<Self, RowError> {
        if row.len() < COLUMN_COUNT {
            return Err(RowError::Short(row.len()));
        }

        Ok(StudyRecord {
            id: parse_id(&row[0]).ok_or_else(|| RowError::Id(row[0].clone()))?,
            student_name: row[1].clone(),
            date: NaiveDate::parse_from_str(row[2].trim(), DATE_FORMAT).map_err(|_| RowError::Date(row[2].clone()))?,
            duration: duration::parse(&row[3]),
            subject: row[4].parse()?,
            context: row[5].parse()?,
        })
    }

    pub fn hours(&self) -> f64 {
        self.duration.as_hours()
    }
}

/// Reads the ID cell of a row. Non-numeric and zero IDs yield `None`.
pub fn parse_id(cell: &str) -> Option<RecordId> {
    cell.trim().parse::<RecordId>().ok().filter(|id| *id > 0)
}
