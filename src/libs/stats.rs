//! Aggregates behind the `chart` command.
//!
//! Hours are derived from the stored duration text with
//! [`duration::to_hours_float`]; they are never written back.

use super::duration;
use super::record::{SocialContext, StudyRecord, Subject};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stats {
    pub hours_by_date: BTreeMap<NaiveDate, f64>,
    pub subject_counts: BTreeMap<Subject, usize>,
    pub context_counts: BTreeMap<SocialContext, usize>,
}

impl Stats {
    pub fn from_records(records: &[StudyRecord]) -> Self {
        let mut stats = Stats::default();

        for record in records {
            let hours = duration::to_hours_float(&record.duration.to_string());
            *stats.hours_by_date.entry(record.date).or_insert(0.0) += hours;
            *stats.subject_counts.entry(record.subject).or_insert(0) += 1;
            *stats.context_counts.entry(record.context).or_insert(0) += 1;
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.hours_by_date.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.hours_by_date.values().sum()
    }
}
