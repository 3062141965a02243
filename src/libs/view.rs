//! Terminal rendering of records and charts.
//!
//! - [`View::records`]: bordered table with one row per record
//! - [`View::hours_chart`]: study hours per date with a total row
//! - [`View::count_chart`]: record counts per label
//!
//! Charts are plain tables with a bar column scaled by [`bar`].

use super::record::{StudyRecord, DATE_FORMAT};
use super::stats::Stats;
use anyhow::Result;
use prettytable::{format, row, Table};

/// Widest bar drawn by the charts, in characters.
pub const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

pub struct View {}

impl View {
    pub fn records(records: &[StudyRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DATE", "DURATION", "SUBJECT", "CONTEXT"]);
        for record in records {
            table.add_row(row![
                record.id,
                record.student_name,
                record.date.format(DATE_FORMAT),
                record.duration,
                record.subject,
                record.context
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn hours_chart(stats: &Stats) -> Result<()> {
        let max = stats.hours_by_date.values().cloned().fold(0.0, f64::max);
        let mut table = Self::chart_table();

        for (date, hours) in &stats.hours_by_date {
            table.add_row(row![date.format(DATE_FORMAT), r->format!("{:.2}", hours), bar(*hours, max)]);
        }
        table.add_row(row![b->"TOTAL", rb->format!("{:.2}", stats.total_hours()), ""]);
        table.printstd();

        Ok(())
    }

    /// Horizontal bars for label counts, in the order given.
    pub fn count_chart<'a, I>(counts: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let counts: Vec<(&str, usize)> = counts.into_iter().collect();
        let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;
        let mut table = Self::chart_table();

        for (label, count) in counts {
            table.add_row(row![label, r->count, bar(count as f64, max)]);
        }
        table.printstd();

        Ok(())
    }

    fn chart_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table
    }
}

/// Bar scaled so that `max` fills [`BAR_WIDTH`]. Any positive value gets at
/// least one block.
pub fn bar(value: f64, max: f64) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    std::iter::repeat(BAR_CHAR).take(width.min(BAR_WIDTH)).collect()
}
