//! Text charts of study time and habits: hours per date, records per
//! subject, and solo against group sessions.

use super::{open_service, store_error};
use crate::{
    libs::{messages::Message, stats::Stats, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let service = open_service()?;
    let records = service.list().await.map_err(store_error)?;
    let stats = Stats::from_records(&records);

    if stats.is_empty() {
        msg_info!(Message::NoDataForCharts);
        return Ok(());
    }

    msg_print!(Message::ChartHoursByDate, true);
    View::hours_chart(&stats)?;

    msg_print!(Message::ChartSubjects, true);
    View::count_chart(stats.subject_counts.iter().map(|(subject, count)| (subject.label(), *count)))?;

    msg_print!(Message::ChartContexts, true);
    View::count_chart(stats.context_counts.iter().map(|(context, count)| (context.label(), *count)))?;

    Ok(())
}
