#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use studylog::libs::record::{RecordDraft, SocialContext, StudyRecord, Subject};
    use studylog::libs::stats::Stats;
    use studylog::libs::view::{bar, BAR_WIDTH};

    fn record(id: u64, day: u32, hours: u32, minutes: u32, subject: Subject, context: SocialContext) -> StudyRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        RecordDraft::new("Ana", date, hours, minutes, subject, context).into_record(id)
    }

    #[test]
    fn test_stats_from_records() {
        let records = vec![
            record(1, 2, 1, 30, Subject::Mathematics, SocialContext::Solo),
            record(2, 1, 0, 45, Subject::Physics, SocialContext::Group),
            record(3, 2, 0, 30, Subject::Mathematics, SocialContext::Group),
        ];

        let stats = Stats::from_records(&records);

        let days: Vec<(u32, f64)> = stats.hours_by_date.iter().map(|(d, h)| (chrono::Datelike::day(d), *h)).collect();
        assert_eq!(days, vec![(1, 0.75), (2, 2.0)]);
        assert_eq!(stats.total_hours(), 2.75);
        assert_eq!(stats.subject_counts.get(&Subject::Mathematics), Some(&2));
        assert_eq!(stats.subject_counts.get(&Subject::Physics), Some(&1));
        assert_eq!(stats.subject_counts.get(&Subject::English), None);
        assert_eq!(stats.context_counts.get(&SocialContext::Group), Some(&2));
        assert_eq!(stats.context_counts.get(&SocialContext::Solo), Some(&1));
    }

    #[test]
    fn test_empty_stats() {
        let stats = Stats::from_records(&[]);

        assert!(stats.is_empty());
        assert_eq!(stats.total_hours(), 0.0);
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(4.0, 4.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(2.0, 4.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.01, 100.0).chars().count(), 1);
        assert!(bar(0.0, 4.0).is_empty());
        assert!(bar(1.0, 0.0).is_empty());
    }
}
