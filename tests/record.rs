#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use studylog::libs::duration::StudyDuration;
    use studylog::libs::record::{parse_id, RowError, SocialContext, StudyRecord, Subject};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_labels_and_english_names_parse() {
        assert_eq!("Matematika".parse::<Subject>().unwrap(), Subject::Mathematics);
        assert_eq!("bahasa inggris".parse::<Subject>().unwrap(), Subject::English);
        assert_eq!(" chemistry ".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert_eq!("Berkelompok".parse::<SocialContext>().unwrap(), SocialContext::Group);
        assert_eq!("solo".parse::<SocialContext>().unwrap(), SocialContext::Solo);
        assert_eq!("Sejarah".parse::<Subject>(), Err(RowError::Subject("Sejarah".to_string())));
    }

    #[test]
    fn test_from_row() {
        let record = StudyRecord::from_row(&cells(&["3", "Ana", "2024-01-01", "1 jam 30 menit", "Kimia", "Sendiri"])).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.student_name, "Ana");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.duration, StudyDuration::new(1, 30));
        assert_eq!(record.subject, Subject::Chemistry);
        assert_eq!(record.context, SocialContext::Solo);
        assert_eq!(record.hours(), 1.5);
    }

    #[test]
    fn test_to_row_uses_sheet_labels() {
        let row = cells(&["7", "Budi", "2024-02-29", "2 jam", "Bahasa Inggris", "Berkelompok"]);
        let record = StudyRecord::from_row(&row).unwrap();

        assert_eq!(record.to_row(), row);
    }

    #[test]
    fn test_from_row_errors() {
        assert_eq!(StudyRecord::from_row(&cells(&["1", "Ana"])), Err(RowError::Short(2)));
        assert_eq!(
            StudyRecord::from_row(&cells(&["ID", "Nama", "Tanggal", "Durasi", "Materi", "Suasana"])),
            Err(RowError::Id("ID".to_string()))
        );
        assert_eq!(
            StudyRecord::from_row(&cells(&["1", "Ana", "01/02/2024", "1 jam", "Kimia", "Sendiri"])),
            Err(RowError::Date("01/02/2024".to_string()))
        );
        assert_eq!(
            StudyRecord::from_row(&cells(&["1", "Ana", "2024-01-02", "1 jam", "Kimia", "Ramai"])),
            Err(RowError::Context("Ramai".to_string()))
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 4 "), Some(4));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
