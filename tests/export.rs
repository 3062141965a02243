#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use studylog::libs::export::{ExportFormat, ExportRecord, Exporter};
    use studylog::libs::record::{RecordDraft, SocialContext, StudyRecord, Subject};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn records() -> Vec<StudyRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![
            RecordDraft::new("Ana", date, 1, 30, Subject::Mathematics, SocialContext::Solo).into_record(1),
            RecordDraft::new("Budi", date, 0, 20, Subject::English, SocialContext::Group).into_record(2),
        ]
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("records.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()));

        exporter.export(&records()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ID,Name,Date,Duration,Hours,Subject,Context");
        assert_eq!(lines[1], "1,Ana,2024-01-01,1 jam 30 menit,1.50,Matematika,Sendiri");
        assert_eq!(lines[2], "2,Budi,2024-01-01,20 menit,0.33,Bahasa Inggris,Berkelompok");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("records.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));

        exporter.export(&records()).unwrap();

        let exported: Vec<ExportRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[1].name, "Budi");
        assert_eq!(exported[1].hours, 0.33);
        assert_eq!(exported[1].subject, "Bahasa Inggris");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("records.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(path.clone()));

        exporter.export(&records()).unwrap();

        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("studylog_export_"));
        assert!(name.ends_with(".json"));
    }
}
