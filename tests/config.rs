#[cfg(test)]
mod tests {
    use studylog::libs::config::{Config, SheetsConfig, StoreBackend, CONFIG_FILE_NAME, DEFAULT_SHEETS_API_URL, DEFAULT_SHEET_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_is_local(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.backend, StoreBackend::Local);
        assert!(config.sheets.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            backend: StoreBackend::Sheets,
            sheets: Some(SheetsConfig {
                spreadsheet_id: "abc123".to_string(),
                sheet_name: "Log".to_string(),
                sheet_gid: 42,
                access_token: Some("token".to_string()),
                ..SheetsConfig::default()
            }),
        };

        config.save_to(&ctx.config_path).unwrap();
        let saved = fs::read_to_string(&ctx.config_path).unwrap();
        let read = Config::read_from(&ctx.config_path).unwrap();

        assert!(saved.contains("\"backend\": \"sheets\""));
        assert_eq!(read, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_sheets_defaults_fill_missing_fields(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, r#"{"backend":"sheets","sheets":{"spreadsheet_id":"abc123"}}"#).unwrap();

        let sheets = Config::read_from(&ctx.config_path).unwrap().sheets.unwrap();

        assert_eq!(sheets.sheet_name, DEFAULT_SHEET_NAME);
        assert_eq!(sheets.api_url, DEFAULT_SHEETS_API_URL);
        assert_eq!(sheets.sheet_gid, 0);
        assert!(sheets.access_token.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_configured_token_wins() {
        let sheets = SheetsConfig {
            access_token: Some("from-file".to_string()),
            ..SheetsConfig::default()
        };

        assert_eq!(sheets.token().unwrap(), "from-file");
    }
}
