#[cfg(test)]
mod tests {
    use lupin::libs::config::{AssistantConfig, Config, CONFIG_FILE_NAME, MAX_SESSION_TIMEOUT};
    use lupin::libs::data_storage::DataStorage;
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
            let config_path = DataStorage::at(temp_dir.path().join("lupin")).get_path(CONFIG_FILE_NAME).unwrap();
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        assert!(!ctx.config_path.exists());
        let config = Config::load(&ctx.config_path).unwrap();

        assert!(config.assistant.is_none());
        let assistant = config.assistant();
        assert_eq!(assistant, AssistantConfig::default());
        assert_eq!(assistant.user_id, 1);
        assert_eq!(assistant.session_timeout, 30);
        assert_eq!(assistant.date_format, "%d-%m-%Y");
        assert_eq!(assistant.idle_timeout().unwrap(), chrono::Duration::minutes(30));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_store_and_load_round_trip(ctx: &mut ConfigTestContext) {
        let config = Config {
            assistant: Some(AssistantConfig {
                user_id: 99,
                session_timeout: 5,
                date_format: "%Y/%m/%d".to_string(),
            }),
        };
        config.store(&ctx.config_path).unwrap();

        let loaded = Config::load(&ctx.config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_are_omitted(ctx: &mut ConfigTestContext) {
        Config::default().store(&ctx.config_path).unwrap();
        let written = fs::read_to_string(&ctx.config_path).unwrap();
        assert_eq!(written.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_bad_files_are_rejected(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::load(&ctx.config_path).is_err());

        fs::write(
            &ctx.config_path,
            r#"{ "assistant": { "user_id": 1, "session_timeout": 30, "date_format": "%d" } }"#,
        )
        .unwrap();
        assert!(Config::load(&ctx.config_path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_session_timeout_is_rejected(ctx: &mut ConfigTestContext) {
        for minutes in [0, MAX_SESSION_TIMEOUT + 1, 1 << 60, u64::MAX] {
            let assistant = AssistantConfig {
                session_timeout: minutes,
                ..AssistantConfig::default()
            };
            assert!(assistant.idle_timeout().is_err(), "timeout {} accepted", minutes);

            Config { assistant: Some(assistant) }.store(&ctx.config_path).unwrap();
            let err = Config::load(&ctx.config_path).unwrap_err();
            assert!(err.to_string().contains("Session timeout must be between 1 and"));
        }

        let longest = AssistantConfig {
            session_timeout: MAX_SESSION_TIMEOUT,
            ..AssistantConfig::default()
        };
        assert_eq!(longest.idle_timeout().unwrap(), chrono::Duration::days(365));
    }
}
