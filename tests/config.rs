#[cfg(test)]
mod tests {
    use logbook::libs::config::{Config, DEFAULT_DATE_FORMAT, DEFAULT_OUTPUT_DIR, DEFAULT_TIME_FORMAT};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the per-user data directory at a temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template_dir, PathBuf::from("."));
        assert_eq!(config.output_dir, None);
        assert_eq!(config.template_file, "template.md");
        assert_eq!(config.human_template_file, "HumanTemplate.md");
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_paths() {
        let mut config = Config {
            template_dir: PathBuf::from("/data/logbook"),
            ..Config::default()
        };
        assert_eq!(config.template_path(), PathBuf::from("/data/logbook/template.md"));
        assert_eq!(config.human_template_path(), PathBuf::from("/data/logbook/HumanTemplate.md"));
        assert_eq!(config.output_dir(), PathBuf::from("/data/logbook").join(DEFAULT_OUTPUT_DIR));

        config.output_dir = Some(PathBuf::from("/reports"));
        assert_eq!(config.output_dir(), PathBuf::from("/reports"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "template_dir": "/data/logbook" }"#).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("/data/logbook"));
        assert_eq!(config.template_file, "template.md");
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_unset_output_dir_is_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("output_dir"));
    }

    // Only this test touches the data directory, so tests running in
    // parallel cannot see each other's files.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            template_dir: PathBuf::from("/data/logbook"),
            output_dir: Some(PathBuf::from("/reports")),
            time_format: "%H:%M".to_string(),
            ..Config::default()
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
