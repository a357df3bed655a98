#[cfg(test)]
mod tests {
    use hrdesk::libs::config::{ApiConfig, ApiMode, AttendanceConfig, Config};
    use hrdesk::libs::time::DisplayZone;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home for the duration of a test.
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

    fn production_config() -> Config {
        Config {
            api: Some(ApiConfig {
                mode: ApiMode::Production,
                base_url: None,
                timeout_secs: Some(30),
            }),
            attendance: Some(AttendanceConfig {
                late_threshold: "09:00".to_string(),
                timezone: "+06:30".parse().unwrap(),
            }),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = production_config();
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
        // Deleting twice is fine
        Config::delete().unwrap();
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.api.is_none());
        assert!(config.attendance.is_none());
        assert!(config.timeout().is_none());

        let rules = config.report_rules().unwrap();
        assert_eq!(rules.late_threshold, "09:15");
        assert_eq!(rules.zone, DisplayZone::Local);
    }

    #[test]
    fn test_serialization_skips_unset_modules() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));

        let json = serde_json::to_value(production_config()).unwrap();
        assert_eq!(json["api"]["mode"], "production");
        assert_eq!(json["attendance"]["timezone"], "+06:30");
        assert!(json["api"].get("base_url").is_none());
    }

    #[test]
    fn test_base_url_precedence() {
        let mut config = production_config();
        assert_eq!(config.resolve_base_url(None), "https://hrapi.aryoneoo.biz/api");

        config.api.as_mut().unwrap().base_url = Some("http://10.0.0.5:8000/api".to_string());
        assert_eq!(config.resolve_base_url(None), "http://10.0.0.5:8000/api");

        assert_eq!(config.resolve_base_url(Some("http://override/api")), "http://override/api");
        // Blank overrides are ignored
        assert_eq!(config.resolve_base_url(Some("  ")), "http://10.0.0.5:8000/api");
    }

    #[test]
    fn test_base_url_falls_back_to_mode() {
        let config = Config {
            api: Some(ApiConfig {
                mode: ApiMode::Development,
                base_url: Some(String::new()),
                timeout_secs: None,
            }),
            attendance: None,
        };
        assert_eq!(config.resolve_base_url(None), "http://127.0.0.1:8000/api");
    }

    #[test]
    fn test_timeout() {
        assert_eq!(production_config().timeout(), Some(Duration::from_secs(30)));

        let mut config = production_config();
        config.api.as_mut().unwrap().timeout_secs = Some(0);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_api_mode_parsing() {
        assert_eq!("production".parse::<ApiMode>().unwrap(), ApiMode::Production);
        assert_eq!("PROD".parse::<ApiMode>().unwrap(), ApiMode::Production);
        assert_eq!(" uat ".parse::<ApiMode>().unwrap(), ApiMode::Uat);
        assert_eq!("dev".parse::<ApiMode>().unwrap(), ApiMode::Development);
        assert!("staging".parse::<ApiMode>().is_err());

        for mode in ApiMode::ALL {
            assert_eq!(mode.to_string().parse::<ApiMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_report_rules_reject_bad_threshold() {
        let config = Config {
            api: None,
            attendance: Some(AttendanceConfig {
                late_threshold: "quarter past nine".to_string(),
                timezone: DisplayZone::Local,
            }),
        };
        let err = config.report_rules().unwrap_err();
        assert!(err.to_string().contains("quarter past nine"));
    }

    #[test]
    fn test_timezone_values() {
        assert_eq!("utc".parse::<DisplayZone>().unwrap(), DisplayZone::utc());
        assert_eq!("local".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
        assert!("+0530".parse::<DisplayZone>().is_ok());
        assert!("Asia/Yangon".parse::<DisplayZone>().is_err());
        assert!("+15:00".parse::<DisplayZone>().is_err());

        let bad: Result<Config, _> = serde_json::from_str(r#"{"attendance":{"late_threshold":"09:15","timezone":"mars"}}"#);
        assert!(bad.is_err());
    }
}
