use std::env;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod config_tests {
    use super::*;
    use ga_query::config::Config;
    use ga_query::query::DEFAULT_ENDPOINT;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.logging.level, "WARN");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.output, "console");

        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_env_variable_override() {
        env::set_var("GA_ENDPOINT", "http://localhost:9999/data/ga");
        env::set_var("GA_TIMEOUT_SECS", "30");
        env::set_var("LOG_FORMAT", "json");

        let mut config = Config::default();
        config
            .apply_env_overrides()
            .expect("Failed to apply env overrides");

        assert_eq!(config.api.endpoint, "http://localhost:9999/data/ga");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.logging.format, "json");

        env::remove_var("GA_ENDPOINT");
        env::remove_var("GA_TIMEOUT_SECS");
        env::remove_var("LOG_FORMAT");
    }

    #[test]
    fn test_config_file_roundtrip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("ga-query.toml");

        let mut config = Config::default();
        config.api.endpoint = "https://proxy.example.com/ga".to_string();
        config.api.timeout_secs = Some(15);
        config.save_to_file(&config_path).expect("Failed to save");

        let loaded = Config::load_from_file(&config_path).expect("Failed to load");
        assert_eq!(loaded.api.endpoint, "https://proxy.example.com/ga");
        assert_eq!(loaded.api.timeout_secs, Some(15));
        assert_eq!(loaded.logging.level, config.logging.level);
    }

    #[test]
    fn test_config_file_without_timeout() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("ga-query.toml");
        fs::write(
            &config_path,
            r#"
[logging]
level = "DEBUG"
format = "json"
output = "console"

[api]
endpoint = "https://www.googleapis.com/analytics/v3/data/ga"

[paths]
log_directory = "logs"
"#,
        )
        .expect("Failed to write config");

        let config = Config::load_from_file(&config_path).expect("Failed to load");
        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "this is [not valid toml").expect("Failed to write config");

        assert!(Config::load_from_file(&config_path).is_err());
    }

    #[test]
    fn test_file_output_creates_log_directory() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let log_dir = temp_dir.path().join("nested").join("logs");

        let mut config = Config::default();
        config.logging.output = "file".to_string();
        config.paths.log_directory = log_dir.clone();

        assert!(config.validate().is_ok());
        assert!(log_dir.exists());
    }
}
