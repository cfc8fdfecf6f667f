use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.workdir.is_none());
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
    // Default values in the override leave the base untouched
    assert_eq!(merged.color, ColorIntent::Never);
}

#[test]
fn test_validate_fills_workdir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert_eq!(config.workdir, Some(std::env::current_dir().unwrap()));
}

#[test]
fn test_validate_rejects_out_of_range_level() {
    let mut config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_logger_config_follows_color() {
    let config = AppConfig {
        log_level: 2,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Info);
    assert!(!logger.ansi);
}
