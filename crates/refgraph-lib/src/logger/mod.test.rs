use super::*;

#[test]
fn test_default_filter_targets_both_crates() {
    assert_eq!(
        default_filter(LogLevel::Debug),
        "refgraph=debug,refgraph_lib=debug,debug"
    );
    assert_eq!(
        default_filter(LogLevel::Warning),
        "refgraph=warn,refgraph_lib=warn,warn"
    );
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    assert!(Logger::init(config.clone()).is_ok());
    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
