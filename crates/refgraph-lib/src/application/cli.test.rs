use super::*;
use crate::primitives::ColorIntent;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["refgraph", "App.sln"]).unwrap();
    assert_eq!(cli.render.source, PathBuf::from("App.sln"));
    assert_eq!(cli.render.direction, GraphDirection::LR);
    assert_eq!(cli.render.reduction_action, ReductionAction::Color);
    assert_eq!(cli.render.mode, GraphMode::Projects);
    assert!(!cli.render.prune);
    assert!(cli.render.output.is_none());
    assert!(cli.render.restore_graph.is_none());
}

#[test]
fn test_short_flags_and_case_insensitive_values() {
    let cli = Cli::try_parse_from([
        "refgraph", "App.sln", "-d", "td", "-a", "remove", "-m", "COMPLETE", "-o", "out.html",
        "-r", "out.rg", "--prune",
    ])
    .unwrap();
    assert_eq!(cli.render.direction, GraphDirection::TD);
    assert_eq!(cli.render.reduction_action, ReductionAction::Remove);
    assert_eq!(cli.render.mode, GraphMode::Complete);
    assert_eq!(cli.render.output, Some(PathBuf::from("out.html")));
    assert_eq!(cli.render.restore_graph, Some(PathBuf::from("out.rg")));
    assert!(cli.render.prune);
}

#[test]
fn test_invalid_direction_is_rejected() {
    let err = Cli::try_parse_from(["refgraph", "App.sln", "--direction", "UP"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_source_is_required() {
    let err = Cli::try_parse_from(["refgraph"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_cli_color_beats_environment() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let cli = Cli::try_parse_from(["refgraph", "App.sln", "--color", "always"]).unwrap();
    let config = CliConfig::from_parts(cli, &env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Always);

    let cli = Cli::try_parse_from(["refgraph", "App.sln"]).unwrap();
    let config = CliConfig::from_parts(cli, &env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert!(config.app_config.workdir.is_some());
}
