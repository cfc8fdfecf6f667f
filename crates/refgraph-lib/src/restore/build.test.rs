use super::*;
use std::path::PathBuf;

#[test]
fn test_restore_graph_args() {
    let args = restore_graph_args(Path::new("src/App.sln"), Path::new("out/App.sln.rg"));
    assert_eq!(
        args,
        vec![
            "msbuild",
            "src/App.sln",
            "/t:GenerateRestoreGraphFile",
            "/p:RestoreGraphOutputPath=out/App.sln.rg",
        ]
    );
}

#[test]
fn test_generate_restore_graph_invokes_dotnet() {
    let process = MockProcessProvider::new();
    let result = generate_restore_graph(
        &process,
        &PathBuf::from("App.sln"),
        &PathBuf::from("App.sln.rg"),
    );

    assert!(result.is_ok());
    let calls = process.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command, "dotnet");
    assert_eq!(calls[0].args[0], "msbuild");
}

#[test]
fn test_non_zero_exit_is_fatal() {
    let process = MockProcessProvider::new().with_exit_code(1);
    let err = generate_restore_graph(&process, Path::new("App.sln"), Path::new("App.sln.rg"))
        .unwrap_err();

    assert!(matches!(err, BuildError::NonZeroExit { code: Some(1) }));
    assert_eq!(
        err.to_string(),
        "Halting execution, build exit code not 0. Exit code: 1"
    );
}

#[test]
fn test_start_failure_is_fatal() {
    let process = MockProcessProvider::new().with_start_failure("dotnet not found");
    let err = generate_restore_graph(&process, Path::new("App.sln"), Path::new("App.sln.rg"))
        .unwrap_err();

    assert!(matches!(err, BuildError::StartFailed { .. }));
    assert!(err.to_string().starts_with("Failed to start 'dotnet'"));
}

#[test]
fn test_signal_termination_reports_no_code() {
    let status = ProcessStatus { code: None };
    assert!(!status.success());
    assert_eq!(
        BuildError::NonZeroExit { code: None }.to_string(),
        "Halting execution, build exit code not 0. Exit code: none"
    );
}

#[test]
fn test_mock_writes_restore_graph() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("App.sln.rg");
    let process = MockProcessProvider::new().with_restore_graph("{}");

    generate_restore_graph(&process, Path::new("App.sln"), &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "{}");
}
