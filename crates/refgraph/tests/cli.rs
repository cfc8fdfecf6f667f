//! Black-box tests for the refgraph binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESTORE_GRAPH: &str = r#"{
  "format": 1,
  "restore": { "/src/App/App.csproj": {}, "/src/Data/Data.csproj": {} },
  "projects": {
    "/src/App/App.csproj": {
      "restore": { "frameworks": { "net8.0": { "projectReferences": {
        "/src/Data/Data.csproj": {}, "/src/Common/Common.csproj": {}
      } } } }
    },
    "/src/Data/Data.csproj": {
      "restore": { "frameworks": { "net8.0": { "projectReferences": {
        "/src/Common/Common.csproj": {}
      } } } }
    }
  }
}"#;

fn refgraph() -> Command {
    let mut cmd = Command::cargo_bin("refgraph").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_options() {
    refgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--reduction-action"))
        .stdout(predicate::str::contains("--restore-graph"));
}

#[test]
fn test_invalid_direction_lists_accepted_values() {
    refgraph()
        .args(["App.sln", "--direction", "UP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LR"))
        .stderr(predicate::str::contains("BT"));
}

#[test]
fn test_missing_source_fails() {
    refgraph().assert().failure();
}

#[test]
fn test_restore_graph_source_renders_html() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("App.sln.rg");
    std::fs::write(&rg, RESTORE_GRAPH).unwrap();
    let output = dir.path().join("App.html");

    refgraph()
        .arg(&rg)
        .arg("-o")
        .arg(&output)
        .args(["-d", "td"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"))
        .stdout(predicate::str::contains("Graph written to:"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("flowchart TD\n"));
    assert!(html.contains("App --> Common\n"));
    assert!(html.contains("linkStyle 1 stroke:#f00,stroke-width:2px;"));
    assert!(html.contains("mermaid@10/dist/mermaid.esm.min.mjs"));
}

#[test]
fn test_default_output_lands_in_workdir() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("App.sln.rg");
    std::fs::write(&rg, RESTORE_GRAPH).unwrap();

    refgraph()
        .arg(&rg)
        .arg("--workdir")
        .arg(dir.path())
        .args(["--reduction-action", "remove"])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("App.sln.rg.html")).unwrap();
    assert!(!html.contains("App --> Common"));
    assert!(!html.contains("linkStyle"));
}

#[test]
fn test_unreadable_restore_graph_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("broken.rg");
    std::fs::write(&rg, "{ not json").unwrap();

    refgraph()
        .arg(&rg)
        .arg("--workdir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load restore graph"));

    assert!(!dir.path().join("broken.rg.html").exists());
}

#[test]
fn test_failure_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("missing.rg");

    let output = refgraph()
        .arg(&rg)
        .arg("--workdir")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to load restore graph").count(), 1);
}
