use super::*;
use crate::primitives::{GraphDirection, GraphMode, ReductionAction};
use crate::restore::build::MockProcessProvider;
use serde_json::json;
use tempfile::TempDir;

/// Restore graph with the shortcut diamond App->{Data,Core}, Data->Core, Core->Common, App->Common
fn shortcut_restore_graph() -> String {
    let entry = |refs: &[&str]| {
        let refs: serde_json::Map<String, serde_json::Value> =
            refs.iter().map(|r| (r.to_string(), json!({}))).collect();
        json!({ "restore": { "frameworks": { "net8.0": { "projectReferences": refs } } } })
    };
    json!({
        "restore": { "/s/App.csproj": {}, "/s/Data.csproj": {} },
        "projects": {
            "/s/App.csproj": entry(&["/s/Data.csproj", "/s/Common.csproj"]),
            "/s/Data.csproj": entry(&["/s/Common.csproj"]),
        }
    })
    .to_string()
}

fn render_args(source: PathBuf) -> RenderArgs {
    RenderArgs {
        source,
        output: None,
        restore_graph: None,
        direction: GraphDirection::LR,
        reduction_action: ReductionAction::Color,
        mode: GraphMode::Projects,
        prune: false,
    }
}

fn app_config(workdir: &TempDir) -> AppConfig {
    AppConfig {
        workdir: Some(workdir.path().to_path_buf()),
        ..AppConfig::default()
    }
}

#[test]
fn test_render_builds_then_writes_html() {
    let dir = TempDir::new().unwrap();
    let process = MockProcessProvider::new().with_restore_graph(&shortcut_restore_graph());
    let display = Display::new(false);

    let outcome = execute_render(
        &render_args(PathBuf::from("App.sln")),
        &app_config(&dir),
        &process,
        &display,
    )
    .unwrap();

    assert_eq!(outcome.output, dir.path().join("App.sln.html"));
    assert_eq!(outcome.restore_graph, dir.path().join("App.sln.rg"));
    assert_eq!(outcome.edges, 3);
    assert_eq!(outcome.highlighted, 1);

    let calls = process.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args[1], "App.sln");

    let html = std::fs::read_to_string(&outcome.output).unwrap();
    assert!(html.contains("flowchart LR\n"));
    assert!(html.contains("App --> Common\n"));
    assert!(html.contains("linkStyle 1 stroke:#f00,stroke-width:2px;"));
}

#[test]
fn test_rg_source_skips_build() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("App.sln.rg");
    std::fs::write(&rg, shortcut_restore_graph()).unwrap();
    let process = MockProcessProvider::new();

    let mut args = render_args(rg.clone());
    args.reduction_action = ReductionAction::Remove;
    args.direction = GraphDirection::TD;

    let outcome = execute_render(&args, &app_config(&dir), &process, &Display::new(false)).unwrap();

    assert!(process.get_calls().is_empty());
    assert_eq!(outcome.restore_graph, rg);
    assert_eq!(outcome.edges, 2);

    let html = std::fs::read_to_string(&outcome.output).unwrap();
    assert!(html.contains("flowchart TD\n"));
    assert!(!html.contains("App --> Common"));
    assert!(!html.contains("linkStyle"));
}

#[test]
fn test_non_zero_exit_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let process = MockProcessProvider::new().with_exit_code(1);

    let err = execute_render(
        &render_args(PathBuf::from("App.sln")),
        &app_config(&dir),
        &process,
        &Display::new(false),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("Exit code: 1"));
    assert!(!dir.path().join("App.sln.html").exists());
}

#[test]
fn test_explicit_paths_are_used() {
    let dir = TempDir::new().unwrap();
    let process = MockProcessProvider::new().with_restore_graph(&shortcut_restore_graph());

    let mut args = render_args(PathBuf::from("src/App.sln"));
    args.output = Some(dir.path().join("diagram.html"));
    args.restore_graph = Some(dir.path().join("graph.json"));

    let outcome = execute_render(&args, &app_config(&dir), &process, &Display::new(false)).unwrap();

    assert!(dir.path().join("diagram.html").exists());
    assert_eq!(outcome.restore_graph, dir.path().join("graph.json"));
    assert!(process.get_calls()[0].args[3].ends_with("graph.json"));
}

#[test]
fn test_prune_removes_flagged_edges() {
    let dir = TempDir::new().unwrap();
    let rg = dir.path().join("App.sln.rg");
    std::fs::write(&rg, shortcut_restore_graph()).unwrap();

    let mut args = render_args(rg);
    args.prune = true;

    let outcome = execute_render(
        &args,
        &app_config(&dir),
        &MockProcessProvider::new(),
        &Display::new(false),
    )
    .unwrap();

    assert_eq!(outcome.pruned, 1);
    assert_eq!(outcome.edges, 2);
    assert_eq!(outcome.highlighted, 0);
}

#[test]
fn test_missing_restore_graph_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = execute_render(
        &render_args(dir.path().join("missing.rg")),
        &app_config(&dir),
        &MockProcessProvider::new(),
        &Display::new(false),
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("Failed to load restore graph"));
}
