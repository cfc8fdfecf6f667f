//! End-to-end tests for the render command
//!
//! The build step runs against a mock process provider that writes a
//! fixture restore graph where msbuild would.

use anyhow::Result;
use refgraph_lib::application::RenderArgs;
use refgraph_lib::application::commands::execute_render;
use refgraph_lib::display::Display;
use refgraph_lib::primitives::{GraphDirection, GraphMode, ReductionAction};
use refgraph_lib::restore::build::MockProcessProvider;
use refgraph_tests::{RestoreGraphBuilder, TestWorkspace};
use serde_json::json;
use std::path::PathBuf;

fn args(source: impl Into<PathBuf>, action: ReductionAction) -> RenderArgs {
    RenderArgs {
        source: source.into(),
        output: None,
        restore_graph: None,
        direction: GraphDirection::LR,
        reduction_action: action,
        mode: GraphMode::Projects,
        prune: false,
    }
}

/// Api references Domain, Infra and Shared; Infra references Domain;
/// Domain references Shared. Api->Shared and Api->Domain are shortcuts.
fn layered_solution() -> RestoreGraphBuilder {
    RestoreGraphBuilder::new()
        .project("Api", &["Domain", "Infra", "Shared"], &[("Serilog", "[3.1.1, )")])
        .project("Infra", &["Domain"], &[("Dapper", "[2.1.0, )")])
        .project("Domain", &["Shared"], &[])
        .project("Shared", &[], &[])
}

fn flowchart_lines(html: &str) -> Vec<&str> {
    let start = html.find("flowchart").unwrap_or(0);
    html[start..]
        .lines()
        .take_while(|l| !l.trim_start().starts_with("</pre>"))
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn e2e_build_then_color_redundant_edges() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let process = MockProcessProvider::new().with_restore_graph(&layered_solution().to_json());

    let outcome = execute_render(
        &args("Layered.sln", ReductionAction::Color),
        &workspace.app_config(),
        &process,
        &Display::new(false),
    )?;

    assert_eq!(process.get_calls().len(), 1);
    assert_eq!(outcome.output, workspace.path().join("Layered.sln.html"));

    // Node order: Api, Domain, Infra, Shared
    // Edges by target: Domain <- Api, Infra; Infra <- Api; Shared <- Api, Domain
    let html = workspace.read("Layered.sln.html")?;
    assert_eq!(
        flowchart_lines(&html),
        vec![
            "flowchart LR",
            "Api --> Domain",
            "Infra --> Domain",
            "Api --> Infra",
            "Api --> Shared",
            "Domain --> Shared",
            "linkStyle 0,3 stroke:#f00,stroke-width:2px;",
        ]
    );
    assert_eq!(outcome.highlighted, 2);
    Ok(())
}

#[test]
fn e2e_remove_and_none_agree_on_kept_edges() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let rg = workspace.write_restore_graph("Layered.sln.rg", layered_solution())?;
    let process = MockProcessProvider::new();

    let mut none_args = args(&rg, ReductionAction::None);
    none_args.output = Some(workspace.path().join("none.html"));
    let mut remove_args = args(&rg, ReductionAction::Remove);
    remove_args.output = Some(workspace.path().join("remove.html"));

    let display = Display::new(false);
    execute_render(&none_args, &workspace.app_config(), &process, &display)?;
    execute_render(&remove_args, &workspace.app_config(), &process, &display)?;

    let none_html = workspace.read("none.html")?;
    let remove_html = workspace.read("remove.html")?;
    let none_lines = flowchart_lines(&none_html);
    let remove_lines = flowchart_lines(&remove_html);

    // None still highlights, Remove drops the flagged edges
    assert!(none_lines.last().unwrap().starts_with("linkStyle 0,3"));
    assert_eq!(
        remove_lines,
        vec!["flowchart LR", "Infra --> Domain", "Api --> Infra", "Domain --> Shared"]
    );
    assert!(remove_lines.iter().all(|l| none_lines.contains(l)));
    assert!(process.get_calls().is_empty());
    Ok(())
}

#[test]
fn e2e_failed_build_writes_nothing() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let process = MockProcessProvider::new().with_exit_code(1);

    let result = execute_render(
        &args("Layered.sln", ReductionAction::Color),
        &workspace.app_config(),
        &process,
        &Display::new(false),
    );

    let err = result.expect_err("non-zero exit must abort");
    assert!(format!("{:#}", err).contains("Halting execution, build exit code not 0. Exit code: 1"));
    assert!(!workspace.path().join("Layered.sln.html").exists());
    Ok(())
}

#[test]
fn e2e_malformed_project_is_skipped() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let graph = RestoreGraphBuilder::new()
        .raw_project("Broken", json!({ "restore": {} }))
        .project("App", &["Core"], &[]);
    let rg = workspace.write_restore_graph("App.sln.rg", graph)?;

    let outcome = execute_render(
        &args(&rg, ReductionAction::Color),
        &workspace.app_config(),
        &MockProcessProvider::new(),
        &Display::new(false),
    )?;

    assert_eq!(outcome.skipped_projects, 1);
    let html = workspace.read("App.sln.rg.html")?;
    assert_eq!(flowchart_lines(&html), vec!["flowchart LR", "App --> Core"]);
    Ok(())
}

#[test]
fn e2e_complete_mode_collects_dependencies_only() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let rg = workspace.write_restore_graph("Layered.sln.rg", layered_solution())?;

    let mut complete = args(&rg, ReductionAction::Color);
    complete.mode = GraphMode::Complete;

    let outcome = execute_render(
        &complete,
        &workspace.app_config(),
        &MockProcessProvider::new(),
        &Display::new(false),
    )?;

    assert_eq!(outcome.dependencies, 2);
    let html = workspace.read("Layered.sln.rg.html")?;
    assert!(!html.contains("Serilog"));
    assert!(!html.contains("Dapper"));
    assert_eq!(outcome.edges, 5);
    Ok(())
}

#[test]
fn e2e_prune_then_render_has_nothing_to_highlight() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let rg = workspace.write_restore_graph("Layered.sln.rg", layered_solution())?;

    let mut pruned = args(&rg, ReductionAction::Color);
    pruned.prune = true;
    pruned.direction = GraphDirection::BT;

    let outcome = execute_render(
        &pruned,
        &workspace.app_config(),
        &MockProcessProvider::new(),
        &Display::new(false),
    )?;

    assert_eq!(outcome.pruned, 2);
    let html = workspace.read("Layered.sln.rg.html")?;
    assert_eq!(
        flowchart_lines(&html),
        vec!["flowchart BT", "Infra --> Domain", "Api --> Infra", "Domain --> Shared"]
    );
    Ok(())
}
