//! Command execution handlers
//!
//! One command: build (or read) the restore graph, analyze the project
//! references, and write the HTML diagram. External effects go through
//! [`ProcessProvider`] and [`Display`] so the flow can run under test.

use crate::application::{AppConfig, CliConfig, RenderArgs};
use crate::diagram::{render_html, render_reduced};
use crate::display::Display;
use crate::graph::{analyze_edges, apply_reduction};
use crate::restore::build::{LiveProcessProvider, ProcessProvider};
use crate::restore::{
    RESTORE_GRAPH_EXTENSION, generate_restore_graph, is_restore_graph, read_restore_graph,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of a finished render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// HTML file that was written
    pub output: PathBuf,
    /// Restore graph that was read
    pub restore_graph: PathBuf,
    /// Edge lines in the flowchart
    pub edges: usize,
    /// Edges flagged as redundant
    pub highlighted: usize,
    /// Edges removed by `--prune`
    pub pruned: usize,
    /// Projects skipped because their entry was malformed
    pub skipped_projects: usize,
    /// Package dependency edges collected in complete mode
    pub dependencies: usize,
}

/// Execute the CLI command with live collaborators
pub fn execute_command(config: CliConfig) -> Result<()> {
    let display = Display::new(config.app_config.color_enabled());
    let process = LiveProcessProvider::new();

    // Failures are reported once, by the binary's error return
    execute_render(&config.render, &config.app_config, &process, &display).map(|_| ())
}

/// Default path `<workdir>/<source file name>.<extension>`
fn default_path(workdir: &Path, source: &Path, extension: &str) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .with_context(|| format!("Source path has no file name: {}", source.display()))?;
    Ok(workdir.join(format!("{}.{}", file_name.to_string_lossy(), extension)))
}

/// Render the diagram for `args.source`
pub fn execute_render(
    args: &RenderArgs,
    app_config: &AppConfig,
    process: &dyn ProcessProvider,
    display: &Display,
) -> Result<RenderOutcome> {
    let workdir = app_config.working_dir();

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_path(&workdir, &args.source, "html")?,
    };

    // An existing restore graph is read as is
    let restore_graph = if is_restore_graph(&args.source) {
        debug!("Reading restore graph directly from {}", args.source.display());
        args.source.clone()
    } else {
        let path = match &args.restore_graph {
            Some(path) => path.clone(),
            None => default_path(&workdir, &args.source, RESTORE_GRAPH_EXTENSION)?,
        };
        info!("Generating restore graph for {}", args.source.display());
        generate_restore_graph(process, &args.source, &path)
            .with_context(|| format!("Failed to build {}", args.source.display()))?;
        path
    };

    let parsed = read_restore_graph(&restore_graph, args.mode)
        .with_context(|| format!("Failed to load restore graph {}", restore_graph.display()))?;

    for failure in &parsed.failures {
        warn!(project = %failure.key, reason = %failure.reason, "Skipping project");
        display
            .status()
            .warning(&format!("project '{}' skipped: {}", failure.key, failure.reason));
    }

    if !parsed.dependencies.is_empty() {
        // Collected for reporting only, the diagram shows project references
        debug!(count = parsed.dependencies.len(), "Collected package dependencies");
        for dependency in &parsed.dependencies {
            debug!("{}", dependency.to_mermaid());
        }
    }

    let mut graph = parsed.graph;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        mode = %args.mode,
        "Loaded project graph"
    );

    if let Err(e) = graph.ensure_acyclic() {
        warn!("{}", e);
        display.status().warning(&e.to_string());
    }

    let pruned = if args.prune {
        let removed = graph.transitive_reduction();
        info!(removed, "Pruned redundant edges");
        removed
    } else {
        0
    };

    let analyzed = analyze_edges(&graph);
    let reduced = apply_reduction(&analyzed, args.reduction_action);
    let flowchart = render_reduced(&reduced, args.direction, args.reduction_action);

    let html = render_html(&flowchart).context("Failed to render diagram page")?;
    std::fs::write(&output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let status = display.status();
    status.success("Done!");
    status.written("Graph", &output.display().to_string());

    Ok(RenderOutcome {
        output,
        restore_graph,
        edges: reduced.edges.len(),
        highlighted: analyzed.iter().filter(|e| e.redundant).count(),
        pruned,
        skipped_projects: parsed.failures.len(),
        dependencies: parsed.dependencies.len(),
    })
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
