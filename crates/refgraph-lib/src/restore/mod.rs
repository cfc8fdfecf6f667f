//! Restore graph parsing
//!
//! msbuild's `GenerateRestoreGraphFile` target writes a JSON document with a
//! `restore` object listing the restored projects and a `projects` object
//! carrying each project's resolution data. This module reads project
//! references (and, in complete mode, package dependencies) out of it.
//!
//! A project whose entry lacks an expected field is skipped and reported;
//! the remaining projects are still read.

use crate::graph::ProjectGraph;
use crate::primitives::GraphMode;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

pub mod build;

pub use build::{BuildError, generate_restore_graph};

/// File extension of a restore graph document
pub const RESTORE_GRAPH_EXTENSION: &str = "rg";

/// Errors that can occur while reading a restore graph
#[derive(Debug, Error)]
pub enum RestoreGraphError {
    #[error("Failed to read restore graph: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse restore graph JSON: {source}")]
    JsonParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Restore graph has no '{field}' object")]
    MissingSection { field: &'static str },

    #[error("Project '{key}' is malformed: {reason}")]
    MalformedProject { key: String, reason: String },
}

/// A package dependency of a project, labelled with its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub project: String,
    pub dependency: String,
    pub version: String,
}

impl DependencyEdge {
    /// Mermaid edge with the version as label
    pub fn to_mermaid(&self) -> String {
        format!(
            "{} -->|\"{}\"| {}",
            self.project, self.version, self.dependency
        )
    }
}

/// A project entry that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFailure {
    pub key: String,
    pub reason: String,
}

/// Everything extracted from one restore graph
#[derive(Debug, Default)]
pub struct RestoreGraph {
    /// Project reference graph
    pub graph: ProjectGraph,
    /// Package dependencies, collected in complete mode only
    ///
    /// These are not added to `graph` and are not drawn.
    pub dependencies: Vec<DependencyEdge>,
    /// Projects skipped because their entry was malformed
    pub failures: Vec<ProjectFailure>,
}

/// Display name of a project: its file name without the extension
///
/// Both `/` and `\` are accepted as separators since restore graphs written
/// on Windows carry backslash paths.
pub fn project_display_name(key: &str) -> String {
    let file_name = key.rsplit(['/', '\\']).next().unwrap_or(key);
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name[..dot].to_string(),
        _ => file_name.to_string(),
    }
}

/// True if `path` names a restore graph document
pub fn is_restore_graph(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == RESTORE_GRAPH_EXTENSION)
}

/// Read and parse a restore graph file
pub fn read_restore_graph(path: &Path, mode: GraphMode) -> Result<RestoreGraph, RestoreGraphError> {
    debug!("Reading restore graph: {}", path.display());

    let content =
        std::fs::read_to_string(path).map_err(|e| RestoreGraphError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    parse_restore_graph(&content, mode)
}

/// Parse restore graph JSON text
pub fn parse_restore_graph(content: &str, mode: GraphMode) -> Result<RestoreGraph, RestoreGraphError> {
    let document: Value = serde_json::from_str(content)?;
    parse_restore_document(&document, mode)
}

/// Extract edges from a parsed restore graph document
pub fn parse_restore_document(
    document: &Value,
    mode: GraphMode,
) -> Result<RestoreGraph, RestoreGraphError> {
    let restore = document
        .get("restore")
        .and_then(Value::as_object)
        .ok_or(RestoreGraphError::MissingSection { field: "restore" })?;
    let projects = document
        .get("projects")
        .and_then(Value::as_object)
        .ok_or(RestoreGraphError::MissingSection { field: "projects" })?;

    let mut result = RestoreGraph::default();

    for key in restore.keys() {
        if let Err(e) = read_project(key, projects.get(key), mode, &mut result) {
            warn!("{}", e);
            let reason = match e {
                RestoreGraphError::MalformedProject { reason, .. } => reason,
                other => other.to_string(),
            };
            result.failures.push(ProjectFailure {
                key: key.clone(),
                reason,
            });
        }
    }

    debug!(
        projects = result.graph.node_count(),
        references = result.graph.edge_count(),
        dependencies = result.dependencies.len(),
        failures = result.failures.len(),
        "Parsed restore graph"
    );

    Ok(result)
}

/// First entry of a `frameworks` object
fn first_framework<'a>(frameworks: Option<&'a Value>) -> Option<&'a Value> {
    frameworks?.as_object()?.values().next()
}

/// Read one project entry into `result`
///
/// References are added before dependencies are looked at, so a project with
/// broken dependency data still contributes its references.
fn read_project(
    key: &str,
    project: Option<&Value>,
    mode: GraphMode,
    result: &mut RestoreGraph,
) -> Result<(), RestoreGraphError> {
    let malformed = |reason: &str| RestoreGraphError::MalformedProject {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let project = project.ok_or_else(|| malformed("missing from 'projects'"))?;

    let references: Vec<&String> = first_framework(project.get("restore").and_then(|r| r.get("frameworks")))
        .ok_or_else(|| malformed("missing 'restore.frameworks' entry"))?
        .get("projectReferences")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("missing 'projectReferences'"))?
        .keys()
        .collect();

    let current = project_display_name(key);
    for reference in references {
        let referenced = project_display_name(reference);
        trace!("{} --> {}", current, referenced);
        result.graph.add_edge(&current, &referenced);
    }

    match mode {
        GraphMode::Projects => return Ok(()),
        GraphMode::Complete => {}
    }

    let framework = first_framework(project.get("frameworks"))
        .ok_or_else(|| malformed("missing 'frameworks' entry"))?;
    let Some(dependencies) = framework.get("dependencies").filter(|d| !d.is_null()) else {
        return Ok(());
    };
    let dependencies = dependencies
        .as_object()
        .ok_or_else(|| malformed("'dependencies' is not an object"))?;

    for (name, info) in dependencies {
        let version = match info.get("version") {
            Some(Value::String(v)) => v.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let edge = DependencyEdge {
            project: current.clone(),
            dependency: name.clone(),
            version,
        };
        trace!("{}", edge.to_mermaid());
        result.dependencies.push(edge);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
