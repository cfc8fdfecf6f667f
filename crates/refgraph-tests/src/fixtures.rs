//! Fixture infrastructure for end-to-end tests
//!
//! Builds restore graph documents in the shape msbuild writes them and
//! provides a scratch workspace to render into.

use anyhow::Result;
use refgraph_lib::application::AppConfig;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Target framework used for every generated project
pub const FRAMEWORK: &str = "net8.0";

/// Builder for restore graph JSON documents
///
/// Projects are listed in insertion order, which is the order the parser
/// visits them.
#[derive(Debug, Default, Clone)]
pub struct RestoreGraphBuilder {
    restore: Map<String, Value>,
    projects: Map<String, Value>,
}

/// Path key msbuild would use for a project name
pub fn project_path(name: &str) -> String {
    format!("/src/{name}/{name}.csproj")
}

impl RestoreGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project referencing `references` with package `dependencies`
    pub fn project(mut self, name: &str, references: &[&str], dependencies: &[(&str, &str)]) -> Self {
        let refs: Map<String, Value> = references
            .iter()
            .map(|r| (project_path(r), json!({ "projectPath": project_path(r) })))
            .collect();
        let deps: Map<String, Value> = dependencies
            .iter()
            .map(|(dep, version)| {
                (dep.to_string(), json!({ "target": "Package", "version": version }))
            })
            .collect();

        let key = project_path(name);
        self.restore.insert(key.clone(), json!({}));
        self.projects.insert(
            key,
            json!({
                "restore": { "frameworks": { FRAMEWORK: { "projectReferences": refs } } },
                "frameworks": { FRAMEWORK: { "dependencies": deps } }
            }),
        );
        self
    }

    /// Add a project whose entry is taken verbatim
    pub fn raw_project(mut self, name: &str, entry: Value) -> Self {
        let key = project_path(name);
        self.restore.insert(key.clone(), json!({}));
        self.projects.insert(key, entry);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "format": 1,
            "restore": self.restore,
            "projects": self.projects,
        })
    }

    pub fn to_json(self) -> String {
        self.build().to_string()
    }
}

/// Scratch directory acting as the working directory of one run
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a restore graph file into the workspace
    pub fn write_restore_graph(&self, file_name: &str, graph: RestoreGraphBuilder) -> Result<PathBuf> {
        let path = self.path().join(file_name);
        std::fs::write(&path, graph.to_json())?;
        Ok(path)
    }

    /// Read a file from the workspace
    pub fn read(&self, file_name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path().join(file_name))?)
    }

    /// Application config rooted at this workspace
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            workdir: Some(self.path().to_path_buf()),
            ..AppConfig::default()
        }
    }
}
