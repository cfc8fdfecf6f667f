//! Restore graph generation through `dotnet msbuild`
//!
//! Runs the `GenerateRestoreGraphFile` target against a solution or project
//! and waits for it to finish. Process execution goes through
//! [`ProcessProvider`] so the build step can be replaced in tests.

use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info};

/// Program invoked to produce the restore graph
pub const DOTNET_COMMAND: &str = "dotnet";

/// Errors from the build step
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to start '{command}': {source}")]
    StartFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Halting execution, build exit code not 0. Exit code: {}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    NonZeroExit { code: Option<i32> },
}

/// Exit status of a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Provider trait for process execution
pub trait ProcessProvider {
    /// Run a command to completion with inherited stdio
    fn run(&self, command: &str, args: &[String]) -> std::io::Result<ProcessStatus>;
}

/// Live implementation of ProcessProvider
#[derive(Debug, Default)]
pub struct LiveProcessProvider;

impl LiveProcessProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessProvider for LiveProcessProvider {
    fn run(&self, command: &str, args: &[String]) -> std::io::Result<ProcessStatus> {
        let status = Command::new(command).args(args).status()?;
        Ok(ProcessStatus {
            code: status.code(),
        })
    }
}

/// Arguments for `dotnet` that write the restore graph of `source` to `output`
pub fn restore_graph_args(source: &Path, output: &Path) -> Vec<String> {
    vec![
        "msbuild".to_string(),
        source.display().to_string(),
        "/t:GenerateRestoreGraphFile".to_string(),
        format!("/p:RestoreGraphOutputPath={}", output.display()),
    ]
}

/// Run msbuild to write the restore graph of `source` to `output`
pub fn generate_restore_graph(
    process: &dyn ProcessProvider,
    source: &Path,
    output: &Path,
) -> Result<(), BuildError> {
    let args = restore_graph_args(source, output);
    debug!("Running {} {}", DOTNET_COMMAND, args.join(" "));

    let status = process
        .run(DOTNET_COMMAND, &args)
        .map_err(|e| BuildError::StartFailed {
            command: DOTNET_COMMAND.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(BuildError::NonZeroExit { code: status.code });
    }

    info!("Restore graph written to {}", output.display());
    Ok(())
}

/// Recorded process invocation
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCall {
    pub command: String,
    pub args: Vec<String>,
}

/// Mock process provider recording calls (spy pattern)
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug)]
pub struct MockProcessProvider {
    outcome: std::result::Result<ProcessStatus, String>,
    restore_graph: Option<String>,
    pub calls: std::cell::RefCell<Vec<ProcessCall>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockProcessProvider {
    /// Every run exits with code 0
    pub fn new() -> Self {
        Self {
            outcome: Ok(ProcessStatus { code: Some(0) }),
            restore_graph: None,
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Every run exits with `code`
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.outcome = Ok(ProcessStatus { code: Some(code) });
        self
    }

    /// Every run fails to start with `message`
    pub fn with_start_failure(mut self, message: &str) -> Self {
        self.outcome = Err(message.to_string());
        self
    }

    /// Write `content` to the requested restore graph path on each run
    pub fn with_restore_graph(mut self, content: &str) -> Self {
        self.restore_graph = Some(content.to_string());
        self
    }

    /// Get all recorded process calls for verification
    pub fn get_calls(&self) -> Vec<ProcessCall> {
        self.calls.borrow().clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MockProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl ProcessProvider for MockProcessProvider {
    fn run(&self, command: &str, args: &[String]) -> std::io::Result<ProcessStatus> {
        self.calls.borrow_mut().push(ProcessCall {
            command: command.to_string(),
            args: args.to_vec(),
        });

        match &self.outcome {
            Ok(status) => {
                if let Some(content) = &self.restore_graph {
                    let target = args
                        .iter()
                        .find_map(|a| a.strip_prefix("/p:RestoreGraphOutputPath="));
                    if let Some(target) = target {
                        std::fs::write(target, content)?;
                    }
                }
                Ok(*status)
            }
            Err(message) => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                message.clone(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("build.test.rs");
}
