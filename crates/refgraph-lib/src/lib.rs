//! # refgraph Library
//!
//! Turns a .NET restore graph into a Mermaid flowchart of project references,
//! highlighting or pruning edges made redundant by longer paths.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared enums
//! - [`graph`] - Project reference graph with redundant-edge analysis
//! - [`restore`] - Restore graph generation and parsing
//! - [`diagram`] - Mermaid flowchart and HTML rendering
//! - [`logger`] - Structured logging
//! - [`display`] - User-facing status output
//! - [`application`] - CLI interface, configuration and command execution
//!
//! ## Quick Start
//!
//! ```no_run
//! // Parse the command line and render the diagram
//! refgraph_lib::main().unwrap();
//! ```

pub mod application;
pub mod diagram;
pub mod display;
pub mod graph;
pub mod logger;
pub mod primitives;
pub mod restore;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, RenderArgs, execute_command};
pub use graph::ProjectGraph;
pub use logger::Logger;
pub use primitives::{
    ColorIntent, ConfigError, GraphDirection, GraphMode, LogFormat, LogLevel, LogOutput,
    LoggerError, ReductionAction,
};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Bring up logging before any work happens
    let logger_config = config.app_config.to_logger_config();
    Logger::init(logger_config)?;

    // Execute the command
    execute_command(config)
}
