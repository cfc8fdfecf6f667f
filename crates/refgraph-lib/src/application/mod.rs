//! Application layer modules
//!
//! Organizes CLI interface, configuration management, and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, RenderArgs};
pub use commands::{RenderOutcome, execute_command, execute_render};
pub use config::AppConfig;
