//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Args, Deserialize)]
pub struct AppConfig {
    /// Working directory for default output paths
    #[arg(long, env = "REFGRAPH_WORKDIR")]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "REFGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL,
          value_parser = clap::value_parser!(u8).range(0..=4))]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, env = "REFGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "REFGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "REFGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color_enabled(),
        }
    }

    /// Whether styled output is on after resolving `auto`
    pub fn color_enabled(&self) -> bool {
        self.color.resolve()
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.workdir.is_some() {
            self.workdir = other.workdir;
        }

        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log level {} is out of range 0-4", self.log_level),
            });
        }

        if self.workdir.is_none() {
            self.workdir = Some(std::env::current_dir()?);
        }

        Ok(())
    }

    /// Directory default output paths are placed in
    pub fn working_dir(&self) -> PathBuf {
        self.workdir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
