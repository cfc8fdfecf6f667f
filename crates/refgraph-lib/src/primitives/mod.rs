//! refgraph primitives - core types, errors, and coordination
//!
//! Central collection of shared types: the diagram option enums that the CLI
//! exposes, logging configuration, and the configuration/logger error types.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// YAML
    /// alias: yaml, yml
    Yaml,
}

/// Whether styled output is wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    /// Follow the terminal
    Auto,
    /// Always emit ANSI styling
    Always,
    /// Never emit ANSI styling
    Never,
}

impl ColorIntent {
    /// Resolve the intent against the stderr terminal
    pub fn resolve(self) -> bool {
        match self {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => console::Term::stderr().features().colors_supported(),
        }
    }
}

// ============================================================================
// DIAGRAM OPTIONS
// ============================================================================

/// Layout orientation of the rendered flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum GraphDirection {
    /// Left to right
    LR,
    /// Top down
    TD,
    /// Right to left
    RL,
    /// Bottom to top
    BT,
}

/// What to do with edges that a longer path already implies
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum ReductionAction {
    /// Keep every edge and highlight the redundant ones
    Color,
    /// Leave redundant edges out of the diagram
    Remove,
    /// Keep every edge unmodified
    None,
}

/// Which relations are extracted from the restore graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum GraphMode {
    /// Project references only
    Projects,
    /// Project references plus package dependencies
    Complete,
}

impl GraphDirection {
    /// Mermaid keyword for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphDirection::LR => "LR",
            GraphDirection::TD => "TD",
            GraphDirection::RL => "RL",
            GraphDirection::BT => "BT",
        }
    }
}

impl fmt::Display for GraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReductionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReductionAction::Color => "Color",
            ReductionAction::Remove => "Remove",
            ReductionAction::None => "None",
        };
        f.write_str(name)
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphMode::Projects => "Projects",
            GraphMode::Complete => "Complete",
        };
        f.write_str(name)
    }
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub ansi: bool,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to get current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug")),
            Self::Trace => Some(clap::builder::PossibleValue::new("trace").alias("verbose")),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Yaml => Some(clap::builder::PossibleValue::new("yaml").alias("yml")),
        }
    }
}

impl ValueEnum for ColorIntent {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Always, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Auto => Some(clap::builder::PossibleValue::new("auto").alias("detect")),
            Self::Always => Some(
                clap::builder::PossibleValue::new("always")
                    .alias("force")
                    .alias("on"),
            ),
            Self::Never => Some(clap::builder::PossibleValue::new("never").alias("off")),
        }
    }
}

impl ValueEnum for GraphDirection {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::LR, Self::TD, Self::RL, Self::BT]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::LR => Some(clap::builder::PossibleValue::new("LR").help("Left to right")),
            Self::TD => Some(
                clap::builder::PossibleValue::new("TD")
                    .alias("TB")
                    .help("Top down"),
            ),
            Self::RL => Some(clap::builder::PossibleValue::new("RL").help("Right to left")),
            Self::BT => Some(clap::builder::PossibleValue::new("BT").help("Bottom to top")),
        }
    }
}

impl ValueEnum for ReductionAction {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Color, Self::Remove, Self::None]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Color => Some(
                clap::builder::PossibleValue::new("Color").help("Highlight redundant edges"),
            ),
            Self::Remove => Some(
                clap::builder::PossibleValue::new("Remove").help("Leave redundant edges out"),
            ),
            Self::None => {
                Some(clap::builder::PossibleValue::new("None").help("Draw every edge as is"))
            }
        }
    }
}

impl ValueEnum for GraphMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Projects, Self::Complete]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Projects => Some(
                clap::builder::PossibleValue::new("Projects").help("Project references only"),
            ),
            Self::Complete => Some(
                clap::builder::PossibleValue::new("Complete")
                    .help("Project references and package dependencies"),
            ),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorIntent, "invalid color setting");
impl_fromstr_for_value_enum!(GraphDirection, "invalid graph direction");
impl_fromstr_for_value_enum!(ReductionAction, "invalid reduction action");
impl_fromstr_for_value_enum!(GraphMode, "invalid graph mode");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
