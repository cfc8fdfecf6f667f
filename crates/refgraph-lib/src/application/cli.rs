use crate::primitives::{ConfigError, GraphDirection, GraphMode, ReductionAction};
use clap::{Args, Parser};
use std::path::PathBuf;

use super::config::AppConfig;
use super::env::EnvironmentConfig;

/// refgraph CLI - .NET project reference diagrams
#[derive(Debug, Clone, Parser)]
#[command(name = "refgraph")]
#[command(about = "Render the project references of a .NET solution as a Mermaid diagram")]
#[command(version)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// Diagram options
    #[command(flatten)]
    pub render: RenderArgs,
}

/// What to render and how
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Solution or project file, or an existing .rg restore graph
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// HTML file to write (default: <source file name>.html)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Where msbuild writes the restore graph (default: <source file name>.rg)
    #[arg(short, long, value_name = "PATH")]
    pub restore_graph: Option<PathBuf>,

    /// Flowchart direction
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = GraphDirection::LR)]
    pub direction: GraphDirection,

    /// What to do with redundant edges
    #[arg(short = 'a', long, value_enum, ignore_case = true, default_value_t = ReductionAction::Color)]
    pub reduction_action: ReductionAction,

    /// Which edges to collect from the restore graph
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = GraphMode::Projects)]
    pub mode: GraphMode,

    /// Prune redundant edges from the graph before rendering
    #[arg(long)]
    pub prune: bool,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub render: RenderArgs,
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        super::loader::load_env_files()?;
        Self::from_cli(Cli::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let env_config = EnvironmentConfig::load()?;
        Self::from_parts(cli, &env_config)
    }

    pub(crate) fn from_parts(cli: Cli, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut app_config = AppConfig::default();
        app_config.color = env_config.apply_color_config(app_config.color);
        app_config = app_config.merge_with(cli.config);
        app_config.validate()?;

        Ok(Self {
            app_config,
            render: cli.render,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
