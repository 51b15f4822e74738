use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "crewline")]
#[command(author, version, about = "Console front-end for LLM agent crews", long_about = None)]
pub struct Cli {
    /// Subcommand; omit it to start the interactive session.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for CLI results.
/// - Text: human-readable text output (default)
/// - Json: a single JSON object at completion
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single agent task without the interactive menus
    Run {
        /// Agent id: dev, doc, readme, or review
        agent: String,

        /// Preset task id for the chosen agent
        #[arg(long, conflicts_with = "task", required_unless_present = "task")]
        preset: Option<String>,

        /// Custom task description
        #[arg(long)]
        task: Option<String>,

        /// Expected output for a custom task
        #[arg(long, requires = "task")]
        expected: Option<String>,

        /// Save the final output to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show or reset performance metrics
    Metrics {
        #[command(subcommand)]
        action: MetricsAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Show the counters
    Show,
    /// Reset all counters to zero
    Reset,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write crewline.toml with default values
    Init,
}
