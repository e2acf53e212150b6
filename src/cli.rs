//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a scenario file and printing the transcript
//! - Printing the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Edit-in-place controller toolbox
#[derive(Parser, Debug)]
#[command(name = "inline-edit", version, about = "Edit-in-place controller toolbox")]
pub struct CliArgs {
    /// Also write debug logs to the config directory
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay a scenario and print what happened
    Replay {
        /// Scenario YAML file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Base config file, overridden by the scenario's own config
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the effective configuration as YAML
    Config {
        /// Read this file instead of the user config
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
