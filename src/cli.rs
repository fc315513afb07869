//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for fcmdr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **run**: interpret and execute a natural language command (the main
//!   entry point)
//! - **locations**: list the known location aliases and their paths
//! - **config**: manage application settings
//!
//! # Design Features
//!
//! - The natural-language command is taken as trailing words, so quoting
//!   is optional: `fcmdr run create folder reports on desktop`
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (`r` for `run`, `loc` for `locations`)

use clap::{Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fcmdr")]
#[command(about = "Natural language file management", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interpret and execute a natural language command
    #[command(visible_alias = "r")]
    Run {
        /// The command, in plain English (quoting optional)
        #[arg(value_name = "COMMAND", num_args = 1.., required = true)]
        command: Vec<String>,

        /// Interpreter model to use (overrides config)
        #[arg(long = "model", value_name = "MODEL")]
        model: Option<String>,
    },

    /// List known location aliases and their paths
    #[command(visible_alias = "loc")]
    Locations,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., model=openrouter/deepseek/deepseek-r1)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (model, movies_dir, quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}
