//! CLI command definitions and dispatch for the `trpn` binary.
//!
//! Uses clap derive macros for argument parsing. The interactive session is
//! the default command; `shapes` and `completions` are utilities.

pub mod draw;
pub mod prompter;
pub mod shapes;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "terrapin.toml";

/// Draw shapes with an interactive turtle.
#[derive(Parser)]
#[command(name = "trpn", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive drawing session (the default).
    Draw {
        /// Path to the configuration file.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Write the rendered SVG here instead of the configured path.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the shapes the turtle can draw.
    Shapes,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
