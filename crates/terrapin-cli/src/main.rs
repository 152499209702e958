//! Terrapin CLI entry point.
//!
//! Binary name: `trpn`
//!
//! Parses CLI arguments, sets up tracing, then dispatches to the interactive
//! drawing session or one of the utility commands. Running `trpn` with no
//! subcommand starts a drawing session.

mod cli;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,terrapin_core=debug,terrapin_canvas=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let command = cli.command.unwrap_or(Commands::Draw {
        config: PathBuf::from(DEFAULT_CONFIG_PATH),
        out: None,
    });

    match command {
        Commands::Draw { config, out } => cli::draw::run(&config, out),

        Commands::Shapes => cli::shapes::list(cli.json),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "trpn", &mut std::io::stdout());
            Ok(())
        }
    }
}
