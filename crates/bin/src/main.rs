//! lazyjson command-line tool.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() {
    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("lazyjson=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Kind(args) => commands::kind::run(args, cli.format),
        Commands::Get(args) => commands::get::run(args, cli.format),
        Commands::Set(args) => commands::set::run(args, cli.format),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {e:?}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
