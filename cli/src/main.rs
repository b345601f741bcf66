mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{catalog, diagnose, estimate, validate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr; `-v` raises the default level, RUST_LOG wins when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Estimate(args) => estimate::run(&cli, args),
        Commands::Validate(args) => validate::run(&cli, args),
        Commands::Diagnose(args) => diagnose::run(&cli, args),
        Commands::Catalog(args) => catalog::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
