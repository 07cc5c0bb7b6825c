//! staticpress - export published posts and pages to static HTML or text files

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod source;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_export},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Export(args) => handle_export(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise each `-v` raises the level one
/// step from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("staticpress={level}")));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
