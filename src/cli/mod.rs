//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// staticpress - export published posts and pages to static files
#[derive(Parser, Debug)]
#[command(name = "staticpress", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/staticpress/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export published content to HTML or plain-text files
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command.
///
/// Each connection and output option mirrors one field of the export form.
/// Options left out fall back to the config file, then built-in defaults.
#[derive(Parser, Debug, Default)]
pub struct ExportArgs {
    /// Database host
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database name
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database username
    #[arg(long)]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long)]
    pub db_pass: Option<String>,

    /// Table prefix (e.g. wp_)
    #[arg(long)]
    pub table_prefix: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Also export pages
    #[arg(long)]
    pub export_pages: bool,

    /// Export format: html or txt
    #[arg(long)]
    pub export_format: Option<String>,

    /// Embed titles, excerpts and bodies into HTML without escaping
    #[arg(long)]
    pub trust_content: bool,

    /// Directory holding SQLite database files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Web server document root, used to print a link to the index
    #[arg(long)]
    pub document_root: Option<PathBuf>,

    /// Host name for the index link
    #[arg(long)]
    pub server_host: Option<String>,

    /// Use https for the index link
    #[arg(long)]
    pub https: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
