//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{FormValues, ServerContext, fields};

/// Application configuration loaded from config file.
///
/// Every setting is optional and only supplies a default; command-line
/// options always win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default database host
    pub db_host: Option<String>,

    /// Default database user
    pub db_user: Option<String>,

    /// Default table prefix
    pub table_prefix: Option<String>,

    /// Default output directory
    pub output_dir: Option<String>,

    /// Directory holding SQLite database files
    pub data_dir: Option<PathBuf>,

    /// Web server document root
    pub document_root: Option<PathBuf>,

    /// Host name used in index links
    pub server_host: Option<String>,

    /// Whether index links use https
    #[serde(default)]
    pub https: bool,
}

impl Config {
    /// Load configuration from `path`, or the default location when `None`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/staticpress/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("staticpress")
            .join("config.toml")
    }

    /// Form values before anything is submitted: built-in defaults with
    /// config file settings applied on top.
    pub fn form_defaults(&self) -> FormValues {
        let mut values = FormValues::defaults();
        let overrides = [
            (fields::DB_HOST, &self.db_host),
            (fields::DB_USER, &self.db_user),
            (fields::TABLE_PREFIX, &self.table_prefix),
            (fields::OUTPUT_DIR, &self.output_dir),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                values.set(key, value.clone());
            }
        }
        values
    }

    /// Resolve the SQLite data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--data-dir` argument
    /// 2. Config file `data_dir` setting
    /// 3. Current working directory
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve web server settings, with CLI arguments taking precedence.
    pub fn server(
        &self,
        cli_root: Option<&PathBuf>,
        cli_host: Option<&String>,
        cli_https: bool,
    ) -> ServerContext {
        ServerContext {
            document_root: cli_root.cloned().or_else(|| self.document_root.clone()),
            host: cli_host.cloned().or_else(|| self.server_host.clone()),
            https: cli_https || self.https,
        }
    }
}
