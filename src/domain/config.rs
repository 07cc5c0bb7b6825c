//! Export configuration built from submitted form values.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::category::{Category, ContentTrust, ExportFormat};

/// Names of the form fields accepted by the exporter.
pub mod fields {
    pub const DB_HOST: &str = "db_host";
    pub const DB_NAME: &str = "db_name";
    pub const DB_USER: &str = "db_user";
    pub const DB_PASS: &str = "db_pass";
    pub const TABLE_PREFIX: &str = "table_prefix";
    pub const OUTPUT_DIR: &str = "output_dir";
    pub const EXPORT_PAGES: &str = "export_pages";
    pub const EXPORT_FORMAT: &str = "export_format";
    pub const TRUST_CONTENT: &str = "trust_content";
}

/// Directory used when no output directory is submitted.
pub const DEFAULT_OUTPUT_DIR: &str = "exported-posts";

/// Errors in submitted configuration, raised before any I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("unsupported export format '{value}' (expected html or txt)")]
    UnknownFormat { value: String },
}

/// Key/value pairs as submitted by the configuration form.
///
/// Unknown keys are kept but ignored. Checkbox style flags are `"1"` when
/// set and absent otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// The values the form shows before anything is submitted.
    pub fn defaults() -> Self {
        Self::new()
            .with(fields::DB_HOST, "localhost")
            .with(fields::TABLE_PREFIX, "wp_")
            .with(fields::OUTPUT_DIR, DEFAULT_OUTPUT_DIR)
            .with(fields::EXPORT_PAGES, "0")
            .with(fields::EXPORT_FORMAT, "html")
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `self` with every key from `submitted` overriding it.
    pub fn merged(mut self, submitted: &FormValues) -> Self {
        for (key, value) in &submitted.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("1")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Database connection parameters.
///
/// Everything except `credential` has been whitelisted.
#[derive(Clone, PartialEq)]
pub struct ConnectionSettings {
    pub host: String,
    pub database: String,
    pub user: String,
    pub credential: String,
    pub table_prefix: String,
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("credential", &"<redacted>")
            .field("table_prefix", &self.table_prefix)
            .finish()
    }
}

/// Where the web server serves files from, for building a browsable link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerContext {
    pub document_root: Option<PathBuf>,
    pub host: Option<String>,
    pub https: bool,
}

/// Fully validated settings for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub connection: ConnectionSettings,
    pub output_dir: PathBuf,
    /// Requested categories; always starts with `Category::Post`.
    pub categories: Vec<Category>,
    pub format: ExportFormat,
    pub trust: ContentTrust,
    pub server: ServerContext,
}

impl ExportConfig {
    /// Validates and normalizes submitted form values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if host, database name, user or
    /// table prefix is empty after sanitization, and
    /// `ConfigError::UnknownFormat` for a format other than html or txt.
    pub fn from_form(form: &FormValues, server: ServerContext) -> Result<Self, ConfigError> {
        let host = required(form, fields::DB_HOST, is_host_char)?;
        let database = required(form, fields::DB_NAME, is_database_char)?;
        let user = required(form, fields::DB_USER, is_user_char)?;
        let table_prefix = required(form, fields::TABLE_PREFIX, is_prefix_char)?;
        let credential = form.get(fields::DB_PASS).unwrap_or_default().to_string();

        let format = match form.get(fields::EXPORT_FORMAT).map(str::trim) {
            None | Some("") => ExportFormat::default(),
            Some(value) => value.parse().map_err(|_| ConfigError::UnknownFormat {
                value: value.to_string(),
            })?,
        };

        let mut categories = vec![Category::Post];
        if form.flag(fields::EXPORT_PAGES) {
            categories.push(Category::Page);
        }

        let trust = if form.flag(fields::TRUST_CONTENT) {
            ContentTrust::Verbatim
        } else {
            ContentTrust::Escaped
        };

        Ok(Self {
            connection: ConnectionSettings {
                host,
                database,
                user,
                credential,
                table_prefix,
            },
            output_dir: resolve_output_dir(form.get(fields::OUTPUT_DIR)),
            categories,
            format,
            trust,
            server,
        })
    }
}

/// Applies the default directory and strips trailing separators.
fn resolve_output_dir(raw: Option<&str>) -> PathBuf {
    let raw = raw.map(str::trim).unwrap_or_default();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    match (raw.is_empty(), trimmed.is_empty()) {
        (true, _) => PathBuf::from(DEFAULT_OUTPUT_DIR),
        // The filesystem root itself
        (false, true) => PathBuf::from(&raw[..1]),
        (false, false) => PathBuf::from(trimmed),
    }
}

fn required(
    form: &FormValues,
    field: &'static str,
    allowed: fn(char) -> bool,
) -> Result<String, ConfigError> {
    let cleaned: String = form
        .get(field)
        .unwrap_or_default()
        .chars()
        .filter(|&c| allowed(c))
        .collect();

    if cleaned.is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    Ok(cleaned)
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '[' | ']')
}

fn is_database_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '$')
}

fn is_user_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@')
}

fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
