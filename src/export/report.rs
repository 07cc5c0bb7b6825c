//! End-of-run summary shown to the user.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::index_page::INDEX_FILENAME;
use crate::domain::ServerContext;

/// Number of error messages included in the human summary.
pub const MAX_DISPLAYED_ERRORS: usize = 5;

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Success => "✅",
            Status::Warning => "⚠️",
            Status::Error => "❌",
        }
    }
}

/// Where the exported files can be found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// Absolute URL of the index under the web server's document root.
    Url { url: String },
    /// The output directory is not served by the web server.
    OutsideWebRoot,
}

impl Location {
    /// Derives a browsable URL for the index in `output_dir`.
    ///
    /// Only directories below `server.document_root` are browsable; the
    /// host defaults to `localhost`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use staticpress::domain::ServerContext;
    /// use staticpress::export::Location;
    ///
    /// let server = ServerContext {
    ///     document_root: Some("/var/www".into()),
    ///     host: Some("example.com".into()),
    ///     https: true,
    /// };
    /// assert_eq!(
    ///     Location::derive(Path::new("/var/www/export"), &server),
    ///     Location::Url { url: "https://example.com/export/index.html".into() },
    /// );
    /// ```
    pub fn derive(output_dir: &Path, server: &ServerContext) -> Self {
        let Some(root) = &server.document_root else {
            return Location::OutsideWebRoot;
        };

        let output_dir = absolute(output_dir);
        let root = absolute(root);
        let Ok(relative) = output_dir.strip_prefix(&root) else {
            return Location::OutsideWebRoot;
        };

        let mut segments: Vec<String> = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    segments.push(urlencoding::encode(&part.to_string_lossy()).into_owned())
                }
                Component::CurDir => {}
                // `..` could climb back out of the document root
                _ => return Location::OutsideWebRoot,
            }
        }
        segments.push(INDEX_FILENAME.to_string());

        let scheme = if server.https { "https" } else { "http" };
        let host = server.host.as_deref().unwrap_or("localhost");
        Location::Url {
            url: format!("{}://{}/{}", scheme, host, segments.join("/")),
        }
    }
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
fn absolute(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}

/// Summary of one export run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub status: Status,
    /// One-line description of the outcome.
    pub summary: String,
    /// Number of files written.
    pub exported: usize,
    /// Per-record failures, in processing order.
    pub errors: Vec<String>,
    pub output_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl ExportReport {
    /// A completed run, possibly with per-record errors.
    ///
    /// A run where every record failed is a warning rather than a success.
    pub fn completed(
        exported: usize,
        errors: Vec<String>,
        output_dir: PathBuf,
        location: Location,
    ) -> Self {
        let (status, summary) = if exported == 0 && !errors.is_empty() {
            (
                Status::Warning,
                format!("No records were exported to {}", output_dir.display()),
            )
        } else {
            let noun = if exported == 1 { "record" } else { "records" };
            (
                Status::Success,
                format!(
                    "Successfully exported {} {} to {}",
                    exported,
                    noun,
                    output_dir.display()
                ),
            )
        };
        Self {
            status,
            summary,
            exported,
            errors,
            output_dir,
            location: Some(location),
        }
    }

    /// A run that ended early without being a failure.
    pub fn warning(summary: impl Into<String>, output_dir: PathBuf) -> Self {
        Self::early_exit(Status::Warning, summary.into(), output_dir)
    }

    /// A run that aborted.
    pub fn failed(summary: impl Into<String>, output_dir: PathBuf) -> Self {
        Self::early_exit(Status::Error, summary.into(), output_dir)
    }

    fn early_exit(status: Status, summary: String, output_dir: PathBuf) -> Self {
        Self {
            status,
            summary,
            exported: 0,
            errors: Vec::new(),
            output_dir,
            location: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Human-readable message: status glyph, summary, up to
    /// `MAX_DISPLAYED_ERRORS` errors with an overflow count, then the
    /// location.
    pub fn message(&self) -> String {
        let mut message = format!("{} {}", self.status.glyph(), self.summary);

        if !self.errors.is_empty() {
            message.push_str(&format!("\n\n{} Some errors occurred:", Status::Warning.glyph()));
            for error in self.errors.iter().take(MAX_DISPLAYED_ERRORS) {
                message.push('\n');
                message.push_str(error);
            }
            if self.errors.len() > MAX_DISPLAYED_ERRORS {
                message.push_str(&format!(
                    "\n...and {} more",
                    self.errors.len() - MAX_DISPLAYED_ERRORS
                ));
            }
        }

        match &self.location {
            Some(Location::Url { url }) => {
                message.push_str(&format!("\n\nView export index: {}", url));
            }
            Some(Location::OutsideWebRoot) => {
                message.push_str(&format!(
                    "\n\nExport folder is outside web root: {}",
                    self.output_dir.display()
                ));
            }
            None => {}
        }

        message
    }
}
