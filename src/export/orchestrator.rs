//! Drives one export run from configuration to report.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::index_page::{INDEX_FILENAME, build_index};
use super::render::{RenderError, render};
use super::report::{ExportReport, Location};
use crate::domain::{
    Category, ContentRecord, ExportConfig, ExportedFileEntry, RecordError, SourceRow,
};
use crate::infra::{
    FsError, check_writable, ensure_dir, output_filename, record_basename, write_atomic,
};
use crate::source::{Connector, ContentSource, SourceError};

/// Failures that end a run early.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create output directory: {}", .0.path().display())]
    CreateDir(#[source] FsError),

    #[error("Output directory or subdirectories are not writable: {}", .0.path().display())]
    NotWritable(#[source] FsError),

    #[error("Database error: {0}")]
    Source(#[from] SourceError),
}

/// Why a single record, or the index, was not written.
#[derive(Debug, Error)]
enum RecordFailure {
    #[error("{0}")]
    Invalid(#[from] RecordError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Write(#[from] FsError),
}

/// The output tree for one run.
struct OutputTree {
    root: PathBuf,
    writable: fn(&Path) -> Result<(), FsError>,
}

impl OutputTree {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            writable: check_writable,
        }
    }

    fn dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.root.clone()];
        dirs.extend(Category::all().iter().map(|c| self.root.join(c.subdir())));
        dirs
    }

    /// Creates the root and every category subdirectory.
    fn create(&self) -> Result<(), ExportError> {
        for dir in self.dirs() {
            ensure_dir(&dir).map_err(ExportError::CreateDir)?;
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), ExportError> {
        for dir in self.dirs() {
            (self.writable)(&dir).map_err(ExportError::NotWritable)?;
        }
        Ok(())
    }
}

/// Assigns each record a unique relative path within its subdirectory.
///
/// A second record with the same sanitized name gets `-2`, the third `-3`
/// and so on.
#[derive(Default)]
struct PathAllocator {
    taken: HashSet<String>,
}

impl PathAllocator {
    fn allocate(&mut self, record: &ContentRecord, config: &ExportConfig) -> String {
        let subdir = record.category().subdir();
        let base = record_basename(record);

        let mut candidate = format!("{}/{}", subdir, output_filename(&base, config.format));
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!(
                "{}/{}",
                subdir,
                output_filename(&format!("{}-{}", base, n), config.format)
            );
            n += 1;
        }

        if n > 2 {
            warn!(
                id = record.id(),
                name = %base,
                path = %candidate,
                "sanitized name already used in this run, writing under a suffixed name"
            );
        }

        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Runs an export and always returns a report.
///
/// Early exits (directory setup, writability, database failure) become an
/// error report; an empty result becomes a warning report.
pub fn run<C: Connector>(config: &ExportConfig, connector: &C) -> ExportReport {
    match try_run(config, connector) {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, "export aborted");
            ExportReport::failed(err.to_string(), config.output_dir.clone())
        }
    }
}

/// Runs an export, returning early-exit failures as errors.
pub fn try_run<C: Connector>(
    config: &ExportConfig,
    connector: &C,
) -> Result<ExportReport, ExportError> {
    export_into(&OutputTree::new(&config.output_dir), config, connector)
}

fn export_into<C: Connector>(
    tree: &OutputTree,
    config: &ExportConfig,
    connector: &C,
) -> Result<ExportReport, ExportError> {
    let output_dir = &config.output_dir;
    info!(
        output_dir = %output_dir.display(),
        format = %config.format,
        categories = ?config.categories,
        "starting export"
    );

    tree.create()?;
    tree.check_writable()?;

    let source = connector.connect(&config.connection)?;
    let rows = source.fetch_published(&config.connection.table_prefix, &config.categories)?;
    info!(count = rows.len(), "fetched published records");

    if rows.is_empty() {
        return Ok(ExportReport::warning(
            "No published posts found matching the criteria",
            output_dir.clone(),
        ));
    }

    let mut paths = PathAllocator::default();
    let mut entries: Vec<ExportedFileEntry> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for row in rows {
        let id = row.id;
        let (record, document) = match prepare(row, config) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!(id, error = %err, "skipping record");
                errors.push(format!("Error processing post {}: {}", id, err));
                continue;
            }
        };

        let relative = paths.allocate(&record, config);
        let destination = output_dir.join(&relative);
        match write_atomic(&destination, &document) {
            Ok(()) => {
                debug!(id, path = %relative, "wrote record");
                entries.push(ExportedFileEntry::new(relative, &record));
            }
            Err(err) => {
                let name = relative.rsplit('/').next().unwrap_or(&relative);
                warn!(id, error = %err, "failed to write record");
                errors.push(format!("Failed to write file: {}", name));
            }
        }
    }

    if !entries.is_empty() {
        match write_index(output_dir, &entries, config) {
            Ok(()) => info!(entries = entries.len(), "wrote index"),
            Err(err) => {
                warn!(error = %err, "failed to write index");
                errors.push(format!("Failed to write file: {}: {}", INDEX_FILENAME, err));
            }
        }
    }

    info!(exported = entries.len(), errors = errors.len(), "export finished");

    Ok(ExportReport::completed(
        entries.len(),
        errors,
        output_dir.clone(),
        Location::derive(output_dir, &config.server),
    ))
}

fn write_index(
    output_dir: &Path,
    entries: &[ExportedFileEntry],
    config: &ExportConfig,
) -> Result<(), RecordFailure> {
    let index = build_index(entries, config.trust)?;
    write_atomic(&output_dir.join(INDEX_FILENAME), &index)?;
    Ok(())
}

/// Validates a row and renders its document.
fn prepare(
    row: SourceRow,
    config: &ExportConfig,
) -> Result<(ContentRecord, String), RecordFailure> {
    let record = ContentRecord::try_from(row)?;
    let document = render(&record, config.format, config.trust)?;
    Ok((record, document))
}
