//! Output directory preparation and atomic file writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during filesystem operations on the export tree.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create output directory: {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output directory is not writable: {path}: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            FsError::CreateDir { path, .. }
            | FsError::NotWritable { path, .. }
            | FsError::NotADirectory { path }
            | FsError::ParentNotFound { path }
            | FsError::Io { path, .. }
            | FsError::AtomicWrite { path, .. } => path,
        }
    }
}

/// Creates a directory and any missing parents.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if something other than a directory
/// already occupies the path, `FsError::CreateDir` if creation fails.
pub fn ensure_dir(path: &Path) -> Result<(), FsError> {
    if path.exists() && !path.is_dir() {
        return Err(FsError::NotADirectory { path: path.into() });
    }

    std::fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
        path: path.into(),
        source: e,
    })
}

/// Verifies that files can be created inside `dir`.
///
/// Creates and removes an anonymous temp file, which exercises the same
/// permissions a real write needs.
pub fn check_writable(dir: &Path) -> Result<(), FsError> {
    tempfile::tempfile_in(dir)
        .map(drop)
        .map_err(|e| FsError::NotWritable {
            path: dir.into(),
            source: e,
        })
}

/// Writes `content` to `path` atomically.
///
/// The content goes to a temp file in the destination directory which is
/// then renamed over `path`, so readers never observe a partial file and an
/// existing file is replaced in one step.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
