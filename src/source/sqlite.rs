//! SQLite-backed content source.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, params_from_iter};
use tracing::debug;

use super::{Connector, ContentSource, SourceError, SourceResult, published_query};
use crate::domain::{Category, ConnectionSettings, SourceRow};

/// Extension tried first when resolving a database name to a file.
const DB_EXTENSION: &str = "sqlite";

/// A read-only connection to a WordPress-style SQLite database.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Opens an existing database file read-only.
    pub fn open(path: &Path) -> SourceResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| SourceError::Connect {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl ContentSource for SqliteSource {
    fn fetch_published(
        &self,
        table_prefix: &str,
        categories: &[Category],
    ) -> SourceResult<Vec<SourceRow>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let sql = published_query(table_prefix, categories.len());
        debug!(%sql, "querying published content");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(categories.iter().map(|c| c.as_str())), |row| {
            Ok(SourceRow {
                id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
                publish_date: row.get(3)?,
                slug: row.get(4)?,
                category: row.get(5)?,
                excerpt: row.get(6)?,
            })
        })?;

        let rows = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Resolves database names to SQLite files under a data directory.
///
/// `blog` resolves to `<data_dir>/blog.sqlite`, or to `<data_dir>/blog`
/// when only that file exists. SQLite has no server, so host, user and
/// credential are not used.
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    data_dir: PathBuf,
}

impl SqliteConnector {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the database file for a database name, if one exists.
    pub fn resolve(&self, database: &str) -> SourceResult<PathBuf> {
        let with_extension = self
            .data_dir
            .join(format!("{}.{}", database, DB_EXTENSION));
        if with_extension.is_file() {
            return Ok(with_extension);
        }

        let bare = self.data_dir.join(database);
        if bare.is_file() {
            return Ok(bare);
        }

        Err(SourceError::NotFound {
            path: with_extension,
        })
    }
}

impl Connector for SqliteConnector {
    type Source = SqliteSource;

    fn connect(&self, settings: &ConnectionSettings) -> SourceResult<SqliteSource> {
        let path = self.resolve(&settings.database)?;
        debug!(
            path = %path.display(),
            host = %settings.host,
            user = %settings.user,
            "opening content database"
        );
        SqliteSource::open(&path)
    }
}
