//! Read-only access to the content database.

mod sqlite;

pub use sqlite::{SqliteConnector, SqliteSource};

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Category, ConnectionSettings, SourceRow};

/// Errors raised while connecting to or querying the content database.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No database file exists for the requested database name.
    #[error("database not found: {path}")]
    NotFound { path: PathBuf },

    /// The database could not be opened.
    #[error("cannot open database {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The query failed.
    #[error("{0}")]
    Query(#[from] rusqlite::Error),
}

/// Result type for content source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// A queryable store of content rows.
pub trait ContentSource {
    /// Returns every published row whose category is in `categories`,
    /// newest first.
    fn fetch_published(
        &self,
        table_prefix: &str,
        categories: &[Category],
    ) -> SourceResult<Vec<SourceRow>>;
}

/// Opens a `ContentSource` from connection settings.
pub trait Connector {
    type Source: ContentSource;

    fn connect(&self, settings: &ConnectionSettings) -> SourceResult<Self::Source>;
}

/// Builds the published-content query for a table prefix.
///
/// The prefix is interpolated into the table name and must already be
/// whitelisted; category values are bound as `?` parameters.
///
/// # Examples
///
/// ```
/// use staticpress::source::published_query;
///
/// let sql = published_query("wp_", 2);
/// assert!(sql.contains("FROM wp_posts"));
/// assert!(sql.contains("post_type IN (?, ?)"));
/// ```
pub fn published_query(table_prefix: &str, category_count: usize) -> String {
    let placeholders = vec!["?"; category_count.max(1)].join(", ");
    format!(
        "SELECT ID, post_title, post_content, post_date, post_name, post_type, post_excerpt \
         FROM {table_prefix}posts \
         WHERE post_type IN ({placeholders}) \
         AND post_status = 'publish' \
         ORDER BY post_date DESC"
    )
}
