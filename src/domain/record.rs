//! Content records as read from the source and as exported.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use thiserror::Error;

use super::category::Category;

/// A raw row from the `{prefix}posts` table.
///
/// Text columns are nullable in the source schema, so every one of them is
/// optional here. Validation happens in `ContentRecord::try_from`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub publish_date: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
}

/// Reasons a row cannot become a `ContentRecord`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing title")]
    MissingTitle,

    #[error("missing publish date")]
    MissingDate,

    #[error("invalid publish date '{value}'")]
    InvalidDate { value: String },

    #[error("unsupported content type '{value}'")]
    UnknownCategory { value: String },
}

/// Parses a source timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the ISO `T` separated form and a bare
/// `YYYY-MM-DD` date (midnight). The zero date `0000-00-00 00:00:00` and
/// anything else fail.
///
/// # Examples
///
/// ```
/// use staticpress::domain::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-15 09:30:00").is_ok());
/// assert!(parse_timestamp("2024-01-15").is_ok());
/// assert!(parse_timestamp("0000-00-00 00:00:00").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecordError> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| RecordError::InvalidDate {
            value: value.to_string(),
        })
}

/// A validated, read-only content item.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    id: i64,
    title: String,
    body: String,
    published: NaiveDateTime,
    slug: String,
    category: Category,
    excerpt: String,
}

impl ContentRecord {
    /// Creates a record from already-validated parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        published: NaiveDateTime,
        slug: impl Into<String>,
        category: Category,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            published,
            slug: slug.into(),
            category,
            excerpt: excerpt.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn published(&self) -> NaiveDateTime {
        self.published
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Publish date as `January 15, 2024`.
    pub fn long_date(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}

impl TryFrom<SourceRow> for ContentRecord {
    type Error = RecordError;

    fn try_from(row: SourceRow) -> Result<Self, Self::Error> {
        let title = row.title.ok_or(RecordError::MissingTitle)?;
        let raw_date = row.publish_date.ok_or(RecordError::MissingDate)?;
        let published = parse_timestamp(&raw_date)?;
        let raw_category = row.category.unwrap_or_default();
        let category: Category = raw_category
            .parse()
            .map_err(|_| RecordError::UnknownCategory {
                value: raw_category.clone(),
            })?;

        Ok(Self {
            id: row.id,
            title,
            body: row.body.unwrap_or_default(),
            published,
            slug: row.slug.unwrap_or_default(),
            category,
            excerpt: row.excerpt.unwrap_or_default(),
        })
    }
}

/// A file written during an export run, as listed in the index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedFileEntry {
    /// Path relative to the export root, always `/` separated.
    pub path: String,
    pub title: String,
    pub category: Category,
    pub published: NaiveDateTime,
}

impl ExportedFileEntry {
    pub fn new(path: impl Into<String>, record: &ContentRecord) -> Self {
        Self {
            path: path.into(),
            title: record.title().to_string(),
            category: record.category(),
            published: record.published(),
        }
    }

    /// Publish date as `Jan 15, 2024`.
    pub fn short_date(&self) -> String {
        self.published.format("%b %-d, %Y").to_string()
    }
}
