//! Content categories, output formats and the markup trust policy.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The kind of content a record represents.
///
/// Posts are always exported; pages only when requested.
///
/// # Examples
///
/// ```
/// use staticpress::domain::Category;
///
/// let category: Category = "page".parse().unwrap();
/// assert_eq!(category, Category::Page);
/// assert_eq!(category.subdir(), "pages");
/// assert_eq!(category.label(), "Pages");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Post,
    Page,
}

impl Category {
    /// Value stored in the `post_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Post => "post",
            Category::Page => "page",
        }
    }

    /// Human label used for index section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Post => "Posts",
            Category::Page => "Pages",
        }
    }

    /// Output subdirectory under the export root.
    pub fn subdir(&self) -> &'static str {
        match self {
            Category::Post => "posts",
            Category::Page => "pages",
        }
    }

    /// All supported categories, primary first.
    pub fn all() -> [Category; 2] {
        [Category::Post, Category::Page]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a `post_type` value is not a supported category.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported content type '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Category::Post),
            "page" => Ok(Category::Page),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Txt,
}

impl ExportFormat {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned for an unknown export format value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported export format '{}' (expected html or txt)", self.0)
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// How record text is embedded into generated HTML.
///
/// Titles, excerpts and bodies come straight from the source database.
/// `Escaped` treats them as text; `Verbatim` trusts them as markup and
/// writes them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTrust {
    #[default]
    Escaped,
    Verbatim,
}
