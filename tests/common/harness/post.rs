//! Builder for test posts with sensible defaults.

// Allow dead code since not every test file uses every setter
#![allow(dead_code)]

/// A row to insert into the `wp_posts` table.
///
/// Defaults to a published post dated 2024-01-15 whose slug is derived
/// from the title.
#[derive(Debug, Clone)]
pub struct TestPost {
    pub(super) id: i64,
    pub(super) title: Option<String>,
    pub(super) body: String,
    pub(super) date: String,
    pub(super) slug: String,
    pub(super) post_type: String,
    pub(super) status: String,
    pub(super) excerpt: String,
}

impl TestPost {
    /// Creates a published post with the given ID and title.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            id,
            title: Some(title),
            body: String::new(),
            date: "2024-01-15 12:00:00".to_string(),
            slug,
            post_type: "post".to_string(),
            status: "publish".to_string(),
            excerpt: String::new(),
        }
    }

    /// Creates a published page.
    pub fn page(id: i64, title: impl Into<String>) -> Self {
        Self::new(id, title).post_type("page")
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Stores NULL in the title column.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }
}
