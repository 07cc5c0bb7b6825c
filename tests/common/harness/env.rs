//! Isolated test environment with temp directory and content database.

// Allow dead code since this is a test utility shared by several test files
#![allow(dead_code)]

use super::{ExportCommand, TestPost};
use rusqlite::{Connection, params};
use staticpress::domain::{ExportConfig, FormValues, ServerContext, fields};
use staticpress::export::ExportReport;
use staticpress::source::SqliteConnector;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the database every environment creates.
pub const DB_NAME: &str = "blog";

const SCHEMA: &str = "CREATE TABLE wp_posts (
    ID INTEGER PRIMARY KEY,
    post_title TEXT,
    post_content TEXT,
    post_date TEXT,
    post_name TEXT,
    post_type TEXT,
    post_status TEXT,
    post_excerpt TEXT
);";

/// Isolated test environment.
///
/// Layout inside the temp directory:
/// - `data/blog.sqlite`: the content database with a `wp_posts` table
/// - `out/`: default export destination (not created up front)
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with an empty `wp_posts` table.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        std::fs::create_dir(root.join("data")).expect("Failed to create data directory");

        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.connection()
            .execute_batch(SCHEMA)
            .expect("Failed to create schema");
        env
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join(format!("{}.sqlite", DB_NAME))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.join("out")
    }

    fn connection(&self) -> Connection {
        Connection::open(self.db_path()).expect("Failed to open test database")
    }

    /// Inserts a post into the content database.
    pub fn add_post(&self, post: &TestPost) {
        self.connection()
            .execute(
                "INSERT INTO wp_posts (ID, post_title, post_content, post_date, post_name, \
                 post_type, post_status, post_excerpt) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    post.id,
                    post.title,
                    post.body,
                    post.date,
                    post.slug,
                    post.post_type,
                    post.status,
                    post.excerpt
                ],
            )
            .expect("Failed to insert test post");
    }

    /// Form values pointing at this environment's database and output dir.
    pub fn form(&self) -> FormValues {
        FormValues::defaults()
            .with(fields::DB_NAME, DB_NAME)
            .with(fields::DB_USER, "reader")
            .with(fields::OUTPUT_DIR, self.out_dir().to_string_lossy())
    }

    /// Runs an export in-process with the given form values.
    pub fn export(&self, form: &FormValues) -> ExportReport {
        let config = ExportConfig::from_form(form, ServerContext::default())
            .expect("Test form should be valid");
        staticpress::export::run(&config, &SqliteConnector::new(self.data_dir()))
    }

    /// Path of a file below the output directory.
    pub fn output(&self, relative: &str) -> PathBuf {
        self.out_dir().join(relative)
    }

    /// Reads a file below the output directory.
    pub fn read_output(&self, relative: &str) -> String {
        let path = self.output(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Number of files in an output subdirectory.
    pub fn count_files(&self, subdir: &str) -> usize {
        std::fs::read_dir(self.output(subdir))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Creates an ExportCommand configured for this environment.
    pub fn cmd(&self) -> ExportCommand {
        ExportCommand::new()
            .data_dir(&self.data_dir())
            .db_name(DB_NAME)
            .db_user("reader")
            .output_dir(&self.out_dir())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
