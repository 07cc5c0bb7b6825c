//! Test harness for export integration tests.
//!
//! Provides isolated environments with a WordPress-style SQLite database,
//! programmatic post creation, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod post;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ExportCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use post::TestPost;
