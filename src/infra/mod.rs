//! Filename sanitizing, text conversion, filesystem helpers

pub mod fs;
mod slug;
mod text;

pub use fs::{FsError, check_writable, ensure_dir, write_atomic};
pub use slug::{UNTITLED, output_filename, record_basename, sanitize};
pub use text::{strip_tags, to_plain_text};
