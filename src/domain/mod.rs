//! Core types: Category, ContentRecord, ExportedFileEntry, ExportConfig

mod category;
mod config;
mod record;

pub use category::{Category, ContentTrust, ExportFormat, ParseCategoryError, ParseFormatError};
pub use config::{
    ConfigError, ConnectionSettings, DEFAULT_OUTPUT_DIR, ExportConfig, FormValues, ServerContext,
    fields,
};
pub use record::{ContentRecord, ExportedFileEntry, RecordError, SourceRow, parse_timestamp};
