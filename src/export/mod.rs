//! Export pipeline: per-record rendering, index generation, run reports.
//!
//! `run` validates the output tree, queries the content source, renders
//! every record as HTML or plain text, writes an index page and returns an
//! `ExportReport` describing the outcome.

mod index_page;
pub mod orchestrator;
mod render;
mod report;

pub use index_page::{INDEX_FILENAME, INDEX_TEMPLATE, build_index, group_by_category};
pub use orchestrator::{ExportError, run, try_run};
pub use render::{INDEX_LINK, RECORD_TEMPLATE, RenderError, render};
pub use report::{ExportReport, Location, MAX_DISPLAYED_ERRORS, Status};
