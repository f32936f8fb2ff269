//! Report rendering and persistence
//!
//! This module provides:
//! - Markdown rendering of a dependency comparison
//! - Writing the rendered report to disk

mod markdown;
mod writer;

pub use markdown::MarkdownFormatter;
pub use writer::write_report;
