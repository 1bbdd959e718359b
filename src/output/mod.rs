//! Output formatting and publication
//!
//! This module provides:
//! - Markdown summary document builder
//! - Console table for live progress
//! - GitHub Actions file-command sink for outputs and summaries

mod console;
mod github;
mod summary;

pub use console::ConsoleTable;
pub use github::{FileCommandSink, OutputSink};
pub use summary::SummaryRenderer;

/// Columns of every summary table
pub const SUMMARY_COLUMNS: [&str; 4] = ["Type", "Artifact", "Version", "Update"];

/// Title of the step summary
pub const SUMMARY_TITLE: &str = "Maven Version Checker Action";

/// Paragraph under the summary title
pub const SUMMARY_INTRO: &str =
    "Below is a list of all the checked artifacts and their update status.";
