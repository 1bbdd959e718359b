//! GitHub Actions file commands
//!
//! Outputs and step summaries are published by appending lines to the files
//! named by `GITHUB_OUTPUT` and `GITHUB_STEP_SUMMARY`.

use crate::error::OutputError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for machine outputs and the human summary
pub trait OutputSink {
    /// Publish one `name=value` output
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError>;

    /// Publish the markdown step summary
    fn set_summary(&mut self, markdown: &str) -> Result<(), OutputError>;

    /// Check that every destination can be written, before anything is
    fn ready(&self) -> Result<(), OutputError>;
}

/// Sink backed by the runner's file commands
#[derive(Debug, Clone, Default)]
pub struct FileCommandSink {
    output_file: Option<PathBuf>,
    summary_file: Option<PathBuf>,
}

impl FileCommandSink {
    pub fn new(output_file: Option<PathBuf>, summary_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            summary_file,
        }
    }

    fn target<'a>(command: &str, target: Option<&'a Path>) -> Result<&'a Path, OutputError> {
        let path = target.ok_or_else(|| OutputError::MissingVariable {
            command: command.to_string(),
        })?;

        if !path.is_file() {
            return Err(OutputError::MissingFile {
                path: path.to_path_buf(),
                command: command.to_string(),
            });
        }
        Ok(path)
    }

    fn issue(command: &str, target: Option<&Path>, content: &str) -> Result<(), OutputError> {
        let path = Self::target(command, target)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| OutputError::write_error(path, e))?;
        writeln!(file, "{}", content).map_err(|e| OutputError::write_error(path, e))
    }
}

impl OutputSink for FileCommandSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        let line = format!("{}={}", name.trim(), value.trim());
        Self::issue("OUTPUT", self.output_file.as_deref(), &line)
    }

    fn set_summary(&mut self, markdown: &str) -> Result<(), OutputError> {
        Self::issue("STEP_SUMMARY", self.summary_file.as_deref(), markdown.trim())
    }

    fn ready(&self) -> Result<(), OutputError> {
        Self::target("STEP_SUMMARY", self.summary_file.as_deref())?;
        Self::target("OUTPUT", self.output_file.as_deref())?;
        Ok(())
    }
}
