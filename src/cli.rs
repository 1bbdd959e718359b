//! Action input parsing
//!
//! Every input can be given as a flag or through the environment variable
//! the Actions runner sets, so the binary runs unchanged in a workflow.

use crate::error::ConfigError;
use crate::registry::DEFAULT_SEARCH_URL;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Workflow commands understood by the Actions runner
    #[default]
    Github,
    /// Plain compact lines for local runs
    Plain,
}

/// Raw inputs as supplied by the runner or the command line
#[derive(Parser, Debug, Clone)]
#[command(
    name = "maven-version-checker",
    version,
    about = "Checks a Maven project for outdated parents, dependencies and plugins"
)]
pub struct ActionInputs {
    /// Path to the root pom.xml
    #[arg(long, env = "INPUT_LOCATION")]
    pub location: Option<String>,

    /// File receiving name=value outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// File receiving the markdown step summary
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub summary_file: Option<PathBuf>,

    /// Maven Central search host
    #[arg(long, env = "INPUT_REGISTRY_URL", default_value = DEFAULT_SEARCH_URL)]
    pub registry_url: String,

    /// Log line format
    #[arg(long, env = "ACTION_LOG_FORMAT", value_enum, default_value_t = LogFormat::Github)]
    pub log_format: LogFormat,
}

/// Validated configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub location: PathBuf,
    pub output_file: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
    pub registry_url: String,
    pub log_format: LogFormat,
}

impl ActionInputs {
    /// Validate the inputs into a run configuration
    pub fn into_config(self) -> Result<ActionConfig, ConfigError> {
        let location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ConfigError::missing_input("location"))?;

        let registry_url = self.registry_url.trim();
        if !registry_url.starts_with("http://") && !registry_url.starts_with("https://") {
            return Err(ConfigError::InvalidInput {
                name: "registry-url".to_string(),
                value: registry_url.to_string(),
                message: "expected an http(s) URL".to_string(),
            });
        }

        Ok(ActionConfig {
            location: PathBuf::from(location),
            output_file: self.output_file,
            summary_file: self.summary_file,
            registry_url: registry_url.to_string(),
            log_format: self.log_format,
        })
    }
}
