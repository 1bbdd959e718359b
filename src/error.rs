//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Required action inputs missing or malformed
//! - DocumentError: POM files that cannot be read or understood
//! - RegistryError: Issues with package registry communication
//! - ValidationError: Malformed summary building calls
//! - OutputError: Failures publishing outputs and summaries

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// POM document related errors
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Summary construction errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Output publication errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required input was not supplied
    #[error("required input '{name}' not supplied")]
    MissingInput { name: String },

    /// An input was supplied with an unusable value
    #[error("invalid value '{value}' for input '{name}': {message}")]
    InvalidInput {
        name: String,
        value: String,
        message: String,
    },
}

/// Errors related to POM documents
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to read the POM file
    #[error("failed to read POM file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The POM is not well-formed XML
    #[error("failed to parse XML in {path}: {message}")]
    XmlParseError { path: PathBuf, message: String },

    /// An artifact declaration lacks a mandatory child element
    #[error("<{kind}> in {path} is missing <{element}>")]
    MissingElement {
        path: PathBuf,
        kind: String,
        element: String,
    },

    /// An artifact declaration has an empty version
    #[error("<{kind}> '{coordinate}' in {path} has a blank version")]
    BlankVersion {
        path: PathBuf,
        kind: String,
        coordinate: String,
    },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Registry answered with a non-success status
    #[error("request for '{package}' to {registry} failed: {status}")]
    RequestFailed {
        package: String,
        registry: String,
        status: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry} registry")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// The query was cancelled before it completed
    #[error("query for '{package}' was cancelled")]
    Cancelled { package: String },
}

/// Errors raised by malformed summary building calls
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Header level outside 1..=6
    #[error("valid range for header level is from 1 to 6, got {level}")]
    HeaderLevel { level: usize },

    /// Table without columns
    #[error("at least one column is required")]
    NoColumns,

    /// Table without rows
    #[error("at least one row is required")]
    NoRows,

    /// Row width differs from column count
    #[error("number of row cells ({cells}) does not match number of columns ({columns})")]
    RowWidth { cells: usize, columns: usize },
}

/// Errors related to publishing outputs
#[derive(Error, Debug)]
pub enum OutputError {
    /// The file command variable is not set
    #[error("unable to find environment variable for file command {command} (GITHUB_{command})")]
    MissingVariable { command: String },

    /// The file command target does not exist
    #[error("missing file at path: '{path}' for file command {command} (GITHUB_{command})")]
    MissingFile { path: PathBuf, command: String },

    /// Writing to the target failed
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the console failed
    #[error("failed to write console output: {0}")]
    Console(#[source] std::io::Error),

    /// Serializing the update report failed
    #[error("failed to serialize update report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new MissingInput error
    pub fn missing_input(name: impl Into<String>) -> Self {
        ConfigError::MissingInput { name: name.into() }
    }
}

impl DocumentError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new XmlParseError
    pub fn xml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocumentError::XmlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingElement error
    pub fn missing_element(
        path: impl Into<PathBuf>,
        kind: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        DocumentError::MissingElement {
            path: path.into(),
            kind: kind.into(),
            element: element.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RequestFailed error
    pub fn request_failed(
        package: impl Into<String>,
        registry: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        RegistryError::RequestFailed {
            package: package.into(),
            registry: registry.into(),
            status: status.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new Cancelled error
    pub fn cancelled(package: impl Into<String>) -> Self {
        RegistryError::Cancelled {
            package: package.into(),
        }
    }

    /// Whether another attempt might succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RegistryError::NetworkError { .. }
                | RegistryError::RateLimitExceeded { .. }
                | RegistryError::Timeout { .. }
        )
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}
