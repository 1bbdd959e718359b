//! Registry adapters for fetching the latest artifact version
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - Maven Central search adapter

mod client;
mod maven_central;

pub use client::HttpClient;
pub use maven_central::{MavenCentralClient, DEFAULT_SEARCH_URL};

use crate::error::RegistryError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// What the registry knows about one `groupId:artifactId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// The registry reports this latest version
    Found(String),
    /// No match
    NotFound,
}

impl QueryResult {
    /// Build a result from a raw hit count and the first hit's version
    ///
    /// A zero count is `NotFound` regardless of any version supplied.
    pub fn from_hits(number_found: u64, latest_version: Option<String>) -> Self {
        match (number_found, latest_version) {
            (0, _) | (_, None) => QueryResult::NotFound,
            (_, Some(version)) => QueryResult::Found(version),
        }
    }

    /// Returns the latest version if one was found
    pub fn latest_version(&self) -> Option<&str> {
        match self {
            QueryResult::Found(version) => Some(version),
            QueryResult::NotFound => None,
        }
    }
}

/// Trait for registries that can report an artifact's latest version
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Ask for the latest version of `group_id:artifact_id`
    ///
    /// Implementations must stop and return `RegistryError::Cancelled`
    /// once `cancel` fires.
    async fn query_latest_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        cancel: &CancellationToken,
    ) -> Result<QueryResult, RegistryError>;
}
