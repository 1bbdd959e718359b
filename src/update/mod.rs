//! Update classification and aggregation
//!
//! This module provides:
//! - The update report keyed by artifact kind
//! - The aggregator that asks the registry about each artifact, decides
//!   whether it is outdated and records the outcome

mod report;

pub use report::UpdateReport;

use crate::domain::{Artifact, ArtifactKind, SummaryRow, UpdateStatus};
use crate::error::RegistryError;
use crate::registry::{QueryResult, RegistryClient};
use tokio_util::sync::CancellationToken;

/// Decide the status of an artifact from a registry answer
///
/// Versions are compared as plain strings: any difference from the
/// published latest counts as outdated.
pub fn judge(artifact: &Artifact, result: &QueryResult) -> UpdateStatus {
    match result.latest_version() {
        Some(latest) if latest != artifact.version => UpdateStatus::Outdated {
            latest: latest.to_string(),
        },
        Some(_) => UpdateStatus::UpToDate,
        None => UpdateStatus::NotFound,
    }
}

/// Queries the registry per artifact and accumulates the update report
pub struct UpdateAggregator<'a> {
    registry: &'a dyn RegistryClient,
    cancel: CancellationToken,
    report: UpdateReport,
}

impl<'a> UpdateAggregator<'a> {
    /// Create an aggregator with an empty report
    pub fn new(registry: &'a dyn RegistryClient, cancel: CancellationToken) -> Self {
        Self {
            registry,
            cancel,
            report: UpdateReport::new(),
        }
    }

    /// Query and classify one artifact
    ///
    /// Returns the summary row and whether the artifact is outdated.
    /// Outdated artifacts are added to the report.
    pub async fn classify(
        &mut self,
        kind: ArtifactKind,
        artifact: &Artifact,
    ) -> Result<(SummaryRow, bool), RegistryError> {
        let result = self
            .registry
            .query_latest_version(&artifact.group_id, &artifact.artifact_id, &self.cancel)
            .await?;

        let status = judge(artifact, &result);
        if let UpdateStatus::Outdated { latest } = &status {
            self.report.record(kind, artifact, latest);
        }

        let outdated = status.is_outdated();
        Ok((SummaryRow::new(kind, artifact, status), outdated))
    }

    /// Consume the aggregator and return the report
    pub fn into_report(self) -> UpdateReport {
        self.report
    }
}
