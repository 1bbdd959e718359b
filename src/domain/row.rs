//! Per-artifact update status and summary rows

use super::{Artifact, ArtifactKind};
use std::fmt;

/// Token shown when the declared version is the latest
pub const UP_TO_DATE_TOKEN: &str = "✔️";

/// Token shown when the registry knows nothing about the artifact
pub const NOT_FOUND_TOKEN: &str = "🔴";

/// Outcome of checking one artifact against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// A different version is published
    Outdated { latest: String },
    /// Declared version equals the published latest
    UpToDate,
    /// No registry match
    NotFound,
}

impl UpdateStatus {
    /// Returns true if this status counts as an available update
    pub fn is_outdated(&self) -> bool {
        matches!(self, UpdateStatus::Outdated { .. })
    }

    /// Returns true if the registry had a match for the artifact
    pub fn is_resolved(&self) -> bool {
        !matches!(self, UpdateStatus::NotFound)
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Outdated { latest } => write!(f, "{}", latest),
            UpdateStatus::UpToDate => write!(f, "{}", UP_TO_DATE_TOKEN),
            UpdateStatus::NotFound => write!(f, "{}", NOT_FOUND_TOKEN),
        }
    }
}

/// One line of the human-readable summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub kind: ArtifactKind,
    pub coordinate: String,
    pub declared_version: String,
    pub status: UpdateStatus,
}

impl SummaryRow {
    /// Creates a row for a classified artifact
    pub fn new(kind: ArtifactKind, artifact: &Artifact, status: UpdateStatus) -> Self {
        Self {
            kind,
            coordinate: artifact.coordinate(),
            declared_version: artifact.version.clone(),
            status,
        }
    }

    /// Returns the cells in `Type, Artifact, Version, Update` order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.coordinate.clone(),
            self.declared_version.clone(),
            self.status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let outdated = UpdateStatus::Outdated {
            latest: "3.2.0".to_string(),
        };
        assert_eq!(outdated.to_string(), "3.2.0");
        assert_eq!(UpdateStatus::UpToDate.to_string(), UP_TO_DATE_TOKEN);
        assert_eq!(UpdateStatus::NotFound.to_string(), NOT_FOUND_TOKEN);
    }

    #[test]
    fn test_status_predicates() {
        let outdated = UpdateStatus::Outdated {
            latest: "2.0".to_string(),
        };
        assert!(outdated.is_outdated());
        assert!(outdated.is_resolved());
        assert!(!UpdateStatus::UpToDate.is_outdated());
        assert!(UpdateStatus::UpToDate.is_resolved());
        assert!(!UpdateStatus::NotFound.is_outdated());
        assert!(!UpdateStatus::NotFound.is_resolved());
    }

    #[test]
    fn test_row_cells() {
        let artifact = Artifact::new("org.jacoco", "jacoco-maven-plugin", "0.8.9");
        let row = SummaryRow::new(ArtifactKind::Plugin, &artifact, UpdateStatus::UpToDate);
        assert_eq!(
            row.cells(),
            vec![
                "Plugin".to_string(),
                "org.jacoco:jacoco-maven-plugin".to_string(),
                "0.8.9".to_string(),
                UP_TO_DATE_TOKEN.to_string(),
            ]
        );
    }
}
