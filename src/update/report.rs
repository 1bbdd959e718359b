//! Outdated artifacts grouped by kind

use crate::domain::{Artifact, ArtifactKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outdated artifacts keyed by pluralized kind
///
/// Keys keep first-use order and only exist once an artifact of that kind
/// was found outdated. Entries are `groupId:artifactId:latestVersion`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    groups: Vec<(ArtifactKind, Vec<String>)>,
}

impl UpdateReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an available update for an artifact
    pub fn record(&mut self, kind: ArtifactKind, artifact: &Artifact, latest_version: &str) {
        let entry = format!(
            "{}:{}:{}",
            artifact.group_id, artifact.artifact_id, latest_version
        );

        match self.groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, entries)) => entries.push(entry),
            None => self.groups.push((kind, vec![entry])),
        }
    }

    /// Total number of outdated artifacts across all kinds
    pub fn total_updates(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Returns true if any update was recorded
    pub fn has_updates(&self) -> bool {
        self.total_updates() > 0
    }

    /// Compact JSON object, `{}` when empty
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for UpdateReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (kind, entries) in &self.groups {
            map.serialize_entry(kind.plural_key(), entries)?;
        }
        map.end()
    }
}
