//! Artifact coordinates declared in a POM

use std::fmt;

/// Section of a POM an artifact was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `<parent>`
    Parent,
    /// `<dependency>`
    Dependency,
    /// `<plugin>`
    Plugin,
}

impl ArtifactKind {
    /// Returns the XML element name declaring this kind of artifact
    pub fn element_name(&self) -> &'static str {
        match self {
            ArtifactKind::Parent => "parent",
            ArtifactKind::Dependency => "dependency",
            ArtifactKind::Plugin => "plugin",
        }
    }

    /// Returns the key used for this kind in the update report
    pub fn plural_key(&self) -> &'static str {
        match self {
            ArtifactKind::Parent => "parents",
            ArtifactKind::Dependency => "dependencies",
            ArtifactKind::Plugin => "plugins",
        }
    }

    /// Returns the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Parent => "Parent",
            ArtifactKind::Dependency => "Dependency",
            ArtifactKind::Plugin => "Plugin",
        }
    }

    /// Returns all kinds in processing order
    pub fn all() -> &'static [ArtifactKind] {
        &[
            ArtifactKind::Parent,
            ArtifactKind::Dependency,
            ArtifactKind::Plugin,
        ]
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A Maven artifact as declared in a POM
///
/// Identity is the `groupId:artifactId` pair. The version is the declared
/// text after property placeholders have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Artifact {
    /// Creates a new artifact
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Returns the `groupId:artifactId` coordinate
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
