//! A single parsed POM file

use crate::domain::{Artifact, ArtifactKind};
use crate::error::DocumentError;
use crate::pom::xml::{parse_document, Element};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Property name to value, scoped to one POM
pub type PropertyMap = HashMap<String, String>;

/// Version text meaning "same as the parent project"
pub const PARENT_VERSION_PLACEHOLDER: &str = "${project.parent.version}";

/// Group applied to plugins declared without `<groupId>`
const DEFAULT_PLUGIN_GROUP: &str = "org.apache.maven.plugins";

// Strips the `${` and `}` anchors of a placeholder
static PLACEHOLDER_ANCHORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{|\}$").unwrap());

/// A declared module and the location of its POM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub name: String,
    pub path: PathBuf,
}

/// Modules of a multi-module root, in declaration order
///
/// An empty lookup means the project is single-module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleLookup {
    modules: Vec<ModuleRef>,
}

impl ModuleLookup {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }


    pub fn iter(&self) -> impl Iterator<Item = &ModuleRef> {
        self.modules.iter()
    }

    /// Location of a module's POM by name
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.path.as_path())
    }

    fn insert(&mut self, name: String, path: PathBuf) {
        if self.get(&name).is_none() {
            self.modules.push(ModuleRef { name, path });
        }
    }
}

/// One parsed POM file
///
/// Derived views (properties, modules, artifacts) are computed from the
/// element tree on every call.
#[derive(Debug, Clone)]
pub struct PomDocument {
    path: PathBuf,
    root: Element,
    inherited: Option<PropertyMap>,
}

impl PomDocument {
    /// Load a root POM
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::load_with_inherited(path, None)
    }

    /// Load a POM whose properties fall back to `inherited`
    pub fn load_with_inherited(
        path: impl AsRef<Path>,
        inherited: Option<PropertyMap>,
    ) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DocumentError::read_error(path, e))?;
        Self::parse(path, &content, inherited)
    }

    /// Parse POM content that was read from `path`
    pub fn parse(
        path: impl Into<PathBuf>,
        content: &str,
        inherited: Option<PropertyMap>,
    ) -> Result<Self, DocumentError> {
        let path = path.into();
        let root =
            parse_document(content).map_err(|e| DocumentError::xml_parse_error(&path, e))?;
        Ok(Self {
            path,
            root,
            inherited,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Own `<properties>` merged over the inherited ones; own values win
    pub fn properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        for section in self.root.descendants("properties") {
            for property in &section.children {
                properties
                    .entry(property.name.clone())
                    .or_insert_with(|| property.value());
            }
        }

        if let Some(inherited) = &self.inherited {
            for (key, value) in inherited {
                properties
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }

        properties
    }

    /// `<modules>` entries mapped to `{dir}/{module}/pom.xml`
    pub fn module_lookup(&self) -> ModuleLookup {
        let parent_dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let mut lookup = ModuleLookup::default();

        for modules in self.root.descendants("modules") {
            for module in modules.children_named("module") {
                let name = module.value();
                let path = parent_dir.join(&name).join("pom.xml");
                lookup.insert(name, path);
            }
        }

        lookup
    }

    /// The `<parent>` declaration, unless it inherits its version
    pub fn parent_artifact(&self) -> Result<Option<Artifact>, DocumentError> {
        Ok(self
            .parse_artifacts(ArtifactKind::Parent)?
            .into_iter()
            .next())
    }

    /// All `<dependency>` declarations that carry a version
    pub fn dependencies(&self) -> Result<Vec<Artifact>, DocumentError> {
        self.parse_artifacts(ArtifactKind::Dependency)
    }

    /// All `<plugin>` declarations that carry a version
    pub fn plugins(&self) -> Result<Vec<Artifact>, DocumentError> {
        self.parse_artifacts(ArtifactKind::Plugin)
    }

    /// Artifacts of one kind in document order
    pub fn artifacts(&self, kind: ArtifactKind) -> Result<Vec<Artifact>, DocumentError> {
        match kind {
            ArtifactKind::Parent => Ok(self.parent_artifact()?.into_iter().collect()),
            ArtifactKind::Dependency => self.dependencies(),
            ArtifactKind::Plugin => self.plugins(),
        }
    }

    /// Replace a `${name}` reference with its property value
    ///
    /// Unknown properties leave the reference untouched. Only one level is
    /// resolved; a value that is itself a placeholder is returned as is.
    pub fn resolve_property(&self, reference: &str) -> String {
        if !reference.contains('$') {
            return reference.to_string();
        }

        let name = PLACEHOLDER_ANCHORS_RE.replace_all(reference, "");
        self.properties()
            .get(name.as_ref())
            .cloned()
            .unwrap_or_else(|| reference.to_string())
    }

    fn parse_artifacts(&self, kind: ArtifactKind) -> Result<Vec<Artifact>, DocumentError> {
        let element_name = kind.element_name();
        let mut artifacts = Vec::new();

        for element in self.root.descendants(element_name) {
            let version = match element.child("version") {
                Some(version) => version.value(),
                None => continue,
            };

            if kind == ArtifactKind::Parent && version == PARENT_VERSION_PLACEHOLDER {
                continue;
            }

            let artifact_id = element
                .child("artifactId")
                .map(Element::value)
                .ok_or_else(|| {
                    DocumentError::missing_element(&self.path, element_name, "artifactId")
                })?;

            let group_id = match element.child("groupId") {
                Some(group) => group.value(),
                None if kind == ArtifactKind::Plugin => DEFAULT_PLUGIN_GROUP.to_string(),
                None => {
                    return Err(DocumentError::missing_element(
                        &self.path,
                        element_name,
                        "groupId",
                    ))
                }
            };

            if version.trim().is_empty() {
                return Err(DocumentError::BlankVersion {
                    path: self.path.clone(),
                    kind: element_name.to_string(),
                    coordinate: format!("{}:{}", group_id, artifact_id),
                });
            }

            let version = self.resolve_property(&version);
            artifacts.push(Artifact::new(group_id, artifact_id, version));
        }

        Ok(artifacts)
    }
}
