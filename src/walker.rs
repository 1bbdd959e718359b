//! Project traversal
//!
//! Loads the root POM, decides between single- and multi-module layouts and
//! classifies every parent, dependency and plugin module by module.

use crate::domain::{ArtifactKind, SummaryRow};
use crate::error::{AppError, OutputError};
use crate::output::ConsoleTable;
use crate::pom::PomDocument;
use crate::registry::RegistryClient;
use crate::update::{UpdateAggregator, UpdateReport};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Section title used for the root POM of a multi-module project
pub const PARENT_SECTION: &str = "parent-pom";

/// Rows classified for one POM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSection {
    /// `None` for single-module projects
    pub title: Option<String>,
    pub rows: Vec<SummaryRow>,
}

/// Everything one walk produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub report: UpdateReport,
    pub sections: Vec<ModuleSection>,
}

/// Walks a project tree and classifies its artifacts
pub struct ProjectWalker<'a> {
    registry: &'a dyn RegistryClient,
    cancel: CancellationToken,
    console: &'a mut ConsoleTable,
}

impl<'a> ProjectWalker<'a> {
    pub fn new(
        registry: &'a dyn RegistryClient,
        cancel: CancellationToken,
        console: &'a mut ConsoleTable,
    ) -> Self {
        Self {
            registry,
            cancel,
            console,
        }
    }

    /// Classify every artifact of the project rooted at `root`
    ///
    /// Modules are visited in declaration order and artifacts within a POM
    /// are queried one at a time: parent, dependencies, then plugins.
    pub async fn run(&mut self, root: &Path) -> Result<WalkOutcome, AppError> {
        let pom = PomDocument::load(root)?;
        let modules = pom.module_lookup();
        let mut aggregator = UpdateAggregator::new(self.registry, self.cancel.clone());
        let mut sections = Vec::new();

        if modules.is_empty() {
            let rows = self.process(&pom, true, None, &mut aggregator).await?;
            sections.push(ModuleSection { title: None, rows });
        } else {
            tracing::info!(notice = true, "Multi-Module project detected.");

            let rows = self
                .process(&pom, true, Some(PARENT_SECTION), &mut aggregator)
                .await?;
            sections.push(ModuleSection {
                title: Some(PARENT_SECTION.to_string()),
                rows,
            });

            let inherited = pom.properties();
            for module in modules.iter() {
                let module_pom =
                    PomDocument::load_with_inherited(&module.path, Some(inherited.clone()))?;
                let rows = self
                    .process(&module_pom, false, Some(&module.name), &mut aggregator)
                    .await?;
                sections.push(ModuleSection {
                    title: Some(module.name.clone()),
                    rows,
                });
            }
        }

        self.console.flush().map_err(OutputError::Console)?;

        Ok(WalkOutcome {
            report: aggregator.into_report(),
            sections,
        })
    }

    async fn process(
        &mut self,
        pom: &PomDocument,
        is_parent: bool,
        section: Option<&str>,
        aggregator: &mut UpdateAggregator<'_>,
    ) -> Result<Vec<SummaryRow>, AppError> {
        tracing::debug!(pom = %pom.path().display(), "checking POM");

        let mut batches = Vec::new();
        for &kind in ArtifactKind::all() {
            if kind == ArtifactKind::Parent && !is_parent {
                continue;
            }
            batches.push((kind, pom.artifacts(kind)?));
        }

        let declares_artifacts = batches
            .iter()
            .any(|(kind, artifacts)| *kind != ArtifactKind::Parent && !artifacts.is_empty());
        if declares_artifacts {
            self.console
                .write_header(section)
                .map_err(OutputError::Console)?;
        }

        let mut rows = Vec::new();
        for (kind, artifacts) in &batches {
            for artifact in artifacts {
                let (row, _) = aggregator.classify(*kind, artifact).await?;
                self.console.write_row(&row).map_err(OutputError::Console)?;
                rows.push(row);
            }
        }

        Ok(rows)
    }
}
