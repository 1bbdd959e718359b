//! Run orchestration: walk → summarize → publish
//!
//! A run is all-or-nothing. Nothing reaches the output sink until every
//! module has been checked and the summary has been built.

use crate::cli::ActionConfig;
use crate::error::{AppError, OutputError};
use crate::output::{
    ConsoleTable, OutputSink, SummaryRenderer, SUMMARY_COLUMNS, SUMMARY_INTRO, SUMMARY_TITLE,
};
use crate::registry::RegistryClient;
use crate::update::UpdateReport;
use crate::walker::{ModuleSection, ProjectWalker, WalkOutcome};
use tokio_util::sync::CancellationToken;

/// Results of a completed run, ready to publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub report: UpdateReport,
    pub summary: SummaryRenderer,
}

impl RunOutcome {
    /// The `(name, value)` machine outputs in publication order
    pub fn outputs(&self) -> Result<Vec<(&'static str, String)>, OutputError> {
        let updates = self.report.total_updates();
        Ok(vec![
            ("has_updates", self.report.has_updates().to_string()),
            ("number_of_updates", updates.to_string()),
            ("update_json", self.report.to_json()?),
        ])
    }

    /// Write the summary and the machine outputs
    ///
    /// Nothing is written unless every destination is ready.
    pub fn publish(&self, sink: &mut dyn OutputSink) -> Result<(), OutputError> {
        let outputs = self.outputs()?;
        sink.ready()?;
        sink.set_summary(self.summary.as_str().trim_end())?;
        for (name, value) in outputs {
            sink.set_output(name, &value)?;
        }
        Ok(())
    }
}

/// Whether a section gets a table in the summary
///
/// Sections without rows, or whose artifacts were all unknown to the
/// registry, are left out.
fn has_table(section: &ModuleSection) -> bool {
    section.rows.iter().any(|row| row.status.is_resolved())
}

/// Build the markdown summary for a walk
pub fn render_summary(walk: &WalkOutcome) -> Result<SummaryRenderer, AppError> {
    let mut summary = SummaryRenderer::new();
    summary.append_header(SUMMARY_TITLE, 2)?;
    summary.append_paragraph(SUMMARY_INTRO);

    for section in walk.sections.iter().filter(|s| has_table(s)) {
        if let Some(title) = &section.title {
            summary.append_header(title, 3)?;
        }
        let rows: Vec<Vec<String>> = section.rows.iter().map(|row| row.cells()).collect();
        summary.append_table(&SUMMARY_COLUMNS, &rows)?;
    }

    Ok(summary)
}

/// Coordinates one checker run
pub struct Orchestrator {
    config: ActionConfig,
    registry: Box<dyn RegistryClient>,
    console: ConsoleTable,
}

impl Orchestrator {
    /// Create an orchestrator printing progress to stdout
    pub fn new(config: ActionConfig, registry: Box<dyn RegistryClient>) -> Self {
        Self::with_console(config, registry, ConsoleTable::stdout())
    }

    /// Create an orchestrator with a custom console (for testing)
    pub fn with_console(
        config: ActionConfig,
        registry: Box<dyn RegistryClient>,
        console: ConsoleTable,
    ) -> Self {
        Self {
            config,
            registry,
            console,
        }
    }

    /// Check the project without publishing anything
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<RunOutcome, AppError> {
        let mut walker = ProjectWalker::new(self.registry.as_ref(), cancel, &mut self.console);
        let walk = walker.run(&self.config.location).await?;
        let summary = render_summary(&walk)?;

        Ok(RunOutcome {
            report: walk.report,
            summary,
        })
    }

    /// Check the project and publish the results to `sink`
    pub async fn run_and_publish(
        &mut self,
        cancel: CancellationToken,
        sink: &mut dyn OutputSink,
    ) -> Result<RunOutcome, AppError> {
        let outcome = self.run(cancel).await?;
        outcome.publish(sink)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artifact, ArtifactKind, SummaryRow, UpdateStatus};

    fn row(status: UpdateStatus) -> SummaryRow {
        SummaryRow::new(
            ArtifactKind::Dependency,
            &Artifact::new("org.mongodb", "bson", "4.11.5"),
            status,
        )
    }

    fn walk(sections: Vec<ModuleSection>) -> WalkOutcome {
        WalkOutcome {
            report: UpdateReport::new(),
            sections,
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        outputs: Vec<String>,
        summary: Option<String>,
        unavailable: bool,
    }

    impl OutputSink for RecordingSink {
        fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
            self.outputs.push(format!("{}={}", name, value));
            Ok(())
        }

        fn set_summary(&mut self, markdown: &str) -> Result<(), OutputError> {
            self.summary = Some(markdown.to_string());
            Ok(())
        }

        fn ready(&self) -> Result<(), OutputError> {
            if self.unavailable {
                return Err(OutputError::MissingVariable {
                    command: "OUTPUT".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_render_single_module() {
        let summary = render_summary(&walk(vec![ModuleSection {
            title: None,
            rows: vec![row(UpdateStatus::Outdated {
                latest: "5.2.1".to_string(),
            })],
        }]))
        .unwrap();

        assert_eq!(
            summary.as_str(),
            "## Maven Version Checker Action\n\n\
             Below is a list of all the checked artifacts and their update status.\n\n\
             | Type | Artifact | Version | Update |\n\
             | --- | --- | --- | --- |\n\
             | Dependency | org.mongodb:bson | 4.11.5 | 5.2.1 |\n\n"
        );
    }

    #[test]
    fn test_render_skips_empty_and_unresolved_sections() {
        let summary = render_summary(&walk(vec![
            ModuleSection {
                title: Some("parent-pom".to_string()),
                rows: vec![],
            },
            ModuleSection {
                title: Some("unknown".to_string()),
                rows: vec![row(UpdateStatus::NotFound)],
            },
            ModuleSection {
                title: Some("mixed".to_string()),
                rows: vec![row(UpdateStatus::NotFound), row(UpdateStatus::UpToDate)],
            },
        ]))
        .unwrap();

        let text = summary.as_str();
        assert!(!text.contains("### parent-pom"));
        assert!(!text.contains("### unknown"));
        assert!(text.contains("### mixed\n\n| Type |"));
        assert!(text.contains("| 4.11.5 | 🔴 |"));
        assert!(text.contains("| 4.11.5 | ✔️ |"));
    }

    #[test]
    fn test_publish_order_and_values() {
        let mut report = UpdateReport::new();
        report.record(
            ArtifactKind::Plugin,
            &Artifact::new("org.jacoco", "jacoco-maven-plugin", "0.8.9"),
            "0.8.12",
        );
        let outcome = RunOutcome {
            report,
            summary: render_summary(&walk(vec![])).unwrap(),
        };
        let mut sink = RecordingSink::default();

        outcome.publish(&mut sink).unwrap();

        assert_eq!(
            sink.summary.as_deref(),
            Some(
                "## Maven Version Checker Action\n\n\
                 Below is a list of all the checked artifacts and their update status."
            )
        );
        assert_eq!(
            sink.outputs,
            vec![
                "has_updates=true",
                "number_of_updates=1",
                r#"update_json={"plugins":["org.jacoco:jacoco-maven-plugin:0.8.12"]}"#,
            ]
        );
    }

    #[test]
    fn test_publish_writes_nothing_when_sink_unavailable() {
        let outcome = RunOutcome {
            report: UpdateReport::new(),
            summary: render_summary(&walk(vec![])).unwrap(),
        };
        let mut sink = RecordingSink {
            unavailable: true,
            ..Default::default()
        };

        let err = outcome.publish(&mut sink).unwrap_err();

        assert!(matches!(err, OutputError::MissingVariable { .. }));
        assert!(sink.summary.is_none());
        assert!(sink.outputs.is_empty());
    }

    #[test]
    fn test_outputs_without_updates() {
        let outcome = RunOutcome {
            report: UpdateReport::new(),
            summary: SummaryRenderer::new(),
        };
        let outputs = outcome.outputs().unwrap();
        assert_eq!(outputs[0], ("has_updates", "false".to_string()));
        assert_eq!(outputs[1], ("number_of_updates", "0".to_string()));
        assert_eq!(outputs[2], ("update_json", "{}".to_string()));
    }
}
