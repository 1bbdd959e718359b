//! maven-version-checker - outdated artifact report for Maven projects
//!
//! This library provides the pieces of a CI step that:
//! - Reads a root pom.xml and any modules it declares
//! - Asks Maven Central for the latest version of each parent, dependency and plugin
//! - Publishes a markdown summary and machine-readable outputs

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod pom;
pub mod registry;
pub mod update;
pub mod walker;
