//! Core domain models for the version checker
//!
//! This module contains the fundamental types used throughout the application:
//! - Artifact coordinates and the kind of POM section they were declared in
//! - Per-artifact update status and the summary rows built from it

mod artifact;
mod row;

pub use artifact::{Artifact, ArtifactKind};
pub use row::{SummaryRow, UpdateStatus};
