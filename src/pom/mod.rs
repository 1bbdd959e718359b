//! POM loading and artifact extraction
//!
//! This module provides:
//! - A small owned XML element tree (quick-xml)
//! - `PomDocument`: properties, modules and parent/dependency/plugin
//!   declarations of one POM, with `${property}` resolution

mod document;
mod xml;

pub use document::{
    ModuleLookup, ModuleRef, PomDocument, PropertyMap, PARENT_VERSION_PLACEHOLDER,
};
pub use xml::{parse_document, Element};
