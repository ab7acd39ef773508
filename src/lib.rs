// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.5
// Author: Lukas Bower
// Date Modified: 2026-11-18

//! Locale language modules for langlib.
//!
//! A language module bundles a fixed catalog of locale strings (day and month
//! names, yes/no, quotes, and so on) behind the [`language::Language`] trait.
//! Modules are installed into a [`registry::LanguageRegistry`], opened for
//! use, and expunged when the last user closes them.

/// String-id constants and the immutable catalog table.
pub mod catalog;

/// Default-language resolution from environment and conf file.
pub mod config;

/// The language-module trait, identity metadata, and capability mask.
pub mod language;

/// Bundled language modules.
pub mod languages;

/// Install/open/close/expunge lifecycle for language modules.
pub mod registry;

pub use language::{LangCaps, Language, LanguageInfo};
pub use registry::{Expunge, LanguageHandle, LanguageRegistry, RegistryError, SegmentHandle};
