// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-12-05

//! Bundled language modules.

pub mod piglatin;

pub use piglatin::PigLatin;

use std::sync::Arc;

use crate::registry::{LanguageRegistry, RegistryError, SegmentHandle};

/// Install every bundled language into `registry`. Already-installed names
/// are left alone, so this is safe to call more than once.
pub fn install_bundled(registry: &LanguageRegistry) -> Result<(), RegistryError> {
    if !registry.is_installed(piglatin::NAME)? {
        registry.install(Arc::new(PigLatin), SegmentHandle::next())?;
    }
    Ok(())
}
