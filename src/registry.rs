// CLASSIFICATION: COMMUNITY
// Filename: registry.rs v0.7
// Author: Lukas Bower
// Date Modified: 2026-12-05

//! Runtime registry for language modules.
//!
//! Modules are installed together with an opaque [`SegmentHandle`] and looked
//! up by name. Opening a module hands back a scoped [`LanguageHandle`] that
//! releases its reference on drop. Expunging a module with live handles is
//! deferred until the last close, at which point the segment is released.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::language::{LangCaps, Language, LanguageInfo};

/// Opaque handle to a module's loaded image. Surrendered to the registry at
/// install time and handed back to the caller when the module is unloaded.
#[derive(Debug, PartialEq, Eq)]
pub struct SegmentHandle(u64);

static NEXT_SEGMENT: AtomicU64 = AtomicU64::new(1);

impl SegmentHandle {
    pub fn new(id: u64) -> Self {
        SegmentHandle(id)
    }

    /// Allocate a fresh process-unique handle.
    pub fn next() -> Self {
        SegmentHandle(NEXT_SEGMENT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Errors returned by [`LanguageRegistry`] operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("language registry lock poisoned")]
    LockPoisoned,
    #[error("language {0:?} is already installed")]
    Exists(String),
    #[error("no language named {0:?} is installed")]
    NotFound(String),
}

type RegistryResult<T> = Result<T, RegistryError>;

/// Outcome of an expunge request.
#[derive(Debug)]
pub enum Expunge {
    /// Module removed from the registry; its segment is returned.
    Unloaded(SegmentHandle),
    /// Module still open somewhere; unload deferred until the last close.
    Deferred,
}

struct Slot {
    language: Arc<dyn Language>,
    segment: SegmentHandle,
    open_count: u32,
    delayed_expunge: bool,
}

/// Registry of installed language modules.
///
/// Instantiable for callers that carry their own context; a process-wide
/// instance is available through [`LanguageRegistry::global`].
#[derive(Default)]
pub struct LanguageRegistry {
    slots: Mutex<HashMap<String, Slot>>,
}

static GLOBAL: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static LanguageRegistry {
        &GLOBAL
    }

    fn lock(&self) -> RegistryResult<MutexGuard<'_, HashMap<String, Slot>>> {
        self.slots.lock().map_err(|_| RegistryError::LockPoisoned)
    }

    /// Install a language module under its own name. The segment handle is
    /// held until the module is expunged.
    pub fn install(
        &self,
        language: Arc<dyn Language>,
        segment: SegmentHandle,
    ) -> RegistryResult<()> {
        let info = language.info();
        let mut slots = self.lock()?;
        if slots.contains_key(info.name) {
            return Err(RegistryError::Exists(info.name.to_string()));
        }
        info!(
            "language {:?} v{}.{} installed (segment {})",
            info.name,
            info.version,
            info.revision,
            segment.id()
        );
        slots.insert(
            info.name.to_string(),
            Slot {
                language,
                segment,
                open_count: 0,
                delayed_expunge: false,
            },
        );
        Ok(())
    }

    /// Open a module for use. Increments its reference count and clears any
    /// pending deferred unload.
    pub fn open(&self, name: &str) -> RegistryResult<LanguageHandle<'_>> {
        let mut slots = self.lock()?;
        let slot = slots
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        slot.open_count += 1;
        slot.delayed_expunge = false;
        debug!("language {:?} opened ({} users)", name, slot.open_count);
        Ok(LanguageHandle {
            registry: self,
            name: name.to_string(),
            language: Arc::clone(&slot.language),
            closed: false,
        })
    }

    /// Remove a module from the registry. With live handles the unload is
    /// deferred instead and the caller is told the module is busy.
    pub fn expunge(&self, name: &str) -> RegistryResult<Expunge> {
        let mut slots = self.lock()?;
        let slot = slots
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        if slot.open_count > 0 {
            slot.delayed_expunge = true;
            info!(
                "language {:?} busy ({} users); expunge deferred",
                name, slot.open_count
            );
            return Ok(Expunge::Deferred);
        }
        match slots.remove(name) {
            Some(slot) => {
                info!("language {:?} expunged", name);
                Ok(Expunge::Unloaded(slot.segment))
            }
            None => Err(RegistryError::NotFound(name.to_string())),
        }
    }

    /// Capability mask of an installed module.
    pub fn mask(&self, name: &str) -> RegistryResult<LangCaps> {
        let slots = self.lock()?;
        slots
            .get(name)
            .map(|slot| slot.language.mask())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn is_installed(&self, name: &str) -> RegistryResult<bool> {
        Ok(self.lock()?.contains_key(name))
    }

    /// Names of all installed modules, sorted.
    pub fn installed(&self) -> RegistryResult<Vec<String>> {
        let mut names: Vec<String> = self.lock()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Clear all installed modules. Only used in tests.
    pub fn reset(&self) -> RegistryResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    // Decrement the reference count for `name`; runs a deferred expunge when
    // this was the last close.
    fn close_slot(&self, name: &str) -> RegistryResult<Option<SegmentHandle>> {
        let mut slots = self.lock()?;
        let slot = match slots.get_mut(name) {
            Some(slot) => slot,
            None => return Ok(None),
        };
        slot.open_count = slot.open_count.saturating_sub(1);
        debug!("language {:?} closed ({} users)", name, slot.open_count);
        if slot.open_count == 0 && slot.delayed_expunge {
            info!("language {:?} expunged on last close", name);
            return Ok(slots.remove(name).map(|slot| slot.segment));
        }
        Ok(None)
    }
}

/// Scoped reference to an opened language module.
///
/// Dropping the handle closes it; [`LanguageHandle::close`] does the same
/// explicitly and reports whether this close ran a deferred unload.
pub struct LanguageHandle<'r> {
    registry: &'r LanguageRegistry,
    name: String,
    language: Arc<dyn Language>,
    closed: bool,
}

impl LanguageHandle<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> LanguageInfo {
        self.language.info()
    }

    pub fn mask(&self) -> LangCaps {
        self.language.mask()
    }

    /// Look up a catalog string by id. Absent for out-of-range ids.
    pub fn lang_string(&self, id: u32) -> Option<&'static str> {
        self.language.lang_string(id)
    }

    /// Close the handle, yielding the segment when this close performed a
    /// deferred unload.
    pub fn close(mut self) -> RegistryResult<Option<SegmentHandle>> {
        self.closed = true;
        self.registry.close_slot(&self.name)
    }
}

impl Drop for LanguageHandle<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        // A deferred segment released here is simply dropped.
        if let Err(err) = self.registry.close_slot(&self.name) {
            warn!("close of language {:?} failed: {err}", self.name);
        }
    }
}

/// RAII reset of the global registry around a test.
pub struct TestRegistryGuard;

impl TestRegistryGuard {
    pub fn new() -> Self {
        let _ = LanguageRegistry::global().reset();
        TestRegistryGuard
    }
}

impl Default for TestRegistryGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestRegistryGuard {
    fn drop(&mut self) {
        let _ = LanguageRegistry::global().reset();
    }
}
