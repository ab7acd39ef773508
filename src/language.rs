// CLASSIFICATION: COMMUNITY
// Filename: language.rs v0.4
// Author: Lukas Bower
// Date Modified: 2026-11-20

//! The language-module interface.
//!
//! A module advertises which optional operations it implements through
//! [`LangCaps`]; callers must treat a clear bit as "operation absent" rather
//! than calling through and hoping.

use bitflags::bitflags;
use serde::Serialize;

use crate::catalog::StringTable;

bitflags! {
    /// Optional language operations a module implements. Bit positions are
    /// stable across releases; unused bits must stay zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LangCaps: u32 {
        const CONV_TO_LOWER = 1 << 0;
        const CONV_TO_UPPER = 1 << 1;
        const STR_COMPARE   = 1 << 2;
        const GET_LANG_STR  = 1 << 3;
    }
}

/// Identity metadata for a language module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Registry name, e.g. `piglatin`.
    pub name: &'static str,
    /// The language's name for itself, e.g. `Pig-Latin`.
    pub native_name: &'static str,
    pub version: u16,
    pub revision: u16,
}

/// A locale language module.
pub trait Language: Send + Sync {
    fn info(&self) -> LanguageInfo;

    /// Capability mask for this module.
    fn mask(&self) -> LangCaps {
        LangCaps::GET_LANG_STR
    }

    /// The module's string catalog.
    fn strings(&self) -> StringTable;

    /// Look up a catalog string by id. Absent for out-of-range ids.
    fn lang_string(&self, id: u32) -> Option<&'static str> {
        self.strings().lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_lookup_bit_is_slot_three() {
        assert_eq!(LangCaps::GET_LANG_STR.bits(), 1 << 3);
    }

    #[test]
    fn caps_contains() {
        let caps = LangCaps::GET_LANG_STR;
        assert!(caps.contains(LangCaps::GET_LANG_STR));
        assert!(!caps.contains(LangCaps::CONV_TO_UPPER));
    }
}
