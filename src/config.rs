// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-12-01

//! Default-language selection.
//!
//! Resolution order: the `LANGLIB_LANG` environment variable, then a
//! `Lang=<name>` line in the conf file at `LANG_CONF_PATH` (default
//! `/etc/langlib.conf`), then the built-in default.

use std::env;
use std::fs;

use log::debug;

pub const DEFAULT_LANG: &str = "piglatin";

/// Resolve the name of the language module to open by default.
pub fn default_language() -> String {
    if let Ok(lang) = env::var("LANGLIB_LANG") {
        let lang = lang.trim();
        if !lang.is_empty() {
            return lang.to_string();
        }
    }
    let path = env::var("LANG_CONF_PATH").unwrap_or_else(|_| "/etc/langlib.conf".into());
    if let Ok(data) = fs::read_to_string(&path) {
        for line in data.lines() {
            if let Some(rest) = line.trim().strip_prefix("Lang=") {
                let rest = rest.trim();
                if !rest.is_empty() {
                    return rest.to_string();
                }
            }
        }
    }
    debug!("no language configured; defaulting to {DEFAULT_LANG}");
    DEFAULT_LANG.to_string()
}
