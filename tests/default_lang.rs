// CLASSIFICATION: COMMUNITY
// Filename: default_lang.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-12-08

use std::fs;

use langlib::config::{default_language, DEFAULT_LANG};
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn env_override() {
    std::env::set_var("LANGLIB_LANG", "english");
    std::env::set_var("LANG_CONF_PATH", "/nonexistent");
    let lang = default_language();
    std::env::remove_var("LANGLIB_LANG");
    std::env::remove_var("LANG_CONF_PATH");
    assert_eq!(lang, "english");
}

#[test]
#[serial]
fn conf_file_load() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("langlib.conf");
    fs::write(&conf, "# locale settings\nLang=piglatin\n").unwrap();
    std::env::remove_var("LANGLIB_LANG");
    std::env::set_var("LANG_CONF_PATH", &conf);
    let lang = default_language();
    std::env::remove_var("LANG_CONF_PATH");
    assert_eq!(lang, "piglatin");
}

#[test]
#[serial]
fn builtin_fallback() {
    std::env::remove_var("LANGLIB_LANG");
    std::env::set_var("LANG_CONF_PATH", "/nonexistent");
    let lang = default_language();
    std::env::remove_var("LANG_CONF_PATH");
    assert_eq!(lang, DEFAULT_LANG);
}
