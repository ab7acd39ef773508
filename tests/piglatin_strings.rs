// CLASSIFICATION: COMMUNITY
// Filename: piglatin_strings.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-12-08

use langlib::catalog;
use langlib::language::Language;
use langlib::languages::PigLatin;
use langlib::LangCaps;

#[test]
fn reference_scenario() {
    let lang = PigLatin;
    assert_eq!(lang.lang_string(0), Some(""));
    assert_eq!(lang.lang_string(1), Some("Undaysay"));
    assert_eq!(lang.lang_string(53), Some("Pig-Latin"));
    assert_eq!(lang.lang_string(9999), None);
}

#[test]
fn every_id_in_range_resolves() {
    let lang = PigLatin;
    for id in 0..catalog::TABLE_LEN as u32 {
        assert!(lang.lang_string(id).is_some(), "id {id} should resolve");
    }
    assert_eq!(lang.lang_string(catalog::TABLE_LEN as u32), None);
}

#[test]
fn day_and_month_ids() {
    let lang = PigLatin;
    assert_eq!(lang.lang_string(catalog::DAY_7), Some("Aturdaysay"));
    assert_eq!(lang.lang_string(catalog::ABDAY_1), Some("Unsay"));
    assert_eq!(lang.lang_string(catalog::MON_1), Some("Anuaryjay"));
    assert_eq!(lang.lang_string(catalog::MON_12), Some("Ecemberday"));
    assert_eq!(lang.lang_string(catalog::ABMON_12), Some("Ecday"));
}

#[test]
fn response_and_punctuation_ids() {
    let lang = PigLatin;
    assert_eq!(lang.lang_string(catalog::YES_STR), Some("Yesay"));
    assert_eq!(lang.lang_string(catalog::NO_STR), Some("Onay"));
    assert_eq!(lang.lang_string(catalog::AM_STR), Some("am"));
    assert_eq!(lang.lang_string(catalog::PM_STR), Some("pm"));
    assert_eq!(lang.lang_string(catalog::OPEN_QUOTE), Some("\""));
    assert_eq!(lang.lang_string(catalog::FUTURE_STR), Some("Uturefay"));
}

#[test]
fn lookup_is_idempotent() {
    let lang = PigLatin;
    let first = lang.lang_string(catalog::TODAY_STR);
    let second = lang.lang_string(catalog::TODAY_STR);
    assert_eq!(first, Some("Odaytay"));
    assert_eq!(first, second);
}

#[test]
fn identity_and_mask() {
    let info = PigLatin.info();
    assert_eq!(info.name, "piglatin");
    assert_eq!(info.native_name, "Pig-Latin");
    assert_eq!((info.version, info.revision), (41, 2));
    assert_eq!(PigLatin.mask(), LangCaps::GET_LANG_STR);
}
