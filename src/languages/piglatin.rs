// CLASSIFICATION: COMMUNITY
// Filename: piglatin.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-12-05

//! Pig-Latin language module.
//!
//! A rather silly language, but a useful template: unlike English its
//! catalog strings differ from the ids' default meanings, so lookups are
//! actually observable.

use crate::catalog::{StringTable, TABLE_LEN};
use crate::language::{LangCaps, Language, LanguageInfo};

pub const NAME: &str = "piglatin";
pub const NATIVE_NAME: &str = "Pig-Latin";

const VERSION: u16 = 41;
const REVISION: u16 = 2;

static PIG_STRINGS: [&str; TABLE_LEN] = [
    // Blank string.
    "",
    // Day names, first day of the week first (Sunday here; which day that
    // is depends on the user's calendar settings).
    "Undaysay",
    "Ondaymay",
    "Uesdaytay",
    "Ednesdayway",
    "Hursdaytay",
    "Ridayfay",
    "Aturdaysay",
    // Abbreviated day names.
    "Unsay",
    "Onmay",
    "Uetay",
    "Edway",
    "Hutay",
    "Rifay",
    "Atsay",
    // Month names.
    "Anuaryjay",
    "Ebruaryfay",
    "Archmay",
    "Aprilway",
    "Aymay",
    "Unejay",
    "Ulyjay",
    "Augustway",
    "Eptembersay",
    "Octoberway",
    "Ovembernay",
    "Ecemberday",
    // Abbreviated month names.
    "Anjay",
    "Ebfay",
    "Armay",
    "Aprway",
    "Aymay",
    "Unjay",
    "Uljay",
    "Augway",
    "Epsay",
    "Octway",
    "Ovnay",
    "Ecday",
    // Affirmative and negative responses.
    "Yesay",
    "Onay",
    // AM 0000 to 1159, PM 1200 to 2359.
    "am",
    "pm",
    // Soft and hard hyphens.
    "-",
    "-",
    // Open and close quotes.
    "\"",
    "\"",
    // Yesterday, today, tomorrow, future.
    "Esterdayyay",
    "Odaytay",
    "Omorrowtay",
    "Uturefay",
    // Reserved ids.
    "",
    "",
    // Native language name.
    NATIVE_NAME,
];

/// The Pig-Latin module. Implements string lookup only.
pub struct PigLatin;

impl Language for PigLatin {
    fn info(&self) -> LanguageInfo {
        LanguageInfo {
            name: NAME,
            native_name: NATIVE_NAME,
            version: VERSION,
            revision: REVISION,
        }
    }

    fn mask(&self) -> LangCaps {
        LangCaps::GET_LANG_STR
    }

    fn strings(&self) -> StringTable {
        StringTable::new(&PIG_STRINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn blank_day_and_native_name() {
        let lang = PigLatin;
        assert_eq!(lang.lang_string(catalog::BLANK), Some(""));
        assert_eq!(lang.lang_string(catalog::DAY_1), Some("Undaysay"));
        assert_eq!(lang.lang_string(catalog::LANG_NAME), Some("Pig-Latin"));
    }

    #[test]
    fn out_of_range_is_absent() {
        assert_eq!(PigLatin.lang_string(9999), None);
        assert_eq!(PigLatin.lang_string(TABLE_LEN as u32), None);
    }

    #[test]
    fn table_is_full_length() {
        assert_eq!(PigLatin.strings().len(), TABLE_LEN);
    }
}
