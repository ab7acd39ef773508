// CLASSIFICATION: COMMUNITY
// Filename: catalog.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-11-20

//! Locale string catalog.
//!
//! Every language module carries one [`StringTable`]: an ordered, fixed-size
//! table of immutable strings built once at install time and never mutated.
//! Ids index the table directly; an out-of-range id is a normal absent
//! result, not an error.

/// Blank string.
pub const BLANK: u32 = 0;

/// Day names, starting with the first day of the week (Sunday here).
pub const DAY_1: u32 = 1;
pub const DAY_2: u32 = 2;
pub const DAY_3: u32 = 3;
pub const DAY_4: u32 = 4;
pub const DAY_5: u32 = 5;
pub const DAY_6: u32 = 6;
pub const DAY_7: u32 = 7;

/// Abbreviated day names.
pub const ABDAY_1: u32 = 8;
pub const ABDAY_2: u32 = 9;
pub const ABDAY_3: u32 = 10;
pub const ABDAY_4: u32 = 11;
pub const ABDAY_5: u32 = 12;
pub const ABDAY_6: u32 = 13;
pub const ABDAY_7: u32 = 14;

/// Month names.
pub const MON_1: u32 = 15;
pub const MON_2: u32 = 16;
pub const MON_3: u32 = 17;
pub const MON_4: u32 = 18;
pub const MON_5: u32 = 19;
pub const MON_6: u32 = 20;
pub const MON_7: u32 = 21;
pub const MON_8: u32 = 22;
pub const MON_9: u32 = 23;
pub const MON_10: u32 = 24;
pub const MON_11: u32 = 25;
pub const MON_12: u32 = 26;

/// Abbreviated month names.
pub const ABMON_1: u32 = 27;
pub const ABMON_2: u32 = 28;
pub const ABMON_3: u32 = 29;
pub const ABMON_4: u32 = 30;
pub const ABMON_5: u32 = 31;
pub const ABMON_6: u32 = 32;
pub const ABMON_7: u32 = 33;
pub const ABMON_8: u32 = 34;
pub const ABMON_9: u32 = 35;
pub const ABMON_10: u32 = 36;
pub const ABMON_11: u32 = 37;
pub const ABMON_12: u32 = 38;

/// Affirmative response.
pub const YES_STR: u32 = 39;
/// Negative response.
pub const NO_STR: u32 = 40;

/// AM string, 0000 to 1159.
pub const AM_STR: u32 = 41;
/// PM string, 1200 to 2359.
pub const PM_STR: u32 = 42;

pub const SOFT_HYPHEN: u32 = 43;
pub const HARD_HYPHEN: u32 = 44;

pub const OPEN_QUOTE: u32 = 45;
pub const CLOSE_QUOTE: u32 = 46;

/// Relative day names.
pub const YESTERDAY_STR: u32 = 47;
pub const TODAY_STR: u32 = 48;
pub const TOMORROW_STR: u32 = 49;
pub const FUTURE_STR: u32 = 50;

// Ids 51 and 52 are reserved and resolve to the blank string.

/// Native name of the language itself.
pub const LANG_NAME: u32 = 53;

/// Number of entries in a full catalog table. Ids at or above this are
/// absent in every language.
pub const TABLE_LEN: usize = 54;

/// Ordered, immutable table of locale strings for one language.
#[derive(Clone, Copy, Debug)]
pub struct StringTable {
    entries: &'static [&'static str],
}

impl StringTable {
    pub const fn new(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }

    /// Return the string stored at `id`, or `None` when `id` is out of
    /// range. Pure and safe to call from any thread; the backing data is
    /// `'static` and never mutated.
    pub fn lookup(&self, id: u32) -> Option<&'static str> {
        self.entries.get(id as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
