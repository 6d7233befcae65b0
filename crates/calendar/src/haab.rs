//! The 365-day Haab' civil cycle.

use std::fmt;

/// Days in a Haab' year.
pub const DAYS_IN_HAAB_YEAR: u32 = 365;
/// Days in a named Haab' month. Wayeb' has only five.
pub const DAYS_IN_HAAB_MONTH: u32 = 20;

/// Creation (8 Kumk'u) falls this many days before a Haab' new year.
const DAYS_BEFORE_NEW_YEAR: u32 = 17;

const HAAB_MONTH_NAMES: [&str; 19] = [
    "Pop",
    "Wo'",
    "Sip",
    "Sotz'",
    "Sek",
    "Xul",
    "Yaxk'in'",
    "Mol",
    "Ch'en",
    "Yax",
    "Sak'",
    "Keh",
    "Mak",
    "K'ank'in'",
    "Muwan'",
    "Pax",
    "K'ayab",
    "Kumk'u",
    "Wayeb'",
];

/// The eighteen Haab' months followed by the five nameless days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HaabMonth {
    Pop = 1,
    Wo,
    Sip,
    Sotz,
    Sek,
    Xul,
    Yaxkin,
    Mol,
    Chen,
    Yax,
    Sak,
    Keh,
    Mak,
    Kankin,
    Muwan,
    Pax,
    Kayab,
    Kumku,
    Wayeb,
}

impl HaabMonth {
    /// All months, Pop first and Wayeb' last.
    pub const ALL: [HaabMonth; 19] = [
        HaabMonth::Pop,
        HaabMonth::Wo,
        HaabMonth::Sip,
        HaabMonth::Sotz,
        HaabMonth::Sek,
        HaabMonth::Xul,
        HaabMonth::Yaxkin,
        HaabMonth::Mol,
        HaabMonth::Chen,
        HaabMonth::Yax,
        HaabMonth::Sak,
        HaabMonth::Keh,
        HaabMonth::Mak,
        HaabMonth::Kankin,
        HaabMonth::Muwan,
        HaabMonth::Pax,
        HaabMonth::Kayab,
        HaabMonth::Kumku,
        HaabMonth::Wayeb,
    ];

    /// Returns the month for a 1-based position, or `None` outside 1..=19.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// Returns the 1-based position (1..=19).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the display name, e.g. `"Kumk'u"`.
    pub fn name(self) -> &'static str {
        HAAB_MONTH_NAMES[usize::from(self.index()) - 1]
    }
}

impl fmt::Display for HaabMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Haab' date: day within month (0..=19) plus month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Haab {
    day: u8,
    month: HaabMonth,
}

impl Haab {
    /// Derives the Haab' date for a day count.
    pub(crate) const fn from_days(days: u32) -> Self {
        let since_new_year =
            (days + DAYS_IN_HAAB_YEAR - DAYS_BEFORE_NEW_YEAR) % DAYS_IN_HAAB_YEAR;
        let day = since_new_year % DAYS_IN_HAAB_MONTH;
        let month = since_new_year / DAYS_IN_HAAB_MONTH;
        Self {
            day: day as u8,
            month: HaabMonth::ALL[month as usize],
        }
    }

    /// Returns the day within the month (0..=19, 0..=4 in Wayeb').
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month.
    pub fn month(self) -> HaabMonth {
        self.month
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}
