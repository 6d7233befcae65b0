//! The 260-day Tzolk'in ritual cycle.

use std::fmt;

/// Numerals in the Tzolk'in cycle.
pub const NUMERALS_IN_TZOLKIN_CYCLE: u32 = 13;
/// Named days in the Tzolk'in cycle.
pub const DAYS_IN_TZOLKIN_CYCLE: u32 = 20;

/// Display names, index 0 = Imix', index 19 = Ajaw.
#[rustfmt::skip]
const TZOLKIN_DAY_NAMES: [&str; 20] = [
    "Imix'", "Ik", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "Kib'", "Kab'an", "Etz'nab", "Kawak", "Ajaw",
];

/// The twenty named days of the Tzolk'in, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TzolkinDay {
    Imix = 1,
    Ik,
    Akbal,
    Kan,
    Chikchan,
    Kimi,
    Manik,
    Lamat,
    Muluk,
    Ok,
    Chuwen,
    Eb,
    Ben,
    Ix,
    Men,
    Kib,
    Kaban,
    Etznab,
    Kawak,
    Ajaw,
}

impl TzolkinDay {
    /// All named days, Imix first.
    pub const ALL: [TzolkinDay; 20] = [
        TzolkinDay::Imix,
        TzolkinDay::Ik,
        TzolkinDay::Akbal,
        TzolkinDay::Kan,
        TzolkinDay::Chikchan,
        TzolkinDay::Kimi,
        TzolkinDay::Manik,
        TzolkinDay::Lamat,
        TzolkinDay::Muluk,
        TzolkinDay::Ok,
        TzolkinDay::Chuwen,
        TzolkinDay::Eb,
        TzolkinDay::Ben,
        TzolkinDay::Ix,
        TzolkinDay::Men,
        TzolkinDay::Kib,
        TzolkinDay::Kaban,
        TzolkinDay::Etznab,
        TzolkinDay::Kawak,
        TzolkinDay::Ajaw,
    ];

    /// Returns the day for a 1-based cycle position, or `None` outside 1..=20.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// Returns the 1-based cycle position (1..=20).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the display name, e.g. `"Ak'b'al"`.
    pub fn name(self) -> &'static str {
        TZOLKIN_DAY_NAMES[usize::from(self.index()) - 1]
    }
}

impl fmt::Display for TzolkinDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Tzolk'in date: numeral plus named day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tzolkin {
    number: u8,
    day: TzolkinDay,
}

impl Tzolkin {
    /// Derives the Tzolk'in date for a day count.
    ///
    /// Creation day was 4 Ajaw. The numeral is `(4 + days) % 13` with no
    /// shift into 1..=13, so it reads 0 on every thirteenth day.
    pub(crate) const fn from_days(days: u32) -> Self {
        let number = (4 + days) % NUMERALS_IN_TZOLKIN_CYCLE;
        // Ajaw is the last named day, so counting starts at position 20.
        let index = (19 + days % DAYS_IN_TZOLKIN_CYCLE) % DAYS_IN_TZOLKIN_CYCLE + 1;
        Self {
            number: number as u8,
            day: TzolkinDay::ALL[(index - 1) as usize],
        }
    }

    /// Returns the numeral.
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the named day.
    pub fn day(self) -> TzolkinDay {
        self.day
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.day)
    }
}
