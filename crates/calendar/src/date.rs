//! Mayan date anchored on the canonical day count.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::{CalendarError, Field};
use crate::haab::Haab;
use crate::long_count::{LongCount, MAX_DAYS_SINCE_CREATION};
use crate::tzolkin::Tzolkin;

/// A date in the Mayan calendar, 0.0.0.0.0 through 19.19.19.17.19.
///
/// The number of days since creation is the only independent quantity.
/// The Long Count digits and the Tzolk'in and Haab' dates are derived from
/// it once, at construction, and never change afterwards. Equality,
/// hashing and ordering look at the day count alone.
#[derive(Debug, Clone, Copy)]
pub struct MayanDate {
    days: u32,
    long_count: LongCount,
    tzolkin: Tzolkin,
    haab: Haab,
}

impl PartialEq for MayanDate {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl Eq for MayanDate {}

impl Hash for MayanDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.days.hash(state);
    }
}

impl PartialOrd for MayanDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MayanDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days.cmp(&other.days)
    }
}

impl MayanDate {
    /// Day of creation, 0.0.0.0.0 (4 Ajaw 8 Kumk'u).
    pub const MIN: MayanDate = MayanDate::derive(0);

    /// Last day before the 20th B'ak'tun, 19.19.19.17.19.
    pub const MAX: MayanDate = MayanDate::derive(MAX_DAYS_SINCE_CREATION);

    /// Creates a date from its Long Count digits.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] for the first digit outside its
    /// bound (baktun, katun, tun, kin: 0..=19; winal: 0..=17).
    pub fn new(
        baktun: i32,
        katun: i32,
        tun: i32,
        winal: i32,
        kin: i32,
    ) -> Result<Self, CalendarError> {
        let long_count = LongCount::new(baktun, katun, tun, winal, kin)?;
        Ok(Self::from_long_count(long_count))
    }

    /// Creates a date from an already-validated [`LongCount`].
    pub fn from_long_count(long_count: LongCount) -> Self {
        Self::derive(long_count.days())
    }

    /// Creates a date from the number of days since creation.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `days` is not in
    /// `0..=2_879_999`.
    pub fn from_days(days: i64) -> Result<Self, CalendarError> {
        match u32::try_from(days) {
            Ok(d) if d <= MAX_DAYS_SINCE_CREATION => Ok(Self::derive(d)),
            _ => Err(CalendarError::out_of_range(
                Field::DaysSinceCreation,
                days,
                0,
                MAX_DAYS_SINCE_CREATION.into(),
            )),
        }
    }

    /// Computes every derived view from a validated day count.
    const fn derive(days: u32) -> Self {
        Self {
            days,
            long_count: LongCount::from_days(days),
            tzolkin: Tzolkin::from_days(days),
            haab: Haab::from_days(days),
        }
    }

    /// Returns a new date `delta` days later (earlier when negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result falls outside
    /// 0.0.0.0.0..=19.19.19.17.19.
    pub fn add_days(self, delta: i64) -> Result<Self, CalendarError> {
        let days = i64::from(self.days).saturating_add(delta);
        Self::from_days(days)
    }

    /// Returns the number of days since creation (0..=2_879_999).
    pub fn days_since_creation(self) -> u32 {
        self.days
    }

    /// Returns the Long Count view of this date.
    pub fn long_count(self) -> LongCount {
        self.long_count
    }

    /// Returns the Tzolk'in date.
    pub fn tzolkin(self) -> Tzolkin {
        self.tzolkin
    }

    /// Returns the Haab' date.
    pub fn haab(self) -> Haab {
        self.haab
    }
}
