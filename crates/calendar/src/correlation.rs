//! Correlation with the proleptic Gregorian calendar.
//!
//! Every conversion is an offset from a single anchor pair,
//! 1539-11-12 = 11.16.0.0.0 (the GMT correlation).

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use tracing::debug;

use crate::date::MayanDate;
use crate::error::{CalendarError, Field};
use crate::long_count::{DAYS_IN_BAKTUN, DAYS_IN_KATUN, MAX_DAYS_SINCE_CREATION};

/// Day count of the Mayan side of the anchor, 11.16.0.0.0.
pub const MAYAN_ANCHOR_DAYS: u32 = 11 * DAYS_IN_BAKTUN + 16 * DAYS_IN_KATUN;

/// Day count of 0001-01-01 (7.17.18.13.3), the earliest date
/// [`MayanDate::to_gregorian`] can produce.
pub const GREGORIAN_MIN_DAYS: u32 = 1_137_143;

/// Returns the Gregorian side of the anchor, 1539-11-12.
pub fn gregorian_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1539, 11, 12).expect("1539-11-12 is a valid date")
}

impl MayanDate {
    /// Creates a date from a proleptic Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the date falls before
    /// 0.0.0.0.0 (3114 BCE) or after 19.19.19.17.19.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let offset = date.signed_duration_since(gregorian_anchor()).num_days();
        Self::from_days(i64::from(MAYAN_ANCHOR_DAYS) + offset)
    }

    /// Converts to a proleptic Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] with [`Field::Gregorian`] for
    /// dates before 7.17.18.13.3, whose Gregorian equivalent precedes
    /// 0001-01-01.
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        let days = self.days_since_creation();
        let offset = i64::from(days) - i64::from(MAYAN_ANCHOR_DAYS);
        match gregorian_anchor().checked_add_signed(TimeDelta::days(offset)) {
            Some(date) if date.year() >= 1 => Ok(date),
            _ => {
                debug!(days, "long count predates the gregorian year 1");
                Err(CalendarError::out_of_range(
                    Field::Gregorian,
                    days.into(),
                    GREGORIAN_MIN_DAYS.into(),
                    MAX_DAYS_SINCE_CREATION.into(),
                ))
            }
        }
    }

    /// Returns today's date according to the local clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] once the clock passes
    /// 19.19.19.17.19 (4772 CE).
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_gregorian(Local::now().date_naive())
    }
}
