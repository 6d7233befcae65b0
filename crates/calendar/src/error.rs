//! Error types for the maya-calendar crate.

use std::fmt;

/// The numeric quantity that failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// B'ak'tun digit (0..=19).
    Baktun,
    /// K'atun digit (0..=19).
    Katun,
    /// Tun digit (0..=19).
    Tun,
    /// Winal digit (0..=17).
    Winal,
    /// K'in digit (0..=19).
    Kin,
    /// Canonical day count since creation (0..=2_879_999).
    DaysSinceCreation,
    /// Day count whose Gregorian equivalent falls before 0001-01-01.
    Gregorian,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Baktun => "baktun",
            Field::Katun => "katun",
            Field::Tun => "tun",
            Field::Winal => "winal",
            Field::Kin => "kin",
            Field::DaysSinceCreation => "days since creation",
            Field::Gregorian => "gregorian date",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations in the maya-calendar crate.
///
/// `OutOfRange` means the input was well-formed but a number fell outside
/// its closed bound; `Format` means the text did not contain a Long Count
/// at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a digit, day count or correlated date violates its bound.
    #[error("{field} out of range: {value} (must be {min}..={max})")]
    OutOfRange {
        /// Which quantity was rejected.
        field: Field,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// Returned when the input text contains no `B.K.T.W.I` pattern.
    #[error("not a Long Count date: {input:?}")]
    Format {
        /// The text that failed to parse.
        input: String,
    },
}

impl CalendarError {
    pub(crate) fn out_of_range(field: Field, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range_digit() {
        let err = CalendarError::out_of_range(Field::Winal, 18, 0, 17);
        assert_eq!(err.to_string(), "winal out of range: 18 (must be 0..=17)");
    }

    #[test]
    fn error_out_of_range_days() {
        let err = CalendarError::out_of_range(Field::DaysSinceCreation, -1, 0, 2_879_999);
        assert_eq!(
            err.to_string(),
            "days since creation out of range: -1 (must be 0..=2879999)"
        );
    }

    #[test]
    fn error_format() {
        let err = CalendarError::Format {
            input: "hello".to_string(),
        };
        assert_eq!(err.to_string(), "not a Long Count date: \"hello\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::out_of_range(Field::Kin, 21, 0, 19);
        let b = CalendarError::out_of_range(Field::Kin, 21, 0, 19);
        assert_eq!(a, b);

        let c = CalendarError::out_of_range(Field::Tun, 21, 0, 19);
        assert_ne!(a, c);
    }
}
