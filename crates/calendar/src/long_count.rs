//! Five-digit mixed-radix Long Count and its conversion to a day count.

use std::fmt;

use crate::error::{CalendarError, Field};

/// Days in one B'ak'tun (20 K'atun).
pub const DAYS_IN_BAKTUN: u32 = 144_000;
/// Days in one K'atun (20 Tun).
pub const DAYS_IN_KATUN: u32 = 7_200;
/// Days in one Tun (18 Winal).
pub const DAYS_IN_TUN: u32 = 360;
/// Days in one Winal (20 K'in).
pub const DAYS_IN_WINAL: u32 = 20;

/// Largest representable day count, 19.19.19.17.19.
pub const MAX_DAYS_SINCE_CREATION: u32 = 20 * DAYS_IN_BAKTUN - 1;

/// Inclusive upper bound of each digit, in baktun..kin order.
const DIGIT_LIMITS: [(Field, i32); 5] = [
    (Field::Baktun, 19),
    (Field::Katun, 19),
    (Field::Tun, 19),
    (Field::Winal, 17),
    (Field::Kin, 19),
];

/// A Long Count date `baktun.katun.tun.winal.kin`.
///
/// Every value held by this type satisfies the digit bounds, so
/// [`LongCount::days`] is always within `0..=MAX_DAYS_SINCE_CREATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LongCount {
    baktun: u8,
    katun: u8,
    tun: u8,
    winal: u8,
    kin: u8,
}

impl LongCount {
    /// Creates a Long Count from its five digits.
    ///
    /// Digits are checked in order baktun, katun, tun, winal, kin and the
    /// first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] naming the offending digit if
    /// any of baktun, katun, tun or kin is outside 0..=19 or winal is
    /// outside 0..=17.
    pub fn new(
        baktun: i32,
        katun: i32,
        tun: i32,
        winal: i32,
        kin: i32,
    ) -> Result<Self, CalendarError> {
        let digits = [baktun, katun, tun, winal, kin];
        for (&value, &(field, max)) in digits.iter().zip(DIGIT_LIMITS.iter()) {
            if !(0..=max).contains(&value) {
                return Err(CalendarError::out_of_range(
                    field,
                    value.into(),
                    0,
                    max.into(),
                ));
            }
        }
        Ok(Self {
            baktun: baktun as u8,
            katun: katun as u8,
            tun: tun as u8,
            winal: winal as u8,
            kin: kin as u8,
        })
    }

    /// Decomposes a day count into Long Count digits.
    ///
    /// `days` must already be within `0..=MAX_DAYS_SINCE_CREATION`; callers
    /// in this crate validate before decomposing.
    pub(crate) const fn from_days(days: u32) -> Self {
        debug_assert!(days <= MAX_DAYS_SINCE_CREATION);
        let mut rest = days;
        let baktun = rest / DAYS_IN_BAKTUN;
        rest %= DAYS_IN_BAKTUN;
        let katun = rest / DAYS_IN_KATUN;
        rest %= DAYS_IN_KATUN;
        let tun = rest / DAYS_IN_TUN;
        rest %= DAYS_IN_TUN;
        let winal = rest / DAYS_IN_WINAL;
        let kin = rest % DAYS_IN_WINAL;
        Self {
            baktun: baktun as u8,
            katun: katun as u8,
            tun: tun as u8,
            winal: winal as u8,
            kin: kin as u8,
        }
    }

    /// Returns the number of days since creation this Long Count denotes.
    pub fn days(self) -> u32 {
        u32::from(self.baktun) * DAYS_IN_BAKTUN
            + u32::from(self.katun) * DAYS_IN_KATUN
            + u32::from(self.tun) * DAYS_IN_TUN
            + u32::from(self.winal) * DAYS_IN_WINAL
            + u32::from(self.kin)
    }

    /// Returns the B'ak'tun digit (0..=19).
    pub fn baktun(self) -> u8 {
        self.baktun
    }

    /// Returns the K'atun digit (0..=19).
    pub fn katun(self) -> u8 {
        self.katun
    }

    /// Returns the Tun digit (0..=19).
    pub fn tun(self) -> u8 {
        self.tun
    }

    /// Returns the Winal digit (0..=17).
    pub fn winal(self) -> u8 {
        self.winal
    }

    /// Returns the K'in digit (0..=19).
    pub fn kin(self) -> u8 {
        self.kin
    }

    /// Returns all five digits, most significant first.
    pub fn digits(self) -> [u8; 5] {
        [self.baktun, self.katun, self.tun, self.winal, self.kin]
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.winal, self.kin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero() {
        let lc = LongCount::new(0, 0, 0, 0, 0).unwrap();
        assert_eq!(lc.days(), 0);
        assert_eq!(lc.digits(), [0, 0, 0, 0, 0]);
    }

    #[test]
    fn new_largest() {
        let lc = LongCount::new(19, 19, 19, 17, 19).unwrap();
        assert_eq!(lc.days(), MAX_DAYS_SINCE_CREATION);
        assert_eq!(MAX_DAYS_SINCE_CREATION, 2_879_999);
    }

    #[test]
    fn digit_weights() {
        assert_eq!(LongCount::new(1, 0, 0, 0, 0).unwrap().days(), 144_000);
        assert_eq!(LongCount::new(0, 1, 0, 0, 0).unwrap().days(), 7_200);
        assert_eq!(LongCount::new(0, 0, 1, 0, 0).unwrap().days(), 360);
        assert_eq!(LongCount::new(0, 0, 0, 1, 0).unwrap().days(), 20);
        assert_eq!(LongCount::new(0, 0, 0, 0, 1).unwrap().days(), 1);
    }

    #[test]
    fn winal_upper_bound_is_17() {
        assert!(LongCount::new(0, 0, 0, 17, 0).is_ok());
        assert_eq!(
            LongCount::new(0, 0, 0, 18, 0).unwrap_err(),
            CalendarError::out_of_range(Field::Winal, 18, 0, 17)
        );
    }

    #[test]
    fn first_violation_reported() {
        // both tun and kin are invalid; tun comes first
        assert_eq!(
            LongCount::new(0, 0, 20, 0, -1).unwrap_err(),
            CalendarError::out_of_range(Field::Tun, 20, 0, 19)
        );
    }

    #[test]
    fn negative_digit_rejected() {
        assert_eq!(
            LongCount::new(0, -1, 0, 0, 0).unwrap_err(),
            CalendarError::out_of_range(Field::Katun, -1, 0, 19)
        );
    }

    #[test]
    fn from_days_decomposes() {
        let lc = LongCount::from_days(1_357_100);
        assert_eq!(lc.digits(), [9, 8, 9, 13, 0]);
    }

    #[test]
    fn from_days_carries() {
        // 19 kin + 1 rolls into the winal
        let lc = LongCount::from_days(20);
        assert_eq!(lc.digits(), [0, 0, 0, 1, 0]);
        // 17 winal + 19 kin + 1 rolls into the tun
        let lc = LongCount::from_days(360);
        assert_eq!(lc.digits(), [0, 0, 1, 0, 0]);
    }

    #[test]
    fn display() {
        let lc = LongCount::new(12, 19, 19, 17, 19).unwrap();
        assert_eq!(lc.to_string(), "12.19.19.17.19");
    }

    #[test]
    fn ord_matches_days() {
        let a = LongCount::new(9, 8, 9, 13, 0).unwrap();
        let b = LongCount::new(9, 12, 11, 5, 18).unwrap();
        assert!(a < b);
        assert!(a.days() < b.days());
    }
}
