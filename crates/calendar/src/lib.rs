//! # maya-calendar
//!
//! Mayan Long Count, Tzolk'in and Haab' dates, correlated with the
//! proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(b, k, t, w, i)"] -->|"MayanDate::new()"| C["days since creation"]
//!     B["NaiveDate"] -->|"MayanDate::from_gregorian()"| C
//!     S["&str"] -->|"parse()"| A
//!     C -->|".long_count()"| L["LongCount"]
//!     C -->|".tzolkin()"| T["Tzolkin"]
//!     C -->|".haab()"| H["Haab"]
//!     C -->|".to_gregorian()"| B
//!     C -->|"render()"| O["String"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use maya_calendar::{TzolkinDay, parse};
//!
//! let birth = parse("9.8.9.13.0").unwrap();
//! assert_eq!(birth.tzolkin().number(), 8);
//! assert_eq!(birth.tzolkin().day(), TzolkinDay::Ajaw);
//! assert_eq!(birth.to_string(), "9.8.9.13.0, 8 Ajaw 13 Pop");
//! assert_eq!(birth.to_gregorian().unwrap().to_string(), "0603-03-24");
//!
//! let next = birth.add_days(1).unwrap();
//! assert_eq!(next.format("%L %t %D"), "9.8.9.13.1 9 Imix'");
//! assert!(birth < next);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `long_count` | Five-digit Long Count and digit validation |
//! | `tzolkin` | 260-day ritual cycle |
//! | `haab` | 365-day civil cycle |
//! | `date` | `MayanDate`, the canonical day count and its derived views |
//! | `correlation` | GMT correlation with the Gregorian calendar |
//! | `format` | Long Count parsing and `%` template rendering |
//! | `error` | Error types |

mod correlation;
mod date;
mod error;
mod format;
mod haab;
mod long_count;
mod tzolkin;

pub use correlation::{GREGORIAN_MIN_DAYS, MAYAN_ANCHOR_DAYS, gregorian_anchor};
pub use date::MayanDate;
pub use error::{CalendarError, Field};
pub use format::{parse, render, try_parse};
pub use haab::{DAYS_IN_HAAB_MONTH, DAYS_IN_HAAB_YEAR, Haab, HaabMonth};
pub use long_count::{
    DAYS_IN_BAKTUN, DAYS_IN_KATUN, DAYS_IN_TUN, DAYS_IN_WINAL, LongCount,
    MAX_DAYS_SINCE_CREATION,
};
pub use tzolkin::{DAYS_IN_TZOLKIN_CYCLE, NUMERALS_IN_TZOLKIN_CYCLE, Tzolkin, TzolkinDay};
