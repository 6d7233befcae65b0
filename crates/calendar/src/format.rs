//! Parsing Long Count text and rendering dates through `%` templates.
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%c` | days since creation |
//! | `%L` | Long Count, `B.K.T.W.I` |
//! | `%b` `%k` `%u` `%w` `%i` | baktun, katun, tun, winal, kin |
//! | `%t` | Tzolk'in numeral |
//! | `%T` | Tzolk'in day position (1..=20) |
//! | `%D` | Tzolk'in day name |
//! | `%h` | Haab' day |
//! | `%H` | Haab' month position (1..=19) |
//! | `%M` | Haab' month name |
//! | `%%` | literal `%` |
//!
//! Any other directive produces no output.

use std::fmt::{self, Write};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::date::MayanDate;
use crate::error::CalendarError;

static LONG_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{1,2})")
        .expect("long count pattern is valid")
});

/// Parses the first `B.K.T.W.I` group found anywhere in `text`.
///
/// Text around the match is ignored, so the output of [`MayanDate`]'s
/// `Display` parses back to the same date.
///
/// # Errors
///
/// Returns [`CalendarError::Format`] if no digit-dot pattern is present and
/// [`CalendarError::OutOfRange`] if one of the matched digits is too large.
pub fn parse(text: &str) -> Result<MayanDate, CalendarError> {
    let Some(caps) = LONG_COUNT_RE.captures(text) else {
        debug!(input = text, "no long count pattern");
        return Err(CalendarError::Format {
            input: text.to_string(),
        });
    };
    let digit = |i: usize| {
        caps[i].parse::<i32>().map_err(|_| CalendarError::Format {
            input: text.to_string(),
        })
    };
    MayanDate::new(digit(1)?, digit(2)?, digit(3)?, digit(4)?, digit(5)?)
}

/// Like [`parse`], but reports failure as `None` instead of an error.
pub fn try_parse(text: &str) -> Option<MayanDate> {
    parse(text).ok()
}

/// Renders `date` through `template`. See the module docs for directives.
pub fn render(date: MayanDate, template: &str) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(directive) => push_directive(&mut out, date, directive),
            // trailing '%' is kept as-is
            None => out.push('%'),
        }
    }
    out
}

fn push_directive(out: &mut String, date: MayanDate, directive: char) {
    let lc = date.long_count();
    let tzolkin = date.tzolkin();
    let haab = date.haab();
    // Writing to a String cannot fail.
    let _ = match directive {
        '%' => out.write_char('%'),
        'c' => write!(out, "{}", date.days_since_creation()),
        'L' => write!(out, "{lc}"),
        'b' => write!(out, "{}", lc.baktun()),
        'k' => write!(out, "{}", lc.katun()),
        'u' => write!(out, "{}", lc.tun()),
        'w' => write!(out, "{}", lc.winal()),
        'i' => write!(out, "{}", lc.kin()),
        't' => write!(out, "{}", tzolkin.number()),
        'T' => write!(out, "{}", tzolkin.day().index()),
        'D' => out.write_str(tzolkin.day().name()),
        'h' => write!(out, "{}", haab.day()),
        'H' => write!(out, "{}", haab.month().index()),
        'M' => out.write_str(haab.month().name()),
        _ => Ok(()),
    };
}

impl MayanDate {
    /// Renders this date through a `%` template. See [`render`].
    pub fn format(self, template: &str) -> String {
        render(self, template)
    }
}

impl fmt::Display for MayanDate {
    /// Writes `B.K.T.W.I, N NAME D MONTH`, e.g. `0.0.0.0.0, 4 Ajaw 8 Kumk'u`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.long_count(), self.tzolkin(), self.haab())
    }
}

impl FromStr for MayanDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
