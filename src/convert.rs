//! Pure helpers shared by the subcommands: input recognition and output lines.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use maya_calendar::{CalendarError, Field, MayanDate, parse};

use crate::config::MayaConfig;

/// What a line of user input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A Gregorian date and its Mayan equivalent.
    Gregorian(NaiveDate, MayanDate),
    /// A Long Count.
    Mayan(MayanDate),
}

/// Recognises `text` as a Gregorian date in `gregorian_format`, falling
/// back to a Long Count.
pub fn parse_input(text: &str, gregorian_format: &str) -> Result<Input> {
    let text = text.trim();
    if let Ok(gregorian) = NaiveDate::parse_from_str(text, gregorian_format) {
        debug!(%gregorian, "input recognised as gregorian");
        let mayan = MayanDate::from_gregorian(gregorian)
            .with_context(|| format!("{gregorian} has no Mayan Long Count"))?;
        return Ok(Input::Gregorian(gregorian, mayan));
    }
    let mayan = parse(text).with_context(|| {
        format!(
            "unknown input {text:?}: try a Long Count like 9.8.9.13.0 \
             or a date like 0603-03-24"
        )
    })?;
    Ok(Input::Mayan(mayan))
}

/// Picks the CLI template over the configured one.
pub fn resolve_template<'a>(cli: Option<&'a str>, config: &'a MayaConfig) -> Option<&'a str> {
    cli.or(config.render.template.as_deref())
}

/// Renders a date with `template`, or in the default form when there is none.
pub fn render_mayan(date: MayanDate, template: Option<&str>) -> String {
    match template {
        Some(t) => date.format(t),
        None => date.to_string(),
    }
}

/// Describes the Gregorian equivalent of `date`.
pub fn describe_gregorian(date: MayanDate) -> Result<String> {
    match date.to_gregorian() {
        Ok(gregorian) => Ok(gregorian.format("%A, %-d %B %Y").to_string()),
        Err(CalendarError::OutOfRange {
            field: Field::Gregorian,
            ..
        }) => Ok("(before 1 CE, no Gregorian date)".to_string()),
        Err(e) => Err(e.into()),
    }
}
