//! Add command: shift a Long Count by a number of days.

use anyhow::{Context, Result};
use tracing::info;

use maya_calendar::parse;

use crate::cli::AddArgs;
use crate::config::MayaConfig;
use crate::convert;

/// Run the add command.
pub fn run(args: AddArgs, config: &MayaConfig) -> Result<()> {
    let start =
        parse(&args.input).with_context(|| format!("invalid Long Count {:?}", args.input))?;
    let shifted = start.add_days(args.days).with_context(|| {
        format!(
            "{} {:+} days leaves the Long Count",
            start.long_count(),
            args.days
        )
    })?;
    info!(from = %start.long_count(), to = %shifted.long_count(), "shifted date");
    let template = convert::resolve_template(args.format.as_deref(), config);
    println!("{}", convert::render_mayan(shifted, template));
    Ok(())
}
