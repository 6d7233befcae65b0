//! Today command: the current local date in the Mayan calendar.

use anyhow::{Context, Result};
use tracing::info;

use maya_calendar::MayanDate;

use crate::cli::TodayArgs;
use crate::config::MayaConfig;
use crate::convert;

/// Run the today command.
pub fn run(args: TodayArgs, config: &MayaConfig) -> Result<()> {
    let today = MayanDate::today().context("today is outside the Long Count")?;
    info!(days = today.days_since_creation(), "resolved today");
    let template = convert::resolve_template(args.format.as_deref(), config);
    println!("{}", convert::render_mayan(today, template));
    Ok(())
}
