//! Convert command: one Gregorian date or Long Count in, both calendars out.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::ConvertArgs;
use crate::config::MayaConfig;
use crate::convert::{self, Input};

/// Run the convert command.
pub fn run(args: ConvertArgs, config: &MayaConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let template = convert::resolve_template(args.format.as_deref(), config);

    match convert::parse_input(&args.input, &config.input.gregorian_format)? {
        Input::Gregorian(gregorian, mayan) => {
            info!(
                %gregorian,
                days = mayan.days_since_creation(),
                "converted gregorian date"
            );
            println!("{}", convert::render_mayan(mayan, template));
        }
        Input::Mayan(mayan) => {
            info!(long_count = %mayan.long_count(), "parsed long count");
            println!("{}", convert::render_mayan(mayan, template));
            if config.render.show_gregorian {
                println!("{}", convert::describe_gregorian(mayan)?);
            }
        }
    }
    Ok(())
}
