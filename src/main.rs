mod add_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::MayaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MayaConfig::load(&cli.config)?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Today(args) => today_cmd::run(args, &config),
        Command::Add(args) => add_cmd::run(args, &config),
    }
}
