use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mayan calendar converter.
#[derive(Parser)]
#[command(
    name = "maya",
    version,
    about = "Convert between Mayan Long Count and Gregorian dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. A missing file means defaults.
    #[arg(short, long, global = true, default_value = "maya.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date or a Long Count.
    Convert(ConvertArgs),
    /// Show today's Mayan date.
    Today(TodayArgs),
    /// Add (or subtract) days to a Long Count.
    Add(AddArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (e.g. 0603-03-24) or Long Count (e.g. 9.8.9.13.0).
    pub input: String,

    /// Output template, e.g. "%L %t %D". Overrides [render].template.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Output template. Overrides [render].template.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Starting Long Count.
    pub input: String,

    /// Number of days to add; negative to go back.
    #[arg(allow_hyphen_values = true)]
    pub days: i64,

    /// Output template. Overrides [render].template.
    #[arg(short, long)]
    pub format: Option<String>,
}
