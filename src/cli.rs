use std::path::PathBuf;

use calendar_grid::{CalendarDate, ReferenceMonth};
use clap::Parser;

/// Month-view calendar with same-day conflict flags.
#[derive(Debug, Parser)]
#[command(name = "calendar-grid", version, about = "Month-view calendar for the terminal")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON events file; overrides `events` from the config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Month to open, as YYYY-MM. Defaults to the month containing today.
    #[arg(short, long)]
    pub month: Option<ReferenceMonth>,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the clock.
    #[arg(long)]
    pub today: Option<CalendarDate>,

    /// Order each day's events by start time instead of file order.
    #[arg(long)]
    pub sort_by_time: bool,

    /// Print the month as plain text and exit.
    #[arg(long)]
    pub print: bool,
}
