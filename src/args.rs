//! Command-line argument parsing using clap.
//!
//! The binary is a non-interactive demo of the engines: seed a month,
//! navigate, and replay picks through the selection protocol.

use chrono::{NaiveDate, Weekday};
use clap::Parser;

use crate::types::PickMode;

#[derive(Parser, Debug)]
#[command(name = "datepick")]
#[command(about = "Renders a date-picker month and replays selection picks", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Seed date (YYYY-MM-DD) anchoring the displayed month; defaults to today.
    #[arg(index = 1, value_name = "date")]
    pub seed: Option<String>,

    /// Selection mode.
    #[arg(
        long,
        value_enum,
        default_value = "single",
        help_heading = "Selection options"
    )]
    pub mode: PickMode,

    /// Apply a pick (YYYY-MM-DD) through the selection protocol; repeatable,
    /// applied in order.
    #[arg(
        short = 'p',
        long = "pick",
        value_name = "date",
        help_heading = "Selection options"
    )]
    pub picks: Vec<String>,

    /// Navigate forward this many months after seeding.
    #[arg(
        long,
        value_name = "n",
        default_value_t = 0,
        help_heading = "Navigation options"
    )]
    pub next: u32,

    /// Navigate backward this many months after seeding.
    #[arg(
        long,
        value_name = "n",
        default_value_t = 0,
        help_heading = "Navigation options"
    )]
    pub prev: u32,

    /// Week starts on Monday (default is Sunday).
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Render a date-picker month and replay selection picks.

Without any arguments, display the current month with nothing selected.

Examples:
  datepick                                   Current month
  datepick 2024-01-10                        January 2024
  datepick 2024-01-10 --next 1               February 2024
  datepick 2024-01-10 -p 2024-01-05          Select January 5
  datepick --mode range -p 2024-01-05 -p 2024-01-07
                                             Select the range Jan 5 - Jan 7
  datepick -m                                Week starts on Monday";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Parse an ISO calendar date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {} (expected YYYY-MM-DD)", s))
}

pub fn week_start(args: &Args) -> Weekday {
    if args.monday {
        Weekday::Mon
    } else {
        Weekday::Sun
    }
}
