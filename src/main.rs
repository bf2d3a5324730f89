//! Date-picker demo CLI.
//!
//! # Usage
//! ```ignore
//! datepick                                  // Current month, nothing selected
//! datepick 2024-01-10                       // January 2024
//! datepick 2024-01-10 -p 2024-01-05         // Select January 5
//! datepick --mode range -p 2024-01-05 -p 2024-01-07
//! ```

use std::io::IsTerminal;

use datepick::args::{Args, parse_date, week_start};
use datepick::formatter::{RenderOptions, format_picker_month, format_selection};
use datepick::picker::{DatePicker, RangePicker};
use datepick::types::PickMode;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("datepick: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let color = !args.no_color && std::io::stdout().is_terminal();
    let opts = RenderOptions::new(color);
    let seed = match &args.seed {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };

    let lines = match args.mode {
        PickMode::Single => {
            let mut picker = DatePicker::uncontrolled(seed).with_week_start(week_start(args));
            for _ in 0..args.prev {
                picker.prev();
            }
            for _ in 0..args.next {
                picker.next();
            }
            for pick in &args.picks {
                picker.click(parse_date(pick)?);
            }
            let selection = picker.selection();
            let mut lines = format_picker_month(picker.grid(), &selection, &opts);
            lines.extend(format_selection(&selection));
            lines
        }
        PickMode::Range => {
            let mut picker =
                RangePicker::uncontrolled(None).with_week_start(week_start(args));
            if let Some(seed) = seed {
                picker.anchor_to(seed);
            }
            for _ in 0..args.prev {
                picker.prev();
            }
            for _ in 0..args.next {
                picker.next();
            }
            for pick in &args.picks {
                picker.click(parse_date(pick)?);
            }
            let selection = picker.selection();
            let mut lines = format_picker_month(picker.grid(), &selection, &opts);
            lines.extend(format_selection(&selection));
            lines
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
