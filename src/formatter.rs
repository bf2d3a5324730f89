//! Terminal rendering of picker state with localization and color support.
//!
//! This is the rendering collaborator: it only reads the grid and selection
//! the engines expose, and produces plain strings so output is testable
//! without a terminal.

use chrono::{Datelike, Duration, Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::grid::MonthGrid;
use crate::range::{is_in_range, is_range_edge};
use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, Selection,
};

/// 7 two-char day cells plus 6 separators.
pub const MONTH_WIDTH: usize = 20;

/// Rendering options resolved once per invocation.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Locale for month and weekday names.
    pub locale: Locale,
    /// Today's date for highlighting.
    pub today: NaiveDate,
}

impl RenderOptions {
    pub fn new(color: bool) -> Self {
        RenderOptions {
            color,
            locale: get_system_locale(),
            today: crate::engine::today(),
        }
    }
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Month name for the given locale.
pub fn month_name(month: u32, locale: Locale) -> String {
    let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
    date.format_localized("%B", locale).to_string()
}

/// 2-character weekday abbreviation for the given locale.
pub fn weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// The seven weekdays starting from `week_start`.
pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Center text within a width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the "Month Year" header line, centered and optionally colored.
pub fn format_month_header(year: i32, month: u32, opts: &RenderOptions) -> String {
    let header = format!("{} {}", month_name(month, opts.locale), year);
    let centered = center_text(&header, MONTH_WIDTH);
    if opts.color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Format the weekday header row honoring the week start.
pub fn format_weekday_headers(week_start: Weekday, opts: &RenderOptions) -> String {
    let mut result = String::new();

    if opts.color {
        result.push_str(COLOR_SAND_YELLOW);
    }

    let order = weekday_order(week_start);
    for (i, &weekday) in order.iter().enumerate() {
        result.push_str(&weekday_short_name(weekday, opts.locale));
        if i < 6 {
            result.push(' ');
        }
    }

    if opts.color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Format a day cell with selection highlighting.
///
/// Color priority: selected/range edge > in range > today > adjacent month
/// dimmed > regular.
fn format_day(
    day: NaiveDate,
    grid: &MonthGrid,
    selection: &Selection,
    opts: &RenderOptions,
    is_last: bool,
) -> String {
    let day_str = format!("{:>2}", day.day());
    let in_month = day.year() == grid.year && day.month() == grid.month;

    let (active, tinted) = match selection {
        Selection::Single(selected) => (*selected == Some(day), false),
        Selection::Range(range) => (is_range_edge(day, range), is_in_range(day, range)),
    };

    let formatted = if !opts.color {
        day_str
    } else if active {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if tinted {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if day == opts.today {
        format!("{}{}{}", COLOR_SAND_YELLOW, day_str, COLOR_RESET)
    } else if !in_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format the picker's month as lines: header, weekday row, week rows.
pub fn format_picker_month(
    grid: &MonthGrid,
    selection: &Selection,
    opts: &RenderOptions,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);

    lines.push(format_month_header(grid.year, grid.month, opts));
    lines.push(format_weekday_headers(grid.week_start, opts));

    for week in &grid.weeks {
        let mut line = String::new();
        for (i, &day) in week.iter().enumerate() {
            line.push_str(&format_day(day, grid, selection, opts, i == 6));
        }
        lines.push(line);
    }

    lines
}

/// Summary lines describing the current selection.
pub fn format_selection(selection: &Selection) -> Vec<String> {
    fn show(date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "—".to_string(),
        }
    }

    match selection {
        Selection::Single(selected) => vec![format!("Selected: {}", show(*selected))],
        Selection::Range(range) => vec![
            format!("Start: {}", show(range.start)),
            format!("End: {}", show(range.end)),
        ],
    }
}
