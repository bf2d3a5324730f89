//! Single-date calendar engine: displayed month, selection, navigation.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::grid::{GridCache, MonthGrid};

/// Reference behavior starts weeks on Sunday.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Calendar-day equality, independent of any time-of-day notion.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Calendar-month equality (year and month both match).
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Shift a date by whole calendar months, clamping the day-of-month when the
/// target month is shorter (Jan 31 + 1 month = Feb 29 in 2024).
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    if delta >= 0 {
        date + Months::new(delta as u32)
    } else {
        date - Months::new(delta.unsigned_abs())
    }
}

/// Today's local date, respecting the DATEPICK_TODAY environment variable
/// so tests can pin the clock.
pub fn today() -> NaiveDate {
    if let Ok(pinned) = std::env::var("DATEPICK_TODAY")
        && let Ok(date) = NaiveDate::parse_from_str(&pinned, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Tracks a displayed month and an optional selected date, and derives the
/// padded month grid on demand.
#[derive(Debug)]
pub struct Calendar {
    displayed_month: NaiveDate,
    selected: Option<NaiveDate>,
    week_start: Weekday,
    cache: GridCache,
}

impl Calendar {
    /// Anchor the displayed month to `seed`, or to today when absent.
    pub fn new(seed: Option<NaiveDate>) -> Self {
        Calendar {
            displayed_month: seed.unwrap_or_else(today),
            selected: None,
            week_start: DEFAULT_WEEK_START,
            cache: GridCache::new(),
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The padded week grid for the displayed month.
    pub fn grid(&mut self) -> &MonthGrid {
        self.cache.get(self.displayed_month, self.week_start)
    }

    /// Shift the displayed month back by one calendar month.
    pub fn prev(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, -1);
    }

    /// Shift the displayed month forward by one calendar month.
    pub fn next(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, 1);
    }

    /// Select a date. Never moves the displayed month.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    /// Overwrite the selection, including clearing it.
    pub fn set_selected(&mut self, selected: Option<NaiveDate>) {
        self.selected = selected;
    }

    /// Re-anchor the displayed month to `date`'s month.
    pub fn anchor_to(&mut self, date: NaiveDate) {
        self.displayed_month = date;
    }
}
