//! Range selection engine implementing the two-click protocol.

use chrono::{NaiveDate, Weekday};

use crate::engine::Calendar;
use crate::grid::MonthGrid;
use crate::types::DateRange;

/// The next range after clicking `clicked` with `current` selected. Pure:
/// callers apply the result, which lets them preview a click before
/// committing it.
///
/// Protocol:
/// - no start yet, or a completed range: restart with `clicked` as the open
///   start (the third click always begins a new range);
/// - open start, click before it: the click becomes the start and the old
///   start becomes the end, so `start <= end` holds without rejecting
///   out-of-order clicks;
/// - open start, click on or after it: the click closes the range
///   (re-clicking the start yields a zero-length range).
pub fn next_range(clicked: NaiveDate, current: DateRange) -> DateRange {
    match (current.start, current.end) {
        (None, _) | (Some(_), Some(_)) => DateRange::from_date(clicked),
        (Some(start), None) if clicked < start => DateRange {
            start: Some(clicked),
            end: Some(start),
        },
        (Some(start), None) => DateRange {
            start: Some(start),
            end: Some(clicked),
        },
    }
}

/// True iff both endpoints are set and `start <= day <= end`, inclusive at
/// calendar-day granularity.
pub fn is_in_range(day: NaiveDate, range: &DateRange) -> bool {
    match (range.start, range.end) {
        (Some(start), Some(end)) => start <= day && day <= end,
        _ => false,
    }
}

/// True iff `day` equals either endpoint.
pub fn is_range_edge(day: NaiveDate, range: &DateRange) -> bool {
    range.start == Some(day) || range.end == Some(day)
}

/// Wraps the month/grid machinery of [`Calendar`] and tracks a start/end
/// pair built through the click protocol.
#[derive(Debug)]
pub struct RangeCalendar {
    calendar: Calendar,
    selected_range: DateRange,
}

impl RangeCalendar {
    /// Anchor to the seed range's start (or end), or to today when empty.
    /// The seed is normalized on the way in.
    pub fn new(seed: Option<DateRange>) -> Self {
        let initial = seed.unwrap_or(DateRange::EMPTY).normalized();
        RangeCalendar {
            calendar: Calendar::new(initial.anchor()),
            selected_range: initial,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.calendar = self.calendar.with_week_start(week_start);
        self
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.calendar.displayed_month()
    }

    pub fn week_start(&self) -> Weekday {
        self.calendar.week_start()
    }

    pub fn selected_range(&self) -> DateRange {
        self.selected_range
    }

    pub fn grid(&mut self) -> &MonthGrid {
        self.calendar.grid()
    }

    /// Navigation never resets the selection.
    pub fn prev(&mut self) {
        self.calendar.prev();
    }

    pub fn next(&mut self) {
        self.calendar.next();
    }

    /// Apply one click of the protocol to the current selection.
    pub fn pick(&mut self, day: NaiveDate) {
        self.selected_range = next_range(day, self.selected_range);
    }

    /// Replace the selection with an externally supplied range, normalizing
    /// inverted endpoints on the way in.
    pub fn select_range(&mut self, range: DateRange) {
        self.selected_range = range.normalized();
    }

    pub fn anchor_to(&mut self, date: NaiveDate) {
        self.calendar.anchor_to(date);
    }
}
