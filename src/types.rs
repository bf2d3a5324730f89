//! Type definitions and constants shared by the picker engines.

use chrono::NaiveDate;
use clap::ValueEnum;

/// Selection mode for the picker widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PickMode {
    /// Pick a single date.
    Single,
    /// Pick an inclusive start/end range.
    Range,
}

/// An inclusive date range with optional endpoints.
///
/// Invariant: when both endpoints are set, `start <= end`. Construction and
/// normalization enforce this by swapping, never by rejecting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    /// Build a normalized range from two optional endpoints.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange { start, end }.normalized()
    }

    /// Seed a range from a single date: it becomes the open start.
    pub fn from_date(date: NaiveDate) -> Self {
        DateRange {
            start: Some(date),
            end: None,
        }
    }

    /// Swap inverted endpoints. Malformed input is corrected, not rejected.
    pub fn normalized(self) -> Self {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => DateRange {
                start: Some(end),
                end: Some(start),
            },
            _ => self,
        }
    }

    /// Both endpoints set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// The date the displayed month should anchor to, if any.
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.start.or(self.end)
    }
}

/// What the picker currently holds, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Option<NaiveDate>),
    Range(DateRange),
}

// Grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const MIN_GRID_CELLS: usize = 28; // 4 full weeks
pub const MAX_GRID_CELLS: usize = 42; // 6 full weeks

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
