//! Month grid generation: the displayed month padded to full weeks.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::types::DAYS_PER_WEEK;

/// A month laid out as full weeks of real calendar days.
///
/// The first cell is the start of the week containing the 1st of the month;
/// the last cell is the end of the week containing the month's last day.
/// Leading and trailing cells hold real days from the adjacent months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    pub weeks: Vec<[NaiveDate; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`. Pure and
    /// deterministic: the same anchor month and week start always produce
    /// the same grid.
    pub fn new(anchor: NaiveDate, week_start: Weekday) -> Self {
        let first = anchor.with_day(1).unwrap();
        let last = first + Months::new(1) - Days::new(1);

        let lead = days_from_week_start(first.weekday(), week_start);
        let trail = 6 - days_from_week_start(last.weekday(), week_start);

        let start = first - Days::new(u64::from(lead));
        let end = last + Days::new(u64::from(trail));

        let mut days = Vec::with_capacity(crate::types::MAX_GRID_CELLS);
        let mut day = start;
        while day <= end {
            days.push(day);
            day = day + Days::new(1);
        }

        let weeks = days
            .chunks_exact(DAYS_PER_WEEK)
            .map(|week| <[NaiveDate; DAYS_PER_WEEK]>::try_from(week).unwrap())
            .collect();

        MonthGrid {
            year: anchor.year(),
            month: anchor.month(),
            week_start,
            weeks,
        }
    }

    /// Total cell count (always a multiple of 7).
    pub fn len(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// All cells in order, weeks concatenated.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Flattened index of `day`, if it appears in the grid.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        self.days().position(|d| d == day)
    }

    /// Cell at a flattened index.
    pub fn day_at(&self, index: usize) -> Option<NaiveDate> {
        self.weeks
            .get(index / DAYS_PER_WEEK)
            .map(|week| week[index % DAYS_PER_WEEK])
    }
}

/// Offset of `weekday` within a week beginning on `week_start`.
fn days_from_week_start(weekday: Weekday, week_start: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// Memoized grid keyed by the displayed month's (year, month, week start).
///
/// Correctness never depends on the cache: a miss just rebuilds the grid.
#[derive(Debug, Default)]
pub struct GridCache {
    entry: Option<((i32, u32, Weekday), MonthGrid)>,
}

impl GridCache {
    pub fn new() -> Self {
        GridCache { entry: None }
    }

    /// The grid for the month containing `anchor`, rebuilt only when the
    /// displayed month or week start changed.
    pub fn get(&mut self, anchor: NaiveDate, week_start: Weekday) -> &MonthGrid {
        let key = (anchor.year(), anchor.month(), week_start);
        if self.entry.as_ref().is_none_or(|(k, _)| *k != key) {
            self.entry = Some((key, MonthGrid::new(anchor, week_start)));
        }
        &self.entry.as_ref().unwrap().1
    }
}
