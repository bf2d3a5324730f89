//! Headless picker widgets tying the engines to controlled values,
//! keyboard focus, and change/cancel callbacks.
//!
//! These play the role of the widget layer: they own no rendering, only the
//! state a rendering collaborator reads. Callbacks are plain boxed closures
//! invoked synchronously before the next method call returns.

use chrono::{NaiveDate, Weekday};

use crate::controlled::{Authority, Controlled};
use crate::engine::{self, Calendar};
use crate::grid::MonthGrid;
use crate::keynav::{Key, move_focus};
use crate::range::{RangeCalendar, next_range};
use crate::types::{DateRange, Selection};

type ChangeHandler<T> = Box<dyn FnMut(T)>;
type CancelHandler = Box<dyn FnMut()>;

/// Single-date picker.
pub struct DatePicker {
    engine: Calendar,
    value: Controlled<Option<NaiveDate>>,
    focus: usize,
    on_change: Option<ChangeHandler<NaiveDate>>,
    on_cancel: Option<CancelHandler>,
}

impl DatePicker {
    /// Widget-owned value; `seed` anchors the displayed month.
    pub fn uncontrolled(seed: Option<NaiveDate>) -> Self {
        Self::build(Controlled::new(), seed)
    }

    /// Caller-owned value. An explicitly empty value still leaves authority
    /// with the caller.
    pub fn controlled(value: Option<NaiveDate>) -> Self {
        Self::build(Controlled::controlled(value), value)
    }

    fn build(value: Controlled<Option<NaiveDate>>, seed: Option<NaiveDate>) -> Self {
        let mut engine = Calendar::new(seed);
        engine.set_selected(*value.get());
        let anchor = seed.unwrap_or_else(engine::today);
        let focus = engine.grid().index_of(anchor).unwrap_or(0);
        DatePicker {
            engine,
            value,
            focus,
            on_change: None,
            on_cancel: None,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        let focused = self.focused_day();
        self.engine = self.engine.with_week_start(week_start);
        if let Some(day) = focused {
            self.focus = self.engine.grid().index_of(day).unwrap_or(0);
        }
        self
    }

    /// Invoked with the newly committed date on every selection.
    pub fn on_change(mut self, handler: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Invoked when Escape requests cancellation (e.g. to close a popover).
    pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    pub fn value(&self) -> Option<NaiveDate> {
        *self.value.get()
    }

    pub fn authority(&self) -> Authority {
        self.value.authority()
    }

    pub fn selection(&self) -> Selection {
        Selection::Single(self.value())
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.engine.displayed_month()
    }

    pub fn grid(&mut self) -> &MonthGrid {
        self.engine.grid()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_day(&mut self) -> Option<NaiveDate> {
        let focus = self.focus;
        self.engine.grid().day_at(focus)
    }

    pub fn prev(&mut self) {
        self.engine.prev();
    }

    pub fn next(&mut self) {
        self.engine.next();
    }

    /// Commit a clicked day: engine selection, shadow state, change
    /// callback. The displayed month stays put.
    pub fn click(&mut self, day: NaiveDate) {
        self.engine.select_date(day);
        self.value.commit(Some(day));
        if let Some(index) = self.engine.grid().index_of(day) {
            self.focus = index;
        }
        if let Some(handler) = &mut self.on_change {
            handler(day);
        }
    }

    /// Supply a caller-owned value. Re-anchors the displayed month when a
    /// date is present.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value.set_external(value);
        self.engine.set_selected(value);
        if let Some(date) = value {
            self.engine.anchor_to(date);
        }
    }

    /// The caller stops supplying a value; the last tracked selection shows.
    pub fn withdraw_value(&mut self) {
        self.value.withdraw();
        self.engine.set_selected(*self.value.get());
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::PageUp => self.page(-1),
            Key::PageDown => self.page(1),
            Key::Enter | Key::Space => {
                if let Some(day) = self.focused_day() {
                    self.click(day);
                }
            }
            Key::Escape => {
                if let Some(handler) = &mut self.on_cancel {
                    handler();
                }
            }
            _ => {
                let len = self.engine.grid().len();
                self.focus = move_focus(self.focus, len, key);
            }
        }
    }

    /// PageUp/PageDown: the displayed month shifts by one and the focus
    /// follows by one real calendar month, not by grid position.
    fn page(&mut self, delta: i32) {
        let target = self.focused_day().map(|day| engine::shift_month(day, delta));
        if delta < 0 {
            self.engine.prev();
        } else {
            self.engine.next();
        }
        if let Some(target) = target {
            self.focus = self.engine.grid().index_of(target).unwrap_or(0);
        }
    }
}

/// Range picker: the same widget wiring around the range engine.
pub struct RangePicker {
    engine: RangeCalendar,
    value: Controlled<DateRange>,
    focus: usize,
    on_change: Option<ChangeHandler<DateRange>>,
    on_cancel: Option<CancelHandler>,
}

impl RangePicker {
    /// Widget-owned value; a seed range preselects (its start anchors the
    /// displayed month).
    pub fn uncontrolled(seed: Option<DateRange>) -> Self {
        let seed = seed.map(DateRange::normalized);
        Self::build(
            Controlled::seeded(seed.unwrap_or(DateRange::EMPTY)),
            seed,
        )
    }

    pub fn controlled(value: DateRange) -> Self {
        let value = value.normalized();
        Self::build(Controlled::controlled(value), Some(value))
    }

    fn build(value: Controlled<DateRange>, seed: Option<DateRange>) -> Self {
        let mut engine = RangeCalendar::new(seed);
        engine.select_range(*value.get());
        let anchor = seed
            .and_then(|range| range.anchor())
            .unwrap_or_else(engine::today);
        let focus = engine.grid().index_of(anchor).unwrap_or(0);
        RangePicker {
            engine,
            value,
            focus,
            on_change: None,
            on_cancel: None,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        let focused = self.focused_day();
        self.engine = self.engine.with_week_start(week_start);
        if let Some(day) = focused {
            self.focus = self.engine.grid().index_of(day).unwrap_or(0);
        }
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(DateRange) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    pub fn value(&self) -> DateRange {
        *self.value.get()
    }

    pub fn authority(&self) -> Authority {
        self.value.authority()
    }

    pub fn selection(&self) -> Selection {
        Selection::Range(self.value())
    }

    /// Owners use this to close a popover once both endpoints land.
    pub fn is_complete(&self) -> bool {
        self.value().is_complete()
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.engine.displayed_month()
    }

    pub fn grid(&mut self) -> &MonthGrid {
        self.engine.grid()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_day(&mut self) -> Option<NaiveDate> {
        let focus = self.focus;
        self.engine.grid().day_at(focus)
    }

    /// Navigation never resets the selection.
    pub fn prev(&mut self) {
        self.engine.prev();
    }

    pub fn next(&mut self) {
        self.engine.next();
    }

    /// Preview the range a click on `day` would commit, against the visible
    /// value (the caller's when controlled).
    pub fn preview(&self, day: NaiveDate) -> DateRange {
        next_range(day, self.value())
    }

    /// Apply one click of the protocol and commit the result.
    pub fn click(&mut self, day: NaiveDate) {
        let next = next_range(day, self.value());
        self.commit(next);
    }

    fn commit(&mut self, range: DateRange) {
        self.engine.select_range(range);
        self.value.commit(range);
        if let Some(index) = range.end.or(range.start).and_then(|day| self.engine.grid().index_of(day)) {
            self.focus = index;
        }
        if let Some(handler) = &mut self.on_change {
            handler(range);
        }
    }

    /// Supply a caller-owned range, normalized on the way in.
    pub fn set_value(&mut self, range: DateRange) {
        let range = range.normalized();
        self.value.set_external(range);
        self.engine.select_range(range);
        if let Some(anchor) = range.anchor() {
            self.engine.anchor_to(anchor);
        }
    }

    pub fn withdraw_value(&mut self) {
        self.value.withdraw();
        let shadow = *self.value.get();
        self.engine.select_range(shadow);
    }

    /// Re-anchor the displayed month without touching the selection.
    pub fn anchor_to(&mut self, date: NaiveDate) {
        self.engine.anchor_to(date);
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::PageUp => self.page(-1),
            Key::PageDown => self.page(1),
            Key::Enter | Key::Space => {
                if let Some(day) = self.focused_day() {
                    self.click(day);
                }
            }
            Key::Escape => {
                if let Some(handler) = &mut self.on_cancel {
                    handler();
                }
            }
            _ => {
                let len = self.engine.grid().len();
                self.focus = move_focus(self.focus, len, key);
            }
        }
    }

    fn page(&mut self, delta: i32) {
        let target = self.focused_day().map(|day| engine::shift_month(day, delta));
        if delta < 0 {
            self.engine.prev();
        } else {
            self.engine.next();
        }
        if let Some(target) = target {
            self.focus = self.engine.grid().index_of(target).unwrap_or(0);
        }
    }
}
