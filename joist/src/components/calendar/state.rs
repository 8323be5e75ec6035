//! Calendar cursor, bounds, and selection state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::grid::{CellTags, classify_cell, is_date_disabled, month_grid};

/// The month a calendar is looking at.
///
/// Months are numbered 1-12. Navigation is true month arithmetic: the
/// year rolls on overflow and underflow instead of clamping.
///
/// # Example
///
/// ```
/// use joist::components::calendar::MonthCursor;
///
/// let cursor = MonthCursor::new(2024, 12);
/// assert_eq!(cursor.shift(1), MonthCursor::new(2025, 1));
/// assert_eq!(cursor.shift(-13), MonthCursor::new(2023, 11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: u32,
}

impl MonthCursor {
    /// Create a cursor, clamping the month into 1-12.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The cursor `delta` months away, rolling the year as needed.
    pub fn shift(self, delta: i32) -> Self {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        Self {
            year: months.div_euclid(12) as i32,
            month: (months.rem_euclid(12) + 1) as u32,
        }
    }

    /// The first day of the cursor month.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Whether `date` falls in the cursor month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Range selection state machine.
///
/// The three states make invalid combinations unrepresentable: an end
/// date cannot exist without a start, and a complete range always has
/// `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    /// No date picked yet.
    #[default]
    Empty,
    /// First click landed; waiting for the second.
    Pending { start: NaiveDate },
    /// Both endpoints picked, in chronological order.
    Complete { start: NaiveDate, end: NaiveDate },
}

impl RangeSelection {
    /// A complete range with the endpoints put in chronological order.
    pub fn complete(a: NaiveDate, b: NaiveDate) -> Self {
        RangeSelection::Complete {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The start date, if one has been picked.
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            RangeSelection::Empty => None,
            RangeSelection::Pending { start } | RangeSelection::Complete { start, .. } => {
                Some(*start)
            }
        }
    }

    /// The end date, if the range is complete.
    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            RangeSelection::Complete { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Whether both endpoints are picked.
    pub fn is_complete(&self) -> bool {
        matches!(self, RangeSelection::Complete { .. })
    }
}

/// What kind of value the calendar selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSelection {
    /// One date at a time.
    Single(Option<NaiveDate>),
    /// A start/end range entered with two clicks.
    Range(RangeSelection),
}

/// Calendar engine state.
///
/// Owned by the caller; the selection transitions live in the intent
/// handlers (see [`select_date`](CalendarState::select_date)).
///
/// # Example
///
/// ```ignore
/// let today = Local::now().date_naive();
/// let mut calendar = CalendarState::range(None, today).with_min_date(today);
///
/// for cell in calendar.grid() {
///     // render each Some(date) with calendar.classify(date, today)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CalendarState {
    pub(super) cursor: MonthCursor,
    pub(super) selection: DateSelection,
    pub(super) min_date: Option<NaiveDate>,
    pub(super) max_date: Option<NaiveDate>,
}

impl CalendarState {
    /// Single-date calendar, cursor on the value's month or today's.
    pub fn single(value: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::from_date(value.unwrap_or(today)),
            selection: DateSelection::Single(value),
            min_date: None,
            max_date: None,
        }
    }

    /// Range calendar, cursor on the range start's month or today's.
    ///
    /// A reversed initial value is normalized so `start <= end`.
    pub fn range(value: Option<(NaiveDate, NaiveDate)>, today: NaiveDate) -> Self {
        let selection = match value {
            Some((a, b)) => RangeSelection::complete(a, b),
            None => RangeSelection::Empty,
        };
        Self {
            cursor: MonthCursor::from_date(selection.start().unwrap_or(today)),
            selection: DateSelection::Range(selection),
            min_date: None,
            max_date: None,
        }
    }

    /// Disallow dates before `min`; `min` itself stays pickable.
    pub fn with_min_date(mut self, min: NaiveDate) -> Self {
        self.min_date = Some(min);
        self
    }

    /// Disallow dates after `max`; `max` itself stays pickable.
    pub fn with_max_date(mut self, max: NaiveDate) -> Self {
        self.max_date = Some(max);
        self
    }

    /// Set both bounds, swapping them if passed in reverse.
    pub fn with_bounds(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = Some(min.min(max));
        self.max_date = Some(min.max(max));
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The month being looked at.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The current selection.
    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    /// Lower bound, if set.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Upper bound, if set.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// Whether `date` is outside the configured bounds.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_date_disabled(date, self.min_date, self.max_date)
    }

    /// The day cells for the cursor month.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        month_grid(self.cursor.year, self.cursor.month)
    }

    /// Classify one day cell against this state.
    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> CellTags {
        classify_cell(date, &self.selection, self.min_date, self.max_date, today)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move the cursor by `delta` months, rolling the year as needed.
    pub fn shift_month(&mut self, delta: i32) {
        self.cursor = self.cursor.shift(delta);
    }

    /// Move to the next month.
    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    /// Move to the previous month.
    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    /// Jump to a month in the cursor year.
    pub fn set_month(&mut self, month: u32) {
        self.cursor = MonthCursor::new(self.cursor.year, month);
    }

    /// Jump to the cursor month in another year.
    pub fn set_year(&mut self, year: i32) {
        self.cursor = MonthCursor::new(year, self.cursor.month);
    }
}
