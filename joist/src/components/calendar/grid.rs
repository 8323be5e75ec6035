//! Month grid generation and day-cell classification.
//!
//! Grids are row-major and 7-wide when rendered, Sunday first. Leading
//! placeholders align day 1 to its weekday; there is no trailing padding,
//! so the last rendered row may be short.

use chrono::{Datelike, NaiveDate};

use super::state::{DateSelection, RangeSelection};

/// Sunday-first weekday header labels.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Build the day cells for a month.
///
/// Leading `None` placeholders pad the first week so day 1 lands on its
/// weekday column (Sunday = 0); after that, one `Some(date)` per day of
/// the month. An invalid year/month yields an empty grid.
///
/// # Example
///
/// ```
/// use joist::components::calendar::month_grid;
///
/// // June 2024 starts on a Saturday: six placeholders, then 30 days.
/// let cells = month_grid(2024, 6);
/// assert_eq!(cells.len(), 36);
/// assert!(cells[..6].iter().all(Option::is_none));
/// ```
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    cells.extend(
        first
            .iter_days()
            .take_while(|day| day.month() == month)
            .map(Some),
    );
    cells
}

/// Number of days in a month, leap years included.
///
/// Returns 0 for an invalid year/month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 0,
    }
}

/// Whether a date falls strictly outside the `[min, max]` bounds.
///
/// Dates equal to a bound stay pickable.
pub fn is_date_disabled(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

/// Render tags for a single day cell.
///
/// Tags are independent; a cell can be `today`, `selected`, and a range
/// endpoint all at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellTags {
    /// The cell is the current real-world date.
    pub today: bool,
    /// The cell is a selected date (range endpoints included).
    pub selected: bool,
    /// The cell starts a pending or complete range.
    pub range_start: bool,
    /// The cell ends a complete range.
    pub range_end: bool,
    /// The cell falls outside the min/max bounds.
    pub disabled: bool,
}

/// Classify a day cell against the selection, bounds, and today's date.
///
/// A one-day range carries both `range_start` and `range_end`.
pub fn classify_cell(
    date: NaiveDate,
    selection: &DateSelection,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    today: NaiveDate,
) -> CellTags {
    let mut tags = CellTags {
        today: date == today,
        disabled: is_date_disabled(date, min, max),
        ..CellTags::default()
    };
    match selection {
        DateSelection::Single(Some(value)) if *value == date => tags.selected = true,
        DateSelection::Single(_) => {}
        DateSelection::Range(RangeSelection::Empty) => {}
        DateSelection::Range(RangeSelection::Pending { start }) => {
            if *start == date {
                tags.selected = true;
                tags.range_start = true;
            }
        }
        DateSelection::Range(RangeSelection::Complete { start, end }) => {
            if *start == date {
                tags.selected = true;
                tags.range_start = true;
            }
            if *end == date {
                tags.selected = true;
                tags.range_end = true;
            }
        }
    }
    tags
}

/// Whether a date lies strictly between the endpoints of a complete range.
///
/// Drives the in-range highlight; the endpoints carry their own tags.
pub fn in_range_span(date: NaiveDate, selection: &DateSelection) -> bool {
    matches!(
        selection,
        DateSelection::Range(RangeSelection::Complete { start, end })
            if *start < date && date < *end
    )
}
