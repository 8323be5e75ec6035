//! Event handling for the calendar engine.

use chrono::NaiveDate;
use log::{debug, trace};

use super::state::{CalendarState, DateSelection, MonthCursor, RangeSelection};

/// Events emitted by the calendar intent handlers.
///
/// Closing is an output signal, not engine state: `DatePicked` closes the
/// picker immediately, `RangeCompleted` closes it after
/// [`RANGE_CLOSE_DELAY`](super::RANGE_CLOSE_DELAY) so the range highlight
/// gets a frame to render, and `RangeStarted` keeps it open for the
/// second click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    /// A single date was picked; close now.
    DatePicked(NaiveDate),
    /// A range started; stay open for the second click.
    RangeStarted(NaiveDate),
    /// A range completed; close after the deferred delay.
    RangeCompleted { start: NaiveDate, end: NaiveDate },
}

impl CalendarState {
    /// Handle a click on a day cell.
    ///
    /// Disabled dates are ignored. Single mode replaces the value. Range
    /// mode walks the three-state machine: the first click starts a
    /// pending range, the second completes it (swapping reversed
    /// endpoints so `start <= end`), and a click on a complete range
    /// restarts at the clicked date.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<CalendarEvent> {
        if self.is_disabled(date) {
            trace!("ignoring click on disabled date {date}");
            return None;
        }
        let event = match self.selection {
            DateSelection::Single(_) => {
                self.selection = DateSelection::Single(Some(date));
                CalendarEvent::DatePicked(date)
            }
            DateSelection::Range(RangeSelection::Pending { start }) => {
                let (start, end) = (start.min(date), start.max(date));
                self.selection = DateSelection::Range(RangeSelection::Complete { start, end });
                CalendarEvent::RangeCompleted { start, end }
            }
            DateSelection::Range(_) => {
                self.selection = DateSelection::Range(RangeSelection::Pending { start: date });
                CalendarEvent::RangeStarted(date)
            }
        };
        debug!("selection changed: {:?}", self.selection);
        Some(event)
    }

    /// Jump the cursor to today's month and select today.
    ///
    /// Single mode picks today immediately; range mode sets a one-day
    /// range, skipping the usual two-click entry. When today is outside
    /// the bounds only the cursor moves.
    pub fn jump_to_today(&mut self, today: NaiveDate) -> Option<CalendarEvent> {
        self.cursor = MonthCursor::from_date(today);
        if self.is_disabled(today) {
            trace!("today {today} is out of bounds; cursor moved only");
            return None;
        }
        let event = match self.selection {
            DateSelection::Single(_) => {
                self.selection = DateSelection::Single(Some(today));
                CalendarEvent::DatePicked(today)
            }
            DateSelection::Range(_) => {
                self.selection = DateSelection::Range(RangeSelection::complete(today, today));
                CalendarEvent::RangeCompleted {
                    start: today,
                    end: today,
                }
            }
        };
        debug!("selection changed: {:?}", self.selection);
        Some(event)
    }
}
