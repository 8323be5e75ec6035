//! Calendar engine - month grid generation and date/range selection.
//!
//! The calendar is headless: it owns the month cursor, the selection
//! state machine, and the close timing signal, and derives a renderable
//! grid with per-cell tags. What a cell looks like is the caller's
//! business.
//!
//! # Example
//!
//! ```ignore
//! use joist::prelude::*;
//!
//! let today = Local::now().date_naive();
//! let mut calendar = CalendarState::range(None, today);
//!
//! // First click starts the range, second completes it.
//! calendar.select_date(checkin);
//! if let Some(CalendarEvent::RangeCompleted { start, end }) = calendar.select_date(checkout) {
//!     close.schedule(RANGE_CLOSE_DELAY, move || popover.close());
//! }
//! ```

mod close;
mod events;
mod grid;
mod state;

pub use close::{DeferredClose, RANGE_CLOSE_DELAY};
pub use events::CalendarEvent;
pub use grid::{
    CellTags, WEEKDAY_LABELS, classify_cell, days_in_month, in_range_span, is_date_disabled,
    month_grid,
};
pub use state::{CalendarState, DateSelection, MonthCursor, RangeSelection};
