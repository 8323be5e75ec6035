//! Headless table and calendar engines
//!
//! State machines and pure derivations for data tables (sorting, row
//! selection, pagination) and date pickers (month grids, single/range
//! selection, deferred close), independent of any rendering layer.

pub mod components;

pub use components::{Selection, SelectionMode};

pub mod prelude {
    pub use crate::components::calendar::{
        CalendarEvent, CalendarState, CellTags, DateSelection, DeferredClose, MonthCursor,
        RANGE_CLOSE_DELAY, RangeSelection, WEEKDAY_LABELS, classify_cell, days_in_month,
        in_range_span, is_date_disabled, month_grid,
    };
    pub use crate::components::selection::{Selection, SelectionMode};
    pub use crate::components::table::{
        Alignment, CellValue, Column, ColumnConfigError, DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_PAGES,
        Direction, PageItem, PageWindow, Sort, TableEvent, TableRow, TableState, compare_rows,
        page_list, validate_columns,
    };
}
