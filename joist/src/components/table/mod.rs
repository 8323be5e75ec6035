//! Table engine - sorting, row selection, and pagination over external data.
//!
//! The engine owns view state only. Rows stay with the caller and are
//! passed to [`TableState::visible_rows`] whenever a fresh slice is
//! needed; the derivation is pure, so repeated calls with equal inputs
//! yield equal output.
//!
//! # Example
//!
//! ```ignore
//! use joist::prelude::*;
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("age", "Age").sortable().align(Alignment::Right),
//! ];
//! let mut table = TableState::new()
//!     .with_selection_mode(SelectionMode::Multiple)
//!     .with_page_size(25);
//!
//! if let Some(event) = table.header_click(&columns[0]) {
//!     // forward SortChanged to the app
//! }
//! let visible = table.visible_rows(&rows);
//! ```

mod events;
mod item;
mod pager;
mod state;

pub use events::TableEvent;
pub use item::{Alignment, CellValue, Column, ColumnConfigError, TableRow, validate_columns};
pub use pager::{DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_PAGES, PageItem, PageWindow, page_list};
pub use state::{Direction, Sort, TableState, compare_rows};
