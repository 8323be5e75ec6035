//! Table state: sorting, selection, and the pagination window.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::components::selection::{Selection, SelectionMode};

use super::item::TableRow;
use super::pager::PageWindow;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort column and direction.
///
/// A direction is only meaningful together with a column, so an unsorted
/// table is `Option<Sort>::None` rather than a column-less direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Column key the table is sorted by.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

impl Sort {
    /// Creates an ascending sort on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}

/// Compare two rows by the values they expose for `column`.
///
/// Equal values compare equal; the engine sorts with a stable sort, so
/// equal rows keep their original relative order.
pub fn compare_rows<T: TableRow>(a: &T, b: &T, column: &str) -> Ordering {
    a.sort_value(column).compare(&b.sort_value(column))
}

/// Table engine state.
///
/// Owned by the caller and mutated through reducer-style methods; the
/// visible row slice is derived on demand from externally owned data and
/// never cached.
///
/// # Example
///
/// ```ignore
/// let mut table = TableState::new()
///     .with_selection_mode(SelectionMode::Multiple)
///     .with_page_size(25);
///
/// table.toggle_sort("name");
/// let visible = table.visible_rows(&rows);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableState {
    sort: Option<Sort>,
    selection: Selection,
    selection_mode: SelectionMode,
    pager: Option<PageWindow>,
}

impl TableState {
    /// Create a new unsorted, unselected, unpaginated state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial sort.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Enable pagination starting at page 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager = Some(PageWindow::new(1, page_size));
        self
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// The active sort, if any.
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Apply a sort click on a column key.
    ///
    /// Clicking the active column flips its direction; any other column
    /// becomes the new sort column, ascending. Sortability is not checked
    /// here: gating clicks on unsortable columns is the caller's job (see
    /// [`header_click`](TableState::header_click)).
    pub fn toggle_sort(&mut self, column: impl Into<String>) -> Sort {
        let column = column.into();
        let direction = match &self.sort {
            Some(sort) if sort.column == column => sort.direction.flip(),
            _ => Direction::Asc,
        };
        let sort = Sort { column, direction };
        self.sort = Some(sort.clone());
        sort
    }

    /// Remove the active sort.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle selection of a single row.
    /// Returns (added, removed) keys.
    pub fn toggle_select<T: TableRow>(&mut self, row: &T) -> (Vec<String>, Vec<String>) {
        self.selection.toggle(&row.key())
    }

    /// Select a single row, clearing any other selection.
    /// Returns (added, removed) keys.
    pub fn select_only<T: TableRow>(&mut self, row: &T) -> (Vec<String>, Vec<String>) {
        self.selection.select(&row.key())
    }

    /// Toggle selection of every row in `rows`.
    ///
    /// Operates on the full data slice, not the visible page: when every
    /// row is already selected the whole selection is cleared, otherwise
    /// every row is selected. Empty data is a no-op.
    /// Returns (added, removed) keys.
    pub fn toggle_select_all<T: TableRow>(&mut self, rows: &[T]) -> (Vec<String>, Vec<String>) {
        let keys: Vec<String> = rows.iter().map(|row| row.key()).collect();
        if keys.is_empty() {
            return (Vec::new(), Vec::new());
        }
        if self.selection.contains_all(&keys) {
            (Vec::new(), self.selection.clear())
        } else {
            (self.selection.select_all(&keys), Vec::new())
        }
    }

    /// Clear the selection.
    /// Returns the keys that were deselected.
    pub fn clear_selection(&mut self) -> Vec<String> {
        self.selection.clear()
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// The pagination window, if pagination is enabled.
    pub fn pager(&self) -> Option<&PageWindow> {
        self.pager.as_ref()
    }

    /// Enable pagination with the given page size, starting at page 1.
    pub fn enable_pagination(&mut self, page_size: usize) {
        self.pager = Some(PageWindow::new(1, page_size));
    }

    /// Disable pagination; `visible_rows` returns every row.
    pub fn disable_pagination(&mut self) {
        self.pager = None;
    }

    /// Move to another page. No-op when pagination is disabled.
    ///
    /// Pages past the end are accepted and slice empty; the window is
    /// never clamped to the data.
    pub fn set_page(&mut self, page: usize) {
        if let Some(pager) = &mut self.pager {
            pager.set_page(page);
        }
    }

    /// Change the page size. No-op when pagination is disabled.
    pub fn set_page_size(&mut self, page_size: usize) {
        if let Some(pager) = &mut self.pager {
            pager.set_page_size(page_size);
        }
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// Derive the visible row slice from externally owned data.
    ///
    /// Clones the rows, stable-sorts them by the active column and
    /// direction, then slices the page window if pagination is enabled.
    /// Equal inputs always derive equal output.
    pub fn visible_rows<T: TableRow>(&self, rows: &[T]) -> Vec<T> {
        let mut sorted = rows.to_vec();
        if let Some(sort) = &self.sort {
            sorted.sort_by(|a, b| {
                let ordering = compare_rows(a, b, &sort.column);
                match sort.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }
        match &self.pager {
            Some(pager) => sorted[pager.bounds(sorted.len())].to_vec(),
            None => sorted,
        }
    }
}
