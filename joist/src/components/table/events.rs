//! Event handling for the table engine.

use log::debug;

use crate::components::selection::SelectionMode;

use super::item::{Column, TableRow};
use super::state::{Sort, TableState};

/// Events emitted by the table intent handlers.
///
/// Handlers return `None` when an interaction changed nothing, so callers
/// only forward real transitions to their own callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The sort column or direction changed.
    SortChanged(Sort),
    /// Row selection changed; carries the keys that were added/removed.
    SelectionChanged {
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// The current page changed.
    PageChanged(usize),
    /// The page size changed.
    PageSizeChanged(usize),
}

impl TableState {
    /// Handle a click on a column header.
    ///
    /// Unsortable columns are ignored here; `toggle_sort` itself never
    /// checks sortability.
    pub fn header_click(&mut self, column: &Column) -> Option<TableEvent> {
        if !column.sortable {
            return None;
        }
        let sort = self.toggle_sort(column.key.as_str());
        debug!("sort changed: {} {:?}", sort.column, sort.direction);
        Some(TableEvent::SortChanged(sort))
    }

    /// Handle a click on a data row.
    ///
    /// `SelectionMode::None` ignores the click, `Single` replaces the
    /// selection, `Multiple` toggles the row.
    pub fn row_click<T: TableRow>(&mut self, row: &T) -> Option<TableEvent> {
        let (added, removed) = match self.selection_mode() {
            SelectionMode::None => return None,
            SelectionMode::Single => self.select_only(row),
            SelectionMode::Multiple => self.toggle_select(row),
        };
        if added.is_empty() && removed.is_empty() {
            return None;
        }
        debug!("selection changed: +{} -{}", added.len(), removed.len());
        Some(TableEvent::SelectionChanged { added, removed })
    }

    /// Handle a click on the select-all checkbox.
    ///
    /// Only meaningful in `Multiple` mode. Operates on the full data
    /// slice, not the visible page.
    pub fn select_all_click<T: TableRow>(&mut self, rows: &[T]) -> Option<TableEvent> {
        if self.selection_mode() != SelectionMode::Multiple {
            return None;
        }
        let (added, removed) = self.toggle_select_all(rows);
        if added.is_empty() && removed.is_empty() {
            return None;
        }
        debug!("selection changed: +{} -{}", added.len(), removed.len());
        Some(TableEvent::SelectionChanged { added, removed })
    }

    /// Handle a click on a page number.
    ///
    /// `None` when pagination is disabled or the page did not change.
    pub fn page_click(&mut self, page: usize) -> Option<TableEvent> {
        let page = page.max(1);
        if self.pager()?.page() == page {
            return None;
        }
        self.set_page(page);
        debug!("page changed: {page}");
        Some(TableEvent::PageChanged(page))
    }

    /// Handle a page-size pick.
    ///
    /// `None` when pagination is disabled or the size did not change.
    pub fn page_size_click(&mut self, page_size: usize) -> Option<TableEvent> {
        let page_size = page_size.max(1);
        if self.pager()?.page_size() == page_size {
            return None;
        }
        self.set_page_size(page_size);
        debug!("page size changed: {page_size}");
        Some(TableEvent::PageSizeChanged(page_size))
    }
}
