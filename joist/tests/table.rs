use std::cmp::Ordering;

use chrono::NaiveDate;
use joist::components::selection::SelectionMode;
use joist::components::table::{
    CellValue, Column, ColumnConfigError, Direction, Sort, TableEvent, TableRow, TableState,
    compare_rows, validate_columns,
};

#[derive(Debug, Clone)]
struct Ticket {
    id: u32,
    title: &'static str,
    priority: i64,
    opened: NaiveDate,
}

impl TableRow for Ticket {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn sort_value(&self, column: &str) -> CellValue {
        match column {
            "title" => self.title.into(),
            "priority" => self.priority.into(),
            "opened" => self.opened.into(),
            _ => CellValue::Empty,
        }
    }
}

fn ticket(id: u32, title: &'static str, priority: i64, day: u32) -> Ticket {
    Ticket {
        id,
        title,
        priority,
        opened: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
    }
}

fn tickets() -> Vec<Ticket> {
    vec![
        ticket(1, "flaky login", 2, 3),
        ticket(2, "broken export", 1, 12),
        ticket(3, "slow search", 3, 7),
        ticket(4, "wrong totals", 2, 1),
        ticket(5, "stuck spinner", 1, 20),
    ]
}

fn ids(rows: &[Ticket]) -> Vec<u32> {
    rows.iter().map(|row| row.id).collect()
}

#[derive(Debug, Clone)]
struct Reading {
    id: u32,
    value: CellValue,
}

impl TableRow for Reading {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn sort_value(&self, column: &str) -> CellValue {
        match column {
            "value" => self.value.clone(),
            _ => CellValue::Empty,
        }
    }
}

#[test]
fn test_toggle_sort_cycles_direction() {
    let mut table = TableState::new();
    assert!(table.sort().is_none());
    table.toggle_sort("priority");
    assert_eq!(table.sort(), Some(&Sort::asc("priority")));
    table.toggle_sort("priority");
    assert_eq!(table.sort(), Some(&Sort::desc("priority")));
    // A different column resets to ascending.
    table.toggle_sort("title");
    assert_eq!(table.sort(), Some(&Sort::asc("title")));
}

#[test]
fn test_clear_sort_restores_input_order() {
    let rows = tickets();
    let mut table = TableState::new();
    table.toggle_sort("priority");
    table.clear_sort();
    assert!(table.sort().is_none());
    assert_eq!(ids(&table.visible_rows(&rows)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_stable_sort_keeps_tie_order() {
    let rows = tickets();
    let asc = TableState::new()
        .with_sort(Sort::asc("priority"))
        .visible_rows(&rows);
    assert_eq!(ids(&asc), vec![2, 5, 1, 4, 3]);

    // Descending flips the groups but ties keep their input order.
    let desc = TableState::new()
        .with_sort(Sort::desc("priority"))
        .visible_rows(&rows);
    assert_eq!(ids(&desc), vec![3, 1, 4, 2, 5]);
}

#[test]
fn test_desc_reverses_asc_for_distinct_values() {
    let rows = tickets();
    let asc = TableState::new()
        .with_sort(Sort::asc("opened"))
        .visible_rows(&rows);
    let mut desc = TableState::new()
        .with_sort(Sort::desc("opened"))
        .visible_rows(&rows);
    desc.reverse();
    assert_eq!(ids(&asc), vec![4, 1, 3, 2, 5]);
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn test_unsorted_keeps_input_order() {
    let rows = tickets();
    let visible = TableState::new().visible_rows(&rows);
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_unknown_column_keeps_input_order() {
    // Every row resolves Empty for an unknown key, so all rows tie.
    let rows = tickets();
    let visible = TableState::new()
        .with_sort(Sort::asc("missing"))
        .visible_rows(&rows);
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_compare_rows_matches_cell_order() {
    let rows = tickets();
    assert_eq!(compare_rows(&rows[0], &rows[3], "priority"), Ordering::Equal);
    assert_eq!(compare_rows(&rows[1], &rows[0], "title"), Ordering::Less);
}

#[test]
fn test_sort_mixed_numeric_column_is_exact_beyond_float_precision() {
    // 2^53 and 2^53 + 1 collapse onto the same f64; the sort must not.
    let rows = vec![
        Reading {
            id: 1,
            value: CellValue::Int(9_007_199_254_740_993),
        },
        Reading {
            id: 2,
            value: CellValue::Float(9_007_199_254_740_992.0),
        },
        Reading {
            id: 3,
            value: CellValue::Int(9_007_199_254_740_992),
        },
    ];
    let sorted = TableState::new()
        .with_sort(Sort::asc("value"))
        .visible_rows(&rows);
    let sorted_ids: Vec<u32> = sorted.iter().map(|row| row.id).collect();
    // Rows 2 and 3 tie exactly and keep their input order; row 1 is larger.
    assert_eq!(sorted_ids, vec![2, 3, 1]);
}

#[test]
fn test_pagination_slices_after_sort() {
    let rows = tickets();
    let mut table = TableState::new()
        .with_sort(Sort::asc("priority"))
        .with_page_size(2);
    assert_eq!(ids(&table.visible_rows(&rows)), vec![2, 5]);
    table.set_page(2);
    assert_eq!(ids(&table.visible_rows(&rows)), vec![1, 4]);
    table.set_page(3);
    assert_eq!(ids(&table.visible_rows(&rows)), vec![3]);
}

#[test]
fn test_page_past_end_is_empty() {
    let rows = tickets();
    let mut table = TableState::new().with_page_size(2);
    table.set_page(4);
    assert!(table.visible_rows(&rows).is_empty());
}

#[test]
fn test_disabled_pagination_returns_all_rows() {
    let rows = tickets();
    let mut table = TableState::new().with_page_size(2);
    table.disable_pagination();
    assert_eq!(table.visible_rows(&rows).len(), 5);
}

#[test]
fn test_enable_pagination_starts_at_page_one() {
    let rows = tickets();
    let mut table = TableState::new();
    assert!(table.pager().is_none());
    table.enable_pagination(2);
    assert_eq!(table.pager().map(|pager| pager.page()), Some(1));
    assert_eq!(ids(&table.visible_rows(&rows)), vec![1, 2]);
}

#[test]
fn test_select_all_covers_full_data_not_visible_page() {
    let rows = tickets();
    let mut table = TableState::new()
        .with_selection_mode(SelectionMode::Multiple)
        .with_page_size(2);
    let (added, removed) = table.toggle_select_all(&rows);
    assert_eq!(added.len(), 5);
    assert!(removed.is_empty());
    assert_eq!(table.selection().len(), 5);
}

#[test]
fn test_select_all_clears_when_everything_selected() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select_all(&rows);
    let (added, removed) = table.toggle_select_all(&rows);
    assert!(added.is_empty());
    assert_eq!(removed.len(), 5);
    assert!(table.selection().is_empty());
}

#[test]
fn test_select_all_completes_partial_selection() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&rows[0]);
    let (added, removed) = table.toggle_select_all(&rows);
    assert_eq!(added.len(), 4);
    assert!(removed.is_empty());
    assert_eq!(table.selection().len(), 5);
}

#[test]
fn test_select_all_on_empty_data_is_noop() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&rows[0]);
    let (added, removed) = table.toggle_select_all(&rows[..0]);
    assert!(added.is_empty());
    assert!(removed.is_empty());
    assert!(table.selection().is_selected("1"));
}

#[test]
fn test_selection_keeps_stale_keys_when_data_shrinks() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&rows[4]);

    // Row 5 vanished from the data; its key stays selected.
    let remaining = &rows[..3];
    assert_eq!(table.visible_rows(remaining).len(), 3);
    assert!(table.selection().is_selected("5"));

    // Select-all over the shrunk data adds the rest without pruning.
    table.toggle_select_all(remaining);
    assert_eq!(table.selection().len(), 4);
}

#[test]
fn test_clear_selection_reports_removed_keys() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&rows[1]);
    table.toggle_select(&rows[3]);
    let removed = table.clear_selection();
    assert_eq!(removed, vec!["2".to_string(), "4".to_string()]);
    assert!(table.selection().is_empty());
}

#[test]
fn test_header_click_ignores_unsortable_column() {
    let mut table = TableState::new();
    let column = Column::new("title", "Title");
    assert_eq!(table.header_click(&column), None);
    assert!(table.sort().is_none());
}

#[test]
fn test_header_click_emits_sort_changed() {
    let mut table = TableState::new();
    let column = Column::new("title", "Title").sortable();
    let event = table.header_click(&column);
    assert_eq!(event, Some(TableEvent::SortChanged(Sort::asc("title"))));
    let event = table.header_click(&column);
    assert_eq!(event, Some(TableEvent::SortChanged(Sort::desc("title"))));
}

#[test]
fn test_row_click_ignored_without_selection_mode() {
    let rows = tickets();
    let mut table = TableState::new();
    assert_eq!(table.row_click(&rows[0]), None);
    assert!(table.selection().is_empty());
}

#[test]
fn test_row_click_single_replaces_selection() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Single);
    table.row_click(&rows[0]);
    let event = table.row_click(&rows[1]);
    assert_eq!(
        event,
        Some(TableEvent::SelectionChanged {
            added: vec!["2".to_string()],
            removed: vec!["1".to_string()],
        })
    );
    // Re-clicking the selected row changes nothing.
    assert_eq!(table.row_click(&rows[1]), None);
    assert_eq!(table.selection().selected(), vec!["2".to_string()]);
}

#[test]
fn test_row_click_multiple_toggles() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Multiple);
    table.row_click(&rows[0]);
    table.row_click(&rows[1]);
    let event = table.row_click(&rows[0]);
    assert_eq!(
        event,
        Some(TableEvent::SelectionChanged {
            added: vec![],
            removed: vec!["1".to_string()],
        })
    );
    assert_eq!(table.selection().selected(), vec!["2".to_string()]);
}

#[test]
fn test_select_all_click_requires_multiple_mode() {
    let rows = tickets();
    let mut table = TableState::new().with_selection_mode(SelectionMode::Single);
    assert_eq!(table.select_all_click(&rows), None);
    assert!(table.selection().is_empty());
}

#[test]
fn test_page_click_requires_pagination() {
    let mut table = TableState::new();
    assert_eq!(table.page_click(2), None);
}

#[test]
fn test_page_click_emits_only_on_change() {
    let mut table = TableState::new().with_page_size(10);
    assert_eq!(table.page_click(1), None);
    assert_eq!(table.page_click(3), Some(TableEvent::PageChanged(3)));
    assert_eq!(table.page_click(3), None);
}

#[test]
fn test_page_size_click_emits_only_on_change() {
    let mut table = TableState::new().with_page_size(10);
    assert_eq!(table.page_size_click(10), None);
    assert_eq!(
        table.page_size_click(25),
        Some(TableEvent::PageSizeChanged(25))
    );
    assert_eq!(table.pager().map(|pager| pager.page_size()), Some(25));
}

#[test]
fn test_validate_columns_accepts_unique_keys() {
    let columns = vec![
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
    ];
    assert!(validate_columns(&columns).is_ok());
}

#[test]
fn test_validate_columns_rejects_duplicate_and_empty_keys() {
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("name", "Name (again)"),
    ];
    let err = validate_columns(&columns).unwrap_err();
    assert_eq!(
        err,
        ColumnConfigError::DuplicateKey {
            key: "name".to_string()
        }
    );
    assert_eq!(err.to_string(), "duplicate column key `name`");

    let columns = vec![Column::new("", "Anonymous")];
    assert_eq!(
        validate_columns(&columns),
        Err(ColumnConfigError::EmptyKey { index: 0 })
    );
}

#[test]
fn test_sort_serde_round_trip() {
    let sort = Sort::desc("priority");
    let json = serde_json::to_string(&sort).unwrap();
    let back: Sort = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sort);
    assert_eq!(back.direction, Direction::Desc);
}
