//! Data grid example - drives the table engine through a click script
//!
//! Builds an in-memory employee table, then replays the interactions a
//! UI would forward: header clicks to sort, row clicks to select, pager
//! clicks to change pages. Each step prints the derived visible page.
//!
//! Run with: cargo run --example data_grid

use std::fs::File;

use joist::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// =============================================================================
// Data types
// =============================================================================

#[derive(Debug, Clone)]
struct Employee {
    id: u32,
    name: &'static str,
    department: &'static str,
    tenure_years: i64,
}

impl TableRow for Employee {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn sort_value(&self, column: &str) -> CellValue {
        match column {
            "name" => self.name.into(),
            "department" => self.department.into(),
            "tenure" => self.tenure_years.into(),
            _ => CellValue::Empty,
        }
    }
}

fn employee(id: u32, name: &'static str, department: &'static str, tenure_years: i64) -> Employee {
    Employee {
        id,
        name,
        department,
        tenure_years,
    }
}

fn employees() -> Vec<Employee> {
    vec![
        employee(1, "Mara Voss", "Platform", 6),
        employee(2, "Jonah Reyes", "Support", 2),
        employee(3, "Priya Natarajan", "Platform", 9),
        employee(4, "Tom Okafor", "Design", 2),
        employee(5, "Elif Demir", "Support", 4),
        employee(6, "Hugo Lindqvist", "Design", 11),
        employee(7, "Alice Fontaine", "Platform", 1),
        employee(8, "Ken Watanabe", "Support", 7),
        employee(9, "Rosa Delgado", "Design", 3),
        employee(10, "Sam Carter", "Platform", 5),
    ]
}

// =============================================================================
// Rendering
// =============================================================================

fn print_page(table: &TableState, rows: &[Employee]) {
    println!(" {:<17}{:<13}{:>6}", "Name", "Department", "Tenure");
    for row in table.visible_rows(rows) {
        let mark = if table.selection().is_selected(&row.key()) {
            '*'
        } else {
            ' '
        };
        println!("{mark}{:<17}{:<13}{:>6}", row.name, row.department, row.tenure_years);
    }
    if let Some(sort) = table.sort() {
        println!("sorted by {} ({:?})", sort.column, sort.direction);
    }
    if let Some(pager) = table.pager() {
        let (start, end) = pager.summary(rows.len());
        let pages: Vec<String> =
            page_list(pager.total_pages(rows.len()), pager.page(), DEFAULT_VISIBLE_PAGES)
                .iter()
                .map(|item| match item {
                    PageItem::Page(page) if *page == pager.page() => format!("[{page}]"),
                    PageItem::Page(page) => page.to_string(),
                    PageItem::Ellipsis => "...".to_string(),
                })
                .collect();
        println!("showing {start}-{end} of {} | {}", rows.len(), pages.join(" "));
    }
    println!();
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("data_grid.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let columns = vec![
        Column::new("name", "Name").sortable(),
        Column::new("department", "Department").sortable(),
        Column::new("tenure", "Tenure").align(Alignment::Right).sortable(),
    ];
    if let Err(e) = validate_columns(&columns) {
        eprintln!("Error: {e}");
        return;
    }

    let rows = employees();
    let mut table = TableState::new()
        .with_selection_mode(SelectionMode::Multiple)
        .with_page_size(4);

    println!("== initial ==");
    print_page(&table, &rows);

    println!("== click the Tenure header ==");
    if let Some(event) = table.header_click(&columns[2]) {
        println!("-> {event:?}");
    }
    print_page(&table, &rows);

    println!("== click it again to flip ==");
    if let Some(event) = table.header_click(&columns[2]) {
        println!("-> {event:?}");
    }
    print_page(&table, &rows);

    println!("== go to page 2 and select two rows ==");
    if let Some(event) = table.page_click(2) {
        println!("-> {event:?}");
    }
    let visible = table.visible_rows(&rows);
    for row in visible.iter().take(2) {
        if let Some(event) = table.row_click(row) {
            println!("-> {event:?}");
        }
    }
    print_page(&table, &rows);

    println!("== select all (covers every page) ==");
    if let Some(event) = table.select_all_click(&rows) {
        println!("-> {event:?}");
    }
    print_page(&table, &rows);
}
