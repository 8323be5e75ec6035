//! Date range example - drives the calendar engine as a booking picker
//!
//! Walks the two-click range flow: the first pick starts a pending
//! range, the second completes it and schedules the deferred close a
//! popover picker would use. Prints the month grid after each step, with
//! `*` on the endpoints and `.` across the highlighted span.
//!
//! Run with: cargo run --example date_range

use std::fs::File;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};
use joist::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// =============================================================================
// Rendering
// =============================================================================

fn render_month(calendar: &CalendarState, today: NaiveDate) {
    let cursor = calendar.cursor();
    println!("{:>4}-{:02}", cursor.year, cursor.month);
    println!("{}", WEEKDAY_LABELS.join("  "));
    for week in calendar.grid().chunks(7) {
        let line: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => {
                    let tags = calendar.classify(*day, today);
                    let marker = if tags.selected {
                        '*'
                    } else if in_range_span(*day, calendar.selection()) {
                        '.'
                    } else {
                        ' '
                    };
                    format!("{:>2}{marker}", day.day())
                }
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("date_range.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let today = Local::now().date_naive();
    let mut calendar = CalendarState::range(None, today);
    let mut close = DeferredClose::new();
    let open = Arc::new(AtomicBool::new(true));

    println!("== pick a check-in date ==");
    render_month(&calendar, today);

    let days: Vec<NaiveDate> = calendar.grid().into_iter().flatten().collect();
    let check_in = days[7];
    let check_out = days[16];

    if let Some(event) = calendar.select_date(check_in) {
        println!("-> {event:?}");
    }
    render_month(&calendar, today);

    println!("== pick a check-out date ==");
    if let Some(CalendarEvent::RangeCompleted { start, end }) = calendar.select_date(check_out) {
        println!("-> range {start} to {end}, closing in {RANGE_CLOSE_DELAY:?}");
        let open = open.clone();
        close.schedule(RANGE_CLOSE_DELAY, move || {
            open.store(false, Ordering::SeqCst);
            println!("(picker closed)");
        });
    }
    render_month(&calendar, today);

    println!("open: {}", open.load(Ordering::SeqCst));
    tokio::time::sleep(RANGE_CLOSE_DELAY + Duration::from_millis(50)).await;
    println!("open: {}", open.load(Ordering::SeqCst));
    println!();

    println!("== reopening cancels the pending close ==");
    open.store(true, Ordering::SeqCst);
    calendar.select_date(days[20]);
    if let Some(CalendarEvent::RangeCompleted { .. }) = calendar.select_date(days[24]) {
        let open = open.clone();
        close.schedule(RANGE_CLOSE_DELAY, move || {
            open.store(false, Ordering::SeqCst);
        });
    }
    close.cancel();
    tokio::time::sleep(RANGE_CLOSE_DELAY + Duration::from_millis(50)).await;
    println!("open after cancel: {}", open.load(Ordering::SeqCst));
    println!();

    println!("== jump to today ==");
    if let Some(event) = calendar.jump_to_today(today) {
        println!("-> {event:?}");
    }
    render_month(&calendar, today);
}
