use joist::components::table::{
    DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_PAGES, PageItem, PageWindow, page_list,
};

fn pages(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_summary_middle_page() {
    let window = PageWindow::new(2, 10);
    assert_eq!(window.summary(25), (11, 20));
}

#[test]
fn test_summary_clamps_to_total() {
    let window = PageWindow::new(3, 10);
    assert_eq!(window.summary(25), (21, 25));
}

#[test]
fn test_summary_empty_total() {
    let window = PageWindow::new(1, 10);
    assert_eq!(window.summary(0), (0, 0));
}

#[test]
fn test_summary_far_past_end_does_not_panic() {
    let mut window = PageWindow::new(1, 10);
    window.set_page(usize::MAX);
    let (start, end) = window.summary(10);
    assert_eq!(end, 10);
    assert!(start > end);
    assert!(window.bounds(10).is_empty());
}

#[test]
fn test_total_pages_rounds_up() {
    let window = PageWindow::new(1, 10);
    assert_eq!(window.total_pages(0), 0);
    assert_eq!(window.total_pages(100), 10);
    assert_eq!(window.total_pages(101), 11);
}

#[test]
fn test_bounds_clips_last_page() {
    let window = PageWindow::new(3, 10);
    assert_eq!(window.bounds(25), 20..25);
}

#[test]
fn test_bounds_past_end_is_empty() {
    let window = PageWindow::new(4, 10);
    assert_eq!(window.bounds(25), 25..25);
    assert!(window.bounds(25).is_empty());
}

#[test]
fn test_zero_page_size_clamps_to_one() {
    let window = PageWindow::new(1, 0);
    assert_eq!(window.page_size(), 1);
    assert_eq!(window.bounds(3), 0..1);
}

#[test]
fn test_default_window() {
    let window = PageWindow::default();
    assert_eq!(window.page(), 1);
    assert_eq!(window.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_list_small_count_lists_every_page() {
    assert_eq!(pages(&page_list(7, 4, 5)), "1 2 3 4 5 6 7");
    assert_eq!(pages(&page_list(1, 1, 5)), "1");
}

#[test]
fn test_page_list_empty_when_no_pages() {
    assert!(page_list(0, 1, 5).is_empty());
}

#[test]
fn test_page_list_middle_elides_both_sides() {
    assert_eq!(pages(&page_list(10, 5, 5)), "1 ... 4 5 6 ... 10");
}

#[test]
fn test_page_list_near_start_elides_tail_only() {
    assert_eq!(pages(&page_list(10, 1, 5)), "1 2 ... 10");
    assert_eq!(pages(&page_list(10, 3, 5)), "1 2 3 4 ... 10");
}

#[test]
fn test_page_list_near_end_elides_head_only() {
    assert_eq!(pages(&page_list(10, 8, 5)), "1 ... 7 8 9 10");
    assert_eq!(pages(&page_list(10, 10, 5)), "1 ... 9 10");
}

#[test]
fn test_page_list_with_default_visible_pages() {
    assert_eq!(pages(&page_list(6, 3, DEFAULT_VISIBLE_PAGES)), "1 2 3 4 5 6");
    assert_eq!(
        pages(&page_list(20, 12, DEFAULT_VISIBLE_PAGES)),
        "1 ... 11 12 13 ... 20"
    );
}

#[test]
fn test_page_list_out_of_range_current_stays_well_formed() {
    let items = page_list(10, 999, 5);
    assert_eq!(items.first(), Some(&PageItem::Page(1)));
    assert_eq!(items.last(), Some(&PageItem::Page(10)));
}

#[test]
fn test_page_window_serde_round_trip() {
    let window = PageWindow::new(3, 25);
    let json = serde_json::to_string(&window).unwrap();
    let back: PageWindow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, window);
}
