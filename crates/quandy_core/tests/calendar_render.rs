use chrono::NaiveDate;
use quandy_core::{CalendarConfig, WeekStart, render_calendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn cells(html: &str) -> Vec<&str> {
    html.lines().filter(|line| line.starts_with("<td ")).collect()
}

#[test]
fn leap_february_marks_today() {
    let config = CalendarConfig::new(2024, 2);
    let html = render_calendar(&config, date(2024, 2, 15));

    assert!(html.contains(
        "<td id=\"calendar_id_cell_2024-2-15\" class=\"date today\" title=\"Thursday, February 15, 2024 (Today)\"><div>15</div></td>"
    ));
    assert!(html.contains("calendar_id_cell_2024-2-29"));
    assert!(!html.contains("calendar_id_cell_2024-2-30"));
    assert!(html.contains("<th colspan=\"3\"><div>February 2024</div></th>"));
    assert!(html.contains("class=\"date tomorrow\" title=\"Friday, February 16, 2024 (Tomorrow)\""));
    assert!(html.contains("class=\"date yesterday\" title=\"Wednesday, February 14, 2024 (Yesterday)\""));

    let cells = cells(&html);
    assert_eq!(cells.len() % 7, 0);
    assert_eq!(cells.len(), 35);
    assert!(cells[0].contains("calendar_id_cell_2024-1-28"));
    assert!(cells[34].contains("calendar_id_cell_2024-3-2"));
}

#[test]
fn monday_start_changes_header_and_padding() {
    let mut config = CalendarConfig::new(2024, 2);
    config.week_start = WeekStart::Monday;
    let html = render_calendar(&config, date(2000, 1, 1));

    let header: Vec<&str> = html
        .lines()
        .filter(|line| line.starts_with("<th") && line.contains("<div>") && !line.contains("colspan"))
        .collect();
    assert_eq!(header.first().copied(), Some("<th><div>Mon</div></th>"));
    assert_eq!(header.last().copied(), Some("<th class=\"weekend\"><div>Sun</div></th>"));

    let cells = cells(&html);
    assert!(cells[0].contains("calendar_id_cell_2024-1-29"));
    assert_eq!(cells.len(), 35);
}

#[test]
fn weekend_class_overrides_today_but_keeps_note() {
    // 2024-02-17 is a Saturday.
    let config = CalendarConfig::new(2024, 2);
    let html = render_calendar(&config, date(2024, 2, 17));
    assert!(html.contains(
        "class=\"weekend\" title=\"Saturday, February 17, 2024 (Today)\""
    ));
}

#[test]
fn events_are_concatenated_in_insertion_order() {
    let mut config = CalendarConfig::new(2024, 2);
    config.add_event(date(2024, 2, 5), "<i>first</i>");
    config.add_event(date(2024, 2, 6), "elsewhere");
    config.add_event(date(2024, 2, 5), "second");
    let html = render_calendar(&config, date(2023, 1, 1));
    assert!(html.contains("<div>5</div><i>first</i>\nsecond</td>"));
    assert!(html.contains("<div>6</div>elsewhere</td>"));
}

#[test]
fn caption_and_class_are_optional() {
    let mut config = CalendarConfig::new(2024, 5);
    config.show_caption = false;
    let html = render_calendar(&config, date(2024, 5, 1));
    assert!(!html.contains("<caption>"));
    assert!(html.starts_with("<table id=\"calendar_id\">\n<thead id=\"calendar_id_thead\">"));

    config.show_caption = true;
    config.css_class = "cal".to_string();
    config.title = "Club <Events>".to_string();
    let html = render_calendar(&config, date(2024, 5, 1));
    assert!(html.starts_with("<table id=\"calendar_id\" class=\"cal\">"));
    assert!(html.contains("<caption>Club &lt;Events&gt;</caption>"));
    assert!(html.contains("<thead id=\"calendar_id_thead\" class=\"cal_thead\">"));
}

#[test]
fn navigation_wraps_year_boundaries() {
    let config = CalendarConfig::new(2024, 12);
    let html = render_calendar(&config, date(2024, 12, 1));
    assert!(html.contains("href=\"/calendar/?y=2025&amp;m=1\""));
    assert!(html.contains("href=\"/calendar/?y=2024&amp;m=11\""));
    assert!(html.contains("href=\"/calendar/?y=2023&amp;m=12\""));
    assert!(html.contains("href=\"/calendar/?y=2025&amp;m=12\""));
}

#[test]
fn invalid_month_renders_current_month() {
    let config = CalendarConfig::new(2024, 13);
    let html = render_calendar(&config, date(2021, 7, 4));
    assert!(html.contains("<div>July 2021</div>"));
}

#[test]
fn highlighted_day_only_in_displayed_month() {
    let mut config = CalendarConfig::new(2024, 2);
    config.highlighted_day = Some(1);
    let html = render_calendar(&config, date(2000, 1, 1));
    assert!(html.contains("calendar_id_cell_2024-2-1\" class=\"date highlighted\""));
    assert!(html.contains("calendar_id_cell_2024-3-1\" class=\"date\""));
}
